//! Telegram webhook glue.
//!
//! The bot has exactly one trick: on `/start` it sends the invitation
//! message with the web-app button. Anything else, including payloads that
//! do not look like an update at all, is acknowledged with 200 and dropped
//! so Telegram does not keep retrying.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::state::AppState;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub const START_MESSAGE: &str =
    "Здравия! Духи Кузницы ждут тебя. Нажми кнопку ниже, чтобы войти 👇";
pub const START_BUTTON: &str = "🔥 ОТКРЫТЬ КОД СУДЬБЫ";

#[derive(Debug, Default, Deserialize)]
struct Update {
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

/// What the webhook should do for an incoming update.
#[derive(Debug, PartialEq, Eq)]
pub enum WebhookAction {
    /// Acknowledge and do nothing.
    Ignore,
    /// Send the start invitation to this chat.
    SendStartInvite { chat_id: i64 },
}

/// Classifies a raw update body. Anything that is not a well-formed
/// `/start` text message maps to `Ignore`.
pub fn classify(body: &Value) -> WebhookAction {
    let Ok(update) = serde_json::from_value::<Update>(body.clone()) else {
        return WebhookAction::Ignore;
    };
    match update.message {
        Some(message) if message.text.as_deref() == Some("/start") => {
            WebhookAction::SendStartInvite {
                chat_id: message.chat.id,
            }
        }
        _ => WebhookAction::Ignore,
    }
}

/// Outbound `sendMessage` client for the one-shot invitation.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    token: String,
}

/// Bot API responses always carry `ok`; failures add a description.
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            token,
        }
    }

    /// Sends the start invitation with the inline web-app keyboard.
    pub async fn send_start_invite(&self, chat_id: i64, web_app_url: &str) -> Result<(), AppError> {
        let url = format!("{TELEGRAM_API_URL}/bot{}/sendMessage", self.token);
        let body = json!({
            "chat_id": chat_id,
            "text": START_MESSAGE,
            "reply_markup": {
                "inline_keyboard": [[{
                    "text": START_BUTTON,
                    "web_app": { "url": web_app_url }
                }]]
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("could not reach Telegram: {e}")))?;

        let reply: BotApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("could not decode Telegram response: {e}")))?;

        if !reply.ok {
            return Err(AppError::Remote(
                reply
                    .description
                    .unwrap_or_else(|| "Telegram API error".to_string()),
            ));
        }

        info!(chat_id, "start invitation sent");
        Ok(())
    }
}

/// POST /api/telegram-webhook
///
/// The body is taken as raw bytes: a payload that fails to parse must still
/// be answered with 200 and no side effects.
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let update: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    match classify(&update) {
        WebhookAction::Ignore => {
            debug!("ignoring non-command webhook update");
            Ok(Json(json!({ "status": "ok" })))
        }
        WebhookAction::SendStartInvite { chat_id } => {
            let notifier = state.telegram.as_ref().ok_or_else(|| {
                AppError::Configuration("TELEGRAM_BOT_TOKEN is not set".to_string())
            })?;
            notifier
                .send_start_invite(chat_id, &state.config.web_app_url)
                .await?;
            Ok(Json(json!({ "status": "ok" })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_command_triggers_invite() {
        let body = json!({
            "message": { "chat": { "id": 42 }, "text": "/start" }
        });
        assert_eq!(classify(&body), WebhookAction::SendStartInvite { chat_id: 42 });
    }

    #[test]
    fn test_other_text_is_ignored() {
        let body = json!({
            "message": { "chat": { "id": 42 }, "text": "hello" }
        });
        assert_eq!(classify(&body), WebhookAction::Ignore);
    }

    #[test]
    fn test_update_without_message_is_ignored() {
        assert_eq!(classify(&json!({ "edited_message": {} })), WebhookAction::Ignore);
        assert_eq!(classify(&json!({})), WebhookAction::Ignore);
    }

    #[test]
    fn test_malformed_payload_is_ignored() {
        assert_eq!(classify(&Value::Null), WebhookAction::Ignore);
        assert_eq!(classify(&json!("not an update")), WebhookAction::Ignore);
        assert_eq!(classify(&json!({ "message": { "text": "/start" } })), WebhookAction::Ignore);
    }

    #[test]
    fn test_message_without_text_is_ignored() {
        let body = json!({
            "message": { "chat": { "id": 42 }, "photo": [] }
        });
        assert_eq!(classify(&body), WebhookAction::Ignore);
    }
}
