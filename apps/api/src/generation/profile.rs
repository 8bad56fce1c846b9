//! Declarative provider profiles.
//!
//! Which model runs, how its job is polled and which tuning parameters ride
//! along are configuration data, not branching code. Adding an artifact
//! variant means adding a profile, not another endpoint.

use std::time::Duration;

use serde_json::{json, Value};

use crate::generation::prompts::NEGATIVE_PROMPT;

/// Everything the poller needs to know about one provider/model pairing.
#[derive(Debug, Clone, Copy)]
pub struct ProviderProfile {
    pub name: &'static str,
    /// Model slug on the provider, `owner/name`.
    pub model: &'static str,
    pub poll_interval: Duration,
    /// Safety bound so a stuck job cannot be polled forever.
    pub max_poll_attempts: u32,
    /// Sync protocol shape: ask the provider to hold the submit call open
    /// until the job is terminal. The poll loop still runs if the provider
    /// gives up waiting and hands back an in-flight job.
    pub block_until_done: bool,
    build_input: fn(prompt: &str, mask: Option<&str>) -> Value,
}

impl ProviderProfile {
    /// Builds the model input payload for one request.
    pub fn input(&self, prompt: &str, mask: Option<&str>) -> Value {
        (self.build_input)(prompt, mask)
    }
}

/// FLUX-Fill: mask-respecting inpainting, submitted asynchronously and
/// polled by the client.
pub static FLUX_FILL: ProviderProfile = ProviderProfile {
    name: "flux-fill",
    model: "black-forest-labs/flux-fill-dev",
    poll_interval: Duration::from_millis(2500),
    max_poll_attempts: 60,
    block_until_done: false,
    build_input: flux_fill_input,
};

/// SDXL inpainting: the earlier pipeline, held open server-side.
pub static SDXL_INPAINTING: ProviderProfile = ProviderProfile {
    name: "sdxl-inpainting",
    model: "diffusers/stable-diffusion-xl-inpainting-1.0",
    poll_interval: Duration::from_millis(1000),
    max_poll_attempts: 60,
    block_until_done: true,
    build_input: sdxl_input,
};

/// Looks up a profile by its configured name.
pub fn by_name(name: &str) -> Option<&'static ProviderProfile> {
    match name {
        "flux-fill" => Some(&FLUX_FILL),
        "sdxl-inpainting" => Some(&SDXL_INPAINTING),
        _ => None,
    }
}

// The mask doubles as the base image for both models: white marks where the
// model may draw, black preserves the blade shape.
fn flux_fill_input(prompt: &str, mask: Option<&str>) -> Value {
    json!({
        "prompt": prompt,
        "image": mask,
        "mask": mask,
        "guidance": 7.5,
        "output_format": "png",
        "steps": 50,
    })
}

fn sdxl_input(prompt: &str, mask: Option<&str>) -> Value {
    json!({
        "prompt": prompt,
        "negative_prompt": NEGATIVE_PROMPT,
        "image": mask,
        "mask": mask,
        "num_inference_steps": 30,
        "guidance_scale": 7.5,
        "strength": 1.0,
        "scheduler": "K_EULER_ANCESTRAL",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_resolves_both_profiles() {
        assert_eq!(by_name("flux-fill").unwrap().model, FLUX_FILL.model);
        assert_eq!(
            by_name("sdxl-inpainting").unwrap().model,
            SDXL_INPAINTING.model
        );
        assert!(by_name("dall-e").is_none());
    }

    #[test]
    fn test_flux_input_carries_prompt_and_mask() {
        let input = FLUX_FILL.input("test prompt", Some("data:image/png;base64,AAAA"));
        assert_eq!(input["prompt"], "test prompt");
        assert_eq!(input["image"], input["mask"]);
        assert_eq!(input["steps"], 50);
    }

    #[test]
    fn test_sdxl_input_carries_negative_prompt() {
        let input = SDXL_INPAINTING.input("test prompt", None);
        assert_eq!(input["negative_prompt"], NEGATIVE_PROMPT);
        assert_eq!(input["scheduler"], "K_EULER_ANCESTRAL");
    }
}
