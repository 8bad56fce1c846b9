//! Gift-holiday calendar: fixed dates with gift-category tags, scanned for
//! a 30-day lookahead window.

use axum::Json;
use chrono::{Datelike, Days, NaiveDate, Utc};
use serde::Serialize;

/// Who the holiday's gifts usually target.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Male,
    Female,
    General,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Holiday {
    #[serde(skip)]
    pub month: u8,
    #[serde(skip)]
    pub day: u8,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    pub tags: &'static [&'static str],
}

pub static HOLIDAYS: [Holiday; 5] = [
    Holiday {
        month: 2,
        day: 23,
        name: "День защитника Отечества",
        kind: HolidayKind::Male,
        tags: &["axes", "amulets"],
    },
    Holiday {
        month: 3,
        day: 8,
        name: "Международный женский день",
        kind: HolidayKind::Female,
        tags: &["idols", "decor"],
    },
    Holiday {
        month: 3,
        day: 20,
        name: "Комоедица (Масленица)",
        kind: HolidayKind::General,
        tags: &["idols", "amulets", "decor"],
    },
    // Movable feast; the fixed date is a placeholder from the source data.
    Holiday {
        month: 5,
        day: 5,
        name: "Светлая Пасха",
        kind: HolidayKind::General,
        tags: &["decor"],
    },
    Holiday {
        month: 6,
        day: 21,
        name: "Купала (Летнее солнцестояние)",
        kind: HolidayKind::General,
        tags: &["amulets", "idols"],
    },
];

/// A holiday inside the lookahead window, annotated with the DD.MM display
/// date the storefront shows.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingHoliday {
    #[serde(flatten)]
    pub holiday: &'static Holiday,
    #[serde(rename = "displayDate")]
    pub display_date: String,
}

/// Holidays within the next 30 days inclusive of `today`, in date order.
/// The window follows real calendar arithmetic, so it wraps into January
/// when scanned from late December.
pub fn upcoming(today: NaiveDate) -> Vec<UpcomingHoliday> {
    let mut result = Vec::new();

    for offset in 0..=30u64 {
        let Some(date) = today.checked_add_days(Days::new(offset)) else {
            break;
        };
        let hit = HOLIDAYS
            .iter()
            .find(|h| u32::from(h.month) == date.month() && u32::from(h.day) == date.day());
        if let Some(holiday) = hit {
            result.push(UpcomingHoliday {
                holiday,
                display_date: format!("{:02}.{:02}", date.day(), date.month()),
            });
        }
    }

    result
}

/// GET /api/holidays
/// Returns the upcoming holiday list for the next 30 days.
pub async fn handle_upcoming() -> Json<Vec<UpcomingHoliday>> {
    Json(upcoming(Utc::now().date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_includes_holidays_in_order() {
        let hits = upcoming(date(2026, 2, 20));
        let names: Vec<&str> = hits.iter().map(|h| h.holiday.name).collect();
        assert_eq!(
            names,
            vec!["День защитника Отечества", "Международный женский день", "Комоедица (Масленица)"]
        );
        assert_eq!(hits[0].display_date, "23.02");
    }

    #[test]
    fn test_window_is_inclusive_of_today() {
        let hits = upcoming(date(2026, 6, 21));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].holiday.name, "Купала (Летнее солнцестояние)");
    }

    #[test]
    fn test_day_31_is_outside_the_window() {
        // Feb 23 is 31 days after Jan 23, one past the boundary.
        assert!(upcoming(date(2026, 1, 23)).is_empty());
        assert_eq!(upcoming(date(2026, 1, 24)).len(), 1);
    }

    #[test]
    fn test_empty_window_across_year_end() {
        // Late December looks into January, where no holiday sits.
        assert!(upcoming(date(2026, 12, 1)).is_empty());
    }
}
