//! Deterministic calendar-to-symbol resolver.
//!
//! Maps a birth date onto three independent classifications: the Slavic
//! hall of the Svarog circle, the Zoroastrian animal totem, and the western
//! zodiac sign. Pure lookups over fixed boundary tables; no I/O, no state.

pub mod calendar;
pub mod daily;
pub mod handlers;
mod halls;
mod totems;
mod zodiac;

use serde::Serialize;

pub use halls::{hall_for, Hall};
pub use totems::{totem_for, Totem};
pub use zodiac::zodiac_for;

/// The three classifications for one birth date.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Reading {
    pub slavic: &'static Hall,
    pub totem: &'static Totem,
    pub zodiac: &'static str,
}

/// Resolves a birth date into its full reading.
///
/// Total over `day` in 1..=31, `month` in 1..=12 and any year: implausible
/// combinations like Feb 30 are treated as valid cyclical positions rather
/// than rejected. Garbage input is the caller's problem; the HTTP layer
/// validates field presence and bounds before calling in.
pub fn resolve(day: u8, month: u8, year: i32) -> Reading {
    Reading {
        slavic: hall_for(month, day),
        totem: totem_for(year, month, day),
        zodiac: zodiac_for(month, day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_combines_all_three_lookups() {
        let reading = resolve(25, 4, 1917);
        assert_eq!(reading.slavic.hall, "Чертог Ворона");
        assert_eq!(reading.slavic.god, "Коляда");
        assert_eq!(reading.totem.totem, "Ворон");
        assert_eq!(reading.zodiac, "Телец");
    }

    #[test]
    fn test_resolve_is_total_over_the_input_domain() {
        // Every syntactically valid (day, month) pair resolves, including
        // calendar-implausible ones.
        for month in 1..=12u8 {
            for day in 1..=31u8 {
                let reading = resolve(day, month, 1990);
                assert!(!reading.slavic.hall.is_empty());
                assert!(!reading.totem.totem.is_empty());
                assert!(!reading.zodiac.is_empty());
            }
        }
    }

    #[test]
    fn test_resolve_feb_30_maps_like_mar_1() {
        let feb30 = resolve(30, 2, 1990);
        let mar1 = resolve(1, 3, 1990);
        assert_eq!(feb30.slavic.hall, mar1.slavic.hall);
        assert_eq!(feb30.zodiac, mar1.zodiac);
    }
}
