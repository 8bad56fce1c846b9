//! The sixteen Halls (Chertogs) of the Svarog circle.
//!
//! Fixed annual date ranges, authored contiguous and exhaustive: every slot
//! of the cyclical year belongs to exactly one hall. The last hall wraps
//! across Dec 31 into early January.

use serde::Serialize;

use crate::oracle::calendar::DateRange;

/// One hall period with its patron deity and lore text.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hall {
    pub hall: &'static str,
    pub god: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub range: DateRange,
}

pub static HALLS: [Hall; 16] = [
    Hall {
        hall: "Чертог Вепря",
        god: "Рамхат",
        description: "Вепрь дарует упорство и прямоту: его дети идут к цели напролом и не сворачивают с пути.",
        range: DateRange::new(1, 10, 2, 2),
    },
    Hall {
        hall: "Чертог Щуки",
        god: "Рожана",
        description: "Щука учит приспосабливаться к любому течению и находить выход там, где другие тонут.",
        range: DateRange::new(2, 3, 2, 27),
    },
    Hall {
        hall: "Чертог Лебеди",
        god: "Макошь",
        description: "Лебедь несет гордость и верность: судьба благосклонна к тем, кто хранит чистоту помыслов.",
        range: DateRange::new(2, 28, 3, 24),
    },
    Hall {
        hall: "Чертог Змея",
        god: "Семаргл",
        description: "Змей владеет внутренним огнем и холодным расчетом, оберегая свой дом от любой смуты.",
        range: DateRange::new(3, 25, 4, 16),
    },
    Hall {
        hall: "Чертог Ворона",
        god: "Коляда",
        description: "Ворон — птица вещая: рожденным здесь открыто тайное знание и своевременность действия.",
        range: DateRange::new(4, 17, 5, 8),
    },
    Hall {
        hall: "Чертог Медведя",
        god: "Сварог",
        description: "Медведь — хозяин леса: сила, несокрушимая воля и умение отстоять свои границы.",
        range: DateRange::new(5, 9, 5, 31),
    },
    Hall {
        hall: "Чертог Бусла",
        god: "Род",
        description: "Бусел приносит достаток в дом и заботится о продолжении рода и семейном ладе.",
        range: DateRange::new(6, 1, 6, 22),
    },
    Hall {
        hall: "Чертог Волка",
        god: "Велес",
        description: "Волк ведет свою стаю сквозь тьму: преданность своим и беспощадность к чужим.",
        range: DateRange::new(6, 23, 7, 15),
    },
    Hall {
        hall: "Чертог Лисы",
        god: "Марена",
        description: "Лиса дарит хитрость и любопытство: ее дети распутывают то, что другим не по зубам.",
        range: DateRange::new(7, 16, 8, 6),
    },
    Hall {
        hall: "Чертог Тура",
        god: "Крышень",
        description: "Тур — трудолюбие и основательность: медленно запрягает, но везет дальше всех.",
        range: DateRange::new(8, 7, 8, 29),
    },
    Hall {
        hall: "Чертог Лося",
        god: "Лада",
        description: "Лось идет первым по нехоженому: широта души и покровительство влюбленным.",
        range: DateRange::new(8, 30, 9, 21),
    },
    Hall {
        hall: "Чертог Финиста",
        god: "Вышень",
        description: "Финист — ясный сокол: зоркость, стремление к высокой цели и вера в лучшее.",
        range: DateRange::new(9, 22, 10, 13),
    },
    Hall {
        hall: "Чертог Коня",
        god: "Купала",
        description: "Конь несется вперед, не зная устали: жажда жизни и вечное движение.",
        range: DateRange::new(10, 14, 11, 5),
    },
    Hall {
        hall: "Чертог Орла",
        god: "Перун",
        description: "Орел парит выше гроз: воинская доблесть и защита слабых под его крылом.",
        range: DateRange::new(11, 6, 11, 26),
    },
    Hall {
        hall: "Чертог Раса",
        god: "Даждьбог",
        description: "Рас — белый барс: спокойная сила, справедливость и свет солнечного рода.",
        range: DateRange::new(11, 27, 12, 18),
    },
    Hall {
        hall: "Чертог Девы",
        god: "Джива",
        description: "Дева хранит нить жизни: самостоятельность, жажда истины и чистое сердце.",
        range: DateRange::new(12, 19, 1, 9),
    },
];

/// Finds the hall containing `(month, day)`.
///
/// The table is authored exhaustive and non-overlapping, so a miss is an
/// internal invariant violation rather than a user error.
pub fn hall_for(month: u8, day: u8) -> &'static Hall {
    HALLS
        .iter()
        .find(|hall| hall.range.contains(month, day))
        .expect("hall ranges cover every day of the year")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::calendar::YEAR_DAYS;

    const MONTH_LENGTHS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    #[test]
    fn test_every_day_matches_exactly_one_hall() {
        let mut checked = 0u16;
        for (month0, len) in MONTH_LENGTHS.iter().enumerate() {
            for day in 1..=*len {
                let month = month0 as u8 + 1;
                let matches = HALLS
                    .iter()
                    .filter(|hall| hall.range.contains(month, day))
                    .count();
                assert_eq!(matches, 1, "{month:02}-{day:02} matched {matches} halls");
                checked += 1;
            }
        }
        assert_eq!(checked, YEAR_DAYS);
    }

    #[test]
    fn test_wrap_boundary_assigns_adjacent_halls() {
        assert_eq!(hall_for(12, 18).hall, "Чертог Раса");
        assert_eq!(hall_for(12, 19).hall, "Чертог Девы");
        assert_eq!(hall_for(1, 9).hall, "Чертог Девы");
        assert_eq!(hall_for(1, 10).hall, "Чертог Вепря");
    }

    #[test]
    fn test_known_hall_lookups() {
        let raven = hall_for(4, 25);
        assert_eq!(raven.hall, "Чертог Ворона");
        assert_eq!(raven.god, "Коляда");

        let bear = hall_for(5, 20);
        assert_eq!(bear.hall, "Чертог Медведя");
        assert_eq!(bear.god, "Сварог");
    }
}
