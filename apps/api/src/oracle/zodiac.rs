//! Western tropical zodiac classification by date.

use crate::oracle::calendar::DateRange;

/// The classic boundary table. Capricorn wraps across Dec 31.
pub static SIGNS: [(&str, DateRange); 12] = [
    ("Овен", DateRange::new(3, 21, 4, 19)),
    ("Телец", DateRange::new(4, 20, 5, 20)),
    ("Близнецы", DateRange::new(5, 21, 6, 20)),
    ("Рак", DateRange::new(6, 21, 7, 22)),
    ("Лев", DateRange::new(7, 23, 8, 22)),
    ("Дева", DateRange::new(8, 23, 9, 22)),
    ("Весы", DateRange::new(9, 23, 10, 22)),
    ("Скорпион", DateRange::new(10, 23, 11, 21)),
    ("Стрелец", DateRange::new(11, 22, 12, 21)),
    ("Козерог", DateRange::new(12, 22, 1, 19)),
    ("Водолей", DateRange::new(1, 20, 2, 18)),
    ("Рыбы", DateRange::new(2, 19, 3, 20)),
];

/// Finds the sign containing `(month, day)`. The table is exhaustive.
pub fn zodiac_for(month: u8, day: u8) -> &'static str {
    SIGNS
        .iter()
        .find(|(_, range)| range.contains(month, day))
        .map(|(name, _)| *name)
        .expect("zodiac ranges cover every day of the year")
}
