//! The 32-year Zoroastrian animal totem wheel.
//!
//! Two-factor lookup: the birth year picks a position on the wheel, but the
//! totem year begins at the spring equinox, so a birth date before Mar 21
//! still belongs to the previous position. The year therefore selects a
//! family of two candidate totems and the day/month range refines the pick.

use serde::Serialize;

use crate::oracle::calendar::DateRange;

/// One totem with its symbol line and lore text.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Totem {
    pub totem: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
}

/// First year of a wheel cycle: 1906 is the year of the Deer.
const EPOCH_YEAR: i32 = 1906;

/// Dates in this range precede the equinox and belong to the previous
/// wheel position.
const BEFORE_EQUINOX: DateRange = DateRange::new(1, 1, 3, 20);

pub static TOTEM_WHEEL: [Totem; 32] = [
    Totem {
        totem: "Олень",
        symbol: "Знак гордости и стремительности",
        description: "Олень первым выходит на новую тропу и ведет остальных за собой.",
    },
    Totem {
        totem: "Горный Баран",
        symbol: "Знак упорства и обновления",
        description: "Баран пробивает дорогу там, где скалы смыкаются перед другими.",
    },
    Totem {
        totem: "Мангуст",
        symbol: "Знак бесстрашия и быстроты",
        description: "Мангуст не отступает даже перед змеей: реакция решает все.",
    },
    Totem {
        totem: "Волк",
        symbol: "Знак верности и стаи",
        description: "Волк живет для своих и умеет ждать часа, когда придет его добыча.",
    },
    Totem {
        totem: "Аист",
        symbol: "Знак дома и добрых вестей",
        description: "Аист вьет гнездо надолго: где он поселился, туда приходит достаток.",
    },
    Totem {
        totem: "Паук",
        symbol: "Знак терпения и мастерства",
        description: "Паук плетет свою судьбу нить за нитью и не бросает начатого.",
    },
    Totem {
        totem: "Уж",
        symbol: "Знак мудрой осторожности",
        description: "Уж не ищет ссоры, но знает тайные ходы под каждым камнем.",
    },
    Totem {
        totem: "Бобр",
        symbol: "Знак труда и запаса",
        description: "Бобр строит наверняка: его плотину не сносит весенней водой.",
    },
    Totem {
        totem: "Черепаха",
        symbol: "Знак неспешной надежности",
        description: "Черепаха несет свой дом с собой и приходит к цели без суеты.",
    },
    Totem {
        totem: "Сорока",
        symbol: "Знак вести и обмена",
        description: "Сорока первой узнает новости и умеет обратить их себе на пользу.",
    },
    Totem {
        totem: "Белка",
        symbol: "Знак ловкости и запасливости",
        description: "Белка успевает всюду и никогда не остается без орехов к зиме.",
    },
    Totem {
        totem: "Ворон",
        symbol: "Знак вещего знания",
        description: "Ворон видит сквозь миры и говорит только тем, кто готов услышать.",
    },
    Totem {
        totem: "Петух",
        symbol: "Знак зари и прямоты",
        description: "Петух будит солнце и не боится сказать правду первым.",
    },
    Totem {
        totem: "Тур",
        symbol: "Знак силы земли",
        description: "Тур пашет глубоко: его упорство кормит весь род.",
    },
    Totem {
        totem: "Барсук",
        symbol: "Знак хозяйской основательности",
        description: "Барсук держит нору в порядке и не пускает в нее чужих.",
    },
    Totem {
        totem: "Верблюд",
        symbol: "Знак выносливости",
        description: "Верблюд идет через пустыню, когда все прочие повернули назад.",
    },
    Totem {
        totem: "Ёж",
        symbol: "Знак стойкой обороны",
        description: "Ёж мал, да колюч: его границы уважает даже медведь.",
    },
    Totem {
        totem: "Лань",
        symbol: "Знак чуткой грации",
        description: "Лань слышит лес раньше всех и уводит своих от беды.",
    },
    Totem {
        totem: "Слон",
        symbol: "Знак памяти и величия",
        description: "Слон помнит и добро и обиду: его шаг медлен, но необратим.",
    },
    Totem {
        totem: "Конь",
        symbol: "Знак вольного бега",
        description: "Конь не знает узды по духу: дорога сама стелется под его копыта.",
    },
    Totem {
        totem: "Гепард",
        symbol: "Знак рывка и цели",
        description: "Гепард бьет в одно мгновение: он не гонится долго, он настигает.",
    },
    Totem {
        totem: "Павлин",
        symbol: "Знак яркости и признания",
        description: "Павлин не прячет красоты: миру нужно и то, что просто радует глаз.",
    },
    Totem {
        totem: "Лебедь",
        symbol: "Знак верности сердца",
        description: "Лебедь выбирает один раз и навсегда, и в этом его сила.",
    },
    Totem {
        totem: "Рысь",
        symbol: "Знак зоркой независимости",
        description: "Рысь охотится одна и видит в темноте то, что скрыто от стаи.",
    },
    Totem {
        totem: "Осёл",
        symbol: "Знак мирного упрямства",
        description: "Осёл везет больше всех и останавливается только там, где решил сам.",
    },
    Totem {
        totem: "Белый Медведь",
        symbol: "Знак власти над стихией",
        description: "Белый медведь дома там, где другие гибнут: лед ему постель.",
    },
    Totem {
        totem: "Орёл",
        symbol: "Знак высоты и чести",
        description: "Орёл не разменивается на мелкое: с высоты видна только суть.",
    },
    Totem {
        totem: "Филин",
        symbol: "Знак ночной мудрости",
        description: "Филин бодрствует, когда спят все: тайны ночи принадлежат ему.",
    },
    Totem {
        totem: "Сокол",
        symbol: "Знак ясности и победы",
        description: "Сокол падает с неба как молния: ясность мысли и точность удара.",
    },
    Totem {
        totem: "Дельфин",
        symbol: "Знак дружелюбной глубины",
        description: "Дельфин спасает тонущих: его радость не отменяет его глубины.",
    },
    Totem {
        totem: "Вепрь",
        symbol: "Знак яростного натиска",
        description: "Вепрь не сворачивает: перед его напором расступается чаща.",
    },
    Totem {
        totem: "Куница",
        symbol: "Знак хитрости и достатка",
        description: "Куница проскользнет в любую щель и вернется с добычей.",
    },
];

/// Resolves the totem for a birth date.
///
/// `index = (year - 1906) mod 32` picks the wheel position; a date before
/// the equinox steps one position back. Works for any year, including
/// years before the epoch.
pub fn totem_for(year: i32, month: u8, day: u8) -> &'static Totem {
    let mut index = (year - EPOCH_YEAR).rem_euclid(32) as usize;
    if BEFORE_EQUINOX.contains(month, day) {
        index = (index + TOTEM_WHEEL.len() - 1) % TOTEM_WHEEL.len();
    }
    &TOTEM_WHEEL[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_year_is_deer() {
        assert_eq!(totem_for(1906, 6, 1).totem, "Олень");
    }

    #[test]
    fn test_cycle_repeats_every_32_years() {
        assert_eq!(totem_for(1938, 6, 1).totem, "Олень");
        assert_eq!(totem_for(2002, 6, 1).totem, "Олень");
        assert_eq!(
            totem_for(1990, 7, 7).totem,
            totem_for(1990 + 32, 7, 7).totem
        );
    }

    #[test]
    fn test_equinox_refines_within_family() {
        // Before Mar 21 the previous wheel position still rules.
        assert_eq!(totem_for(1907, 3, 20).totem, "Олень");
        assert_eq!(totem_for(1907, 3, 21).totem, "Горный Баран");
        // The epoch year's pre-equinox dates step back to the wheel's tail.
        assert_eq!(totem_for(1906, 1, 15).totem, "Куница");
    }

    #[test]
    fn test_years_before_epoch() {
        assert_eq!(totem_for(1905, 6, 1).totem, "Куница");
        assert_eq!(totem_for(1874, 6, 1).totem, "Олень");
    }
}
