//! Static workshop catalog and the tag-matching product recommendation.
//!
//! The catalog is immutable at runtime. Recommendation is a substring test
//! of product tags against the lowercased hall, god and totem names, in
//! that priority order, with a hard-coded fallback when nothing matches.

pub mod holidays;

use serde::Serialize;

/// Marketplace links for a product. `None` means the product is not listed
/// on that marketplace.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Links {
    pub wb: Option<&'static str>,
    pub ozon: Option<&'static str>,
}

/// One catalog entry. Tags are lowercase keywords matched by substring
/// against the reading's hall/god/totem names.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<&'static str>,
    pub price: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub category_slug: &'static str,
    pub links: Links,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub slug: &'static str,
    pub image: &'static str,
}

/// Returned when no tag matches on hall, god or totem.
pub const DEFAULT_PRODUCT_ID: u32 = 3;

pub static PRODUCTS: [Product; 6] = [
    Product {
        id: 1,
        name: "Оберег Велес'",
        description: "Этот оберег — не просто украшение, а мощная духовная броня, связывающая владельца с энергией предков. Знак Велеса издревле считается одним из самых сильных артефактов для защиты и обретения благополучия, особенно для тех, кто несет ответственность за свою семью и стоит на защите интересов близких.",
        long_description: Some("Символ Велеса — покровителя торговли и магии. Дарует владельцу проницательность, защищает в путешествиях и приумножает богатство. Рекомендуется носить ближе к телу, чтобы усилить связь с природными циклами."),
        price: "450 ₽",
        image: "/images/obgveles.jpeg",
        tags: &["волк", "ворон", "велес", "куница"],
        category_slug: "amulets",
        links: Links {
            wb: Some("https://www.wildberries.ru/catalog/809634788/detail.aspx?targetUrl=EX"),
            ozon: Some("https://www.ozon.ru/product/talisman-veles-3403078284/?at=Y7tjlXJANIMJGE9Eup0XZKmhP2xENPcOWW2BxUVVoO9o"),
        },
    },
    Product {
        id: 2,
        name: "Топор 'Медвежий'",
        description: "Массивный и надежный. Для тех, кто рожден под знаком Сварога или Лося.",
        long_description: Some("Медведь — хозяин леса, символ грубой силы и несокрушимой воли. Этот топор пропитан духом тайги. Он поможет владельцу отстаивать свои границы и преодолевать любые преграды с яростью и достоинством."),
        price: "16 000 ₽",
        image: "/images/obgveles.jpeg",
        tags: &["медведь", "сварог", "ворон", "лось"],
        category_slug: "axes",
        links: Links {
            wb: Some("https://www.wildberries.ru/catalog/809634788/detail.aspx?targetUrl=EX"),
            ozon: Some("https://www.ozon.ru/product/0"),
        },
    },
    Product {
        id: 3,
        name: "Фигурка 'Сокол'",
        description: "Изящная статуэтка. Символ ясности и победы. Подходит Финисту и Орлу.",
        long_description: Some("Сокол — вестник богов, зоркий страж небес. Фигурка помогает обрести ясность мысли и увидеть перспективы там, где другие видят тупик. Талисман для тех, кто стремится к высоким целям."),
        price: "3 000 ₽",
        image: "/images/obgveles.jpeg",
        tags: &["финист", "сокол", "орел"],
        category_slug: "figures",
        links: Links {
            wb: Some("https://www.wildberries.ru/catalog/809634788/detail.aspx?targetUrl=EX"),
            ozon: Some("#"),
        },
    },
    Product {
        id: 4,
        name: "Идол 'Макошь'",
        description: "Оберег для дома. Покровительница судьбы и рукоделия.",
        long_description: Some("Макошь прядет нити судеб. Этот идол в доме гармонизирует пространство, привлекая достаток и семейное счастье. Хранительница очага и покровительница женской мудрости."),
        price: "4 000 ₽",
        image: "/images/obgveles.jpeg",
        tags: &["лебедь", "щука", "дева", "ворон", "макошь"],
        category_slug: "figures",
        links: Links {
            wb: Some("https://www.wildberries.ru/catalog/809634788/detail.aspx?targetUrl=EX"),
            ozon: Some("#"),
        },
    },
    Product {
        id: 5,
        name: "Амулет 'Сварожий Круг'",
        description: "Универсальный оберег из бронзы. Защищает и дает силы всем чертогам.",
        long_description: Some("Сварожий Круг объединяет все чертоги, символизируя целостность мироздания. Ношение этого амулета помогает найти своё место в жизни, получить поддержку всех богов и обрести внутреннее равновесие."),
        price: "1 200 ₽",
        image: "/images/obgveles.jpeg",
        tags: &["общий"],
        category_slug: "amulets",
        links: Links {
            wb: Some("https://www.wildberries.ru/catalog/809634788/detail.aspx?targetUrl=EX"),
            ozon: None,
        },
    },
    Product {
        id: 6,
        name: "Топор 'Мудрость Ворона'",
        description: "Кованая сталь, рукоять из ясеня. Идеален для рожденных в Чертог Ворона.",
        long_description: Some("Ворон — птица вещая, проводник между мирами. Этот топор несет в себе энергию тайного знания и предвидения. Оружие для тех, кто ценит не только силу удара, но и своевременность действия."),
        price: "18 500 ₽",
        image: "/images/obgveles.jpeg",
        tags: &["ворон", "коляда", "мудрость"],
        category_slug: "axes",
        links: Links {
            wb: Some("https://www.wildberries.ru/catalog/809634788/detail.aspx?targetUrl=EX"),
            ozon: Some("https://www.ozon.ru"),
        },
    },
];

pub static CATEGORIES: [Category; 3] = [
    Category {
        id: 1,
        name: "Топоры",
        slug: "axes",
        image: "/images/cat_axes.jpg",
    },
    Category {
        id: 2,
        name: "Фигурки",
        slug: "figures",
        image: "/images/cat_figures.jpg",
    },
    Category {
        id: 3,
        name: "Амулеты",
        slug: "amulets",
        image: "/images/cat_amulets.jpg",
    },
];

/// Picks the product for a reading.
///
/// Hall and god take priority: the whole catalog is scanned for a hall/god
/// tag hit before the totem is consulted at all. First catalog-order match
/// wins; there is no scoring across multiple tag hits. Falls back to the
/// default product when nothing matches.
pub fn recommend(hall: &str, god: &str, totem: &str) -> &'static Product {
    let hall = hall.to_lowercase();
    let god = god.to_lowercase();

    let by_hall = PRODUCTS
        .iter()
        .find(|p| p.tags.iter().any(|tag| hall.contains(tag) || god.contains(tag)));
    if let Some(product) = by_hall {
        return product;
    }

    let totem = totem.to_lowercase();
    let by_totem = PRODUCTS
        .iter()
        .find(|p| p.tags.iter().any(|tag| totem.contains(tag)));
    if let Some(product) = by_totem {
        return product;
    }

    PRODUCTS
        .iter()
        .find(|p| p.id == DEFAULT_PRODUCT_ID)
        .expect("default product exists in the catalog")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_catalog_order_match_wins() {
        // "ворон" is a tag on products 1, 2, 4 and 6; the first one wins
        // no matter what the totem says.
        let product = recommend("Чертог Ворона", "Коляда", "Слон");
        assert_eq!(product.id, 1);
    }

    #[test]
    fn test_hall_and_god_take_priority_over_totem() {
        // God "Макошь" hits product 4; totem "Волк" would hit product 1,
        // which comes earlier in the catalog, but the totem pass must not
        // run when hall/god already matched.
        let product = recommend("Чертог Лебеди", "Макошь", "Волк");
        assert_eq!(product.id, 4);
    }

    #[test]
    fn test_totem_fallback_when_hall_misses() {
        // Hall and god carry no known tag; totem "Куница" hits product 1.
        let product = recommend("Чертог Тура", "Крышень", "Куница");
        assert_eq!(product.id, 1);
    }

    #[test]
    fn test_default_product_when_nothing_matches() {
        let product = recommend("Чертог Тура", "Крышень", "Слон");
        assert_eq!(product.id, DEFAULT_PRODUCT_ID);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let upper = recommend("ЧЕРТОГ ВОРОНА", "КОЛЯДА", "СЛОН");
        let lower = recommend("чертог ворона", "коляда", "слон");
        assert_eq!(upper.id, lower.id);
    }

    #[test]
    fn test_every_product_belongs_to_a_known_category() {
        for product in &PRODUCTS {
            assert!(
                CATEGORIES.iter().any(|c| c.slug == product.category_slug),
                "product {} references unknown category {}",
                product.id,
                product.category_slug
            );
        }
    }
}
