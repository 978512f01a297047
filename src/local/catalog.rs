//! Static destination and budget tables used by the local planner

use crate::models::BudgetAdvice;

/// Destinations recommended for one travel style
#[derive(Debug)]
pub struct StyleEntry {
    /// Style tag as submitted by the form
    pub style: &'static str,
    /// Human readable label
    pub label: &'static str,
    pub destinations: &'static [&'static str],
}

/// Canned advice for one budget bucket
#[derive(Debug)]
pub struct BudgetTier {
    pub key: &'static str,
    pub accommodation: &'static str,
    pub transport: &'static str,
    pub food: &'static str,
    pub activities: &'static str,
}

impl BudgetTier {
    #[must_use]
    pub fn to_advice(&self) -> BudgetAdvice {
        BudgetAdvice {
            accommodation: self.accommodation.to_string(),
            transport: self.transport.to_string(),
            food: self.food.to_string(),
            activities: self.activities.to_string(),
        }
    }
}

pub static STYLE_CATALOG: &[StyleEntry] = &[
    StyleEntry {
        style: "culture",
        label: "culture and history",
        destinations: &[
            "Beijing", "Xi'an", "Nanjing", "Luoyang", "Kaifeng", "Qufu", "Pingyao", "Lijiang",
        ],
    },
    StyleEntry {
        style: "nature",
        label: "natural scenery",
        destinations: &[
            "Guilin",
            "Zhangjiajie",
            "Jiuzhaigou",
            "Huangshan",
            "Mount Tai",
            "Mount Hua",
            "Mount Emei",
            "Daocheng Yading",
        ],
    },
    StyleEntry {
        style: "food",
        label: "food",
        destinations: &[
            "Chengdu", "Chongqing", "Guangzhou", "Xiamen", "Hangzhou", "Suzhou", "Changsha",
            "Wuhan",
        ],
    },
    StyleEntry {
        style: "leisure",
        label: "relaxation",
        destinations: &[
            "Sanya", "Qingdao", "Dalian", "Zhuhai", "Yantai", "Weihai", "Beihai", "Lijiang",
        ],
    },
    StyleEntry {
        style: "adventure",
        label: "adventure",
        destinations: &[
            "Lhasa",
            "Xinjiang",
            "Inner Mongolia",
            "Yunnan",
            "Guizhou",
            "Sichuan",
            "Gansu",
            "Qinghai",
        ],
    },
    StyleEntry {
        style: "shopping",
        label: "shopping and entertainment",
        destinations: &[
            "Shanghai", "Shenzhen", "Hong Kong", "Macau", "Tianjin", "Shenyang", "Harbin",
            "Kunming",
        ],
    },
];

pub static BUDGET_TIERS: &[BudgetTier] = &[
    BudgetTier {
        key: "500-1000",
        accommodation: "Hostels and budget hotels",
        transport: "Trains and long-distance buses",
        food: "Local street food and quick meals",
        activities: "Free sights and hiking",
    },
    BudgetTier {
        key: "1000-3000",
        accommodation: "Three-star hotels and boutique guesthouses",
        transport: "High-speed rail and economy flights",
        food: "Restaurants serving local specialties",
        activities: "Tickets to the main sights and local experiences",
    },
    BudgetTier {
        key: "3000-8000",
        accommodation: "Four-star hotels and resorts",
        transport: "Flights and business-class rail",
        food: "Upscale restaurants and signature dishes",
        activities: "All-access passes and special experiences",
    },
    BudgetTier {
        key: "8000+",
        accommodation: "Five-star hotels and luxury resorts",
        transport: "First-class flights and private drivers",
        food: "Michelin-starred and private dining",
        activities: "VIP experiences and private guides",
    },
];

/// Advice used when the budget bucket is not in [`BUDGET_TIERS`]
pub static GENERIC_BUDGET: BudgetTier = BudgetTier {
    key: "",
    accommodation: "Choose accommodation that fits your budget",
    transport: "Pick transport that offers good value",
    food: "Try the local specialties",
    activities: "Join activities that mean something to you",
};

#[must_use]
pub fn style(style: &str) -> Option<&'static StyleEntry> {
    STYLE_CATALOG.iter().find(|entry| entry.style == style)
}

#[must_use]
pub fn is_known_style(tag: &str) -> bool {
    style(tag).is_some()
}

#[must_use]
pub fn budget_tier(key: &str) -> Option<&'static BudgetTier> {
    BUDGET_TIERS.iter().find(|tier| tier.key == key)
}

/// Advice for `key`, or the generic record when the bucket is unknown
#[must_use]
pub fn budget_advice(key: &str) -> BudgetAdvice {
    budget_tier(key).unwrap_or(&GENERIC_BUDGET).to_advice()
}

/// Bucket key for an explicit amount
#[must_use]
pub fn budget_key_for_amount(amount: u32) -> &'static str {
    match amount {
        0..=999 => "500-1000",
        1000..=2999 => "1000-3000",
        3000..=7999 => "3000-8000",
        _ => "8000+",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_style_lists_have_no_internal_duplicates() {
        for entry in STYLE_CATALOG {
            let unique: HashSet<_> = entry.destinations.iter().collect();
            assert_eq!(unique.len(), entry.destinations.len(), "{}", entry.style);
        }
    }

    #[test]
    fn test_known_budget_returns_table_entry() {
        for tier in BUDGET_TIERS {
            assert_eq!(budget_advice(tier.key), tier.to_advice());
        }
    }

    #[test]
    fn test_unknown_budget_returns_generic_advice() {
        let advice = budget_advice("a suitcase of gold");
        assert_eq!(advice, GENERIC_BUDGET.to_advice());
        assert!(!advice.accommodation.is_empty());
        assert!(!advice.transport.is_empty());
        assert!(!advice.food.is_empty());
        assert!(!advice.activities.is_empty());
    }

    #[test]
    fn test_budget_key_for_amount() {
        assert_eq!(budget_key_for_amount(300), "500-1000");
        assert_eq!(budget_key_for_amount(1000), "1000-3000");
        assert_eq!(budget_key_for_amount(7999), "3000-8000");
        assert_eq!(budget_key_for_amount(20000), "8000+");
        assert!(budget_tier(budget_key_for_amount(42)).is_some());
    }

    #[test]
    fn test_style_lookup() {
        assert!(is_known_style("nature"));
        assert!(!is_known_style("Nature"));
        assert_eq!(style("food").map(|e| e.label), Some("food"));
    }
}
