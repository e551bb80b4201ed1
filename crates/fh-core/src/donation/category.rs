use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of food categories a donated item can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Grains,
    Vegetables,
    Fruits,
    Dairy,
    Canned,
    Beverages,
    Cooked,
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 8] = [
        FoodCategory::Grains,
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Dairy,
        FoodCategory::Canned,
        FoodCategory::Beverages,
        FoodCategory::Cooked,
        FoodCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Grains => "grains",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Canned => "canned",
            FoodCategory::Beverages => "beverages",
            FoodCategory::Cooked => "cooked",
            FoodCategory::Other => "other",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown food category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for FoodCategory {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match against the wire values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoodCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category of a stored item as read back from the datastore.
///
/// Rows may predate the current category set; unrecognised values are kept
/// verbatim so a read never fails on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StoredCategory {
    Known(FoodCategory),
    Unknown(String),
}

impl StoredCategory {
    pub fn as_str(&self) -> &str {
        match self {
            StoredCategory::Known(category) => category.as_str(),
            StoredCategory::Unknown(raw) => raw,
        }
    }
}

impl From<FoodCategory> for StoredCategory {
    fn from(category: FoodCategory) -> Self {
        StoredCategory::Known(category)
    }
}

impl From<String> for StoredCategory {
    fn from(raw: String) -> Self {
        match raw.parse::<FoodCategory>() {
            Ok(category) => StoredCategory::Known(category),
            Err(_) => StoredCategory::Unknown(raw),
        }
    }
}

impl From<StoredCategory> for String {
    fn from(category: StoredCategory) -> Self {
        match category {
            StoredCategory::Known(category) => category.as_str().to_string(),
            StoredCategory::Unknown(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_value() {
        for category in FoodCategory::ALL {
            assert_eq!(category.as_str().parse::<FoodCategory>(), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_values() {
        assert!("meat".parse::<FoodCategory>().is_err());
        assert!("Grains".parse::<FoodCategory>().is_err());
        assert!("".parse::<FoodCategory>().is_err());
    }

    #[test]
    fn stored_category_keeps_unrecognised_values() {
        assert_eq!(
            StoredCategory::from("dairy".to_string()),
            StoredCategory::Known(FoodCategory::Dairy)
        );
        let legacy = StoredCategory::from("bakery".to_string());
        assert_eq!(legacy, StoredCategory::Unknown("bakery".to_string()));
        assert_eq!(legacy.as_str(), "bakery");
    }
}
