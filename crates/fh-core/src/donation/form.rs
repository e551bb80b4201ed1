use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FoodCategory;

/// Client-local key of a line item.
///
/// Only used to address items while the form is edited; it never reaches
/// the datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(pub u64);

/// A line item as typed by the user, before validation.
///
/// `category` is kept as a raw string: it normally comes from a closed
/// selection control, but nothing guarantees that for non-UI callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftItem {
    pub key: ItemKey,
    pub name: String,
    pub quantity: String,
    pub category: String,
}

impl DraftItem {
    pub fn blank(key: ItemKey) -> Self {
        Self {
            key,
            name: String::new(),
            quantity: String::new(),
            category: String::new(),
        }
    }
}

/// Unvalidated donation form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationDraft {
    pub items: Vec<DraftItem>,
    pub pickup_address: String,
    pub pickup_date: String,
    pub notes: String,
}

impl DonationDraft {
    pub fn new(first_item: ItemKey) -> Self {
        Self {
            items: vec![DraftItem::blank(first_item)],
            pickup_address: String::new(),
            pickup_date: String::new(),
            notes: String::new(),
        }
    }

    pub fn index_of(&self, key: ItemKey) -> Option<usize> {
        self.items.iter().position(|item| item.key == key)
    }
}

/// A validated line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationItem {
    pub key: ItemKey,
    pub name: String,
    pub quantity: String,
    pub category: FoodCategory,
}

/// A validated donation form: trimmed strings, parsed date, typed category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationForm {
    pub items: Vec<DonationItem>,
    pub pickup_address: String,
    pub pickup_date: NaiveDate,
    /// `None` when the user left notes empty.
    pub notes: Option<String>,
}

/// Editable fields of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Name,
    Quantity,
    Category,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Quantity => "quantity",
            ItemField::Category => "category",
        }
    }
}
