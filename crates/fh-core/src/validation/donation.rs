use chrono::NaiveDate;

use super::errors::FieldErrors;
use super::paths;
use super::rules::{TextRule, ITEM_NAME, ITEM_QUANTITY, NOTES, PICKUP_ADDRESS};
use crate::donation::{
    DonationDraft, DonationForm, DonationItem, DraftItem, FoodCategory, ItemField, MAX_ITEMS,
    MIN_ITEMS,
};

static NAME_RULE: TextRule = TextRule {
    min: 1,
    min_message: "Item name is required",
    max: 100,
    max_message: "Item name must be less than 100 characters",
    pattern: &ITEM_NAME,
    pattern_message: "Item name contains invalid characters",
};

static QUANTITY_RULE: TextRule = TextRule {
    min: 1,
    min_message: "Quantity is required",
    max: 50,
    max_message: "Quantity must be less than 50 characters",
    pattern: &ITEM_QUANTITY,
    pattern_message: "Quantity contains invalid characters",
};

static ADDRESS_RULE: TextRule = TextRule {
    min: 10,
    min_message: "Please provide a complete address (at least 10 characters)",
    max: 500,
    max_message: "Address must be less than 500 characters",
    pattern: &PICKUP_ADDRESS,
    pattern_message: "Address contains invalid characters",
};

static NOTES_RULE: TextRule = TextRule {
    min: 0,
    min_message: "",
    max: 1000,
    max_message: "Notes must be less than 1000 characters",
    pattern: &NOTES,
    pattern_message: "Notes contain invalid characters",
};

const CATEGORY_MESSAGE: &str = "Please select a valid category";
const DATE_REQUIRED: &str = "Pickup date is required";
const DATE_INVALID: &str = "Pickup date must be a valid date";
const DATE_IN_PAST: &str = "Pickup date cannot be in the past";

/// Validates a donation draft against the donation schema.
///
/// `today` is the caller's local calendar date; a pickup on `today` is
/// accepted. The draft is expected to be sanitized already; validation
/// itself only trims.
pub fn validate_donation(
    draft: &DonationDraft,
    today: NaiveDate,
) -> Result<DonationForm, FieldErrors> {
    let mut errors = FieldErrors::new();

    if draft.items.len() < MIN_ITEMS {
        errors.insert(paths::ITEMS, "At least one item is required");
    } else if draft.items.len() > MAX_ITEMS {
        errors.insert(paths::ITEMS, "Maximum 20 items allowed");
    }

    let items: Vec<Option<DonationItem>> = draft
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item, &mut errors))
        .collect();

    let pickup_address = record(
        &mut errors,
        paths::PICKUP_ADDRESS,
        ADDRESS_RULE.check(&draft.pickup_address),
    );
    let pickup_date = record(
        &mut errors,
        paths::PICKUP_DATE,
        check_pickup_date(&draft.pickup_date, today),
    );
    let notes = record(&mut errors, paths::NOTES, NOTES_RULE.check(&draft.notes));

    if !errors.is_empty() {
        return Err(errors);
    }

    let items = items.into_iter().collect::<Option<Vec<_>>>();
    match (items, pickup_address, pickup_date, notes) {
        (Some(items), Some(pickup_address), Some(pickup_date), Some(notes)) => Ok(DonationForm {
            items,
            pickup_address,
            pickup_date,
            notes: (!notes.is_empty()).then_some(notes),
        }),
        // every None above recorded an error
        _ => Err(errors),
    }
}

fn validate_item(
    index: usize,
    item: &DraftItem,
    errors: &mut FieldErrors,
) -> Option<DonationItem> {
    let name = record(
        errors,
        paths::item(index, ItemField::Name),
        NAME_RULE.check(&item.name),
    );
    let quantity = record(
        errors,
        paths::item(index, ItemField::Quantity),
        QUANTITY_RULE.check(&item.quantity),
    );
    let category = record(
        errors,
        paths::item(index, ItemField::Category),
        item.category
            .parse::<FoodCategory>()
            .map_err(|_| CATEGORY_MESSAGE),
    );

    Some(DonationItem {
        key: item.key,
        name: name?,
        quantity: quantity?,
        category: category?,
    })
}

fn check_pickup_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DATE_REQUIRED);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DATE_INVALID)?;
    if date < today {
        return Err(DATE_IN_PAST);
    }
    Ok(date)
}

fn record<T>(
    errors: &mut FieldErrors,
    field: impl Into<String>,
    result: Result<T, &'static str>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}
