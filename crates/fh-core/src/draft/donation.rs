use tracing::debug;

use super::DraftError;
use crate::donation::{DonationDraft, DraftItem, ItemField, ItemKey, MAX_ITEMS, MIN_ITEMS};
use crate::validation::{paths, sanitize, FieldErrors};

/// Mutable state of the donation form: the draft plus the field errors
/// recorded by the last failed submit.
#[derive(Debug, Clone)]
pub struct DonationDraftController {
    draft: DonationDraft,
    errors: FieldErrors,
    next_key: u64,
}

impl Default for DonationDraftController {
    fn default() -> Self {
        Self::new()
    }
}

impl DonationDraftController {
    /// A draft with one blank item and empty address, date and notes.
    pub fn new() -> Self {
        Self {
            draft: DonationDraft::new(ItemKey(1)),
            errors: FieldErrors::new(),
            next_key: 2,
        }
    }

    pub fn draft(&self) -> &DonationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn item_count(&self) -> usize {
        self.draft.items.len()
    }

    /// Appends a blank item and returns its key.
    pub fn add_item(&mut self) -> Result<ItemKey, DraftError> {
        if self.draft.items.len() >= MAX_ITEMS {
            return Err(DraftError::TooManyItems { max: MAX_ITEMS });
        }
        let key = self.allocate_key();
        self.draft.items.push(DraftItem::blank(key));
        Ok(key)
    }

    /// Removes the item with `key`; the last remaining item cannot be removed.
    pub fn remove_item(&mut self, key: ItemKey) -> Result<(), DraftError> {
        let index = self.index_of(key)?;
        if self.draft.items.len() <= MIN_ITEMS {
            return Err(DraftError::LastItem);
        }
        self.draft.items.remove(index);
        self.errors.remove_item(index);
        Ok(())
    }

    /// Replaces one field of an item.
    ///
    /// Name and quantity are sanitized; category comes from a closed
    /// selection and is stored as given.
    pub fn update_item(
        &mut self,
        key: ItemKey,
        field: ItemField,
        value: &str,
    ) -> Result<(), DraftError> {
        let index = self.index_of(key)?;
        let item = &mut self.draft.items[index];
        match field {
            ItemField::Name => item.name = sanitize(value),
            ItemField::Quantity => item.quantity = sanitize(value),
            ItemField::Category => item.category = value.to_string(),
        }
        self.errors.remove(&paths::item(index, field));
        Ok(())
    }

    pub fn update_address(&mut self, value: &str) {
        self.draft.pickup_address = sanitize(value);
        self.errors.remove(paths::PICKUP_ADDRESS);
    }

    /// The date comes from a date picker and is stored as given.
    pub fn update_date(&mut self, value: &str) {
        self.draft.pickup_date = value.to_string();
        self.errors.remove(paths::PICKUP_DATE);
    }

    pub fn update_notes(&mut self, value: &str) {
        self.draft.notes = sanitize(value);
        self.errors.remove(paths::NOTES);
    }

    /// Replaces the recorded errors with the result of a failed submit.
    pub fn record_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Starts over with one blank item and empty fields.
    pub fn reset(&mut self) {
        let key = self.allocate_key();
        self.draft = DonationDraft::new(key);
        self.errors.clear();
        debug!("donation draft reset");
    }

    fn allocate_key(&mut self) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        key
    }

    fn index_of(&self, key: ItemKey) -> Result<usize, DraftError> {
        self.draft
            .index_of(key)
            .ok_or(DraftError::UnknownItem(key.0))
    }
}
