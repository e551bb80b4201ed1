use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single validation failure attached to a dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validation failures keyed by field path.
///
/// Holds at most one message per path. Iteration follows insertion order,
/// which the validator keeps equal to form declaration order, so
/// [`FieldErrors::first`] is the message to surface as a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: HashMap<String, (u64, String)>,
    next_seq: u64,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has an error.
    ///
    /// Returns `true` if the message was recorded.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) -> bool {
        let field = field.into();
        if self.entries.contains_key(&field) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(field, (seq, message.into()));
        true
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.entries.remove(field).map(|(_, message)| message)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The earliest recorded error.
    pub fn first(&self) -> Option<FieldError> {
        self.entries
            .iter()
            .min_by_key(|(_, (seq, _))| *seq)
            .map(|(field, (_, message))| FieldError {
                field: field.clone(),
                message: message.clone(),
            })
    }

    /// All errors in insertion order.
    pub fn to_vec(&self) -> Vec<FieldError> {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by_key(|(_, (seq, _))| *seq);
        ordered
            .into_iter()
            .map(|(field, (_, message))| FieldError {
                field: field.clone(),
                message: message.clone(),
            })
            .collect()
    }

    /// Drops the errors of line item `index` and moves the errors of later
    /// items down by one, mirroring the removal of that item from the list.
    pub fn remove_item(&mut self, index: usize) {
        let entries = std::mem::take(&mut self.entries);
        self.entries = entries
            .into_iter()
            .filter_map(|(field, value)| match split_item_path(&field) {
                Some((i, _)) if i == index => None,
                Some((i, rest)) if i > index => Some((format!("items.{}.{}", i - 1, rest), value)),
                _ => Some((field, value)),
            })
            .collect();
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_vec().serialize(serializer)
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut errors = FieldErrors::new();
        for error in iter {
            errors.insert(error.field, error.message);
        }
        errors
    }
}

/// Splits `items.<index>.<rest>` into its index and remainder.
fn split_item_path(field: &str) -> Option<(usize, &str)> {
    let rest = field.strip_prefix("items.")?;
    let (index, rest) = rest.split_once('.')?;
    Some((index.parse().ok()?, rest))
}
