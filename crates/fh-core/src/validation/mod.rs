//! Sanitizer and schema validator for the donation and registration forms.
//!
//! Validation checks every field and every line item in a single pass and
//! reports at most one message per field path, so a caller can annotate all
//! offending controls at once.

mod donation;
mod errors;
mod registration;
mod rules;
mod sanitize;

pub use donation::validate_donation;
pub use errors::{FieldError, FieldErrors};
pub use registration::validate_registration;
pub use sanitize::{sanitize, sanitize_donation_draft, sanitize_registration_draft};

/// Dotted field paths used as error keys.
pub mod paths {
    use crate::donation::ItemField;

    pub const ITEMS: &str = "items";
    pub const PICKUP_ADDRESS: &str = "pickupAddress";
    pub const PICKUP_DATE: &str = "pickupDate";
    pub const NOTES: &str = "notes";

    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";

    /// Path of one field of the line item at `index`, e.g. `items.0.name`.
    pub fn item(index: usize, field: ItemField) -> String {
        format!("{ITEMS}.{index}.{}", field.as_str())
    }
}
