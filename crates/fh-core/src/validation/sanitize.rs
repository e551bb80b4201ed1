use crate::donation::{DonationDraft, DraftItem};
use crate::registration::RegistrationDraft;

/// Strips `<` and `>` and trims surrounding whitespace.
///
/// Total and idempotent; applied on every edit of a free-text field and
/// again on the whole draft right before validation.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitizes every free-text field of a donation draft.
///
/// `category` and `pickup_date` come from closed controls and pass through;
/// the validator is the authority on them.
pub fn sanitize_donation_draft(draft: &DonationDraft) -> DonationDraft {
    DonationDraft {
        items: draft
            .items
            .iter()
            .map(|item| DraftItem {
                key: item.key,
                name: sanitize(&item.name),
                quantity: sanitize(&item.quantity),
                category: item.category.clone(),
            })
            .collect(),
        pickup_address: sanitize(&draft.pickup_address),
        pickup_date: draft.pickup_date.clone(),
        notes: sanitize(&draft.notes),
    }
}

/// Sanitizes name and email. Passwords are never altered.
pub fn sanitize_registration_draft(draft: &RegistrationDraft) -> RegistrationDraft {
    RegistrationDraft {
        name: sanitize(&draft.name),
        email: sanitize(&draft.email),
        password: draft.password.clone(),
        confirm_password: draft.confirm_password.clone(),
    }
}
