use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub(crate) static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new($re).expect("pattern is a valid regex literal"));
    };
}

pattern!(ITEM_NAME, r"^[A-Za-z0-9\s,.\-']+$");
pattern!(ITEM_QUANTITY, r"^[A-Za-z0-9\s.,\-]+$");
pattern!(PICKUP_ADDRESS, r"^[A-Za-z0-9\s,.\-#/'()]+$");
pattern!(NOTES, r"^[A-Za-z0-9\s,.\-#/'()!?@]*$");
pattern!(PERSON_NAME, r"^[A-Za-z\s.\-']+$");
pattern!(
    EMAIL,
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
);

/// Length-bounded, pattern-checked text field.
///
/// Checks run in order (minimum, maximum, pattern) on the trimmed value and
/// the first failure is reported.
pub(crate) struct TextRule {
    pub min: usize,
    pub min_message: &'static str,
    pub max: usize,
    pub max_message: &'static str,
    pub pattern: &'static Lazy<Regex>,
    pub pattern_message: &'static str,
}

impl TextRule {
    pub fn check(&self, value: &str) -> Result<String, &'static str> {
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if len < self.min {
            return Err(self.min_message);
        }
        if len > self.max {
            return Err(self.max_message);
        }
        if !self.pattern.is_match(trimmed) {
            return Err(self.pattern_message);
        }
        Ok(trimmed.to_string())
    }
}

/// Email shape check: the regex plus the rules it cannot express
/// (no leading dot, no consecutive dots).
pub(crate) fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}
