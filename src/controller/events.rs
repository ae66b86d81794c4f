//! UI Events
//!
//! Plain descriptions of the two user events the controller reacts to: a
//! submitted entry form and a click inside the expense table.

use crate::api::{ExpenseId, NewExpense};
use crate::view::DELETE_BUTTON_CLASS;

/// Raw text of the entry form's inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub description: String,
    pub amount: String,
    pub date: String,
}

impl FormInput {
    pub fn new(description: &str, amount: &str, date: &str) -> Self {
        Self {
            description: description.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
        }
    }

    /// The create payload for this form.
    ///
    /// Nothing is validated: description and date go through untouched and
    /// the amount is read like a browser's `parseFloat`, so unparseable text
    /// becomes `NaN`.
    pub fn to_payload(&self) -> NewExpense {
        NewExpense {
            description: self.description.clone(),
            amount: parse_float(&self.amount),
            date: self.date.clone(),
        }
    }
}

/// The element a click inside the table body landed on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Entries of the element's `class` attribute
    pub classes: Vec<String>,
    /// Value of the element's `data-id` attribute
    pub data_id: Option<String>,
}

impl ClickTarget {
    /// Describe an element from its `class` and `data-id` attribute values
    pub fn from_attributes(class_attribute: &str, data_id: Option<String>) -> Self {
        Self {
            classes: class_attribute.split_whitespace().map(str::to_string).collect(),
            data_id,
        }
    }

    /// A delete control for the given expense
    pub fn delete_button(id: &ExpenseId) -> Self {
        Self {
            classes: vec![DELETE_BUTTON_CLASS.to_string()],
            data_id: Some(id.to_string()),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_delete_button(&self) -> bool {
        self.has_class(DELETE_BUTTON_CLASS)
    }

    /// The expense to delete, if the click landed on a delete control that
    /// names one
    pub fn delete_target(&self) -> Option<ExpenseId> {
        if !self.is_delete_button() {
            return None;
        }

        self.data_id.as_deref().map(ExpenseId::new)
    }
}

/// What a table click led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was not on a delete control
    Ignored,
    /// The expense was deleted and the views refreshed
    Deleted(ExpenseId),
}

/// Read the longest leading decimal number from `text`, like JavaScript's
/// `parseFloat`.
///
/// Leading whitespace is skipped and trailing garbage ignored; text with no
/// leading number gives `NaN`.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end.min(bytes.len())..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain_numbers() {
        assert_eq!(parse_float("3.5"), 3.5);
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("-0.75"), -0.75);
        assert_eq!(parse_float("+8"), 8.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
    }

    #[test]
    fn test_parse_float_reads_leading_prefix() {
        assert_eq!(parse_float("  12.50 dollars"), 12.5);
        assert_eq!(parse_float("1,000"), 1.0);
        assert_eq!(parse_float("2.5e3x"), 2500.0);
        assert_eq!(parse_float("7e"), 7.0);
        assert_eq!(parse_float("7e+"), 7.0);
        assert_eq!(parse_float("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityand beyond"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_float_nan_without_leading_number() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("$5").is_nan());
    }

    #[test]
    fn test_form_payload_passes_text_through() {
        let form = FormInput::new("Coffee", "3.5", "2024-01-01");

        let payload = form.to_payload();

        assert_eq!(payload.description, "Coffee");
        assert_eq!(payload.amount, 3.5);
        assert_eq!(payload.date, "2024-01-01");
    }

    #[test]
    fn test_form_payload_keeps_invalid_input() {
        let form = FormInput::new("", "lots", "yesterday");

        let payload = form.to_payload();

        assert_eq!(payload.description, "");
        assert!(payload.amount.is_nan());
        assert_eq!(payload.date, "yesterday");
    }

    #[test]
    fn test_click_target_delete_button() {
        let target = ClickTarget::from_attributes("action-btn", Some("42".to_string()));

        assert!(target.is_delete_button());
        assert_eq!(target.delete_target(), Some(ExpenseId::new("42")));
    }

    #[test]
    fn test_click_target_with_several_classes() {
        let target = ClickTarget::from_attributes("btn  action-btn small", Some("9".to_string()));

        assert_eq!(target.delete_target(), Some(ExpenseId::new("9")));
    }

    #[test]
    fn test_click_target_other_element() {
        let cell = ClickTarget::from_attributes("", None);
        let tagged_cell = ClickTarget::from_attributes("amount", Some("42".to_string()));

        assert_eq!(cell.delete_target(), None);
        assert_eq!(tagged_cell.delete_target(), None);
    }

    #[test]
    fn test_click_target_button_without_id() {
        let target = ClickTarget::from_attributes("action-btn", None);

        assert!(target.is_delete_button());
        assert_eq!(target.delete_target(), None);
    }
}
