//! Field rules shared by the HTTP handlers and the client stores.
//!
//! Every entry form (registration, checkout, feedback, delivery, supplier)
//! enforces the same rules, and the server re-checks them on every request
//! body, so the contract holds regardless of client trustworthiness.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Letters and internal spaces only.
pub static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// "<digits>, <word(s)>, <word(s)>" street/city/region form.
pub static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*,\s*[A-Za-z\s]+,\s*[A-Za-z\s]+$").unwrap());

/// Exactly 10 digits, first digit fixed at 0.
pub static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0\d{9}$").unwrap());

/// Leading letter, one "@", alphabetic domain suffix of length >= 2.
pub static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][\w.-]*@[a-zA-Z]+\.[a-zA-Z]{2,}$").unwrap());

/// Two letters followed by four digits.
pub static VEHICLE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}\d{4}$").unwrap());

/// At least five letters, no digits or spaces.
pub static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{5,}$").unwrap());

/// Letters and spaces; an empty comment is allowed.
pub static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]*$").unwrap());

pub const ORDER_STATUSES: [&str; 4] = ["pending", "in-progress", "completed", "cancelled"];
pub const DELIVERY_CATEGORIES: [&str; 3] = ["car", "bike", "truck"];
pub const DELIVERY_ORDER_STATUSES: [&str; 3] = ["pending", "in-progress", "completed"];

pub fn is_order_status(value: &str) -> bool {
    ORDER_STATUSES.contains(&value)
}

pub fn is_delivery_category(value: &str) -> bool {
    DELIVERY_CATEGORIES.contains(&value)
}

pub fn is_delivery_order_status(value: &str) -> bool {
    DELIVERY_ORDER_STATUSES.contains(&value)
}

pub fn order_status(value: &str) -> Result<(), ValidationError> {
    if is_order_status(value) {
        Ok(())
    } else {
        Err(ValidationError::new("order_status"))
    }
}

pub fn delivery_category(value: &str) -> Result<(), ValidationError> {
    if is_delivery_category(value) {
        Ok(())
    } else {
        Err(ValidationError::new("delivery_category"))
    }
}

pub fn delivery_order_status(value: &str) -> Result<(), ValidationError> {
    if is_delivery_order_status(value) {
        Ok(())
    } else {
        Err(ValidationError::new("delivery_order_status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_spaces() {
        assert!(NAME_RE.is_match("John Doe"));
        assert!(NAME_RE.is_match("Amara"));
        assert!(!NAME_RE.is_match("John2"));
        assert!(!NAME_RE.is_match(""));
    }

    #[test]
    fn address_requires_leading_number_and_three_parts() {
        assert!(ADDRESS_RE.is_match("12, Main Street, Springfield"));
        assert!(ADDRESS_RE.is_match("7,Hill Road,Kandy"));
        assert!(!ADDRESS_RE.is_match("Main Street"));
        assert!(!ADDRESS_RE.is_match("Main Street, Springfield"));
        assert!(!ADDRESS_RE.is_match("12, Main Street"));
    }

    #[test]
    fn mobile_is_ten_digits_starting_with_zero() {
        assert!(MOBILE_RE.is_match("0771234567"));
        assert!(!MOBILE_RE.is_match("123456789"));
        assert!(!MOBILE_RE.is_match("1771234567"));
        assert!(!MOBILE_RE.is_match("07712345678"));
        assert!(!MOBILE_RE.is_match("077123456a"));
    }

    #[test]
    fn email_starts_with_letter_and_has_alpha_suffix() {
        assert!(EMAIL_RE.is_match("a.b@domain.com"));
        assert!(EMAIL_RE.is_match("jane@mail.org"));
        assert!(!EMAIL_RE.is_match("@domain.com"));
        assert!(!EMAIL_RE.is_match("1jane@mail.org"));
        assert!(!EMAIL_RE.is_match("jane@mail.c"));
        assert!(!EMAIL_RE.is_match("jane-at-mail.org"));
    }

    #[test]
    fn vehicle_id_is_two_letters_four_digits() {
        assert!(VEHICLE_ID_RE.is_match("AB1234"));
        assert!(VEHICLE_ID_RE.is_match("xy0001"));
        assert!(!VEHICLE_ID_RE.is_match("A1234"));
        assert!(!VEHICLE_ID_RE.is_match("AB123"));
        assert!(!VEHICLE_ID_RE.is_match("AB12345"));
        assert!(!VEHICLE_ID_RE.is_match("1234AB"));
    }

    #[test]
    fn username_is_at_least_five_letters() {
        assert!(USERNAME_RE.is_match("amara"));
        assert!(!USERNAME_RE.is_match("amy"));
        assert!(!USERNAME_RE.is_match("amara1"));
    }

    #[test]
    fn comment_allows_empty_but_not_digits() {
        assert!(COMMENT_RE.is_match(""));
        assert!(COMMENT_RE.is_match("Great service"));
        assert!(!COMMENT_RE.is_match("Great service 10 out of 10"));
    }

    #[test]
    fn status_enums_are_closed() {
        assert!(is_order_status("pending"));
        assert!(is_order_status("cancelled"));
        assert!(!is_order_status("paid"));
        assert!(is_delivery_category("bike"));
        assert!(!is_delivery_category("van"));
        assert!(is_delivery_order_status("in-progress"));
        assert!(!is_delivery_order_status("cancelled"));
    }
}
