use std::sync::LazyLock;

use regex::Regex;

use super::Field;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;

pub static NAME_REQUIRED: &str = "Name is required";
pub static NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub static NAME_TOO_LONG: &str = "Name is too long";
pub static EMAIL_REQUIRED: &str = "Email is required";
pub static EMAIL_INVALID: &str = "Please enter a valid email";
pub static MESSAGE_REQUIRED: &str = "Message is required";
pub static MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";
pub static MESSAGE_TOO_LONG: &str = "Message is too long";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern should compile"));

/// Error message for `value` in `field`, or `None` when it is acceptable.
pub fn validate(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Name => check_length(
            value,
            NAME_MIN..=NAME_MAX,
            [NAME_REQUIRED, NAME_TOO_SHORT, NAME_TOO_LONG],
        ),
        Field::Email => {
            let value = value.trim();
            if value.is_empty() {
                Some(EMAIL_REQUIRED)
            } else if !EMAIL_PATTERN.is_match(value) {
                Some(EMAIL_INVALID)
            } else {
                None
            }
        }
        Field::Message => check_length(
            value,
            MESSAGE_MIN..=MESSAGE_MAX,
            [MESSAGE_REQUIRED, MESSAGE_TOO_SHORT, MESSAGE_TOO_LONG],
        ),
        Field::ProjectType => None,
    }
}

// messages: [required, too short, too long]
fn check_length(
    value: &str,
    bounds: std::ops::RangeInclusive<usize>,
    messages: [&'static str; 3],
) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(messages[0]);
    }
    let len = value.chars().count();
    if len < *bounds.start() {
        Some(messages[1])
    } else if len > *bounds.end() {
        Some(messages[2])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate(Field::Name, ""), Some(NAME_REQUIRED));
        assert_eq!(validate(Field::Name, "   "), Some(NAME_REQUIRED));
        assert_eq!(validate(Field::Name, "A"), Some(NAME_TOO_SHORT));
        assert_eq!(validate(Field::Name, " A "), Some(NAME_TOO_SHORT));
        assert_eq!(validate(Field::Name, "Alice"), None);
        assert_eq!(validate(Field::Name, &"x".repeat(50)), None);
        assert_eq!(validate(Field::Name, &"x".repeat(51)), Some(NAME_TOO_LONG));
    }

    #[test]
    fn test_name_length_counts_characters() {
        // two characters, four bytes
        assert_eq!(validate(Field::Name, "Žé"), None);
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate(Field::Email, ""), Some(EMAIL_REQUIRED));
        assert_eq!(validate(Field::Email, "not-an-email"), Some(EMAIL_INVALID));
        assert_eq!(validate(Field::Email, "a@b"), Some(EMAIL_INVALID));
        assert_eq!(validate(Field::Email, "a b@c.d"), Some(EMAIL_INVALID));
        assert_eq!(validate(Field::Email, "a@b.co"), None);
        assert_eq!(validate(Field::Email, "  jane@example.com "), None);
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(validate(Field::Message, ""), Some(MESSAGE_REQUIRED));
        assert_eq!(validate(Field::Message, "Too short"), Some(MESSAGE_TOO_SHORT));
        assert_eq!(validate(Field::Message, "Ten chars!"), None);
        assert_eq!(validate(Field::Message, &"m".repeat(1000)), None);
        assert_eq!(
            validate(Field::Message, &"m".repeat(1001)),
            Some(MESSAGE_TOO_LONG)
        );
    }

    #[test]
    fn test_project_type_never_fails() {
        assert_eq!(validate(Field::ProjectType, ""), None);
        assert_eq!(validate(Field::ProjectType, "anything at all"), None);
    }
}
