use super::*;

fn filled_form() -> Vec<(&'static str, String)> {
    vec![
        ("first_name", "Ama".to_owned()),
        ("last_name", "Mensah".to_owned()),
        ("email_address", "ama@example.com".to_owned()),
        ("phone_number", String::new()),
        ("tell_us_about_your_hair_journey", "Locs, please.".to_owned()),
    ]
}

fn submit(fields: &[(&'static str, String)]) -> bool {
    validate_submission(fields.iter().map(|(key, value)| (*key, value.as_str())))
}

#[test]
fn normalize_field_key_lowercases_and_joins_with_underscores() {
    assert_eq!(normalize_field_key("First Name"), "first_name");
    assert_eq!(normalize_field_key("Email Address"), "email_address");
    assert_eq!(normalize_field_key("Tell  Us   More"), "tell_us_more");
    assert_eq!(normalize_field_key("message"), "message");
}

#[test]
fn is_valid_email_accepts_plain_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last@mail.example.co"));
    assert!(is_valid_email("x+tag@sub.domain.org"));
}

#[test]
fn is_valid_email_rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("plain"));
    assert!(!is_valid_email("ab.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("a @b.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b c.com"));
}

#[test]
fn check_field_requires_content_for_required_fields() {
    let rules = FieldRules { required: true, email: false };
    assert_eq!(check_field("", rules), Err(FieldError::Required));
    assert_eq!(check_field("   ", rules), Err(FieldError::Required));
    assert_eq!(check_field("Ama", rules), Ok(()));
}

#[test]
fn check_field_skips_email_shape_until_field_has_content() {
    let rules = FieldRules { required: true, email: true };
    assert_eq!(check_field("", rules), Err(FieldError::Required));
    assert_eq!(check_field("not-an-email", rules), Err(FieldError::InvalidEmail));
    assert_eq!(check_field("ama@example.com", rules), Ok(()));
}

#[test]
fn check_field_trims_before_matching() {
    let rules = FieldRules { required: true, email: true };
    assert_eq!(check_field("  ama@example.com  ", rules), Ok(()));
}

#[test]
fn check_field_allows_anything_when_unconstrained() {
    assert_eq!(check_field("", FieldRules::default()), Ok(()));
}

#[test]
fn field_error_messages_are_user_facing() {
    assert_eq!(FieldError::Required.to_string(), "This field is required");
    assert_eq!(
        FieldError::InvalidEmail.to_string(),
        "Please enter a valid email address"
    );
}

#[test]
fn validate_submission_accepts_a_filled_form() {
    assert!(submit(&filled_form()));
}

#[test]
fn validate_submission_rejects_any_blank_required_field() {
    for required in REQUIRED_FIELDS {
        let mut form = filled_form();
        for (key, value) in &mut form {
            if key == required {
                *value = "   ".to_owned();
            }
        }
        assert!(!submit(&form), "blank {required} should fail");
    }
}

#[test]
fn validate_submission_rejects_missing_required_key() {
    let form: Vec<(&str, String)> = filled_form()
        .into_iter()
        .filter(|(key, _)| *key != "last_name")
        .collect();
    assert!(!submit(&form));
}

#[test]
fn validate_submission_rejects_bad_email_even_when_present() {
    let mut form = filled_form();
    for (key, value) in &mut form {
        if *key == EMAIL_FIELD {
            *value = "ama@example".to_owned();
        }
    }
    assert!(!submit(&form));
}

#[test]
fn validate_submission_ignores_optional_fields() {
    let form: Vec<(&str, String)> = filled_form()
        .into_iter()
        .filter(|(key, _)| REQUIRED_FIELDS.contains(key))
        .collect();
    assert!(submit(&form));
}
