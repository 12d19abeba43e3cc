use super::*;

#[test]
fn validate_item_name_trims_input() {
    assert_eq!(validate_item_name("  Milk  "), Some("Milk".to_owned()));
}

#[test]
fn validate_item_name_rejects_blank_input() {
    assert_eq!(validate_item_name(""), None);
    assert_eq!(validate_item_name("   "), None);
}
