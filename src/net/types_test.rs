use super::*;

#[test]
fn grocery_item_accepts_integer_completed_flag() {
    let item: GroceryItem = serde_json::from_str(r#"{"name":"Milk","completed":1}"#).unwrap();
    assert!(item.completed);

    let item: GroceryItem = serde_json::from_str(r#"{"name":"Milk","completed":0}"#).unwrap();
    assert!(!item.completed);
}

#[test]
fn grocery_item_accepts_boolean_completed_flag() {
    let item: GroceryItem = serde_json::from_str(r#"{"name":"Eggs","completed":true}"#).unwrap();
    assert!(item.completed);
}

#[test]
fn grocery_item_rejects_non_flag_completed() {
    let result = serde_json::from_str::<GroceryItem>(r#"{"name":"Eggs","completed":"yes"}"#);
    assert!(result.is_err());
}

#[test]
fn envelope_unwraps_item_list() {
    let body = r#"{"message":[{"name":"Milk","completed":0},{"name":"Eggs","completed":1}]}"#;
    let envelope: Envelope<Vec<GroceryItem>> = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.message.len(), 2);
    assert_eq!(envelope.message[0].name, "Milk");
}

#[test]
fn logged_user_defaults_to_empty_message() {
    let body: LoggedUser = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, "");
}

#[test]
fn user_profile_tolerates_missing_full_name() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"user":"alice","full_name":null}"#).unwrap();
    assert_eq!(profile.user, "alice");
    assert_eq!(profile.full_name, None);
}
