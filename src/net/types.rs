//! Wire DTOs for the backend method API.
//!
//! DESIGN
//! ======
//! The backend wraps every method response in a `message` envelope and
//! stores check fields as 0/1 integers; the adapters here keep those
//! quirks out of the rest of the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Standard `{"message": ...}` wrapper around method responses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub message: T,
}

/// Response of the who-am-I probe. The message is the signed-in user's
/// handle, or empty/guest when nobody is signed in.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoggedUser {
    #[serde(default)]
    pub message: String,
}

/// Profile of the signed-in user, cached in the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User handle, matching the session cookie value.
    pub user: String,
    /// Display name, when the account has one.
    pub full_name: Option<String>,
}

/// One entry of the shopping list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Item label, unique within the list.
    pub name: String,
    /// Whether the item has been ticked off.
    #[serde(deserialize_with = "deserialize_bool_from_flag")]
    pub completed: bool,
}

/// Accept both JSON booleans and the backend's 0/1 check-field integers.
fn deserialize_bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(num) => Ok(num.as_i64().is_some_and(|n| n != 0)),
        other => Err(D::Error::custom(format!(
            "expected bool or 0/1 flag, got {other}"
        ))),
    }
}
