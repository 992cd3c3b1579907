//! Customer DTOs.

use serde::{Deserialize, Serialize};

/// A storefront user. Read-only from the console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// `GET /user/getusers` answers either `{ users: [...] }` or a bare array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UsersPayload {
    Wrapped { users: Vec<User> },
    Bare(Vec<User>),
}

impl UsersPayload {
    pub fn into_vec(self) -> Vec<User> {
        match self {
            UsersPayload::Wrapped { users } => users,
            UsersPayload::Bare(users) => users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn users_payload_accepts_both_shapes() {
        let wrapped: UsersPayload = serde_json::from_value(json!({
            "users": [{ "_id": "u1", "name": "Asha", "email": "asha@shop.in" }]
        }))
        .unwrap();
        let bare: UsersPayload = serde_json::from_value(json!([
            { "_id": "u1", "name": "Asha", "email": "asha@shop.in", "phone": "98100" }
        ]))
        .unwrap();

        assert_eq!(wrapped.into_vec()[0].id, "u1");
        let bare = bare.into_vec();
        assert_eq!(bare[0].phone.as_deref(), Some("98100"));
        assert_eq!(bare[0].address, None);
    }
}
