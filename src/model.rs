//! Wire types shared by the API client, the store, and the UI.
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned user identifier. APIs differ on numeric vs string ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Num(i64),
    Text(String),
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Num(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Num(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

/// A user as returned by the API.
///
/// Missing or `null` text fields read as empty so one sparse record does not
/// reject the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// `None` only for users that were never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(UserId::Num(id)),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Key used to identify the row when rendering.
    pub fn key(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// Body of a creation request; also the form draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> User {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        let a = parse(json!({"id": 7, "first_name": "Ana", "last_name": "Li", "email": "a@x.com"}));
        let b = parse(json!({"id": "u-7", "first_name": "Bo", "last_name": "Wu", "email": "b@x"}));
        assert_eq!(a.id, Some(UserId::Num(7)));
        assert_eq!(b.id, Some(UserId::Text("u-7".into())));
        assert_eq!(a.key(), "7");
        assert_eq!(b.key(), "u-7");
    }

    #[test]
    fn negative_id_is_numeric() {
        let u = parse(json!({"id": -1, "first_name": "Ana", "last_name": "Li", "email": "a@x"}));
        assert_eq!(u.id, Some(UserId::Num(-1)));
        assert_eq!(u.key(), "-1");
    }

    #[test]
    fn null_and_missing_text_fields_read_as_empty() {
        let u = parse(json!({"id": 2, "first_name": "Bo", "last_name": null}));
        assert_eq!(u, User::new(2, "Bo", "", ""));
    }

    #[test]
    fn list_with_one_sparse_record_still_decodes() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id":1,"first_name":"Ana","last_name":"Li","email":"a@x.com"},
                {"id":2,"first_name":"Bo","last_name":null,"email":"b@x.com"}]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1], User::new(2, "Bo", "", "b@x.com"));
    }

    #[test]
    fn extra_response_fields_are_ignored() {
        let u = parse(json!({
            "id": 1,
            "first_name": "Ana",
            "last_name": "Li",
            "email": "a@x.com",
            "createdAt": "2024-01-01"
        }));
        assert_eq!(u, User::new(1, "Ana", "Li", "a@x.com"));
    }

    #[test]
    fn new_user_serializes_exactly_three_fields() {
        let body = serde_json::to_value(NewUser {
            first_name: "Ana".into(),
            last_name: "Li".into(),
            email: "a@x.com".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"first_name": "Ana", "last_name": "Li", "email": "a@x.com"})
        );
    }
}
