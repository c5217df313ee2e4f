//! Staff accounts.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{Draft, Resource, require};

/// A staff account record. The server keeps the capitalized name keys of
/// the legacy users collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl Resource for Account {
    const KIND: &'static str = "users";
    const TITLE: &'static str = "account";

    type Draft = AccountDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountDraft {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl AccountDraft {
    pub fn from_record(record: &Account) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }
}

impl Draft for AccountDraft {
    fn validate(&self) -> Result<()> {
        require(&[
            ("FirstName", !self.first_name.is_empty()),
            ("LastName", !self.last_name.is_empty()),
            ("email", !self.email.is_empty()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys_are_capitalized() {
        let json = r#"{"_id":"u1","FirstName":"Ada","LastName":"Nwosu","email":"ada@studio.example","role":"Admin"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.first_name, "Ada");

        let out = serde_json::to_value(&account).unwrap();
        assert_eq!(out["FirstName"], "Ada");
        assert_eq!(out["LastName"], "Nwosu");
    }

    #[test]
    fn test_required_fields() {
        let draft = AccountDraft {
            email: "ada@studio.example".to_string(),
            ..Default::default()
        };
        let msg = draft.validate().unwrap_err().to_string();
        assert!(msg.contains("FirstName"));
        assert!(msg.contains("LastName"));
        assert!(!msg.contains("email"));
    }
}
