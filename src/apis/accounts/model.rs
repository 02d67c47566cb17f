use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of a newly created account.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Account {
    pub id: Uuid,
}

/// Kind of resource carried by an envelope. Accounts are the only one exposed by this API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    #[default]
    Accounts,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AccountClassification {
    Personal,
    Business,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct AccountAttributes {
    #[serde(default)]
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<AccountClassification>,
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_names: Option<Vec<String>>,
}

/// Account resource, as sent to and returned by the API.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountData {
    pub r#type: ResourceType,
    pub id: Uuid,
    pub organisation_id: Uuid,
    /// Record version, required to delete the account.
    #[serde(default)]
    pub version: i64,
    /// Populated by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// Populated by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    pub attributes: AccountAttributes,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

/// `{ "data": ... }` body of a create request.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct CreateAccountRequest {
    pub data: AccountData,
}

/// `{ "data": ..., "links": ... }` body returned by the account endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct AccountResponse {
    pub data: AccountData,
    #[serde(default)]
    pub links: Links,
}
