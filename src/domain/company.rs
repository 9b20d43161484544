use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityId, null_as_default};

/// Client logo shown in the "trusted by" strip.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, alias = "logo", deserialize_with = "null_as_default")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

