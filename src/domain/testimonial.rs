use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityId, null_as_default};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub quote: String,
    pub author_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_avatar: String,
    /// Display sequence, ascending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}
