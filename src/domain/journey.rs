use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityId, JourneyIcon, JourneyPosition, null_as_default};

/// Milestone on the company timeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub title: String,
    /// Free-form label such as "2019" or "Spring 2021".
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: JourneyIcon,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: JourneyPosition,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}
