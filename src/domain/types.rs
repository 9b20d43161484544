//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, URL-safe
//! slugs, closed sets of statuses) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided slug contained characters outside `[a-z0-9-]`.
    #[error("invalid slug")]
    InvalidSlug,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    EntityId,
    "Server-assigned identifier of a content record."
);

impl EntityId {
    /// Identifier for built-in fallback content that never came from the backend.
    pub(crate) fn builtin(value: &'static str) -> Self {
        Self(value.to_string())
    }
}

/// URL-safe slug used as a route parameter (`/services/{slug}`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Accepts lowercase ASCII letters, digits and single hyphens.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = NonEmptyString::new(value)?.into_inner();
        let valid = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--");
        if valid {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidSlug)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Reads an optional value, treating an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Processing state of a contact request.
///
/// Statuses the backend adds later are read as [`ContactStatus::Pending`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ContactStatus {
    #[default]
    Pending,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::Pending,
        ContactStatus::Read,
        ContactStatus::Replied,
        ContactStatus::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Archived => "archived",
        }
    }

    /// Any status past `pending` counts as read.
    pub fn marks_read(self) -> bool {
        self != ContactStatus::Pending
    }
}

impl Display for ContactStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

impl From<String> for ContactStatus {
    fn from(value: String) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

impl From<ContactStatus> for String {
    fn from(value: ContactStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Icon shown next to a journey timeline entry.
///
/// Unknown names coming from the backend collapse to [`JourneyIcon::Circle`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum JourneyIcon {
    Location,
    People,
    Building,
    Diamond,
    Globe,
    Chart,
    #[default]
    Circle,
}

impl JourneyIcon {
    pub const ALL: [JourneyIcon; 7] = [
        JourneyIcon::Location,
        JourneyIcon::People,
        JourneyIcon::Building,
        JourneyIcon::Diamond,
        JourneyIcon::Globe,
        JourneyIcon::Chart,
        JourneyIcon::Circle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JourneyIcon::Location => "location",
            JourneyIcon::People => "people",
            JourneyIcon::Building => "building",
            JourneyIcon::Diamond => "diamond",
            JourneyIcon::Globe => "globe",
            JourneyIcon::Chart => "chart",
            JourneyIcon::Circle => "circle",
        }
    }
}

impl From<String> for JourneyIcon {
    fn from(value: String) -> Self {
        JourneyIcon::ALL
            .into_iter()
            .find(|icon| icon.as_str() == value.trim())
            .unwrap_or_default()
    }
}

impl From<JourneyIcon> for String {
    fn from(value: JourneyIcon) -> Self {
        value.as_str().to_string()
    }
}

/// Side of the timeline an entry is drawn on. Anything but `right` is `left`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum JourneyPosition {
    #[default]
    Left,
    Right,
}

impl JourneyPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            JourneyPosition::Left => "left",
            JourneyPosition::Right => "right",
        }
    }
}

impl From<String> for JourneyPosition {
    fn from(value: String) -> Self {
        match value.trim() {
            "right" => JourneyPosition::Right,
            _ => JourneyPosition::Left,
        }
    }
}

impl From<JourneyPosition> for String {
    fn from(value: JourneyPosition) -> Self {
        value.as_str().to_string()
    }
}

/// Strips scripts and unsafe markup from backend-provided rich text.
pub fn sanitize_html(raw: &str) -> String {
    ammonia::clean(raw)
}
