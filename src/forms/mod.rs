//! Form definitions backing the admin and public routes.
//!
//! Admin forms double as the JSON payload sent to the backend: the same
//! camelCase field names are used by the HTML inputs and by the API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::domain::types::EntityId;

pub mod auth;
pub mod blog;
pub mod case_study;
pub mod company;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod journey;
pub mod newsletter;
pub mod service;
pub mod testimonial;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("malformed form payload: {0}")]
    Malformed(String),

    #[error("invalid status")]
    InvalidStatus,
}

/// Decodes an `application/x-www-form-urlencoded` body, keeping repeated keys.
pub fn decode_form<F: DeserializeOwned>(body: &[u8]) -> Result<F, FormError> {
    serde_html_form::from_bytes(body).map_err(|err| FormError::Malformed(err.to_string()))
}

/// Delete confirmation; only `confirm=yes` counts as confirmed.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: Option<String>,
}

impl DeleteForm {
    pub fn confirmed(&self) -> bool {
        self.confirm.as_deref() == Some("yes")
    }
}

/// Input control used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    TextArea { rows: u8 },
    Url,
    Email,
    Number,
    Checkbox,
    Select { options: &'static [&'static str] },
}

/// Static description of one admin form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A typed draft that can be edited through a generated admin form.
pub trait AdminForm: Serialize + DeserializeOwned + Default + Clone + Validate {
    /// Backend record the draft is pre-filled from when editing.
    type Entity;

    /// Inputs in display order. Every `name` matches a serialized field.
    const FIELDS: &'static [FieldSpec];

    /// Copies the editable attributes of an existing record.
    fn from_entity(entity: &Self::Entity) -> Self;
}

/// Form controller binding a typed draft to the generated inputs.
#[derive(Debug, Clone)]
pub struct Draft<F> {
    pub values: F,
    pub editing: Option<EntityId>,
}

impl<F: AdminForm> Draft<F> {
    /// Blank draft for the create form.
    pub fn blank() -> Self {
        Self {
            values: F::default(),
            editing: None,
        }
    }

    /// Draft pre-filled from the record being edited.
    pub fn edit(id: EntityId, entity: &F::Entity) -> Self {
        Self {
            values: F::from_entity(entity),
            editing: Some(id),
        }
    }

    /// Pairs each field spec with its current value for the template.
    pub fn fields(&self) -> Vec<FieldView> {
        let values = serde_json::to_value(&self.values).unwrap_or(Value::Null);
        F::FIELDS
            .iter()
            .map(|spec| FieldView {
                spec: *spec,
                value: values.get(spec.name).cloned().unwrap_or(Value::Null),
            })
            .collect()
    }
}

impl<F: AdminForm> Serialize for Draft<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct DraftView<'a> {
            editing: Option<&'a EntityId>,
            fields: Vec<FieldView>,
        }

        DraftView {
            editing: self.editing.as_ref(),
            fields: self.fields(),
        }
        .serialize(serializer)
    }
}

/// Field spec together with the value currently held by the draft.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    #[serde(flatten)]
    pub spec: FieldSpec,
    pub value: Value,
}

/// Accepts an empty value or an absolute URL.
pub(crate) fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

/// Rejects values made of whitespace only.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::blog::BlogForm;
    use crate::forms::case_study::CaseStudyForm;
    use crate::forms::company::CompanyForm;
    use crate::forms::hero::HeroForm;
    use crate::forms::journey::JourneyForm;
    use crate::forms::service::ServiceForm;
    use crate::forms::testimonial::TestimonialForm;

    fn field_names_match_serialized_keys<F: AdminForm>() {
        let value = serde_json::to_value(F::default()).unwrap();
        for spec in F::FIELDS {
            assert!(
                value.get(spec.name).is_some(),
                "field `{}` is not part of the payload",
                spec.name
            );
        }
    }

    fn blank_form_fails_when_fields_are_required<F: AdminForm>() {
        let has_required_text = F::FIELDS
            .iter()
            .any(|spec| spec.required && spec.kind != FieldKind::Checkbox);
        let mut blank = F::default();
        let mut value = serde_json::to_value(&blank).unwrap();
        for spec in F::FIELDS.iter().filter(|spec| spec.required) {
            if value[spec.name].is_string() {
                value[spec.name] = Value::String(String::new());
            }
        }
        blank = serde_json::from_value(value).unwrap();
        assert_eq!(blank.validate().is_err(), has_required_text);
    }

    #[test]
    fn every_schema_field_is_serialized() {
        field_names_match_serialized_keys::<HeroForm>();
        field_names_match_serialized_keys::<ServiceForm>();
        field_names_match_serialized_keys::<TestimonialForm>();
        field_names_match_serialized_keys::<CompanyForm>();
        field_names_match_serialized_keys::<CaseStudyForm>();
        field_names_match_serialized_keys::<JourneyForm>();
        field_names_match_serialized_keys::<BlogForm>();
    }

    #[test]
    fn required_fields_are_enforced_by_validation() {
        blank_form_fails_when_fields_are_required::<HeroForm>();
        blank_form_fails_when_fields_are_required::<ServiceForm>();
        blank_form_fails_when_fields_are_required::<TestimonialForm>();
        blank_form_fails_when_fields_are_required::<CompanyForm>();
        blank_form_fails_when_fields_are_required::<CaseStudyForm>();
        blank_form_fails_when_fields_are_required::<JourneyForm>();
        blank_form_fails_when_fields_are_required::<BlogForm>();
    }

    #[test]
    fn draft_view_carries_values_and_edit_target() {
        let blank = Draft::<HeroForm>::blank();
        assert!(blank.editing.is_none());
        let view = serde_json::to_value(&blank).unwrap();
        assert_eq!(view["editing"], Value::Null);
        assert_eq!(view["fields"][0]["name"], "headline");
        assert_eq!(view["fields"][0]["required"], true);
        assert_eq!(view["fields"][0]["kind"]["type"], "text");
        assert_eq!(view["fields"][2]["value"], "Get Started");
    }

    #[test]
    fn unchecked_checkbox_decodes_as_false() {
        let form: HeroForm =
            decode_form(b"headline=Hello&subheadline=World&ctaText=Go").unwrap();
        assert!(!form.is_active);
        let form: HeroForm =
            decode_form(b"headline=Hello&subheadline=World&ctaText=Go&isActive=true").unwrap();
        assert!(form.is_active);
    }
}
