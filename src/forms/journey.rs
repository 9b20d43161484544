use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::journey::Journey;
use crate::domain::types::{JourneyIcon, JourneyPosition};
use crate::forms::{AdminForm, FieldKind, FieldSpec, not_blank};

const ICONS: [&str; 7] = [
    "location", "people", "building", "diamond", "globe", "chart", "circle",
];
const POSITIONS: [&str; 2] = ["left", "right"];

/// Timeline milestone draft.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JourneyForm {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub date: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[serde(default)]
    pub icon: JourneyIcon,
    #[serde(default)]
    pub position: JourneyPosition,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for JourneyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            description: String::new(),
            icon: JourneyIcon::default(),
            position: JourneyPosition::default(),
            order: 0,
            is_active: true,
        }
    }
}

impl AdminForm for JourneyForm {
    type Entity = Journey;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("date", "Date", FieldKind::Text).required(),
        FieldSpec::new("description", "Description", FieldKind::TextArea { rows: 3 }).required(),
        FieldSpec::new("icon", "Icon", FieldKind::Select { options: &ICONS }),
        FieldSpec::new("position", "Position", FieldKind::Select { options: &POSITIONS }),
        FieldSpec::new("order", "Order", FieldKind::Number),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    fn from_entity(entry: &Journey) -> Self {
        Self {
            title: entry.title.clone(),
            date: entry.date.clone(),
            description: entry.description.clone(),
            icon: entry.icon,
            position: entry.position,
            order: entry.order,
            is_active: entry.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::decode_form;

    #[test]
    fn icon_options_cover_every_icon() {
        let names: Vec<&str> = JourneyIcon::ALL.iter().map(|icon| icon.as_str()).collect();
        assert_eq!(names, ICONS);
    }

    #[test]
    fn decodes_selects_from_form_body() {
        let form: JourneyForm = decode_form(
            b"title=Founded&date=2015&description=Garage&icon=globe&position=right&order=2",
        )
        .unwrap();
        assert_eq!(form.icon, JourneyIcon::Globe);
        assert_eq!(form.position, JourneyPosition::Right);
        assert_eq!(form.order, 2);
        assert!(!form.is_active);
    }
}
