//! DTOs shaped for the admin panel templates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::contact::Contact;
use crate::domain::types::EntityId;
use crate::forms::Draft;
use crate::forms::footer::FooterForm;
use crate::resources::Column;

/// Query parameters of `GET /admin/{resource}`.
#[derive(Debug, Default, Deserialize)]
pub struct AdminListQuery {
    /// `new` opens a blank create form.
    pub form: Option<String>,
    /// Identifier of the record to edit.
    pub edit: Option<String>,
}

/// Which form, if any, the admin list page shows.
#[derive(Debug)]
pub enum FormRequest<F> {
    Closed,
    New,
    Edit(String),
    /// A submitted draft that failed validation.
    Resubmit(Draft<F>),
}

impl<F> From<&AdminListQuery> for FormRequest<F> {
    fn from(query: &AdminListQuery) -> Self {
        match (&query.edit, query.form.as_deref()) {
            (Some(id), _) => FormRequest::Edit(id.clone()),
            (None, Some("new")) => FormRequest::New,
            _ => FormRequest::Closed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminListPage<F: crate::forms::AdminForm> {
    pub title: &'static str,
    pub slug: &'static str,
    pub noun: &'static str,
    pub columns: &'static [Column],
    /// Records serialized to JSON so templates can look columns up by key.
    pub rows: Vec<Value>,
    pub draft: Option<Draft<F>>,
    /// Problem to show above the table without leaving the page.
    #[serde(skip)]
    pub notice: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmData {
    pub title: &'static str,
    pub noun: &'static str,
    /// Form action of the confirmation.
    pub action: String,
    pub cancel_url: String,
    pub label: String,
}

/// Outcome of a confirmed or declined delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    Cancelled,
}

#[derive(Debug, Serialize)]
pub struct DashboardCount {
    pub label: &'static str,
    pub href: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub counts: Vec<DashboardCount>,
}

/// Contact request with its received date formatted for the table.
#[derive(Debug, Serialize)]
pub struct ContactRow {
    #[serde(flatten)]
    pub contact: Contact,
    pub received_on: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactsPageData {
    pub contacts: Vec<ContactRow>,
    pub statuses: Vec<&'static str>,
    #[serde(skip)]
    pub notice: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FooterEditorData {
    pub form: FooterForm,
    pub footer_id: Option<EntityId>,
    #[serde(skip)]
    pub notice: Option<String>,
}
