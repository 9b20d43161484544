//! Generic create, update and delete flow shared by every admin resource.

use futures_util::future::join5;
use validator::Validate;

use crate::domain::types::EntityId;
use crate::dto::admin::{
    AdminListPage, DashboardCount, DashboardData, DeleteConfirmData, DeleteOutcome, FormRequest,
};
use crate::forms::Draft;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ResourceReader, ResourceWriter};
use crate::resources::{
    AdminResource, CaseStudies, Companies, Heroes, Record, Resource, Services, Testimonials,
};
use crate::services::{ServiceError, ServiceResult};

/// Lists a resource and opens the requested form.
///
/// A failed listing is reported through `notice` so the page still renders;
/// only an expired admin session is an error.
pub async fn load_resource_page<R, Repo>(
    repo: &Repo,
    request: FormRequest<R::Form>,
) -> ServiceResult<AdminListPage<R::Form>>
where
    R: AdminResource,
    Repo: ResourceReader + ?Sized,
{
    let mut notice = None;
    let records = match repo.list::<R>().await {
        Ok(records) => records,
        Err(RepositoryError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to list {}: {err}", R::SLUG);
            notice = Some(format!("Failed to fetch {}", R::TITLE.to_lowercase()));
            Vec::new()
        }
    };

    let draft = match request {
        FormRequest::Closed => None,
        FormRequest::New => Some(Draft::blank()),
        FormRequest::Edit(id) => match records.iter().find(|record| record.id().as_str() == id) {
            Some(record) => Some(Draft::edit(record.id().clone(), record)),
            None => {
                notice.get_or_insert_with(|| format!("{} not found", R::NOUN));
                None
            }
        },
        FormRequest::Resubmit(draft) => Some(draft),
    };

    let rows = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| ServiceError::Backend(err.to_string()))?;

    Ok(AdminListPage {
        title: R::TITLE,
        slug: R::SLUG,
        noun: R::NOUN,
        columns: R::COLUMNS,
        rows,
        draft,
        notice,
    })
}

/// Validates the draft, then creates a record or updates record `id`.
/// Returns the success notification.
pub async fn save_resource<R, Repo>(
    repo: &Repo,
    id: Option<&str>,
    form: R::Form,
) -> ServiceResult<String>
where
    R: AdminResource,
    Repo: ResourceWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::warn!("Invalid {} form: {err}", R::SLUG);
        return Err(ServiceError::Form(
            "Please fill in all required fields".to_string(),
        ));
    }

    let result = match id {
        Some(id) => {
            let id = EntityId::new(id)?;
            repo.update::<R, _>(&id, &form).await.map(|_| "updated")
        }
        None => repo.create::<R, _>(&form).await.map(|_| "created"),
    };

    let action = result.map_err(|err| ServiceError::backend(err, "Operation failed"))?;
    Ok(format!("{} {action} successfully", R::NOUN))
}

/// Finds the record to delete so the confirmation can name it.
pub async fn load_delete_confirmation<R, Repo>(
    repo: &Repo,
    id: &str,
    list_url: &str,
    title: &'static str,
) -> ServiceResult<DeleteConfirmData>
where
    R: Resource,
    Repo: ResourceReader + ?Sized,
{
    let id = EntityId::new(id)?;
    let records = repo.list::<R>().await?;
    let record = records
        .iter()
        .find(|record| record.id() == &id)
        .ok_or(ServiceError::NotFound)?;

    Ok(DeleteConfirmData {
        title,
        noun: R::NOUN,
        action: format!("{list_url}/{id}/delete"),
        cancel_url: list_url.to_string(),
        label: record.label().to_string(),
    })
}

/// Deletes record `id` when the admin confirmed; a declined confirmation
/// sends nothing to the backend.
pub async fn delete_resource<R, Repo>(
    repo: &Repo,
    id: &str,
    confirmed: bool,
) -> ServiceResult<DeleteOutcome>
where
    R: Resource,
    Repo: ResourceWriter + ?Sized,
{
    if !confirmed {
        return Ok(DeleteOutcome::Cancelled);
    }

    let id = EntityId::new(id)?;
    repo.delete::<R>(&id)
        .await
        .map_err(|err| ServiceError::backend(err, "Delete failed"))?;

    Ok(DeleteOutcome::Deleted(format!("{} deleted successfully", R::NOUN)))
}

fn count<T>(
    label: &'static str,
    href: &'static str,
    result: RepositoryResult<Vec<T>>,
) -> ServiceResult<DashboardCount> {
    let count = match result {
        Ok(records) => records.len(),
        Err(RepositoryError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to count {label}: {err}");
            0
        }
    };
    Ok(DashboardCount { label, href, count })
}

/// Record counts shown on the admin dashboard.
pub async fn load_dashboard<Repo>(repo: &Repo) -> ServiceResult<DashboardData>
where
    Repo: ResourceReader + ?Sized,
{
    let (heroes, services, testimonials, companies, case_studies) = join5(
        repo.list::<Heroes>(),
        repo.list::<Services>(),
        repo.list::<Testimonials>(),
        repo.list::<Companies>(),
        repo.list::<CaseStudies>(),
    )
    .await;

    Ok(DashboardData {
        counts: vec![
            count("Hero Sections", "/admin/hero", heroes)?,
            count("Services", "/admin/services", services)?,
            count("Testimonials", "/admin/testimonials", testimonials)?,
            count("Companies", "/admin/companies", companies)?,
            count("Case Studies", "/admin/case-studies", case_studies)?,
        ],
    })
}
