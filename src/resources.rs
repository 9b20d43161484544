//! Backend collections and the schema driving the generic admin pages.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::blog::Blog;
use crate::domain::case_study::CaseStudy;
use crate::domain::company::Company;
use crate::domain::contact::Contact;
use crate::domain::hero::Hero;
use crate::domain::journey::Journey;
use crate::domain::service::Service;
use crate::domain::testimonial::Testimonial;
use crate::domain::types::EntityId;
use crate::forms::AdminForm;
use crate::forms::blog::BlogForm;
use crate::forms::case_study::CaseStudyForm;
use crate::forms::company::CompanyForm;
use crate::forms::hero::HeroForm;
use crate::forms::journey::JourneyForm;
use crate::forms::service::ServiceForm;
use crate::forms::testimonial::TestimonialForm;

/// A backend record with an identifier and a human-readable label.
pub trait Record {
    fn id(&self) -> &EntityId;

    /// Short text naming the record in confirmations.
    fn label(&self) -> &str;
}

macro_rules! record {
    ($($entity:ty => $label:ident),* $(,)?) => {
        $(
            impl Record for $entity {
                fn id(&self) -> &EntityId {
                    &self.id
                }

                fn label(&self) -> &str {
                    &self.$label
                }
            }
        )*
    };
}

record!(
    Hero => headline,
    Service => title,
    Testimonial => author_name,
    Company => name,
    CaseStudy => title,
    Journey => title,
    Blog => title,
    Contact => full_name,
);

/// A collection exposed by the backend under `PATH`.
pub trait Resource {
    /// Collection path, e.g. `/services`.
    const PATH: &'static str;
    /// Singular noun used in notifications.
    const NOUN: &'static str;

    type Entity: DeserializeOwned + Serialize + Record + Clone;

    fn item_path(id: &EntityId) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

/// How a list column renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnDisplay {
    Text,
    /// Boolean rendered as one of two badges.
    Flag {
        on: &'static str,
        off: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Serialized entity attribute.
    pub key: &'static str,
    pub label: &'static str,
    pub display: ColumnDisplay,
}

impl Column {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            display: ColumnDisplay::Text,
        }
    }

    pub const fn flag(
        key: &'static str,
        label: &'static str,
        on: &'static str,
        off: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            display: ColumnDisplay::Flag { on, off },
        }
    }
}

const ACTIVE: Column = Column::flag("isActive", "Status", "Active", "Inactive");

/// A collection managed through the generic admin pages at `/admin/{SLUG}`.
pub trait AdminResource: Resource {
    const SLUG: &'static str;
    /// Page heading.
    const TITLE: &'static str;
    const COLUMNS: &'static [Column];

    type Form: AdminForm<Entity = Self::Entity>;
}

pub struct Heroes;
pub struct Services;
pub struct Testimonials;
pub struct Companies;
pub struct CaseStudies;
pub struct JourneyEntries;
pub struct Blogs;
pub struct Contacts;

impl Resource for Heroes {
    const PATH: &'static str = "/hero";
    const NOUN: &'static str = "Hero";
    type Entity = Hero;
}

impl AdminResource for Heroes {
    const SLUG: &'static str = "hero";
    const TITLE: &'static str = "Hero Section";
    const COLUMNS: &'static [Column] = &[
        Column::text("headline", "Headline"),
        Column::text("ctaText", "Button"),
        ACTIVE,
    ];
    type Form = HeroForm;
}

impl Resource for Services {
    const PATH: &'static str = "/services";
    const NOUN: &'static str = "Service";
    type Entity = Service;
}

impl AdminResource for Services {
    const SLUG: &'static str = "services";
    const TITLE: &'static str = "Services";
    const COLUMNS: &'static [Column] = &[
        Column::text("title", "Title"),
        Column::text("slug", "Slug"),
        ACTIVE,
    ];
    type Form = ServiceForm;
}

impl Resource for Testimonials {
    const PATH: &'static str = "/testimonials";
    const NOUN: &'static str = "Testimonial";
    type Entity = Testimonial;
}

impl AdminResource for Testimonials {
    const SLUG: &'static str = "testimonials";
    const TITLE: &'static str = "Testimonials";
    const COLUMNS: &'static [Column] = &[
        Column::text("authorName", "Author"),
        Column::text("authorCompany", "Company"),
        Column::text("order", "Order"),
        ACTIVE,
    ];
    type Form = TestimonialForm;
}

impl Resource for Companies {
    const PATH: &'static str = "/companies";
    const NOUN: &'static str = "Company";
    type Entity = Company;
}

impl AdminResource for Companies {
    const SLUG: &'static str = "companies";
    const TITLE: &'static str = "Companies";
    const COLUMNS: &'static [Column] = &[
        Column::text("name", "Name"),
        Column::text("website", "Website"),
        Column::text("order", "Order"),
        ACTIVE,
    ];
    type Form = CompanyForm;
}

impl Resource for CaseStudies {
    const PATH: &'static str = "/case-studies";
    const NOUN: &'static str = "Case study";
    type Entity = CaseStudy;
}

impl AdminResource for CaseStudies {
    const SLUG: &'static str = "case-studies";
    const TITLE: &'static str = "Case Studies";
    const COLUMNS: &'static [Column] = &[
        Column::text("title", "Title"),
        Column::text("clientName", "Client"),
        Column::text("industry", "Industry"),
        Column::flag("featured", "Featured", "Featured", "No"),
        ACTIVE,
    ];
    type Form = CaseStudyForm;
}

impl Resource for JourneyEntries {
    const PATH: &'static str = "/journey";
    const NOUN: &'static str = "Journey entry";
    type Entity = Journey;
}

impl AdminResource for JourneyEntries {
    const SLUG: &'static str = "journey";
    const TITLE: &'static str = "Our Journey";
    const COLUMNS: &'static [Column] = &[
        Column::text("date", "Date"),
        Column::text("title", "Title"),
        Column::text("position", "Position"),
        Column::text("order", "Order"),
        ACTIVE,
    ];
    type Form = JourneyForm;
}

impl Resource for Blogs {
    const PATH: &'static str = "/blog";
    const NOUN: &'static str = "Blog post";
    type Entity = Blog;
}

impl AdminResource for Blogs {
    const SLUG: &'static str = "blog";
    const TITLE: &'static str = "Blog Posts";
    const COLUMNS: &'static [Column] = &[
        Column::text("title", "Title"),
        Column::text("category", "Category"),
        Column::text("authorName", "Author"),
        Column::flag("published", "Published", "Published", "Draft"),
        Column::flag("featured", "Featured", "Featured", "No"),
    ];
    type Form = BlogForm;
}

impl Resource for Contacts {
    const PATH: &'static str = "/contact";
    const NOUN: &'static str = "Contact";
    type Entity = Contact;
}
