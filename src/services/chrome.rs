//! Navbar and footer data shared by every public page.

use chrono::{Datelike, Utc};

use crate::domain::contact::ContactInfo;
use crate::domain::footer::{
    Footer, FooterContent, SocialLinks, default_company_links, default_service_links,
};
use crate::models::config::BrandConfig;
use crate::repository::ContentReader;

/// Fetches the footer record; failures count as "not configured".
async fn load_footer_record<R>(repo: &R) -> Option<Footer>
where
    R: ContentReader + ?Sized,
{
    match repo.footer().await {
        Ok(footer) => footer,
        Err(err) => {
            log::warn!("Using default footer: {err}");
            None
        }
    }
}

fn or_brand(value: String, brand_value: &str) -> String {
    if value.trim().is_empty() {
        brand_value.to_string()
    } else {
        value
    }
}

fn default_copyright(brand: &BrandConfig, year: i32) -> String {
    format!("© {year} {}. All rights reserved.", brand.company_name)
}

/// Footer to render: the backend record with blanks filled from the brand,
/// or the brand defaults when there is no record.
pub fn footer_content(footer: Option<Footer>, brand: &BrandConfig, year: i32) -> FooterContent {
    let Some(footer) = footer else {
        return FooterContent {
            company_name: brand.company_name.clone(),
            tagline: brand.tagline.clone(),
            logo_url: brand.logo_url.clone(),
            address: brand.address.clone(),
            email: brand.email.clone(),
            phone: brand.phone.clone(),
            social_links: SocialLinks::default(),
            company_links: default_company_links(),
            service_links: default_service_links(),
            copyright_text: default_copyright(brand, year),
        };
    };

    let copyright_text = if footer.copyright_text.trim().is_empty() {
        default_copyright(brand, year)
    } else {
        footer.copyright_text
    };
    let company_links = if footer.company_links.is_empty() {
        default_company_links()
    } else {
        footer.company_links
    };
    let service_links = if footer.service_links.is_empty() {
        default_service_links()
    } else {
        footer.service_links
    };

    FooterContent {
        company_name: or_brand(footer.company_name, &brand.company_name),
        tagline: or_brand(footer.tagline, &brand.tagline),
        logo_url: or_brand(footer.logo_url, &brand.logo_url),
        address: or_brand(footer.address, &brand.address),
        email: or_brand(footer.email, &brand.email),
        phone: or_brand(footer.phone, &brand.phone),
        social_links: footer.social_links,
        company_links,
        service_links,
        copyright_text,
    }
}

/// Loads the footer for the page chrome.
pub async fn load_footer<R>(repo: &R, brand: &BrandConfig) -> FooterContent
where
    R: ContentReader + ?Sized,
{
    let record = load_footer_record(repo).await;
    footer_content(record, brand, Utc::now().year())
}

/// Email, phone and address for the contact page, each falling back to the
/// brand on its own.
pub fn contact_info(footer: Option<&Footer>, brand: &BrandConfig) -> ContactInfo {
    let pick = |value: Option<&String>, fallback: &str| match value {
        Some(value) if !value.trim().is_empty() => value.clone(),
        _ => fallback.to_string(),
    };
    ContactInfo {
        email: pick(footer.map(|f| &f.email), &brand.email),
        phone: pick(footer.map(|f| &f.phone), &brand.phone),
        address: pick(footer.map(|f| &f.address), &brand.address),
    }
}

/// Fetches the contact details on their own, so a footer failure on the
/// same page does not blank them.
pub async fn load_contact_info<R>(repo: &R, brand: &BrandConfig) -> ContactInfo
where
    R: ContentReader + ?Sized,
{
    let record = load_footer_record(repo).await;
    contact_info(record.as_ref(), brand)
}
