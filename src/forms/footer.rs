use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::footer::{Footer, FooterContent, FooterLink, SocialLinks};
use crate::forms::{not_blank, optional_url};

fn optional_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

/// Footer editor. Link lists arrive as parallel `label`/`url` inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FooterForm {
    #[validate(custom(function = "not_blank"))]
    pub company_name: String,
    #[validate(custom(function = "not_blank"))]
    pub tagline: String,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub logo_url: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    #[validate(custom(function = "optional_email"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub company_link_label: Vec<String>,
    #[serde(default)]
    pub company_link_url: Vec<String>,
    #[serde(default)]
    pub service_link_label: Vec<String>,
    #[serde(default)]
    pub service_link_url: Vec<String>,
    #[serde(default)]
    pub copyright_text: String,
}

/// Pairs labels with urls, dropping rows left entirely blank.
fn zip_links(labels: &[String], urls: &[String]) -> Vec<FooterLink> {
    labels
        .iter()
        .zip(urls.iter())
        .filter(|(label, url)| !label.trim().is_empty() || !url.trim().is_empty())
        .map(|(label, url)| FooterLink::new(label.trim(), url.trim()))
        .collect()
}

impl FooterForm {
    pub fn from_footer(footer: &Footer) -> Self {
        let (company_link_label, company_link_url) = footer
            .company_links
            .iter()
            .map(|link| (link.label.clone(), link.url.clone()))
            .unzip();
        let (service_link_label, service_link_url) = footer
            .service_links
            .iter()
            .map(|link| (link.label.clone(), link.url.clone()))
            .unzip();
        Self {
            company_name: footer.company_name.clone(),
            tagline: footer.tagline.clone(),
            logo_url: footer.logo_url.clone(),
            address: footer.address.clone(),
            email: footer.email.clone(),
            phone: footer.phone.clone(),
            facebook: footer.social_links.facebook.clone(),
            twitter: footer.social_links.twitter.clone(),
            github: footer.social_links.github.clone(),
            linkedin: footer.social_links.linkedin.clone(),
            company_link_label,
            company_link_url,
            service_link_label,
            service_link_url,
            copyright_text: footer.copyright_text.clone(),
        }
    }

    /// Payload sent to the backend.
    pub fn to_content(&self) -> FooterContent {
        FooterContent {
            company_name: self.company_name.trim().to_string(),
            tagline: self.tagline.trim().to_string(),
            logo_url: self.logo_url.trim().to_string(),
            address: self.address.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            social_links: SocialLinks {
                facebook: self.facebook.trim().to_string(),
                twitter: self.twitter.trim().to_string(),
                github: self.github.trim().to_string(),
                linkedin: self.linkedin.trim().to_string(),
            },
            company_links: zip_links(&self.company_link_label, &self.company_link_url),
            service_links: zip_links(&self.service_link_label, &self.service_link_url),
            copyright_text: self.copyright_text.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::decode_form;

    #[test]
    fn repeated_link_inputs_become_link_lists() {
        let form: FooterForm = decode_form(
            b"companyName=Acme&tagline=Build&email=hi%40acme.test\
              &companyLinkLabel=About&companyLinkUrl=%2Fabout\
              &companyLinkLabel=&companyLinkUrl=\
              &companyLinkLabel=Work&companyLinkUrl=%2Four-work",
        )
        .unwrap();
        assert!(form.validate().is_ok());
        let content = form.to_content();
        assert_eq!(
            content.company_links,
            vec![
                FooterLink::new("About", "/about"),
                FooterLink::new("Work", "/our-work")
            ]
        );
        assert!(content.service_links.is_empty());
    }

    #[test]
    fn rejects_malformed_email() {
        let form = FooterForm {
            company_name: "Acme".into(),
            tagline: "Build".into(),
            email: "nope".into(),
            ..FooterForm::default()
        };
        assert!(form.validate().is_err());
    }
}
