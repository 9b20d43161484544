use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityId, null_as_default};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

impl Service {
    fn fallback(id: &'static str, title: &str, slug: &str, description: &str, icon: &str) -> Self {
        Self {
            id: EntityId::builtin(id),
            title: title.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            icon_url: String::new(),
            is_active: true,
        }
    }

    /// Services shown on the home page when the backend has none to offer.
    pub fn defaults() -> Vec<Service> {
        vec![
            Service::fallback(
                "1",
                "Custom Software",
                "custom-software",
                "Tailored software solutions to meet your unique business needs and objectives.",
                "< >",
            ),
            Service::fallback(
                "2",
                "Web App Development",
                "web-app-development",
                "Modern and responsive web applications for seamless user experiences.",
                "🌐",
            ),
            Service::fallback(
                "3",
                "Cloud Integration",
                "cloud-integration",
                "Integrate cloud services to enhance scalability, security, and efficiency.",
                "☁️",
            ),
        ]
    }
}

/// Hero picture and feature bullets for a service detail page, picked from
/// keywords in the service title.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ServiceTheme {
    pub image: &'static str,
    pub features: &'static [&'static str],
}

impl ServiceTheme {
    pub fn for_title(title: &str) -> Self {
        let title = title.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|word| title.contains(word));
        if has(&["custom", "software"]) {
            Self {
                image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=1200&h=800&fit=crop",
                features: &[
                    "Tailored solutions for your unique needs",
                    "Scalable architecture design",
                    "Agile development methodology",
                    "Quality assurance & testing",
                    "Ongoing support & maintenance",
                    "Modern technology stack",
                    "Performance optimization",
                    "Security best practices",
                ],
            }
        } else if has(&["web", "app"]) {
            Self {
                image: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=1200&h=800&fit=crop",
                features: &[
                    "Responsive design for all devices",
                    "Modern UI/UX implementation",
                    "Performance optimization",
                    "SEO-friendly architecture",
                    "Cross-browser compatibility",
                    "Progressive Web App (PWA) support",
                    "Fast loading times",
                    "Accessibility compliance",
                ],
            }
        } else if has(&["cloud"]) {
            Self {
                image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1200&h=800&fit=crop",
                features: &[
                    "Cloud migration strategy",
                    "Infrastructure optimization",
                    "Security & compliance",
                    "Cost-effective solutions",
                    "24/7 monitoring & support",
                    "Auto-scaling capabilities",
                    "Disaster recovery planning",
                    "Multi-cloud deployment",
                ],
            }
        } else if has(&["data", "analytics"]) {
            Self {
                image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=1200&h=800&fit=crop",
                features: &[
                    "Data collection & integration",
                    "Advanced analytics & insights",
                    "Real-time dashboards",
                    "Predictive modeling",
                    "Business intelligence solutions",
                    "Data visualization",
                    "Machine learning integration",
                    "Custom reporting tools",
                ],
            }
        } else if has(&["consulting", "strategy"]) {
            Self {
                image: "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?w=1200&h=800&fit=crop",
                features: &[
                    "Digital transformation strategy",
                    "Technology assessment",
                    "Process optimization",
                    "Change management",
                    "Strategic planning & roadmap",
                    "IT architecture review",
                    "Best practices implementation",
                    "Team training & support",
                ],
            }
        } else {
            Self {
                image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=1200&h=800&fit=crop",
                features: &[
                    "Expert consultation",
                    "Customized solutions",
                    "Proven methodologies",
                    "Dedicated support",
                    "Results-driven approach",
                    "Industry expertise",
                    "Scalable solutions",
                    "Long-term partnership",
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_distinct_slugs() {
        let defaults = Service::defaults();
        assert_eq!(defaults.len(), 3);
        assert_eq!(defaults[1].slug, "web-app-development");
        assert!(defaults.iter().all(|service| service.is_active));
    }

    #[test]
    fn theme_follows_title_keywords() {
        let cloud = ServiceTheme::for_title("Cloud Integration");
        assert!(cloud.features.contains(&"Multi-cloud deployment"));
        let other = ServiceTheme::for_title("Blockchain");
        assert_eq!(other.features[0], "Expert consultation");
        // "Custom" wins over later keywords.
        let custom = ServiceTheme::for_title("Custom Data Platform");
        assert_eq!(custom.features[0], "Tailored solutions for your unique needs");
    }
}
