use serde::Serialize;

use crate::domain::company::Company;
use crate::domain::hero::HeroContent;
use crate::domain::service::Service;
use crate::domain::testimonial::Testimonial;

/// Everything the home page renders.
#[derive(Debug, Clone, Serialize)]
pub struct HomePageData {
    pub hero: HeroContent,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub companies: Vec<Company>,
    /// Every section came from the backend, none from fallbacks.
    #[serde(skip)]
    pub complete: bool,
}
