//! Content records mirrored from the backend.

pub mod blog;
pub mod case_study;
pub mod company;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod journey;
pub mod page;
pub mod service;
pub mod testimonial;
pub mod types;
