//! Shared types and the domain error taxonomy for the patient records service.

pub mod error;
pub mod types;
