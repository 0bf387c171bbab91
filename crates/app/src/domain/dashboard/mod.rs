//! Dashboard

pub mod errors;
mod records;
mod repository;
pub mod service;

pub use errors::DashboardServiceError;
pub use service::*;
