//! Dashboard

pub(crate) mod errors;
pub(crate) mod handler;
pub(crate) mod models;
