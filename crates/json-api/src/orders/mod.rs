//! Orders

pub(crate) mod errors;
mod handlers;
pub(crate) mod items;
pub(crate) mod models;

pub(crate) use handlers::*;
