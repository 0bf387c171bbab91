//! Adisyon
//!
//! Adisyon is the order-keeping core of a café point-of-sale: a product catalog, running
//! tabs (orders) whose totals stay consistent under edits, and the monthly reporting window.

pub mod limits;
pub mod orders;
pub mod products;
pub mod reporting;
pub mod uuids;
