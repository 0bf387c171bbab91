//! Extension traits

mod amount;
mod depot;
mod point_in_time;
mod result;

pub(crate) use amount::{AmountExt as _, DecimalExt as _};
pub(crate) use depot::DepotExt as _;
pub(crate) use point_in_time::PointInTimeExt as _;
pub(crate) use result::ResultExt as _;
