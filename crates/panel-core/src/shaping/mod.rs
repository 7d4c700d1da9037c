//! Response Shaper: post-processing of backend payloads before rendering.
//!
//! Each transformation is a pure function over already-decoded records; views
//! pick the subset they need.

mod diff;
mod pagination;
mod services;
mod units;

pub use diff::highlight_diff;
pub use pagination::{PAGE_SIZE, Page, Paginator, PaginatorInfo};
pub use services::flatten_service_instances;
pub use units::merge_containers;
