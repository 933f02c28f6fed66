//! Intersection module - which tokens stayed in the ranked listing on every
//! day of a date range, and which dropped out.

mod intersection_model;
mod intersection_service;
mod intersection_traits;


pub use intersection_model::IntersectionResult;
pub use intersection_service::{intersect_snapshots, IntersectionService};
pub use intersection_traits::IntersectionServiceTrait;
