//! Data module - hardcoded cohort metric tables

mod tables;

pub use tables::{CohortRevenue, Retention, Segment, COHORT_REVENUE, RETENTION, SEGMENTS};
