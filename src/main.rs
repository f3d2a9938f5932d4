//! Cohort Visuals - Customer Cohort Revenue & Retention Chart Generator
//!
//! Renders the three cohort charts in sequence. Only the retention chart
//! persists to disk (under `visuals/`); the revenue chart goes to the
//! platform viewer and the segment pie stays in memory.

use std::path::Path;

use anyhow::Result;
use cohort_visuals::charts::{RetentionChart, RevenueChart, SegmentShareChart};
use cohort_visuals::data;

fn main() -> Result<()> {
    // The segment pie is built but neither shown nor saved, matching the
    // upstream report it reproduces.
    let _figure = SegmentShareChart::render_png_bytes(&data::SEGMENTS)?;

    RevenueChart::show(&data::COHORT_REVENUE)?;

    RetentionChart::save(&data::RETENTION, Path::new("visuals"))?;

    Ok(())
}
