//! Cohort Metric Tables
//! Pre-aggregated customer cohort figures, embedded as literal constants.
//!
//! Each table is built once, read by exactly one renderer and dropped at
//! process exit. Row order is meaningful: it fixes slice/bar order and the
//! palette mapping downstream.

/// One customer segment with its lifetime value contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub name: &'static str,
    pub total_ltv: f64,
}

/// Revenue figures for one acquisition-year cohort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortRevenue {
    pub year: i32,
    pub total_customers: u32,
    pub total_revenue: f64,
    /// Informational, not re-derived from total_revenue / total_customers.
    pub revenue_per_customer: f64,
}

/// Retention outcome for one acquisition-year cohort.
///
/// The fractions are pre-rounded upstream and are kept exactly as given;
/// they are not renormalized to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Retention {
    pub year: i32,
    pub active: u32,
    pub churned: u32,
    pub total_customers: u32,
    pub active_pct: f64,
    pub churned_pct: f64,
}

/// LTV contribution per customer segment, lowest tier first.
pub const SEGMENTS: [Segment; 3] = [
    Segment { name: "1-LOW", total_ltv: 4_298_367.21 },
    Segment { name: "2-MID", total_ltv: 66_367_810.48 },
    Segment { name: "3-HIGH", total_ltv: 135_606_968.77 },
];

/// Revenue by acquisition-year cohort, ascending years.
pub const COHORT_REVENUE: [CohortRevenue; 10] = [
    CohortRevenue { year: 2015, total_customers: 2825, total_revenue: 7_939_067.47, revenue_per_customer: 2810.29 },
    CohortRevenue { year: 2016, total_customers: 3397, total_revenue: 10_309_452.10, revenue_per_customer: 3034.87 },
    CohortRevenue { year: 2017, total_customers: 4068, total_revenue: 12_308_043.27, revenue_per_customer: 3025.58 },
    CohortRevenue { year: 2018, total_customers: 7446, total_revenue: 20_639_179.47, revenue_per_customer: 2771.85 },
    CohortRevenue { year: 2019, total_customers: 7755, total_revenue: 22_261_147.58, revenue_per_customer: 2870.55 },
    CohortRevenue { year: 2020, total_customers: 3031, total_revenue: 6_942_437.41, revenue_per_customer: 2290.48 },
    CohortRevenue { year: 2021, total_customers: 4663, total_revenue: 12_246_413.14, revenue_per_customer: 2626.29 },
    CohortRevenue { year: 2022, total_customers: 9010, total_revenue: 20_565_768.62, revenue_per_customer: 2282.55 },
    CohortRevenue { year: 2023, total_customers: 5890, total_revenue: 12_036_152.49, revenue_per_customer: 2043.49 },
    CohortRevenue { year: 2024, total_customers: 1402, total_revenue: 2_633_485.18, revenue_per_customer: 1878.38 },
];

/// Retention vs churn by acquisition-year cohort, ascending years.
pub const RETENTION: [Retention; 9] = [
    Retention { year: 2015, active: 237, churned: 2588, total_customers: 2825, active_pct: 0.08, churned_pct: 0.92 },
    Retention { year: 2016, active: 311, churned: 3086, total_customers: 3397, active_pct: 0.09, churned_pct: 0.91 },
    Retention { year: 2017, active: 385, churned: 3683, total_customers: 4068, active_pct: 0.09, churned_pct: 0.91 },
    Retention { year: 2018, active: 704, churned: 6742, total_customers: 7446, active_pct: 0.09, churned_pct: 0.91 },
    Retention { year: 2019, active: 687, churned: 7068, total_customers: 7755, active_pct: 0.09, churned_pct: 0.91 },
    Retention { year: 2020, active: 283, churned: 2748, total_customers: 3031, active_pct: 0.09, churned_pct: 0.91 },
    Retention { year: 2021, active: 442, churned: 4221, total_customers: 4663, active_pct: 0.09, churned_pct: 0.91 },
    Retention { year: 2022, active: 937, churned: 8073, total_customers: 9010, active_pct: 0.10, churned_pct: 0.90 },
    Retention { year: 2023, active: 455, churned: 4263, total_customers: 4718, active_pct: 0.10, churned_pct: 0.90 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_names_unique_and_values_non_negative() {
        for (i, seg) in SEGMENTS.iter().enumerate() {
            assert!(seg.total_ltv >= 0.0);
            for other in &SEGMENTS[i + 1..] {
                assert_ne!(seg.name, other.name);
            }
        }
    }

    #[test]
    fn cohort_years_strictly_increasing() {
        for pair in COHORT_REVENUE.windows(2) {
            assert!(pair[0].year < pair[1].year);
        }
        for pair in RETENTION.windows(2) {
            assert!(pair[0].year < pair[1].year);
        }
    }

    #[test]
    fn retention_fractions_kept_as_given() {
        // 2022 row: pre-rounded figures from upstream, preserved verbatim.
        let row = RETENTION[7];
        assert_eq!(row.year, 2022);
        assert_eq!(row.active_pct, 0.10);
        assert_eq!(row.churned_pct, 0.90);
    }
}
