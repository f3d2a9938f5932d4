//! Cohort Visuals - Customer Cohort Revenue & Retention Chart Generator
//!
//! Three standalone renderers over small hardcoded metric tables:
//! a segment share pie chart, a dual-axis cohort revenue chart and a
//! retention/churn stacked bar chart.

pub mod charts;
pub mod data;
