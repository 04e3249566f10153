//! Reusable view components.

pub mod org_chart;
