//! Column planning: how many columns a slide's content needs.
//!
//! A greedy, table-driven bin estimate rather than an exact optimum — TV
//! panels cannot reflow or scroll, so predictability beats precision. The
//! planner works in three steps: a baseline from the group count alone, a
//! demand estimate from effective units against per-column capacity, and a
//! safety column when the result would run more than 90% full.

use menugrid_core::ColumnControlConfig;

use crate::capacity::{
    column_units, products_per_column, COLUMN_FILL_LIMIT, MAX_COLUMNS, MIN_COLUMNS,
};
use crate::policy::{apply_policy, PolicyDecision};

/// The planner's intermediate numbers, exposed for tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPlan {
    /// Baseline column count from the group count alone.
    pub baseline: u32,
    /// Columns demanded by effective units against capacity.
    pub demand: u32,
    /// Auto-computed count after the safety margin, clamped to bounds.
    pub auto: u32,
    /// Policy outcome applied to `auto`.
    pub policy: PolicyDecision,
}

impl ColumnPlan {
    /// Final column count.
    pub fn columns(&self) -> u32 {
        self.policy.columns
    }
}

/// Baseline column count from the group count alone.
fn baseline_columns(group_count: usize) -> u32 {
    match group_count {
        0..=2 => 2,
        3..=4 => 3,
        5..=6 => 4,
        7..=9 => 5,
        _ => 6,
    }
}

/// Plan the column count for a slide's content.
pub fn plan_columns(
    group_count: usize,
    product_count: usize,
    control: &ColumnControlConfig,
    viewport_width: f64,
) -> ColumnPlan {
    let units = column_units(group_count, product_count);

    let baseline = baseline_columns(group_count);
    let capacity = products_per_column(baseline);
    let demand = (units / capacity).ceil() as u32;

    let mut auto = baseline.max(demand);

    // A column running over 90% of capacity will clip on real panels once
    // headers wrap; spend one more column instead.
    if units > COLUMN_FILL_LIMIT * auto as f64 * capacity {
        auto += 1;
    }

    let auto = auto.clamp(MIN_COLUMNS, MAX_COLUMNS);
    let policy = apply_policy(auto, group_count, product_count, control, viewport_width);

    ColumnPlan {
        baseline,
        demand,
        auto,
        policy,
    }
}
