//! Layout policy: overrides and nudges on the planned column count.
//!
//! The policy runs after the planner. A manual override, when enabled,
//! replaces every heuristic with a fixed adjustment. Otherwise each enabled
//! auto-optimization independently proposes a nudge; the proposals are
//! summed and applied under a single final clamp.

use menugrid_core::ColumnControlConfig;
use smallvec::SmallVec;

use crate::capacity::{
    font_units, IDEAL_ITEMS_PER_COLUMN, MAX_COLUMNS, MIN_COLUMNS, NARROW_COLUMN_FACTOR,
    REFERENCE_COLUMN_WIDTH, WIDE_COLUMN_FACTOR,
};

/// Outcome of the policy pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDecision {
    /// Summed adjustment that was applied (the manual adjustment when the
    /// override is enabled).
    pub adjustment: i32,
    /// Final column count, clamped to the engine bounds.
    pub columns: u32,
}

/// Apply the slide's column control to an auto-computed column count.
pub fn apply_policy(
    auto_columns: u32,
    group_count: usize,
    product_count: usize,
    control: &ColumnControlConfig,
    viewport_width: f64,
) -> PolicyDecision {
    if control.manual_override.enabled {
        let adjustment = control.manual_override.adjustment;
        return PolicyDecision {
            adjustment,
            columns: clamp_columns(auto_columns as i64 + adjustment as i64),
        };
    }

    let opts = &control.auto_optimizations;
    let units = font_units(group_count, product_count);
    let mut proposals: SmallVec<[i32; 3]> = SmallVec::new();

    if opts.prevent_empty_columns {
        if let Some(nudge) = prevent_empty_columns(units, auto_columns) {
            proposals.push(nudge);
        }
    }
    if opts.prevent_overflow {
        if let Some(nudge) = prevent_overflow(units, auto_columns, opts.density_threshold) {
            proposals.push(nudge);
        }
    }
    if opts.optimize_for_full_width {
        if let Some(nudge) = optimize_for_full_width(auto_columns, viewport_width) {
            proposals.push(nudge);
        }
    }

    let adjustment: i32 = proposals.iter().sum();
    PolicyDecision {
        adjustment,
        columns: clamp_columns(auto_columns as i64 + adjustment as i64),
    }
}

/// Drop a column when the last one would be nearly empty: pack the units
/// into columns of `ceil(units / columns)` items and look at the leftover.
fn prevent_empty_columns(units: f64, columns: u32) -> Option<i32> {
    let per_column = (units / columns as f64).ceil();
    if per_column <= 0.0 {
        return None;
    }
    let remainder = units % per_column;
    (remainder > 1e-9 && remainder < 2.0).then_some(-1)
}

/// Add a column when per-column density exceeds the configured threshold.
fn prevent_overflow(units: f64, columns: u32, density_threshold: f64) -> Option<i32> {
    let density = units / columns as f64 / IDEAL_ITEMS_PER_COLUMN;
    (density > density_threshold).then_some(1)
}

/// Nudge toward columns near their reference width on this screen: split
/// overly wide columns, merge overly narrow ones.
fn optimize_for_full_width(columns: u32, viewport_width: f64) -> Option<i32> {
    let column_width = viewport_width / columns as f64;
    if column_width > REFERENCE_COLUMN_WIDTH * WIDE_COLUMN_FACTOR && columns < MAX_COLUMNS {
        Some(1)
    } else if column_width < REFERENCE_COLUMN_WIDTH * NARROW_COLUMN_FACTOR && columns > MIN_COLUMNS
    {
        Some(-1)
    } else {
        None
    }
}

fn clamp_columns(columns: i64) -> u32 {
    columns.clamp(MIN_COLUMNS as i64, MAX_COLUMNS as i64) as u32
}
