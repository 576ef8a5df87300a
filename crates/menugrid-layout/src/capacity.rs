//! The capacity model: content volume as a single scalar.
//!
//! Both column planning and font scaling consume **effective units**, a
//! scalar combining the product count with a weighted group count — each
//! group header eats roughly as much vertical space as a few product rows.
//!
//! Every tuning knob of the engine lives in this one table. The values came
//! out of on-device tuning against real boards, so treat them as a tuning
//! surface rather than load-bearing logic; tests pin the behavior they
//! currently produce.

/// Header weight for column fitting: a group header occupies two discrete
/// product slots in a column.
pub const COLUMN_HEADER_WEIGHT: f64 = 2.0;

/// Header weight for the font curve and the density heuristics: a group
/// header contributes one and a half products to the continuous density
/// estimate.
///
/// Distinct from [`COLUMN_HEADER_WEIGHT`] on purpose; the two call sites
/// were tuned separately and unifying them shifts both outputs.
pub const FONT_HEADER_WEIGHT: f64 = 1.5;

/// Fewest columns a board ever renders.
pub const MIN_COLUMNS: u32 = 2;

/// Most columns a board ever renders.
pub const MAX_COLUMNS: u32 = 6;

/// Column fill fraction above which the planner adds a safety column.
pub const COLUMN_FILL_LIMIT: f64 = 0.90;

/// Effective units at or below which the font curve stays at its maximum.
pub const MIN_EFFECTIVE_UNITS: f64 = 5.0;

/// Effective units at or above which the font curve bottoms out.
pub const MAX_EFFECTIVE_UNITS: f64 = 55.0;

/// Exponent of the concave font compression curve. At 0.3 the size drops
/// quickly for moderate content growth, then flattens: sparse slides never
/// get unreadably large text and dense ones still shrink aggressively.
pub const FONT_CURVE_EXPONENT: f64 = 0.3;

/// Items per column that count as a comfortably full column.
pub const IDEAL_ITEMS_PER_COLUMN: f64 = 12.0;

/// Product count above which the density compensation may fire.
pub const DENSITY_COMP_MIN_PRODUCTS: usize = 30;

/// Widest layout (in columns) the density compensation applies to.
pub const DENSITY_COMP_MAX_COLUMNS: u32 = 3;

/// Pixels of font size removed per item of per-column overload.
pub const DENSITY_COMP_RATE: f64 = 0.3;

/// Cap on the density compensation, in pixels.
pub const DENSITY_COMP_CAP: u32 = 3;

/// Column width a board column is designed around, in pixels.
pub const REFERENCE_COLUMN_WIDTH: f64 = 350.0;

/// Columns wider than `REFERENCE_COLUMN_WIDTH` times this waste space.
pub const WIDE_COLUMN_FACTOR: f64 = 1.3;

/// Columns narrower than `REFERENCE_COLUMN_WIDTH` times this cramp text.
pub const NARROW_COLUMN_FACTOR: f64 = 0.7;

/// Combine a product count and a group count into effective units.
pub fn effective_units(group_count: usize, product_count: usize, header_weight: f64) -> f64 {
    product_count as f64 + group_count as f64 * header_weight
}

/// Effective units for column fitting (discrete slot estimate).
pub fn column_units(group_count: usize, product_count: usize) -> f64 {
    effective_units(group_count, product_count, COLUMN_HEADER_WEIGHT)
}

/// Effective units for font scaling and the policy heuristics (continuous
/// density estimate).
pub fn font_units(group_count: usize, product_count: usize) -> f64 {
    effective_units(group_count, product_count, FONT_HEADER_WEIGHT)
}

/// Products that fit one column at the given column count. Capacity shrinks
/// as columns narrow.
pub fn products_per_column(columns: u32) -> f64 {
    match columns {
        2 => 12.0,
        3 => 11.0,
        4 => 9.0,
        _ => 8.0,
    }
}
