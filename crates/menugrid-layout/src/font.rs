//! Font scaling: text size from content volume and column count.
//!
//! Auto-scaling maps effective units through a concave compression curve
//! onto the configured size range, then charges a fixed penalty per column
//! (narrower columns need smaller text) and a density compensation for few
//! wide columns that still end up vertically overloaded. Every path clamps
//! to the slide's bounds and the global hard bound, so a malformed
//! configuration can never push text off the readable range.

use menugrid_core::{FontScalingConfig, GLOBAL_FONT_MAX, GLOBAL_FONT_MIN};

use crate::capacity::{
    font_units, DENSITY_COMP_CAP, DENSITY_COMP_MAX_COLUMNS, DENSITY_COMP_MIN_PRODUCTS,
    DENSITY_COMP_RATE, FONT_CURVE_EXPONENT, IDEAL_ITEMS_PER_COLUMN, MAX_EFFECTIVE_UNITS,
    MIN_EFFECTIVE_UNITS,
};

/// The scaler's intermediate numbers, exposed for tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontDecision {
    /// Interpolated size before penalties, in pixels (equals the final
    /// size when a manual size is in force).
    pub base: f64,
    /// Pixels removed for the column count.
    pub column_penalty: u32,
    /// Pixels removed by the density compensation.
    pub density_penalty: u32,
    /// Final rounded, clamped size in pixels.
    pub size_px: u32,
}

/// Compute the font size for a slide.
pub fn scale_font(
    group_count: usize,
    product_count: usize,
    column_count: u32,
    config: &FontScalingConfig,
) -> FontDecision {
    let (min, max) = slide_bounds(config);

    if !config.auto_scale {
        if let Some(manual) = config.manual_font_size {
            let size = manual.clamp(min, max);
            return FontDecision {
                base: size as f64,
                column_penalty: 0,
                density_penalty: 0,
                size_px: size,
            };
        }
    }

    let units = font_units(group_count, product_count);
    let clamped = units.clamp(MIN_EFFECTIVE_UNITS, MAX_EFFECTIVE_UNITS);
    let normalized = (clamped - MIN_EFFECTIVE_UNITS) / (MAX_EFFECTIVE_UNITS - MIN_EFFECTIVE_UNITS);

    let scale_factor = 1.0 - normalized.powf(FONT_CURVE_EXPONENT);
    let base = min as f64 + (max - min) as f64 * scale_factor;

    let column_penalty = column_penalty(column_count);
    let density_penalty = density_penalty(product_count, column_count);

    let size = base - column_penalty as f64 - density_penalty as f64;
    let size_px = (size.round() as i64).clamp(min as i64, max as i64) as u32;

    FontDecision {
        base,
        column_penalty,
        density_penalty,
        size_px,
    }
}

/// Pixels removed per column count; narrower columns need smaller text.
fn column_penalty(column_count: u32) -> u32 {
    match column_count {
        0..=2 => 0,
        3 => 1,
        4 => 2,
        5 => 3,
        _ => 4,
    }
}

/// Extra shrink when few wide columns carry so many products that they
/// overload vertically despite the capacity tables.
fn density_penalty(product_count: usize, column_count: u32) -> u32 {
    if column_count > DENSITY_COMP_MAX_COLUMNS || product_count <= DENSITY_COMP_MIN_PRODUCTS {
        return 0;
    }
    let per_column = product_count as f64 / column_count as f64;
    if per_column <= IDEAL_ITEMS_PER_COLUMN {
        return 0;
    }
    let comp = ((per_column - IDEAL_ITEMS_PER_COLUMN) * DENSITY_COMP_RATE).floor() as u32;
    comp.min(DENSITY_COMP_CAP)
}

/// Slide bounds clamped into the global hard bound, tolerating malformed
/// configuration (inverted or out-of-range values).
fn slide_bounds(config: &FontScalingConfig) -> (u32, u32) {
    let min = config.min_font_size.clamp(GLOBAL_FONT_MIN, GLOBAL_FONT_MAX);
    let max = config.max_font_size.clamp(GLOBAL_FONT_MIN, GLOBAL_FONT_MAX);
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_config(min: u32, max: u32) -> FontScalingConfig {
        FontScalingConfig {
            auto_scale: true,
            manual_font_size: None,
            min_font_size: min,
            max_font_size: max,
        }
    }

    #[test]
    fn test_manual_size_wins() {
        let config = FontScalingConfig {
            auto_scale: false,
            manual_font_size: Some(30),
            min_font_size: 12,
            max_font_size: 48,
        };
        assert_eq!(scale_font(5, 40, 4, &config).size_px, 30);
    }

    #[test]
    fn test_manual_size_clamped_to_slide_bounds() {
        let config = FontScalingConfig {
            auto_scale: false,
            manual_font_size: Some(44),
            min_font_size: 16,
            max_font_size: 36,
        };
        assert_eq!(scale_font(5, 40, 4, &config).size_px, 36);
    }

    #[test]
    fn test_missing_manual_size_falls_back_to_auto() {
        let config = FontScalingConfig {
            auto_scale: false,
            manual_font_size: None,
            ..auto_config(16, 36)
        };
        let decision = scale_font(2, 10, 2, &config);
        assert!(decision.size_px >= 16 && decision.size_px <= 36);
    }

    #[test]
    fn test_sparse_slide_gets_max() {
        // 1 group, 3 products = 4.5 units, below the curve floor of 5.
        let decision = scale_font(1, 3, 2, &auto_config(16, 36));
        assert_eq!(decision.size_px, 36);
    }

    #[test]
    fn test_dense_slide_gets_min() {
        // 10 groups, 80 products saturates the curve; penalties only push
        // further into the clamp.
        let decision = scale_font(10, 80, 6, &auto_config(16, 36));
        assert_eq!(decision.size_px, 16);
    }

    #[test]
    fn test_curve_drops_fast_then_flattens() {
        let config = auto_config(12, 48);
        let sparse = scale_font(2, 5, 2, &config).size_px;
        let moderate = scale_font(2, 20, 2, &config).size_px;
        let dense = scale_font(2, 40, 2, &config).size_px;

        // Early growth costs much more than late growth.
        assert!(sparse as i64 - moderate as i64 > moderate as i64 - dense as i64);
    }

    #[test]
    fn test_column_penalty_table() {
        assert_eq!(column_penalty(2), 0);
        assert_eq!(column_penalty(3), 1);
        assert_eq!(column_penalty(4), 2);
        assert_eq!(column_penalty(5), 3);
        assert_eq!(column_penalty(6), 4);
        assert_eq!(column_penalty(7), 4);
    }

    #[test]
    fn test_more_columns_means_smaller_text() {
        let config = auto_config(12, 48);
        let two = scale_font(3, 20, 2, &config).size_px;
        let five = scale_font(3, 20, 5, &config).size_px;
        assert_eq!(two - five, 3);
    }

    #[test]
    fn test_density_compensation() {
        // 40 products in 3 columns: 13.3 per column, floor(1.3 * 0.3) = 0.
        assert_eq!(density_penalty(40, 3), 0);
        // 50 products in 3 columns: 16.7 per column, floor(4.7 * 0.3) = 1.
        assert_eq!(density_penalty(50, 3), 1);
        // 60 products in 2 columns: 30 per column, capped at 3.
        assert_eq!(density_penalty(60, 2), 3);
        // Wide layouts and small boards are exempt.
        assert_eq!(density_penalty(50, 4), 0);
        assert_eq!(density_penalty(30, 2), 0);
    }

    #[test]
    fn test_result_always_within_slide_bounds() {
        let config = auto_config(16, 36);
        for groups in 0..=20 {
            for products in 0..=200 {
                for columns in 2..=6 {
                    let size = scale_font(groups, products, columns, &config).size_px;
                    assert!((16..=36).contains(&size));
                }
            }
        }
    }

    #[test]
    fn test_malformed_bounds_fall_back_to_global_clamp() {
        // Inverted and out-of-range bounds still produce a readable size.
        let config = FontScalingConfig {
            auto_scale: true,
            manual_font_size: None,
            min_font_size: 90,
            max_font_size: 4,
        };
        let size = scale_font(2, 10, 2, &config).size_px;
        assert!((GLOBAL_FONT_MIN..=GLOBAL_FONT_MAX).contains(&size));
    }
}
