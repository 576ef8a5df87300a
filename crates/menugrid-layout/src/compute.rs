//! Layout computation for a menu slide.
//!
//! The entry point wires the stages together: content selection, the
//! capacity model, column planning (with policy), and font scaling. The
//! computation is synchronous, side-effect-free, and infallible — every
//! arithmetic path clamps to its declared bounds — so it is safe to run on
//! every configuration change or resize event.

use menugrid_core::{MenuSlide, MenuTemplateConfig, ProductGroup};

use crate::capacity::{column_units, font_units};
use crate::columns::plan_columns;
use crate::font::scale_font;
use crate::observe::{LayoutObserver, NoopObserver, StageTrace};
use crate::select::{select_content, total_products};

/// Options for layout computation.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Width of the target screen in pixels.
    pub viewport_width: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        // A landscape 1080p panel, the common signage TV.
        Self {
            viewport_width: 1920.0,
        }
    }
}

/// Computed layout for one slide. Created fresh per invocation and owned by
/// the caller; the rendering layer projects it into style variables.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Number of display columns, always within `[2, 6]`.
    pub column_count: u32,
    /// Font size for group headers and items, within the slide's bounds.
    pub font_size_px: u32,
    /// CSS grid template driving the board's column tracks.
    pub grid_template_columns: String,
}

impl LayoutResult {
    /// CSS custom-property pairs consumed by the rendering layer.
    pub fn style_vars(&self) -> [(String, String); 2] {
        [
            ("--menu-columns".to_string(), self.column_count.to_string()),
            (
                "--menu-font-size".to_string(),
                format!("{}px", self.font_size_px),
            ),
        ]
    }
}

/// Compute the layout for one slide of a menu template.
pub fn compute_layout(
    groups: &[ProductGroup],
    slide: &MenuSlide,
    config: &MenuTemplateConfig,
    options: &LayoutOptions,
) -> LayoutResult {
    compute_layout_traced(groups, slide, config, options, &mut NoopObserver)
}

/// Compute the layout for one slide, reporting each stage to an observer.
pub fn compute_layout_traced(
    groups: &[ProductGroup],
    slide: &MenuSlide,
    config: &MenuTemplateConfig,
    options: &LayoutOptions,
    observer: &mut dyn LayoutObserver,
) -> LayoutResult {
    let selected = select_content(groups, slide);
    let group_count = selected.len();
    let product_count = total_products(&selected);
    log::debug!(
        "slide {}: selected {} groups, {} products",
        slide.slide_id,
        group_count,
        product_count
    );
    observer.record(StageTrace::ContentSelected {
        groups: group_count,
        products: product_count,
    });

    observer.record(StageTrace::EffectiveUnits {
        column_units: column_units(group_count, product_count),
        font_units: font_units(group_count, product_count),
    });

    let plan = plan_columns(
        group_count,
        product_count,
        &config.column_control,
        options.viewport_width,
    );
    observer.record(StageTrace::ColumnsPlanned {
        baseline: plan.baseline,
        demand: plan.demand,
        auto: plan.auto,
    });
    observer.record(StageTrace::PolicyApplied {
        auto: plan.auto,
        adjustment: plan.policy.adjustment,
        columns: plan.columns(),
    });

    let columns = plan.columns();
    let font = scale_font(group_count, product_count, columns, &config.font_scaling);
    observer.record(StageTrace::FontScaled {
        base: font.base,
        column_penalty: font.column_penalty,
        density_penalty: font.density_penalty,
        size_px: font.size_px,
    });
    log::debug!(
        "slide {}: {} columns at {}px",
        slide.slide_id,
        columns,
        font.size_px
    );

    LayoutResult {
        column_count: columns,
        font_size_px: font.size_px,
        grid_template_columns: format!("repeat({columns}, 1fr)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::TraceRecorder;
    use menugrid_core::{
        AutoOptimizations, ColumnControlConfig, FontScalingConfig, GroupSelection, ManualOverride,
        Product, ProductId,
    };

    fn catalog(groups: usize, products_per_group: usize) -> Vec<ProductGroup> {
        (0..groups)
            .map(|g| {
                let products = (0..products_per_group)
                    .map(|p| Product::new(format!("g{g}p{p}"), format!("Product {g}-{p}")))
                    .collect();
                ProductGroup::new(format!("g{g}"), format!("Group {g}"), products)
            })
            .collect()
    }

    fn slide_selecting_all(groups: &[ProductGroup]) -> MenuSlide {
        let selections = groups
            .iter()
            .map(|g| {
                GroupSelection::new(
                    g.id.0.clone(),
                    g.products.iter().map(|p| p.id.clone()).collect::<Vec<ProductId>>(),
                )
            })
            .collect();
        MenuSlide::new("slide", selections).with_background("g0p0")
    }

    #[test]
    fn test_sparse_board() {
        // Scenario A end to end: 2 groups of 5 products.
        let groups = catalog(2, 5);
        let slide = slide_selecting_all(&groups);
        let config = MenuTemplateConfig::default();

        let result = compute_layout(&groups, &slide, &config, &LayoutOptions::default());

        assert_eq!(result.column_count, 2);
        assert_eq!(result.grid_template_columns, "repeat(2, 1fr)");
    }

    #[test]
    fn test_dense_board_caps_columns() {
        // Scenario B end to end: 10 groups of 8 products.
        let groups = catalog(10, 8);
        let slide = slide_selecting_all(&groups);
        let config = MenuTemplateConfig::default();

        let result = compute_layout(&groups, &slide, &config, &LayoutOptions::default());

        assert_eq!(result.column_count, 6);
        assert_eq!(result.grid_template_columns, "repeat(6, 1fr)");
    }

    #[test]
    fn test_manual_override_wins_end_to_end() {
        let groups = catalog(3, 4);
        let slide = slide_selecting_all(&groups);
        let config = MenuTemplateConfig {
            column_control: ColumnControlConfig {
                manual_override: ManualOverride {
                    enabled: true,
                    adjustment: 1,
                },
                auto_optimizations: AutoOptimizations {
                    prevent_empty_columns: true,
                    prevent_overflow: true,
                    optimize_for_full_width: true,
                    density_threshold: 0.85,
                },
            },
            ..Default::default()
        };

        // Auto-computed 3 (baseline for 3 groups), override pushes to 4.
        let result = compute_layout(&groups, &slide, &config, &LayoutOptions::default());
        assert_eq!(result.column_count, 4);
    }

    #[test]
    fn test_manual_font_wins_end_to_end() {
        let groups = catalog(4, 10);
        let slide = slide_selecting_all(&groups);
        let config = MenuTemplateConfig {
            font_scaling: FontScalingConfig {
                auto_scale: false,
                manual_font_size: Some(30),
                min_font_size: 12,
                max_font_size: 48,
            },
            ..Default::default()
        };

        let result = compute_layout(&groups, &slide, &config, &LayoutOptions::default());
        assert_eq!(result.font_size_px, 30);
    }

    #[test]
    fn test_empty_slide_still_produces_valid_layout() {
        // Scenario D: the selector returns nothing, the engine still hands
        // back an in-bounds result instead of failing.
        let groups = catalog(2, 5);
        let slide = MenuSlide::new("empty", vec![]);
        let config = MenuTemplateConfig::default();

        let result = compute_layout(&groups, &slide, &config, &LayoutOptions::default());

        assert_eq!(result.column_count, 2);
        let (min, max) = (
            config.font_scaling.min_font_size,
            config.font_scaling.max_font_size,
        );
        assert!((min..=max).contains(&result.font_size_px));
    }

    #[test]
    fn test_determinism() {
        let groups = catalog(5, 9);
        let slide = slide_selecting_all(&groups);
        let config = MenuTemplateConfig::default();
        let options = LayoutOptions::default();

        let a = compute_layout(&groups, &slide, &config, &options);
        let b = compute_layout(&groups, &slide, &config, &options);
        assert_eq!(a, b);
    }

    #[test]
    fn test_observer_sees_intermediate_values() {
        let groups = catalog(2, 5);
        let slide = slide_selecting_all(&groups);
        let config = MenuTemplateConfig::default();

        let mut recorder = TraceRecorder::new();
        compute_layout_traced(
            &groups,
            &slide,
            &config,
            &LayoutOptions::default(),
            &mut recorder,
        );

        assert!(matches!(
            recorder.find(|t| matches!(t, StageTrace::ContentSelected { .. })),
            Some(StageTrace::ContentSelected {
                groups: 2,
                products: 10
            })
        ));
        // 10 products + 2 groups: 14 column units, 13 font units.
        assert!(matches!(
            recorder.find(|t| matches!(t, StageTrace::EffectiveUnits { .. })),
            Some(StageTrace::EffectiveUnits { column_units, font_units })
                if (column_units - 14.0).abs() < 1e-9 && (font_units - 13.0).abs() < 1e-9
        ));
        assert!(matches!(
            recorder.find(|t| matches!(t, StageTrace::ColumnsPlanned { .. })),
            Some(StageTrace::ColumnsPlanned {
                baseline: 2,
                demand: 2,
                auto: 2
            })
        ));
    }

    #[test]
    fn test_style_vars_projection() {
        let result = LayoutResult {
            column_count: 4,
            font_size_px: 22,
            grid_template_columns: "repeat(4, 1fr)".to_string(),
        };
        let vars = result.style_vars();
        assert_eq!(vars[0], ("--menu-columns".to_string(), "4".to_string()));
        assert_eq!(vars[1], ("--menu-font-size".to_string(), "22px".to_string()));
    }
}
