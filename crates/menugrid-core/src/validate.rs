//! Structural validation of menu template configurations.
//!
//! Validation runs before layout and reports everything wrong with a
//! configuration as a list of field-scoped messages. It never panics and
//! never aborts early; the caller decides whether the issues block
//! rendering.

use crate::config::{MenuTemplateConfig, GLOBAL_FONT_MAX, GLOBAL_FONT_MIN};
use crate::types::MenuSlide;

/// A single problem found in a configuration, scoped to the field it
/// concerns (e.g. `slides[2].group_selections[0].product_ids`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a menu template configuration.
///
/// Returns every issue found; an empty list means the configuration is
/// structurally usable.
pub fn validate_template(config: &MenuTemplateConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if config.slides.is_empty() {
        issues.push(ValidationIssue::new(
            "slides",
            "a menu template needs at least one slide",
        ));
    }

    for (i, slide) in config.slides.iter().enumerate() {
        validate_slide(slide, &format!("slides[{i}]"), &mut issues);
    }

    let font = &config.font_scaling;
    if font.min_font_size >= font.max_font_size {
        issues.push(ValidationIssue::new(
            "font_scaling.min_font_size",
            format!(
                "min font size ({}) must be smaller than max font size ({})",
                font.min_font_size, font.max_font_size
            ),
        ));
    }
    if font.min_font_size < GLOBAL_FONT_MIN || font.min_font_size > GLOBAL_FONT_MAX {
        issues.push(ValidationIssue::new(
            "font_scaling.min_font_size",
            format!(
                "must be within {GLOBAL_FONT_MIN}-{GLOBAL_FONT_MAX} px, got {}",
                font.min_font_size
            ),
        ));
    }
    if font.max_font_size < GLOBAL_FONT_MIN || font.max_font_size > GLOBAL_FONT_MAX {
        issues.push(ValidationIssue::new(
            "font_scaling.max_font_size",
            format!(
                "must be within {GLOBAL_FONT_MIN}-{GLOBAL_FONT_MAX} px, got {}",
                font.max_font_size
            ),
        ));
    }

    issues
}

fn validate_slide(slide: &MenuSlide, field: &str, issues: &mut Vec<ValidationIssue>) {
    if slide.group_selections.is_empty() {
        issues.push(ValidationIssue::new(
            format!("{field}.group_selections"),
            "a menu slide needs at least one group selection",
        ));
    }

    for (i, selection) in slide.group_selections.iter().enumerate() {
        if selection.product_ids.is_empty() {
            issues.push(ValidationIssue::new(
                format!("{field}.group_selections[{i}].product_ids"),
                format!(
                    "group '{}' is selected but shows no products",
                    selection.group_id.0
                ),
            ));
        }
    }

    if slide.background_product_id.is_none() {
        issues.push(ValidationIssue::new(
            format!("{field}.background_product_id"),
            "a menu slide needs a background product",
        ));
    }
}
