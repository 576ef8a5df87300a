//! Adaptive layout computation for Menugrid menu boards.
//!
//! Given the product groups selected for a menu slide, this crate computes
//! how many display columns to use and what font size to render text at,
//! so that all content fits a fixed-size screen without clipping and
//! without leaving large empty regions.
//!
//! # Architecture
//!
//! 1. **Content selection**: Filters the catalog down to one slide's groups
//! 2. **Capacity model**: Collapses content volume into effective units
//! 3. **Column planning**: Table-driven bin estimate with a safety margin
//! 4. **Layout policy**: Manual override or summable auto-optimizations
//! 5. **Font scaling**: Concave compression curve plus column penalties
//!
//! # Example
//!
//! ```ignore
//! use menugrid_layout::{compute_layout, LayoutOptions};
//!
//! let layout = compute_layout(&groups, &slide, &config, &LayoutOptions::default());
//! println!("{} columns at {}px", layout.column_count, layout.font_size_px);
//! ```

pub mod capacity;
mod columns;
mod compute;
mod font;
mod observe;
mod policy;
mod select;

pub use columns::{plan_columns, ColumnPlan};
pub use compute::{compute_layout, compute_layout_traced, LayoutOptions, LayoutResult};
pub use font::{scale_font, FontDecision};
pub use observe::{LayoutObserver, NoopObserver, StageTrace, TraceRecorder};
pub use policy::{apply_policy, PolicyDecision};
pub use select::{select_content, total_products, SelectedGroup};
