//! Content selection: from catalog snapshot to one slide's groups.
//!
//! Selection is pure filtering. A selected product that no longer exists in
//! the catalog is dropped silently — a partial menu is preferable to a
//! crashed board — and an empty selection yields an empty result, never an
//! error (structural validation is a separate concern).

use indexmap::{IndexMap, IndexSet};
use menugrid_core::{GroupSelection, MenuSlide, Product, ProductGroup, DEFAULT_DISPLAY_ORDER};

/// A group retained for one slide, reduced to the products it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedGroup {
    pub group: ProductGroup,
    /// Resolved sort position ([`DEFAULT_DISPLAY_ORDER`] when unset).
    pub display_order: u32,
}

impl SelectedGroup {
    /// Number of products this group puts on the board.
    pub fn product_count(&self) -> usize {
        self.group.products.len()
    }
}

/// Filter and order the catalog for one slide.
///
/// Groups not named by the slide are discarded; retained groups keep only
/// the products named by their selection, in catalog order. The result is
/// sorted ascending by display order, ties keeping catalog order.
pub fn select_content(groups: &[ProductGroup], slide: &MenuSlide) -> Vec<SelectedGroup> {
    let selections: IndexMap<_, &GroupSelection> = slide
        .group_selections
        .iter()
        .map(|s| (&s.group_id, s))
        .collect();

    let mut selected: Vec<SelectedGroup> = groups
        .iter()
        .filter_map(|group| {
            let selection = selections.get(&group.id)?;
            let wanted: IndexSet<_> = selection.product_ids.iter().collect();

            let products: Vec<Product> = group
                .products
                .iter()
                .filter(|p| wanted.contains(&p.id))
                .cloned()
                .collect();

            Some(SelectedGroup {
                group: ProductGroup::new(group.id.0.clone(), group.name.clone(), products),
                display_order: selection.display_order.unwrap_or(DEFAULT_DISPLAY_ORDER),
            })
        })
        .collect();

    selected.sort_by_key(|g| g.display_order);
    selected
}

/// Total number of products across the selected groups.
pub fn total_products(selected: &[SelectedGroup]) -> usize {
    selected.iter().map(SelectedGroup::product_count).sum()
}
