//! Layout module for tracking UI component regions
//!
//! Rendering records where each component landed in [`LayoutRegions`], and
//! [`region_at`] answers which component sits under a mouse click.

use ratatui::layout::{Position, Rect};

/// A clickable component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Category tab at this index
    Tab(usize),
    SearchInput,
    /// Suggestion panel border or empty space, still inside the form
    SuggestionPanel,
    /// Suggestion row for the item at this index
    Suggestion(usize),
    Elsewhere,
}

/// Where the suggestion panel was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRegion {
    /// Whole popup including its border
    pub area: Rect,
    /// Area holding the rows
    pub rows: Rect,
    /// Index of the item drawn on the first row
    pub offset: usize,
    /// Number of items
    pub count: usize,
}

impl PanelRegion {
    fn item_at(&self, position: Position) -> Option<usize> {
        if !self.rows.contains(position) {
            return None;
        }
        let index = self.offset + usize::from(position.y - self.rows.y);
        (index < self.count).then_some(index)
    }
}

/// Regions recorded during the last render
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub tabs: Vec<Rect>,
    pub search_input: Option<Rect>,
    pub panel: Option<PanelRegion>,
}

impl LayoutRegions {
    pub fn clear(&mut self) {
        self.tabs.clear();
        self.search_input = None;
        self.panel = None;
    }
}

/// Find the component at a screen position
///
/// The suggestion panel is drawn over everything else, so it is checked
/// first.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Region {
    let position = Position::new(column, row);

    if let Some(panel) = &regions.panel
        && panel.area.contains(position)
    {
        return match panel.item_at(position) {
            Some(index) => Region::Suggestion(index),
            None => Region::SuggestionPanel,
        };
    }

    if regions
        .search_input
        .is_some_and(|input| input.contains(position))
    {
        return Region::SearchInput;
    }

    if let Some(index) = regions.tabs.iter().position(|tab| tab.contains(position)) {
        return Region::Tab(index);
    }

    Region::Elsewhere
}
