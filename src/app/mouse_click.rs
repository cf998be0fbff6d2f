//! Mouse click handling
//!
//! Routes clicks to the autocomplete controller and the tab bar.

use std::time::Instant;

use super::state::App;
use crate::layout::Region;
use crate::suggest::{ClickTarget, SearchEvent};

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Region, now: Instant) {
    app.dispatch(SearchEvent::Click(click_target(region)), now);

    if let Region::Tab(index) = region {
        app.open_tab(index);
    }
}

/// Where a region sits relative to the search form
fn click_target(region: Region) -> ClickTarget {
    match region {
        Region::Suggestion(index) => ClickTarget::Suggestion(index),
        Region::SearchInput | Region::SuggestionPanel => ClickTarget::SearchForm,
        Region::Tab(_) | Region::Elsewhere => ClickTarget::Outside,
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
