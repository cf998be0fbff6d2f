//! Suggestion panel rendering
//!
//! Draws the suggestion popup directly under the search input. Each row shows
//! the suggestion text followed by its type label; the focused row carries
//! the highlight.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::AutocompleteController;
use crate::layout::PanelRegion;
use crate::widgets::popup;

// Suggestion panel display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 60;
const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const TYPE_LABEL_SPACING: usize = 3;

const ACTIVE_MARKER: &str = "► ";
const INACTIVE_MARKER: &str = "  ";

/// Render the suggestion panel below `input_area`
///
/// Returns where the panel landed, or `None` when nothing was drawn.
pub fn render_panel(
    controller: &AutocompleteController,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<PanelRegion> {
    let suggestions = controller.suggestions();
    if !controller.is_visible() || suggestions.is_empty() {
        return None;
    }

    let max_text_width = suggestions
        .iter()
        .map(|s| s.text.width())
        .max()
        .unwrap_or(0);

    let row_width = suggestions
        .iter()
        .map(|s| max_text_width + s.kind.width() + TYPE_LABEL_SPACING + ACTIVE_MARKER.width())
        .max()
        .unwrap_or(MIN_POPUP_WIDTH)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;
    let popup_width = (row_width as u16) + POPUP_PADDING;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= POPUP_PADDING {
        return None;
    }

    let focus = controller.focus();
    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let padding = " ".repeat(max_text_width.saturating_sub(suggestion.text.width()));

            let line = if focus.is_active(i) {
                Line::from(vec![
                    Span::styled(
                        format!("{}{}{}", ACTIVE_MARKER, suggestion.text, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("   {}", suggestion.kind),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{}{}{}", INACTIVE_MARKER, suggestion.text, padding),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("   {}", suggestion.kind),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let rows = block.inner(popup_area);

    let mut state = ListState::default().with_selected(focus.get());
    frame.render_stateful_widget(List::new(items).block(block), popup_area, &mut state);

    Some(PanelRegion {
        area: popup_area,
        rows,
        offset: state.offset(),
        count: suggestions.len(),
    })
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
