//! Tab bar rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::TabBar;

const TAB_GAP: u16 = 1;

/// Render the tab bar on one row, returning each tab's area
pub fn render_tabs(tabs: &TabBar, frame: &mut Frame, area: Rect) -> Vec<Rect> {
    let mut spans = Vec::new();
    let mut areas = Vec::new();
    let mut x = area.x;
    let right = area.x + area.width;

    for (i, tab) in tabs.tabs().iter().enumerate() {
        let label = format!(" {} ", tab.label);
        let width = label.width() as u16;
        if x >= right {
            break;
        }

        let style = if tabs.active() == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };

        areas.push(Rect::new(x, area.y, width.min(right - x), 1));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" ".repeat(TAB_GAP as usize)));
        x = x.saturating_add(width + TAB_GAP);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    areas
}
