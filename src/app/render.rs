use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::suggest::suggest_render::render_panel;
use crate::tabs::tabs_render::render_tabs;

const HINTS: &str = " ↑↓ navigate  Enter search  Esc close/quit  Ctrl+C quit ";

impl App {
    /// Render the UI and record clickable regions
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(1), // Category tabs
            Constraint::Length(3), // Search form
            Constraint::Min(0),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

        let tabs_area = layout[0];
        let input_area = layout[1];
        let body_area = layout[2];
        let status_area = layout[3];

        self.regions.tabs = render_tabs(&self.tabs, frame, tabs_area);

        frame.render_widget(&self.textarea, input_area);
        self.regions.search_input = Some(input_area);

        self.render_body(frame, body_area);
        self.render_status_bar(frame, status_area);

        // Panel last so it is drawn over the body
        self.regions.panel = render_panel(&self.controller, frame, input_area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let text = if self.tabs.is_empty() {
            "Type to get suggestions. Add [[tabs]] to the config for category filters."
        } else {
            "Type to get suggestions. Click a tab to filter by category."
        };
        let body = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(body, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.page_url),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
            Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
