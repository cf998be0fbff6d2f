use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use reqwest::Url;
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::{CursorMove, TextArea};

use crate::config::{Config, Endpoints};
use crate::error::SearchError;
use crate::layout::LayoutRegions;
use crate::lookup::{LookupRequest, LookupResponse};
use crate::navigation::{category_url, current_category, search_url};
use crate::suggest::{AutocompleteController, Effect, SearchEvent};
use crate::tabs::TabBar;

/// Longest the event loop sleeps while nothing is due
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub controller: AutocompleteController,
    pub tabs: TabBar,
    /// URL of the page currently "loaded"
    pub page_url: Url,
    /// Search form action (results page)
    pub form_action: Url,
    /// Channel to send lookups to the worker thread
    pub lookup_tx: Option<UnboundedSender<LookupRequest>>,
    /// Channel to receive lookup outcomes from the worker thread
    pub lookup_rx: Option<Receiver<LookupResponse>>,
    pub regions: LayoutRegions,
    /// Results URL produced by submitting the search form
    pub submitted: Option<Url>,
    pub should_quit: bool,
    debounce_ms: u64,
    discard_stale: bool,
}

impl App {
    /// Create a new App from configuration
    ///
    /// The lookup worker is attached separately with [`App::connect`].
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let Endpoints { results, .. } = config.search.endpoints()?;
        let debounce_ms = config.search.debounce_ms;
        let discard_stale = config.search.discard_stale_responses;

        let mut tabs = TabBar::new(config.tabs.clone());
        tabs.sync_with_category(current_category(&results).as_deref());

        Ok(Self {
            textarea: new_search_input(),
            controller: AutocompleteController::new(debounce_ms).with_stale_discard(discard_stale),
            tabs,
            page_url: results.clone(),
            form_action: results,
            lookup_tx: None,
            lookup_rx: None,
            regions: LayoutRegions::default(),
            submitted: None,
            should_quit: false,
            debounce_ms,
            discard_stale,
        })
    }

    /// Attach the lookup worker channels
    pub fn connect(
        &mut self,
        lookup_tx: UnboundedSender<LookupRequest>,
        lookup_rx: Receiver<LookupResponse>,
    ) {
        self.lookup_tx = Some(lookup_tx);
        self.lookup_rx = Some(lookup_rx);
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Results URL, if the search form was submitted
    pub fn submitted_url(&self) -> Option<&Url> {
        self.submitted.as_ref()
    }

    /// Get the current search input text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    /// Replace the search input text without raising an input event
    pub fn set_query(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    /// Fold a line break the editor inserted back into a single line
    pub(super) fn keep_single_line(&mut self) {
        if self.textarea.lines().len() > 1 {
            let text = self.textarea.lines().concat();
            self.textarea = new_search_input();
            self.textarea.insert_str(text);
        }
    }

    /// Deliver an event to the autocomplete controller and apply its effects
    ///
    /// Returns whether the controller prevented the default action.
    pub fn dispatch(&mut self, event: SearchEvent, now: Instant) -> bool {
        let effects = self.controller.dispatch(event, now);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> bool {
        let mut prevented = false;
        for effect in effects {
            match effect {
                Effect::PreventDefault => prevented = true,
                Effect::Lookup(request) => self.send_lookup(request),
                Effect::SetInput(text) => self.set_query(&text),
                Effect::SubmitForm => self.navigate_to_results(),
            }
        }
        prevented
    }

    fn send_lookup(&mut self, request: LookupRequest) {
        match &self.lookup_tx {
            Some(tx) => {
                if tx.send(request).is_err() {
                    log::warn!("Lookup worker is gone, dropping lookup");
                }
            }
            None => log::debug!("No lookup worker attached, dropping {:?}", request.query),
        }
    }

    /// Fire the debounce timer when due and apply finished lookups
    pub fn tick(&mut self, now: Instant) {
        if let Some(effect) = self.controller.poll_timer(now) {
            self.apply_effects(vec![effect]);
        }

        while let Some(response) = self.next_response() {
            self.dispatch(SearchEvent::LookupFinished(response), now);
        }
    }

    fn next_response(&mut self) -> Option<LookupResponse> {
        let rx = self.lookup_rx.as_ref()?;
        match rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("Lookup worker disconnected");
                self.lookup_rx = None;
                None
            }
        }
    }

    /// How long the event loop may wait before the next tick is needed
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.controller.timer_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Submit the search form through its default action
    pub fn submit_form(&mut self, now: Instant) {
        self.dispatch(SearchEvent::Submit, now);
        self.navigate_to_results();
    }

    fn navigate_to_results(&mut self) {
        let url = search_url(&self.form_action, self.query());
        log::info!("Submitting search: {}", url);
        self.submitted = Some(url);
        self.should_quit = true;
    }

    /// Follow the category tab at `index`
    ///
    /// Navigating loads a fresh page: the search input and the autocomplete
    /// state start over.
    pub fn open_tab(&mut self, index: usize) {
        let Some(category) = self.tabs.select(index) else {
            return;
        };
        let url = category_url(&self.page_url, category);
        log::info!("Navigating to {}", url);
        self.load_page(url);
    }

    /// Load `url` as the current page
    pub fn load_page(&mut self, url: Url) {
        self.tabs.sync_with_category(current_category(&url).as_deref());
        self.page_url = url;
        self.textarea = new_search_input();
        self.controller = AutocompleteController::new(self.debounce_ms)
            .with_stale_discard(self.discard_stale)
            .continuing_from(&self.controller);
    }
}

fn new_search_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    textarea.set_placeholder_text("Search the catalog");
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
