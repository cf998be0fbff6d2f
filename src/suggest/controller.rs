//! Autocomplete controller
//!
//! Owns the debounce timer, the keyboard focus and the rendered suggestion
//! list. The host delivers every input, key, click and lookup outcome as a
//! [`SearchEvent`] through [`AutocompleteController::dispatch`] and applies
//! the returned [`Effect`]s in order.
//!
//! Panel states: hidden (no focus) and visible (focus none or a valid row).

use std::time::Instant;

use super::debouncer::Debouncer;
use super::focus::FocusIndex;
use super::suggestion::Suggestion;
use crate::lookup::{LookupRequest, LookupResponse};

/// Keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// Where a mouse click landed, relative to the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the form but not on a suggestion row
    SearchForm,
    /// On the suggestion row at this index
    Suggestion(usize),
    /// Anywhere outside the form
    Outside,
}

/// Messages delivered to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The input's raw value changed
    Input(String),
    KeyDown(NavKey),
    Click(ClickTarget),
    /// The form is being submitted by its default action
    Submit,
    LookupFinished(LookupResponse),
}

/// Instructions for the host, applied in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Suppress the host's default handling of the current key
    PreventDefault,
    /// Send this lookup to the suggestion source
    Lookup(LookupRequest),
    /// Replace the search input's text
    SetInput(String),
    /// Submit the search form
    SubmitForm,
}

#[derive(Debug)]
pub struct AutocompleteController {
    debouncer: Debouncer,
    focus: FocusIndex,
    suggestions: Vec<Suggestion>,
    visible: bool,
    /// Sequence number of the last lookup handed out
    request_id: u64,
    /// Sequence number of the last response rendered
    last_applied: Option<u64>,
    /// Responses at or below this id belong to a page that was left
    floor: Option<u64>,
    discard_stale: bool,
}

impl AutocompleteController {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_ms),
            focus: FocusIndex::NONE,
            suggestions: Vec::new(),
            visible: false,
            request_id: 0,
            last_applied: None,
            floor: None,
            discard_stale: false,
        }
    }

    /// Take over the lookup sequence from the controller of the previous page
    ///
    /// Lookups the previous page issued are never rendered here.
    pub fn continuing_from(mut self, previous: &AutocompleteController) -> Self {
        self.request_id = previous.request_id;
        self.floor = Some(previous.request_id);
        self
    }

    /// Drop responses older than the last rendered one instead of letting
    /// them overwrite newer suggestions
    pub fn with_stale_discard(mut self, discard_stale: bool) -> Self {
        self.discard_stale = discard_stale;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn focus(&self) -> FocusIndex {
        self.focus
    }

    /// When the pending lookup is due, if any
    pub fn timer_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Single entry point for every event
    pub fn dispatch(&mut self, event: SearchEvent, now: Instant) -> Vec<Effect> {
        match event {
            SearchEvent::Input(raw) => {
                self.on_input(&raw, now);
                Vec::new()
            }
            SearchEvent::KeyDown(key) => self.on_key_down(key),
            SearchEvent::Click(target) => self.on_click(target),
            SearchEvent::Submit => {
                self.hide();
                Vec::new()
            }
            SearchEvent::LookupFinished(response) => {
                self.on_lookup_finished(response);
                Vec::new()
            }
        }
    }

    /// Fire the debounce timer if it is due
    pub fn poll_timer(&mut self, now: Instant) -> Option<Effect> {
        let query = self.debouncer.poll(now)?;
        self.request_id = self.request_id.wrapping_add(1);
        Some(Effect::Lookup(LookupRequest {
            query,
            request_id: self.request_id,
        }))
    }

    fn on_input(&mut self, raw: &str, now: Instant) {
        let query = raw.trim();
        self.debouncer.cancel();

        if query.is_empty() {
            self.hide();
            return;
        }

        self.debouncer.schedule(query.to_string(), now);
    }

    fn on_key_down(&mut self, key: NavKey) -> Vec<Effect> {
        match key {
            NavKey::Down => {
                self.focus.step_down(self.suggestions.len());
                vec![Effect::PreventDefault]
            }
            NavKey::Up => {
                self.focus.step_up(self.suggestions.len());
                vec![Effect::PreventDefault]
            }
            NavKey::Enter => match self.focus.get() {
                Some(index) if index < self.suggestions.len() => {
                    let mut effects = vec![Effect::PreventDefault];
                    effects.extend(self.select_item(index));
                    effects
                }
                _ => Vec::new(),
            },
            NavKey::Escape => {
                self.hide();
                Vec::new()
            }
        }
    }

    fn on_click(&mut self, target: ClickTarget) -> Vec<Effect> {
        match target {
            ClickTarget::Outside => {
                self.hide();
                Vec::new()
            }
            ClickTarget::Suggestion(index) if index < self.suggestions.len() => {
                self.select_item(index)
            }
            ClickTarget::Suggestion(_) | ClickTarget::SearchForm => Vec::new(),
        }
    }

    fn on_lookup_finished(&mut self, response: LookupResponse) {
        if self.floor.is_some_and(|floor| response.request_id <= floor) {
            log::debug!(
                "Ignoring lookup {} issued before the page was loaded",
                response.request_id
            );
            return;
        }

        if self.discard_stale
            && self
                .last_applied
                .is_some_and(|last| response.request_id < last)
        {
            log::debug!(
                "Discarding stale lookup {} (last applied {:?})",
                response.request_id,
                self.last_applied
            );
            return;
        }

        match response.result {
            Ok(suggestions) => {
                self.last_applied = Some(response.request_id);
                self.render(suggestions);
            }
            Err(e) => {
                // Failures never reach the user; the panel stays as it was
                log::warn!("Autocomplete lookup {} failed: {}", response.request_id, e);
            }
        }
    }

    /// Replace the rendered rows with `suggestions`
    fn render(&mut self, suggestions: Vec<Suggestion>) {
        self.focus.clear();
        self.suggestions = suggestions;
        self.visible = !self.suggestions.is_empty();
    }

    fn select_item(&mut self, index: usize) -> Vec<Effect> {
        let text = self.suggestions[index].text.clone();
        self.hide();
        vec![Effect::SetInput(text), Effect::SubmitForm]
    }

    fn hide(&mut self) {
        self.visible = false;
        self.suggestions.clear();
        self.focus.clear();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
