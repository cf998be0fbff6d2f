mod controller;
mod debouncer;
mod focus;
pub mod suggest_render;
mod suggestion;

pub use controller::{AutocompleteController, ClickTarget, Effect, NavKey, SearchEvent};
pub use debouncer::Debouncer;
pub use focus::FocusIndex;
pub use suggestion::{Suggestion, parse_suggestions};
