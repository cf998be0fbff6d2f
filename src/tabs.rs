//! Category tab bar
//!
//! Each tab carries the category identifier written to the page URL when it
//! is clicked.

use crate::config::TabConfig;

pub mod tabs_render;

#[derive(Debug, Clone, Default)]
pub struct TabBar {
    tabs: Vec<TabConfig>,
    active: Option<usize>,
}

impl TabBar {
    pub fn new(tabs: Vec<TabConfig>) -> Self {
        Self { tabs, active: None }
    }

    pub fn tabs(&self) -> &[TabConfig] {
        &self.tabs
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Activate tab `index`, returning its category
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let tab = self.tabs.get(index)?;
        self.active = Some(index);
        Some(tab.category.as_str())
    }

    /// Mark the tab whose category matches `category` as active
    pub fn sync_with_category(&mut self, category: Option<&str>) {
        self.active = category.and_then(|c| self.tabs.iter().position(|t| t.category == c));
    }
}
