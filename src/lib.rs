pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod lookup;
pub mod navigation;
pub mod suggest;
pub mod tabs;
mod widgets;

#[cfg(test)]
mod test_utils;
