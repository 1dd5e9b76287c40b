//! Application Context
//!
//! Theme state provided via Leptos Context API.

use leptos::prelude::*;

/// Light/dark presentation flag. No data-model impact.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// App-wide theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme - read
    pub theme: ReadSignal<Theme>,
    /// Current theme - write
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn new(theme: (ReadSignal<Theme>, WriteSignal<Theme>)) -> Self {
        Self {
            theme: theme.0,
            set_theme: theme.1,
        }
    }

    /// Flip between light and dark
    pub fn toggle(&self) {
        self.set_theme.update(|t| {
            *t = match t {
                Theme::Light => Theme::Dark,
                Theme::Dark => Theme::Light,
            }
        });
    }
}
