//! Application state types and entry glue.
//!
//! Defines the screen state machine, the color theme and the owned
//! application state, plus the loop entry function (re-exported as `run`).
//!
pub mod menu;
pub mod update;

use crossterm::style::{Color, Stylize, style};

use crate::error::Result;
use crate::model::Kind;
use crate::store::Registry;

/// Which menu the console loop is showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Main,
    Entity(Kind),
    /// Terminal state; the loop stops.
    Exit,
}

/// Role of a piece of console text, used to pick its color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    Title,
    Text,
    Prompt,
    Success,
    Error,
    Muted,
}

/// Color palette for console output.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// When false every tone renders as plain text.
    pub enabled: bool,
    pub title: Color,
    pub text: Color,
    pub prompt: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl Theme {
    /// Catppuccin Mocha accents.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            enabled: true,
            title: Color::Rgb { r: 0xcb, g: 0xa6, b: 0xf7 },   // mauve
            text: Color::Rgb { r: 0xcd, g: 0xd6, b: 0xf4 },    // text
            prompt: Color::Rgb { r: 0xb4, g: 0xbe, b: 0xfe },  // lavender
            success: Color::Rgb { r: 0xa6, g: 0xe3, b: 0xa1 }, // green
            error: Color::Rgb { r: 0xf3, g: 0x8b, b: 0xa8 },   // red
            muted: Color::Rgb { r: 0x7f, g: 0x84, b: 0x9c },   // overlay1
        }
    }

    /// No escape sequences at all; used for pipes and tests.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::mocha()
        }
    }

    pub fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Title => self.title,
            Tone::Text => self.text,
            Tone::Prompt => self.prompt,
            Tone::Success => self.success,
            Tone::Error => self.error,
            Tone::Muted => self.muted,
        }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let styled = style(text).with(self.color(tone));
        match tone {
            Tone::Title => styled.bold().to_string(),
            _ => styled.to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

/// Everything the console loop mutates. Owned by the caller of [`run`].
pub struct AppState {
    pub registry: Registry,
    pub screen: Screen,
}

impl AppState {
    /// Start on the main menu with the sample records loaded.
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(Registry::seeded()?))
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            screen: Screen::Main,
        }
    }
}

/// Re-export the application loop entry function.
pub use update::run_app as run;
