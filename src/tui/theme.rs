//! Theme system for TUI colors and styles
//!
//! Two palettes (light and dark). The active display mode is process-wide
//! and independent of board data; it is persisted under the `theme` key.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicU8, Ordering};

use iocraft::prelude::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::enum_display_fromstr;
use crate::error::BoardError;
use crate::storage::{KeyValueStore, THEME_KEY};
use crate::types::TaskStatus;

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

enum_display_fromstr!(ThemeMode, BoardError::InvalidTheme, {
    Light => "light",
    Dark => "dark",
});

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            ThemeMode::Light => 0,
            ThemeMode::Dark => 1,
        }
    }

    fn from_u8(value: u8) -> Self {
        if value == 0 {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status badge colors
    pub status_pending: Color,
    pub status_in_progress: Color,
    pub status_completed: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub header_background: Color,
    pub drop_target: Color,
    pub due_date: Color,
    pub error: Color,
}

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

impl Theme {
    pub fn dark() -> Self {
        Self {
            status_pending: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_completed: Color::Green,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            surface: Color::Rgb {
                r: 40,
                g: 40,
                b: 48,
            },
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            header_background: Color::Blue,
            drop_target: Color::Magenta,
            due_date: Color::Rgb {
                r: 230,
                g: 170,
                b: 90,
            },
            error: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            status_pending: Color::Rgb {
                r: 176,
                g: 120,
                b: 0,
            },
            status_in_progress: Color::Rgb { r: 0, g: 110, b: 160 },
            status_completed: Color::Rgb { r: 20, g: 130, b: 60 },

            border: Color::Rgb {
                r: 170,
                g: 170,
                b: 170,
            },
            border_focused: Color::Rgb { r: 30, g: 90, b: 200 },
            background: Color::Rgb {
                r: 245,
                g: 245,
                b: 245,
            },
            surface: Color::White,
            text: Color::Black,
            text_dimmed: Color::Rgb {
                r: 100,
                g: 100,
                b: 100,
            },
            highlight: Color::Rgb {
                r: 200,
                g: 220,
                b: 255,
            },
            highlight_text: Color::Black,
            header_background: Color::Rgb {
                r: 200,
                g: 220,
                b: 255,
            },
            drop_target: Color::Rgb {
                r: 150,
                g: 60,
                b: 170,
            },
            due_date: Color::Rgb {
                r: 170,
                g: 90,
                b: 0,
            },
            error: Color::Rgb { r: 190, g: 20, b: 20 },
        }
    }

    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// Get the badge color for a task status
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Pending => self.status_pending,
            TaskStatus::InProgress => self.status_in_progress,
            TaskStatus::Completed => self.status_completed,
        }
    }
}

static LIGHT: LazyLock<Theme> = LazyLock::new(Theme::light);
static DARK: LazyLock<Theme> = LazyLock::new(Theme::dark);

static ACTIVE_MODE: AtomicU8 = AtomicU8::new(1);

/// Currently active display mode
pub fn mode() -> ThemeMode {
    ThemeMode::from_u8(ACTIVE_MODE.load(Ordering::Relaxed))
}

pub fn set_mode(mode: ThemeMode) {
    ACTIVE_MODE.store(mode.as_u8(), Ordering::Relaxed);
}

/// Flip the active mode and return the new one
pub fn toggle_mode() -> ThemeMode {
    let next = mode().toggled();
    set_mode(next);
    next
}

/// Get the palette for the active mode
pub fn theme() -> &'static Theme {
    Theme::for_mode(mode())
}

/// Stored display mode, or `default` when none (or garbage) is stored
pub fn load_mode(kv: &dyn KeyValueStore, default: ThemeMode) -> ThemeMode {
    let raw = match kv.get(THEME_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(e) => {
            warn!(error = %e, "failed to read theme preference");
            return default;
        }
    };
    serde_json::from_str::<ThemeMode>(&raw)
        .ok()
        .or_else(|| raw.trim().parse().ok())
        .unwrap_or_else(|| {
            warn!(value = %raw, "ignoring unknown theme preference");
            default
        })
}

/// Persist the display mode; failures are logged
pub fn save_mode(kv: &dyn KeyValueStore, mode: ThemeMode) {
    let result = serde_json::to_string(&mode)
        .map_err(BoardError::from)
        .and_then(|value| kv.set(THEME_KEY, &value));
    match result {
        Ok(()) => debug!(%mode, "saved theme preference"),
        Err(e) => warn!(error = %e, "failed to save theme preference"),
    }
}
