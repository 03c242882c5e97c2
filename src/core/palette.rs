//! Theme palettes and font-scale tables.
//!
//! Everything here is immutable lookup data.  The only input from the outside
//! world is the [`DarkModeProbe`] consulted when the user picks `System`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────── colour ────────────

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

// ───────────────────────────────────────── theme ─────────────

/// The user's theme preference as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

impl Theme {
    pub const ALL: &[Theme] = &[Theme::Dark, Theme::Light, Theme::System];

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::System => "System",
        }
    }
}

/// Best-effort OS appearance query.
///
/// `None` means "don't know" — the capability is missing or the query failed.
pub trait DarkModeProbe {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Named colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub accent: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub hover: Rgb,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Rgb::from_hex(0x000000),
        surface: Rgb::from_hex(0x1a1a1a),
        accent: Rgb::from_hex(0x007acc),
        text_primary: Rgb::from_hex(0xffffff),
        text_secondary: Rgb::from_hex(0x9e9e9e),
        hover: Rgb::from_hex(0x333333),
    };

    pub const LIGHT: Palette = Palette {
        background: Rgb::from_hex(0xffffff),
        surface: Rgb::from_hex(0xf0f0f0),
        accent: Rgb::from_hex(0x007acc),
        text_primary: Rgb::from_hex(0x000000),
        text_secondary: Rgb::from_hex(0x555555),
        hover: Rgb::from_hex(0xd9d9d9),
    };

    /// Map a theme name to its palette.  `System` asks `probe` and falls back
    /// to the dark palette when the answer is unknown.
    pub fn resolve(theme: Theme, probe: &dyn DarkModeProbe) -> Palette {
        match theme {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
            Theme::System => match probe.prefers_dark() {
                Some(false) => Palette::LIGHT,
                Some(true) | None => Palette::DARK,
            },
        }
    }
}

// ───────────────────────────────────────── fonts ─────────────

/// The user's font-scale preference as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontScale {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontScale {
    pub const ALL: &[FontScale] = &[FontScale::Small, FontScale::Medium, FontScale::Large];

    pub fn label(self) -> &'static str {
        match self {
            FontScale::Small => "Small",
            FontScale::Medium => "Medium",
            FontScale::Large => "Large",
        }
    }

    pub fn sizes(self) -> FontSizes {
        match self {
            FontScale::Small => FontSizes {
                title: 36,
                header: 18,
                normal: 12,
                small: 10,
            },
            FontScale::Medium => FontSizes {
                title: 48,
                header: 20,
                normal: 14,
                small: 12,
            },
            FontScale::Large => FontSizes {
                title: 56,
                header: 24,
                normal: 16,
                small: 14,
            },
        }
    }
}

/// Point sizes for the four text kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub title: u16,
    pub header: u16,
    pub normal: u16,
    pub small: u16,
}
