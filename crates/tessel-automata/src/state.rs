//! Cell states and their display colors.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A cell category. 0 is always the background state.
pub type State = u8;

/// The background state.
pub const BACKGROUND: State = 0;

/// Mapping from state to display color, ordered by state.
pub type StateColors = BTreeMap<State, Rgb>;

/// An 8-bit-per-channel color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// White (`#ffffff`), the background color.
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Gray (`#808080`), the default color of state 1.
    pub const GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates from a hex color code (e.g., 0xFF5500).
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Converts to hex color code.
    pub const fn to_hex(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Returns the channels as a tuple.
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Error returned when a color string is not `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}, expected #RRGGBB", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb::from_hex)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Returns the colors every session starts with: white background, gray 1.
pub fn default_state_colors() -> StateColors {
    StateColors::from([(0, Rgb::WHITE), (1, Rgb::GRAY)])
}
