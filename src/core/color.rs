//! ANSI colour codes and the two-sided band palette.

use std::{error::Error, fmt, str, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl Error for ColorError {}

// --- AnsiCode ---

/// Foreground escape sequence, either a named SGR code or an inline
/// true-colour one (`ESC[38;2;R;G;Bm` fits in 19 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    pub const RESET: Self = Self::Static("\x1b[0m");

    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    pub const fn industrial_orange() -> Self {
        Self::Static("\x1b[38;2;210;135;10m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        use std::io::Write;

        let mut buf = [0u8; 20];
        let mut cursor = &mut buf[..];
        // 19 bytes worst case, always fits
        let _ = write!(cursor, "\x1b[38;2;{r};{g};{b}m");
        let len = 20 - cursor.len();
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII by `rgb`
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

/// Colour names, falling back to the hex parser on a miss.
impl FromStr for AnsiCode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            "orange" | "industrial" => Ok(Self::industrial_orange()),
            _ => Self::from_hex(s),
        }
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::RESET)
}

// --- Palette ---

/// Fill colours for each side of the band plus one for chrome and markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Runs where the first series is on top (ties included).
    pub above: AnsiCode,
    pub below: AnsiCode,
    pub accent: AnsiCode,
}

impl Palette {
    #[inline]
    #[must_use]
    pub fn side(&self, is_first_above: bool) -> &AnsiCode {
        if is_first_above { &self.above } else { &self.below }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            above: AnsiCode::green(),
            below: AnsiCode::red(),
            accent: AnsiCode::industrial_orange(),
        }
    }
}
