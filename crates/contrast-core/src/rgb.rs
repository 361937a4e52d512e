//! sRGB color decoding — the entry gate of the contrast pipeline.
//!
//! Two parsing variants exist on purpose:
//!
//! - [`Rgb::from_hex`] — relaxed: an optional leading `#` followed by
//!   exactly six hex digits. Used when the caller already trusts the
//!   shape of its input (swatch tables, config values).
//! - [`Rgb::from_hex_strict`] — the validation gate: input must match
//!   `#RRGGBB` verbatim, `#` included. This is the form user-supplied
//!   text goes through before any contrast math runs.
//!
//! Neither variant coerces. Three-digit shorthand (`#ABC`) and alpha
//! hex (`#RRGGBBAA`) are rejected, not expanded — a deliberate scope
//! limit until there is a reason to widen the accepted grammar.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// The strict `#RRGGBB` gate. Compiled once, first use.
static HEX_GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#[0-9a-fA-F]{6}$").expect("hex gate pattern is valid"));

/// The one error the pipeline can produce: input that is not a
/// six-hex-digit color. Carries the rejected string so the caller can
/// quote it back to the user.
///
/// Everything downstream of parsing (luminance, ratio, conformance) is
/// total over valid [`Rgb`] values and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color format: {input:?} (expected six hex digits, e.g. \"#4a90d9\")")]
pub struct ParseColorError {
    /// The input string that failed to parse.
    pub input: String,
}

impl ParseColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

/// An 8-bit sRGB color — three channels, no alpha.
///
/// Values are plain channel intensities in `[0, 255]`. All derived
/// quantities (luminance, contrast ratio) are recomputed from these on
/// every call; an `Rgb` has no lifecycle beyond its three bytes.
///
/// # Examples
///
/// ```
/// use contrast_core::Rgb;
///
/// let sky = Rgb::from_hex("#4A90D9").unwrap();
/// assert_eq!(sky, Rgb::new(74, 144, 217));
/// assert_eq!(sky.to_string(), "#4a90d9");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel, 0–255.
    pub r: u8,
    /// Green channel, 0–255.
    pub g: u8,
    /// Blue channel, 0–255.
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from three 8-bit channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color, relaxed form: optional leading `#`, then
    /// exactly six hex digits (either case).
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] for anything else — shorthand hex,
    /// alpha hex, named colors, stray whitespace.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        Self::decode_digits(digits).ok_or_else(|| ParseColorError::new(s))
    }

    /// Parse a hex color, strict form: must match `#RRGGBB` verbatim,
    /// leading `#` required.
    ///
    /// This is the entry gate for user-supplied text: validate the
    /// whole shape up front, then decode.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] when the input does not match the
    /// `#RRGGBB` pattern.
    pub fn from_hex_strict(s: &str) -> Result<Self, ParseColorError> {
        if !HEX_GATE.is_match(s) {
            return Err(ParseColorError::new(s));
        }
        // The gate guarantees "#" + 6 hex digits.
        Self::decode_digits(&s[1..]).ok_or_else(|| ParseColorError::new(s))
    }

    /// Decode exactly six hex digits into channel bytes.
    fn decode_digits(digits: &str) -> Option<Self> {
        if digits.len() != 6 {
            return None;
        }
        let bytes = digits.as_bytes();
        let r = parse_hex_byte(&bytes[0..2])?;
        let g = parse_hex_byte(&bytes[2..4])?;
        let b = parse_hex_byte(&bytes[4..6])?;
        Some(Self::new(r, g, b))
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b } = self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
