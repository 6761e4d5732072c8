//! RGBA color type, predefined palette, and hex parsing.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use paintpad::draw::Color;
/// let red = Color::new(1.0, 0.0, 0.0, 1.0);
/// let parsed = Color::parse_hex("#ff0000").unwrap();
/// assert_eq!(red, parsed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f32,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f32,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f32,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f32,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a CSS-style hex color string (`#rgb` or `#rrggbb`).
    ///
    /// This is the value format produced by a color-input control.
    /// Alpha is always 1.0; the short form expands each digit (`#f0a`
    /// becomes `#ff00aa`).
    ///
    /// # Returns
    /// - `Some(Color)` for a well-formed hex string
    /// - `None` for anything else
    pub fn parse_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;

        let (r, g, b) = match digits.len() {
            3 => {
                let mut it = digits.chars();
                let r = it.next()?.to_digit(16)? as u8;
                let g = it.next()?.to_digit(16)? as u8;
                let b = it.next()?.to_digit(16)? as u8;
                (r * 17, g * 17, b * 17)
            }
            6 => (
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
            ),
            _ => return None,
        };

        Some(Self::from_rgba8(r, g, b, 255))
    }

    /// Creates a color from 8-bit RGBA components.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Returns the color as 8-bit RGBA components.
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        )
    }

    /// Formats the color as a `#rrggbb` hex string (alpha is dropped).
    pub fn to_hex(self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        let (r, g, b, a) = self.to_rgba8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined black color - the default paint color of a fresh surface
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined white color
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined red color
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Fully transparent color - the content of a fresh surface
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_long_form() {
        assert_eq!(Color::parse_hex("#ff0000"), Some(RED));
        assert_eq!(Color::parse_hex("#000000"), Some(BLACK));
        let custom = Color::parse_hex("#1280ff").unwrap();
        assert_eq!(custom.to_rgba8(), (0x12, 0x80, 0xff, 255));
    }

    #[test]
    fn parse_hex_short_form_expands_digits() {
        assert_eq!(Color::parse_hex("#f00"), Some(RED));
        assert_eq!(
            Color::parse_hex("#abc").unwrap().to_rgba8(),
            (0xaa, 0xbb, 0xcc, 255)
        );
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert!(Color::parse_hex("ff0000").is_none());
        assert!(Color::parse_hex("#ff00").is_none());
        assert!(Color::parse_hex("#gg0000").is_none());
        assert!(Color::parse_hex("").is_none());
    }

    #[test]
    fn hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#1280ff"] {
            assert_eq!(Color::parse_hex(hex).unwrap().to_hex(), hex);
        }
    }
}
