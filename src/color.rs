//! Color space conversions between hex-encoded RGB and hue/saturation/value.
//!
//! Hex strings are the canonical stored form for every color in the editor;
//! HSV is a derived view that only exists while the picker is being dragged.
//! All conversions are pure, and hex -> HSV -> hex reproduces the original
//! 24-bit color exactly (hue is ambiguous for achromatic colors, where only
//! the RGB channels are meaningful).

use thiserror::Error;

/// Errors produced when constructing or parsing colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The supplied string is not a well-formed `#rgb`/`#rrggbb` hex color.
    #[error("malformed hex color: {0:?}")]
    InvalidColorFormat(String),
    /// An RGB component was outside the [0, 255] range.
    #[error("color component {0} out of range 0..=255")]
    OutOfRange(i32),
}

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A color in hue/saturation/value form.
///
/// `h` is in degrees `[0, 360)`, `s` and `v` are percentages `[0, 100]`,
/// matching the coordinate space of the picker's spectrum surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees.
    pub h: f32,
    /// Saturation as a percentage.
    pub s: f32,
    /// Value (brightness) as a percentage.
    pub v: f32,
}

impl Rgb {
    /// Creates a color from raw channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from integer components, rejecting values outside
    /// `[0, 255]` instead of clamping them.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] with the first offending component.
    pub fn from_components(r: i32, g: i32, b: i32) -> Result<Self, ColorError> {
        for c in [r, g, b] {
            if !(0..=255).contains(&c) {
                return Err(ColorError::OutOfRange(c));
            }
        }
        Ok(Self::new(r as u8, g as u8, b as u8))
    }

    /// Parses a `#rrggbb` or `#rgb` hex color (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for anything else.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let s = input.trim();
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::InvalidColorFormat(input.to_string()))?;
        let malformed = || ColorError::InvalidColorFormat(input.to_string());

        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| malformed())?;
                let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| malformed())?;
                let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| malformed())?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let nibble = c.to_digit(16).ok_or_else(malformed)? as u8;
                    channels[i] = nibble * 16 + nibble;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(malformed()),
        }
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to hue/saturation/value.
    pub fn to_hsv(self) -> Hsv {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        let h = if h < 0.0 { h + 360.0 } else { h };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv {
            h,
            s: s * 100.0,
            v: max * 100.0,
        }
    }
}

impl Hsv {
    /// Creates an HSV color from raw components.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Converts back to 8-bit RGB.
    pub fn to_rgb(self) -> Rgb {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.v / 100.0).clamp(0.0, 1.0);

        let c = v * s;
        let h_prime = self.h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::new(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }

    /// Formats the resolved color as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Parses a hex color and converts it to HSV in one step.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for malformed input.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv, ColorError> {
    Ok(Rgb::parse_hex(hex)?.to_hsv())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_hsv_composes_parse_and_convert() {
        let hsv = hex_to_hsv("#0000ff").unwrap();
        assert_eq!(hsv.h, 240.0);
        assert_eq!(hsv.s, 100.0);
        assert_eq!(hsv.v, 100.0);
        assert!(hex_to_hsv("blue").is_err());
    }

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgb::parse_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse_hex("#FF8000"), Ok(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(Rgb::parse_hex("#fff"), Ok(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse_hex("#a2c"), Ok(Rgb::new(0xaa, 0x22, 0xcc)));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["ff8000", "#ff800", "#ff80001", "#ggg", "", "#", "red"] {
            assert!(
                matches!(Rgb::parse_hex(bad), Err(ColorError::InvalidColorFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(
            Rgb::from_components(256, 0, 0),
            Err(ColorError::OutOfRange(256))
        );
        assert_eq!(
            Rgb::from_components(0, -1, 0),
            Err(ColorError::OutOfRange(-1))
        );
        assert_eq!(Rgb::from_components(0, 0, 255), Ok(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn hex_formatting_round_trips() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(Rgb::parse_hex(&c.to_hex()), Ok(c));
        assert_eq!(c.to_hex(), "#010203");
    }

    #[test]
    fn known_hsv_values() {
        let red = Rgb::new(255, 0, 0).to_hsv();
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 100.0);
        assert_eq!(red.v, 100.0);

        let cyan = Rgb::new(0, 255, 255).to_hsv();
        assert_eq!(cyan.h, 180.0);

        let gray = Rgb::new(128, 128, 128).to_hsv();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
    }

    /// RGB -> HSV -> RGB must reproduce the exact 24-bit color. A full sweep
    /// of all 16.7M colors is too slow for a unit test, so this steps each
    /// channel and always includes the 0/255 boundaries.
    #[test]
    fn hsv_round_trip_is_exact() {
        let samples: Vec<u8> = (0..=255).step_by(5).chain([1, 254, 255]).collect();
        for &r in &samples {
            for &g in &samples {
                for &b in &samples {
                    let c = Rgb::new(r, g, b);
                    assert_eq!(c.to_hsv().to_rgb(), c, "round trip failed for {c:?}");
                }
            }
        }
    }

    #[test]
    fn achromatic_round_trip_keeps_rgb_equality() {
        // Hue is meaningless at s == 0 or v == 0; RGB equality must still hold.
        for v in [0u8, 1, 77, 200, 255] {
            let gray = Rgb::new(v, v, v);
            assert_eq!(gray.to_hsv().to_rgb(), gray);
        }
        for h in [0.0, 123.0, 359.0] {
            assert_eq!(Hsv::new(h, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        }
    }

    #[test]
    fn hue_360_wraps_to_red() {
        assert_eq!(Hsv::new(360.0, 100.0, 100.0).to_rgb(), Rgb::new(255, 0, 0));
    }
}
