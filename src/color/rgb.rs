//! 8-bit RGB color and its `#RRGGBB` form

use std::fmt;
use std::str::FromStr;

use super::ColorError;

/// Color with three 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`. The first character is a marker and is not checked;
    /// channels are read from the 2-digit groups at offsets 1, 3 and 5.
    pub(crate) fn from_hex(hex: &str) -> Result<Self, ColorError> {
        if !hex.is_ascii() || hex.len() != 7 {
            return Err(ColorError::InvalidArgument(format!(
                "expected a color like #RRGGBB, got {:?}",
                hex
            )));
        }

        let channel = |offset: usize| {
            u8::from_str_radix(&hex[offset..offset + 2], 16).map_err(|_| {
                ColorError::InvalidArgument(format!("invalid hex digits in color {:?}", hex))
            })
        };

        Ok(Self::new(channel(1)?, channel(3)?, channel(5)?))
    }

    /// `#RRGGBB`, uppercase and zero-padded
    pub(crate) fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = ColorError;

    fn try_from(channels: [i64; 3]) -> Result<Self, Self::Error> {
        let mut out = [0u8; 3];
        for (slot, value) in out.iter_mut().zip(channels) {
            *slot = u8::try_from(value).map_err(|_| {
                ColorError::InvalidArgument(format!(
                    "channel value {} is outside 0..=255",
                    value
                ))
            })?;
        }
        Ok(out.into())
    }
}
