//! Color schemes from [ColorBrewer](https://colorbrewer2.org/), by Cynthia Brewer.
//!
//! Only the diverging schemes used for temperature maps are carried here.

use std::str::FromStr;

mod schemes;

/// An error in looking up or parsing a color.
pub enum Error {
    UnknownScheme(String),
    ClassCount { scheme: Scheme, requested: usize },
    InvalidHex(String),
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownScheme(s) => write!(f, "Error::UnknownScheme({:?})", s),
            Error::ClassCount { scheme, requested } => {
                write!(f, "Error::ClassCount({:?}, {})", scheme, requested)
            }
            Error::InvalidHex(s) => write!(f, "Error::InvalidHex({:?})", s),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownScheme(s) => write!(f, "unknown color scheme: {:?}", s),
            Error::ClassCount { scheme, requested } => write!(
                f,
                "{} has {} to {} classes, not {}",
                scheme,
                Scheme::CLASSES.start(),
                Scheme::CLASSES.end(),
                requested
            ),
            Error::InvalidHex(s) => write!(f, "not a #rrggbb color: {:?}", s),
        }
    }
}

impl core::error::Error for Error {}

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Parse a color from `#rrggbb` notation.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidHex(s.to_owned());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Color(rgb))
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    /// Lowercase `#rrggbb` notation.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

/// A named ColorBrewer scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Diverging red - yellow - blue.
    #[default]
    RdYlBu,
    /// Diverging red - white - blue.
    RdBu,
}

impl Scheme {
    /// Number of classes every scheme here is published with.
    pub const CLASSES: core::ops::RangeInclusive<usize> = 3..=11;

    pub const ALL: [Scheme; 2] = [Scheme::RdYlBu, Scheme::RdBu];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::RdYlBu => "RdYlBu",
            Scheme::RdBu => "RdBu",
        }
    }

    /// Get the palette of this scheme with `classes` colors.
    ///
    /// Colors run from the red end to the blue end.
    pub fn palette(&self, classes: usize) -> Result<Palette, Error> {
        if !Self::CLASSES.contains(&classes) {
            return Err(Error::ClassCount {
                scheme: *self,
                requested: classes,
            });
        }
        let table = match self {
            Scheme::RdYlBu => schemes::RD_YL_BU,
            Scheme::RdBu => schemes::RD_BU,
        };
        let colors = table[classes - Self::CLASSES.start()]
            .iter()
            .map(|hex| Color::from_hex(hex))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Palette { colors })
    }
}

impl core::fmt::Display for Scheme {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownScheme(s.to_owned()))
    }
}

/// An ordered list of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The same colors, in the opposite order.
    pub fn reversed(mut self) -> Self {
        self.colors.reverse();
        self
    }
}

impl From<Palette> for Vec<Color> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}
