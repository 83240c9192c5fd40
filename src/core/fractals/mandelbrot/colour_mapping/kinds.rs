use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    ContinuousHue,
    BandedGradient,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::ContinuousHue, Self::BandedGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ContinuousHue => "Continuous hue",
            Self::BandedGradient => "Banded gradient",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ContinuousHue => "continuous-hue",
            Self::BandedGradient => "banded-gradient",
        }
    }
}

impl fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapKind {
    pub name: String,
}

impl fmt::Display for UnknownColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown colour map '{}'", self.name)
    }
}

impl Error for UnknownColourMapKind {}

impl FromStr for MandelbrotColourMapKinds {
    type Err = UnknownColourMapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColourMapKind { name: s.to_owned() })
    }
}
