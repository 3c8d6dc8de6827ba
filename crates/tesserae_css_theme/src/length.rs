use std::{fmt, str::FromStr};

use crate::ThemeError;

/// Unit of a CSS [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Percent,
}

impl LengthUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Percent => "%",
        }
    }
}

/// A numeric CSS length such as `16px` or `0.25em`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub const fn em(value: f32) -> Self {
        Self::new(value, LengthUnit::Em)
    }

    pub const fn rem(value: f32) -> Self {
        Self::new(value, LengthUnit::Rem)
    }

    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    /// Expresses this length in `em`, given the base font size in pixels.
    ///
    /// Percentages have no font-relative meaning and yield `None`.
    pub fn to_em(&self, base_font_size_px: f32) -> Option<f32> {
        match self.unit {
            LengthUnit::Em | LengthUnit::Rem => Some(self.value),
            LengthUnit::Px => Some(self.value / base_font_size_px),
            LengthUnit::Percent => None,
        }
    }
}

impl FromStr for Length {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ThemeError::InvalidLength(s.to_string());

        // `rem` has to be checked before `em`.
        let (number, unit) = if let Some(number) = trimmed.strip_suffix("rem") {
            (number, LengthUnit::Rem)
        } else if let Some(number) = trimmed.strip_suffix("em") {
            (number, LengthUnit::Em)
        } else if let Some(number) = trimmed.strip_suffix("px") {
            (number, LengthUnit::Px)
        } else if let Some(number) = trimmed.strip_suffix('%') {
            (number, LengthUnit::Percent)
        } else {
            // Unitless zero is a valid CSS length.
            return match trimmed.parse::<f32>() {
                Ok(value) if value == 0. => Ok(Length::px(0.)),
                _ => Err(invalid()),
            };
        };

        number
            .trim()
            .parse::<f32>()
            .map(|value| Length::new(value, unit))
            .map_err(|_| invalid())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.value * 10_000.).round() / 10_000.;
        write!(f, "{}{}", rounded, self.unit.suffix())
    }
}
