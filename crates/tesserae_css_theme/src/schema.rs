use std::{ops::Deref, sync::LazyLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Length, LengthUnit, ThemeError, TokenValue,
    deserializers::{de_non_empty_name, de_tokens},
};

/// Pixel size of `1em` when the theme doesn't define `fontSize_base`.
pub const DEFAULT_BASE_FONT_SIZE_PX: f32 = 16.;

/// A flat mapping from design-token names to primitive values.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BaseTheme {
    #[serde(deserialize_with = "de_non_empty_name")]
    pub name: String,
    #[serde(deserialize_with = "de_tokens")]
    pub tokens: IndexMap<String, TokenValue>,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockTheme = LazyLockTheme::new(|| {
                BaseTheme::from_json(include_str!($path)).expect("built-in theme is valid json")
            });
        )+
    };
}

generate_builtin_themes!(["../themes/default.json", DEFAULT_THEME]);

pub struct LazyLockTheme(LazyLock<BaseTheme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> BaseTheme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = BaseTheme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<BaseTheme> for LazyLockTheme {
    fn as_ref(&self) -> &BaseTheme {
        &self.0
    }
}

impl AsRef<BaseTheme> for BaseTheme {
    fn as_ref(&self) -> &BaseTheme {
        self
    }
}

impl Default for BaseTheme {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}

impl BaseTheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: IndexMap::new(),
        }
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<BaseTheme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn token(mut self, name: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens.get(name)
    }

    pub fn length(&self, name: &str) -> Option<Length> {
        self.get(name).and_then(TokenValue::as_length)
    }

    /// Returns a new theme where every token of `overrides` replaces the
    /// token of the same name. The overriding theme's name is kept.
    pub fn with_overrides(&self, overrides: &BaseTheme) -> BaseTheme {
        debug!(
            base = %self.name,
            overrides = %overrides.name,
            count = overrides.tokens.len(),
            "overriding theme tokens"
        );

        let mut tokens = self.tokens.clone();
        tokens.extend(
            overrides
                .tokens
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        BaseTheme {
            name: overrides.name.clone(),
            tokens,
        }
    }

    /// Pixel size of `1em`, read from the `fontSize_base` token.
    pub fn base_font_size_px(&self) -> f32 {
        match self.length("fontSize_base") {
            Some(Length { value, unit: LengthUnit::Px }) if value > 0. => value,
            _ => DEFAULT_BASE_FONT_SIZE_PX,
        }
    }

    /// Converts a pixel measurement into the relative unit used by the design system.
    pub fn px_to_em(&self, px: f32) -> Length {
        Length::em(px / self.base_font_size_px())
    }
}
