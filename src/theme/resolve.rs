use std::{fmt::Debug, hash::Hash};

use indexmap::IndexMap;
use tracing::trace;

use crate::theme::{BaseTheme, Length, TokenValue};

/// Where a component token takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Copies a base theme token.
    Alias(&'static str),
    /// A fixed value independent of the base theme.
    Literal(&'static str),
    /// A two-ring focus shadow: a white gap followed by the given base color.
    FocusRing(&'static str),
}

pub const fn alias(name: &'static str) -> TokenSource {
    TokenSource::Alias(name)
}

pub const fn literal(value: &'static str) -> TokenSource {
    TokenSource::Literal(value)
}

pub const fn focus_ring(color: &'static str) -> TokenSource {
    TokenSource::FocusRing(color)
}

/// A typed, component-scoped design token.
///
/// Implemented through [`component_tokens!`](crate::component_tokens).
pub trait ComponentToken: Copy + Eq + Hash + Debug + 'static {
    /// Component name, used as the token name prefix.
    const COMPONENT: &'static str;
    /// Every token of the component, in declaration order.
    const ALL: &'static [Self];

    /// Canonical token name, e.g. `TextInput_borderColor_danger`.
    fn name(&self) -> &'static str;

    fn source(&self) -> TokenSource;
}

/// Declares a component token enum and its [`ComponentToken`] implementation.
///
/// ```ignore
/// component_tokens! {
///     pub enum BadgeToken for "Badge" {
///         Color = "Badge_color" => alias("color_gray_80"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! component_tokens {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $component:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal => $source:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::theme::ComponentToken for $name {
            const COMPONENT: &'static str = $component;
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token ),+
                }
            }

            fn source(&self) -> $crate::theme::TokenSource {
                match self {
                    $( Self::$variant => $source ),+
                }
            }
        }
    };
}

/// Token values of one component, resolved from a [`BaseTheme`].
///
/// Only tokens whose source is present in the base theme are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTheme<T: ComponentToken> {
    values: IndexMap<T, TokenValue>,
}

impl<T: ComponentToken> ComponentTheme<T> {
    pub fn get(&self, token: T) -> Option<&TokenValue> {
        self.values.get(&token)
    }

    pub fn length(&self, token: T) -> Option<Length> {
        self.get(token).and_then(TokenValue::as_length)
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, &TokenValue)> {
        self.values.iter().map(|(token, value)| (*token, value))
    }

    /// Pairs of canonical token name and value.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, &TokenValue)> {
        self.iter().map(|(token, value)| (token.name(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Derives a component's theme from the base theme.
///
/// A base theme token carrying the component token's own name takes
/// precedence over the token's declared source. Missing base tokens leave the
/// component token absent.
pub fn resolve_component_theme<T: ComponentToken>(base: &BaseTheme) -> ComponentTheme<T> {
    let mut values = IndexMap::with_capacity(T::ALL.len());

    for &token in T::ALL {
        match resolve_token(token, base) {
            Some(value) => {
                values.insert(token, value);
            }
            None => trace!(
                component = T::COMPONENT,
                token = token.name(),
                theme = %base.name,
                "component token is absent"
            ),
        }
    }

    ComponentTheme { values }
}

/// Resolves a single component token without building the whole theme.
pub fn resolve_token<T: ComponentToken>(token: T, base: &BaseTheme) -> Option<TokenValue> {
    if let Some(value) = base.get(token.name()) {
        return Some(value.clone());
    }

    match token.source() {
        TokenSource::Alias(name) => base.get(name).cloned(),
        TokenSource::Literal(value) => Some(TokenValue::from(value)),
        TokenSource::FocusRing(color) => {
            let gap = base.get("color_white")?;
            let ring = base.get(color)?;
            Some(TokenValue::from(format!("0 0 0 1px {gap}, 0 0 0 2px {ring}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::component_tokens! {
        enum SwatchToken for "Swatch" {
            Color = "Swatch_color" => alias("color_gray_80"),
            BorderWidth = "Swatch_borderWidth" => literal("1px"),
            BoxShadowFocus = "Swatch_boxShadow_focus" => focus_ring("borderColor_focus"),
            Missing = "Swatch_missing" => alias("not_a_token"),
        }
    }

    fn base() -> BaseTheme {
        BaseTheme::new("Test")
            .token("color_gray_80", "#333")
            .token("color_white", "#fff")
            .token("borderColor_focus", "#00f")
    }

    #[test]
    fn test_resolves_every_source_kind() {
        let theme = resolve_component_theme::<SwatchToken>(&base());

        assert_eq!(theme.get(SwatchToken::Color), Some(&TokenValue::from("#333")));
        assert_eq!(theme.get(SwatchToken::BorderWidth), Some(&TokenValue::from("1px")));
        assert_eq!(
            theme.get(SwatchToken::BoxShadowFocus),
            Some(&TokenValue::from("0 0 0 1px #fff, 0 0 0 2px #00f"))
        );
    }

    #[test]
    fn test_missing_sources_are_absent() {
        let theme = resolve_component_theme::<SwatchToken>(&base());
        assert_eq!(theme.get(SwatchToken::Missing), None);
        assert_eq!(theme.len(), 3);

        let theme = resolve_component_theme::<SwatchToken>(&BaseTheme::new("Empty"));
        assert_eq!(theme.get(SwatchToken::BoxShadowFocus), None);
        assert_eq!(theme.get(SwatchToken::BorderWidth), Some(&TokenValue::from("1px")));
    }

    #[test]
    fn test_component_named_token_overrides_source() {
        let base = base().token("Swatch_color", "#c0ffee");
        let theme = resolve_component_theme::<SwatchToken>(&base);
        assert_eq!(theme.get(SwatchToken::Color), Some(&TokenValue::from("#c0ffee")));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let base = BaseTheme::default();
        let first = resolve_component_theme::<SwatchToken>(&base);
        let second = resolve_component_theme::<SwatchToken>(&base);
        assert_eq!(first, second);

        let names: Vec<_> = first.named().map(|(name, _)| name).collect();
        assert_eq!(names[0], "Swatch_color");
    }
}
