#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

/// Semantic state tag driving color selection.
///
/// The absence of a variant is expressed as `Option::<Variant>::None`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum Variant {
    #[assoc(as_str = "success")]
    Success,
    #[assoc(as_str = "warning")]
    Warning,
    #[assoc(as_str = "danger")]
    Danger,
}

/// Control heights that resolve to the theme's `size_*` tokens.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum Size {
    #[assoc(as_str = "small")]
    Small,
    #[assoc(as_str = "medium")]
    Medium,
    #[default]
    #[assoc(as_str = "large")]
    Large,
    #[assoc(as_str = "jumbo")]
    Jumbo,
}

/// Interaction states. These only ever select pseudo-class style blocks.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn selector(&self) -> &'static str)]
pub enum InteractionState {
    #[assoc(selector = "&:hover")]
    Hover,
    #[assoc(selector = "&:focus")]
    Focus,
    #[assoc(selector = "&:active")]
    Active,
}
