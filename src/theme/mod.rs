//! Theme system: base design tokens and per-component token resolution.
//!
//! A [`BaseTheme`] is supplied once per render tree. Components derive their
//! own [`ComponentTheme`] from it on every render through
//! [`resolve_component_theme`].

pub use tesserae_css_theme::*;

mod kinds;
pub use kinds::*;

mod resolve;
pub use resolve::*;
