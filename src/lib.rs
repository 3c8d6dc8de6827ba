//! Theme-driven style resolution for form components.
//!
//! Components are builder structs that render into a plain [`Element`] tree.
//! Every element carries the [`StyleDeclaration`](style::StyleDeclaration)
//! computed from the render tree's [`BaseTheme`](theme::BaseTheme) and the
//! component's props.

pub mod components;

pub mod style;

pub mod theme;

mod element;
pub use element::*;

mod styled;
pub use styled::*;

mod context;
pub use context::*;

mod docs;
pub use docs::*;

mod assets;
pub use assets::*;
