//! Design tokens for tesserae_css.
//!
//! A [`BaseTheme`] is a flat mapping from token names (`color_gray_80`,
//! `fontSize_ui`, ...) to primitive values. Themes are loaded from JSON and
//! are read-only once built; overriding a theme produces a new one.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod ext;
pub use ext::*;

mod length;
pub use length::*;

mod value;
pub use value::*;
