#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::theme::Variant;

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn path(&self) -> &'static str)]
#[func(pub fn title(&self) -> &'static str)]
pub enum IconKind {
    /// Shown at the end of inputs in the danger variant.
    #[assoc(path = "icons/danger.svg")]
    #[assoc(title = "danger")]
    Danger,

    /// Shown at the end of inputs in the success variant.
    #[assoc(path = "icons/success.svg")]
    #[assoc(title = "success")]
    Success,

    /// Shown at the end of inputs in the warning variant.
    #[assoc(path = "icons/warning.svg")]
    #[assoc(title = "warning")]
    Warning,
}

impl From<Variant> for IconKind {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Danger => Self::Danger,
            Variant::Success => Self::Success,
            Variant::Warning => Self::Warning,
        }
    }
}
