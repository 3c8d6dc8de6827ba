use crate::theme::Variant;

/// Props a form field derives once and hands to every input it contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputProps {
    pub variant: Option<Variant>,
}

/// Typed prop merging for input components.
///
/// Every key of [`InputProps`] overrides the input's own value, including an
/// absent variant replacing a present one.
pub trait MergeProps {
    fn merge_props(self, overrides: &InputProps) -> Self;
}
