use crate::BaseTheme;

/// Access to the theme of a render tree.
///
/// The theme is threaded explicitly through rendering; implementors hand out
/// a read-only view for the lifetime of a render pass.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<BaseTheme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &BaseTheme;
}

impl ThemeExt for BaseTheme {
    fn set_theme<T: AsRef<BaseTheme>>(&mut self, theme: T) {
        *self = theme.as_ref().clone();
    }

    fn get_theme(&self) -> &BaseTheme {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_THEME;

    #[test]
    fn test_set_and_get_theme() {
        let mut theme = BaseTheme::new("Blank");
        theme.set_theme(&DEFAULT_THEME);
        assert_eq!(theme.get_theme().name, DEFAULT_THEME.name);
    }

    #[test]
    fn test_default_theme_has_sizes() {
        let theme = DEFAULT_THEME.get_theme();

        for name in ["size_small", "size_medium", "size_large", "size_jumbo"] {
            let size = theme.length(name).expect("size token should be a length");
            assert!(size.value > 0., "{name} should be positive");
        }
    }
}
