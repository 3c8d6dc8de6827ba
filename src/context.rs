use std::{borrow::Cow, sync::Arc};

use crate::{
    AssetProvider, Element,
    theme::{BaseTheme, ThemeExt},
};

/// Explicit context threaded through a render pass.
///
/// Holds the render tree's theme as an immutable, shared handle. Nested
/// trees with a different theme get their own context through
/// [`with_overrides`](Self::with_overrides); the parent is never mutated.
#[derive(Clone)]
pub struct RenderContext {
    theme: Arc<BaseTheme>,
    assets: Option<Arc<dyn AssetProvider>>,
}

impl RenderContext {
    pub fn new(theme: impl Into<Arc<BaseTheme>>) -> Self {
        Self {
            theme: theme.into(),
            assets: default_assets(),
        }
    }

    /// A child context whose theme is this context's theme with `overrides` applied.
    pub fn with_overrides(&self, overrides: &BaseTheme) -> Self {
        Self {
            theme: Arc::new(self.theme.with_overrides(overrides)),
            assets: self.assets.clone(),
        }
    }

    pub fn with_assets(mut self, assets: impl AssetProvider + 'static) -> Self {
        self.assets = Some(Arc::new(assets));
        self
    }

    pub fn without_assets(mut self) -> Self {
        self.assets = None;
        self
    }

    /// Loads an asset from the context's asset provider.
    pub fn load_asset(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        self.assets.as_ref()?.get(path)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(BaseTheme::default())
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("theme", &self.theme.name)
            .field("assets", &self.assets.is_some())
            .finish()
    }
}

impl ThemeExt for RenderContext {
    fn set_theme<T: AsRef<BaseTheme>>(&mut self, theme: T) {
        self.theme = Arc::new(theme.as_ref().clone());
    }

    fn get_theme(&self) -> &BaseTheme {
        &self.theme
    }
}

/// A component that renders once into an [`Element`], consuming its props.
pub trait RenderOnce {
    fn render(self, cx: &RenderContext) -> Element;
}

fn default_assets() -> Option<Arc<dyn AssetProvider>> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "assets")] {
            Some(Arc::new(crate::TesseraeCssAssets))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DEFAULT_THEME, TokenValue};

    #[test]
    fn test_default_context_uses_default_theme() {
        let cx = RenderContext::default();
        assert_eq!(cx.get_theme().name, DEFAULT_THEME.name);
    }

    #[test]
    fn test_with_overrides_leaves_parent_untouched() {
        let parent = RenderContext::new(BaseTheme::new("Parent").token("color_gray_80", "#333"));
        let child = parent.with_overrides(&BaseTheme::new("Child").token("color_gray_80", "#000"));

        assert_eq!(
            parent.get_theme().get("color_gray_80"),
            Some(&TokenValue::from("#333"))
        );
        assert_eq!(
            child.get_theme().get("color_gray_80"),
            Some(&TokenValue::from("#000"))
        );
    }

    #[test]
    fn test_set_theme() {
        let mut cx = RenderContext::new(BaseTheme::new("Blank"));
        cx.set_theme(&DEFAULT_THEME);
        assert_eq!(cx.get_theme().name, "Default");
    }
}
