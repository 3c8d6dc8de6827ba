use std::borrow::Cow;

use anyhow::Result;
use rust_embed::RustEmbed;

use crate::assets::assets::AssetProvider;

/// Embedded assets bundled with the tesserae_css crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct TesseraeCssAssets;

impl AssetProvider for TesseraeCssAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(TesseraeCssAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into_owned()))
            .collect())
    }
}
