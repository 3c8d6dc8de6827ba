use std::borrow::Cow;

use anyhow::{Context, Result};

/// A source of static assets such as icon SVGs.
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<String>>;
}

/// Outline data (`d`) of every `<path>` in an SVG document, in document order.
pub fn svg_path_data(svg: &[u8]) -> Result<Vec<String>> {
    let svg = std::str::from_utf8(svg).context("svg is not valid utf-8")?;
    let document = roxmltree::Document::parse(svg).context("failed to parse svg")?;

    Ok(document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "path")
        .filter_map(|node| node.attribute("d"))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_path_data() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill-rule="evenodd" d="M1 21h22z"/></svg>"#;
        assert_eq!(svg_path_data(svg).unwrap(), ["M1 21h22z"]);
        assert!(svg_path_data(b"<svg></svg>").unwrap().is_empty());
    }

    #[test]
    fn test_single_quoted_attributes() {
        let svg = b"<svg viewBox='0 0 24 24'><path d='M1 1h22z'/></svg>";
        assert_eq!(svg_path_data(svg).unwrap(), ["M1 1h22z"]);
    }

    #[test]
    fn test_every_path_in_order() {
        let svg = br#"<svg><g><path d="M1 1z"/></g><path id="no-outline"/><path d="M2 2z"/></svg>"#;
        assert_eq!(svg_path_data(svg).unwrap(), ["M1 1z", "M2 2z"]);
    }

    #[test]
    fn test_malformed_svg_is_an_error() {
        assert!(svg_path_data(b"<svg><path d=\"M1 1z\"></svg>").is_err());
        assert!(svg_path_data(&[0xff, 0xfe]).is_err());
    }
}
