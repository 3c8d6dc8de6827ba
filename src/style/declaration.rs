use std::fmt::Write;

use indexmap::IndexMap;

use crate::theme::TokenValue;

/// One entry of a [`StyleDeclaration`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    /// A CSS property value.
    Value(TokenValue),
    /// A block scoped by a selector relative to `&`, e.g. `&:focus`.
    Nested(StyleDeclaration),
}

/// An ordered mapping from CSS property (or nested selector) to value.
///
/// Declarations compose with [`merge`](Self::merge): later declarations win
/// on conflicting keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDeclaration {
    entries: IndexMap<String, StyleEntry>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &str, value: impl Into<TokenValue>) -> Self {
        self.insert(property, StyleEntry::Value(value.into()));
        self
    }

    /// Sets `property` if a value is present. Absent values emit nothing.
    pub fn set_opt<V: Into<TokenValue>>(self, property: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    /// Adds a nested block. Blocks under the same selector are merged.
    pub fn nest(mut self, selector: &str, block: StyleDeclaration) -> Self {
        self.insert(selector, StyleEntry::Nested(block));
        self
    }

    /// Inserts an entry, merging nested blocks recursively and replacing anything else.
    pub fn insert(&mut self, key: &str, entry: StyleEntry) {
        if let Some(existing) = self.entries.get_mut(key) {
            match (existing, entry) {
                (StyleEntry::Nested(existing), StyleEntry::Nested(block)) => existing.extend(block),
                (existing, entry) => *existing = entry,
            }
            return;
        }

        self.entries.insert(key.to_string(), entry);
    }

    /// Applies `other` on top of this declaration, key by key.
    pub fn extend(&mut self, other: StyleDeclaration) {
        for (key, entry) in other.entries {
            self.insert(&key, entry);
        }
    }

    pub fn merge(mut self, other: StyleDeclaration) -> Self {
        self.extend(other);
        self
    }

    pub fn get(&self, property: &str) -> Option<&TokenValue> {
        match self.entries.get(property)? {
            StyleEntry::Value(value) => Some(value),
            StyleEntry::Nested(_) => None,
        }
    }

    pub fn nested(&self, selector: &str) -> Option<&StyleDeclaration> {
        match self.entries.get(selector)? {
            StyleEntry::Nested(block) => Some(block),
            StyleEntry::Value(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the declaration into CSS rules rooted at `selector`.
    ///
    /// Nested selectors substitute `&` with the parent selector; selectors
    /// without `&` are treated as descendants. Empty blocks are skipped.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::new();
        self.write_css(selector, &mut css);
        css
    }

    fn write_css(&self, selector: &str, css: &mut String) {
        let mut properties = self
            .iter()
            .filter_map(|(property, entry)| match entry {
                StyleEntry::Value(value) => Some((property, value)),
                StyleEntry::Nested(_) => None,
            })
            .peekable();

        if properties.peek().is_some() {
            let _ = writeln!(css, "{selector} {{");
            for (property, value) in properties {
                let _ = writeln!(css, "  {property}: {value};");
            }
            css.push_str("}\n");
        }

        for (nested_selector, entry) in self.iter() {
            if let StyleEntry::Nested(block) = entry {
                block.write_css(&resolve_selector(selector, nested_selector), css);
            }
        }
    }
}

fn resolve_selector(parent: &str, nested: &str) -> String {
    nested
        .split(',')
        .map(str::trim)
        .map(|part| {
            if part.contains('&') {
                part.replace('&', parent)
            } else {
                format!("{parent} {part}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_declarations_win() {
        let base = StyleDeclaration::new()
            .set("color", "red")
            .set("display", "flex");
        let merged = base.merge(StyleDeclaration::new().set("color", "blue"));

        assert_eq!(merged.get("color"), Some(&TokenValue::from("blue")));
        assert_eq!(merged.get("display"), Some(&TokenValue::from("flex")));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_nested_blocks_merge_recursively() {
        let base = StyleDeclaration::new().nest(
            "&:focus",
            StyleDeclaration::new()
                .set("border-color", "gray")
                .set("box-shadow", "none"),
        );
        let merged = base.merge(
            StyleDeclaration::new().nest("&:focus", StyleDeclaration::new().set("box-shadow", "0 0 1px blue")),
        );

        let focus = merged.nested("&:focus").unwrap();
        assert_eq!(focus.get("border-color"), Some(&TokenValue::from("gray")));
        assert_eq!(focus.get("box-shadow"), Some(&TokenValue::from("0 0 1px blue")));
    }

    #[test]
    fn test_absent_values_emit_nothing() {
        let style = StyleDeclaration::new()
            .set_opt("color", None::<TokenValue>)
            .set_opt("height", Some("2em"));

        assert_eq!(style.get("color"), None);
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_to_css() {
        let style = StyleDeclaration::new()
            .set("color", "red")
            .set("font-weight", 600)
            .nest(
                "& [role=\"img\"]",
                StyleDeclaration::new()
                    .set("fill", "gray")
                    .nest("&:last-child", StyleDeclaration::new().set("right", 0)),
            )
            .nest("&:invalid", StyleDeclaration::new());

        assert_eq!(
            style.to_css(".field"),
            ".field {\n  color: red;\n  font-weight: 600;\n}\n\
             .field [role=\"img\"] {\n  fill: gray;\n}\n\
             .field [role=\"img\"]:last-child {\n  right: 0;\n}\n"
        );
    }

    #[test]
    fn test_selector_lists() {
        assert_eq!(
            resolve_selector(".a", "& *, & *::before"),
            ".a *, .a *::before"
        );
        assert_eq!(resolve_selector(".a", "span"), ".a span");
    }
}
