use tracing::debug;

use crate::{
    Attributes, Element, Node, RenderContext, Tag,
    style::{StyleDeclaration, style_reset},
    theme::{BaseTheme, ThemeExt},
};

/// Computes an element's style from its props and the render tree's theme.
pub type StyleFn<P> = fn(&P, &BaseTheme) -> StyleDeclaration;

/// Style function for building blocks without styles of their own.
pub fn no_styles<P>(_props: &P, _theme: &BaseTheme) -> StyleDeclaration {
    StyleDeclaration::new()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledOptions {
    /// Debug label recorded on rendered elements.
    pub display_name: Option<&'static str>,
    /// Merge [`style_reset`] beneath the style function's output.
    pub include_style_reset: bool,
    /// Element kind whose attribute set filters pass-through attributes.
    /// Defaults to the rendered tag.
    pub root_el: Option<Tag>,
}

impl StyledOptions {
    pub const DEFAULT: Self = Self {
        display_name: None,
        include_style_reset: false,
        root_el: None,
    };
}

impl Default for StyledOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A reusable building block bound to one element kind and one style function.
pub struct Styled<P> {
    tag: Tag,
    style: StyleFn<P>,
    options: StyledOptions,
}

impl<P> Styled<P> {
    pub const fn new(tag: Tag, style: StyleFn<P>, options: StyledOptions) -> Self {
        Self {
            tag,
            style,
            options,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn options(&self) -> &StyledOptions {
        &self.options
    }

    /// Merges, in order, the style reset, the style function's output and
    /// the inline override. Later entries win key by key.
    pub fn styles(
        &self,
        props: &P,
        theme: &BaseTheme,
        inline: Option<StyleDeclaration>,
    ) -> StyleDeclaration {
        let mut style = if self.options.include_style_reset {
            style_reset(theme)
        } else {
            StyleDeclaration::new()
        };

        style.extend((self.style)(props, theme));

        if let Some(inline) = inline {
            style.extend(inline);
        }

        style
    }

    pub fn render(
        &self,
        props: &P,
        cx: &RenderContext,
        attributes: Attributes,
        inline: Option<StyleDeclaration>,
        children: impl IntoIterator<Item = Node>,
    ) -> Element {
        let root_el = self.options.root_el.unwrap_or(self.tag);

        let mut element = Element::new(self.tag)
            .style(self.styles(props, cx.get_theme(), inline))
            .children(children);
        element.display_name = self.options.display_name;

        for (name, value) in attributes {
            if root_el.accepts_attribute(&name) {
                element.attributes.set(name, value);
            } else {
                debug!(
                    attribute = %name,
                    element = root_el.as_str(),
                    display_name = self.options.display_name.unwrap_or_default(),
                    "dropping attribute not supported by the root element"
                );
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttrValue, theme::TokenValue};

    struct SwatchProps {
        dark: bool,
    }

    fn swatch_styles(props: &SwatchProps, theme: &BaseTheme) -> StyleDeclaration {
        StyleDeclaration::new()
            .set("box-sizing", "content-box")
            .set_opt(
                "color",
                theme.get(if props.dark { "color_gray_80" } else { "color_gray_10" }),
            )
    }

    const SWATCH: Styled<SwatchProps> = Styled::new(
        Tag::Div,
        swatch_styles,
        StyledOptions {
            display_name: Some("Swatch"),
            include_style_reset: true,
            root_el: None,
        },
    );

    fn cx() -> RenderContext {
        RenderContext::new(
            BaseTheme::new("Test")
                .token("color_gray_80", "#333")
                .token("color_gray_10", "#eee")
                .token("fontFamily", "serif"),
        )
    }

    #[test]
    fn test_merge_order() {
        let inline = StyleDeclaration::new().set("color", "hotpink");
        let element = SWATCH.render(&SwatchProps { dark: true }, &cx(), Attributes::new(), Some(inline), []);

        // The style function overrides the reset.
        assert_eq!(element.style.get("box-sizing"), Some(&TokenValue::from("content-box")));
        // Reset entries survive where nothing overrides them.
        assert_eq!(element.style.get("font-family"), Some(&TokenValue::from("serif")));
        // Inline styles win over everything.
        assert_eq!(element.style.get("color"), Some(&TokenValue::from("hotpink")));
        assert_eq!(element.display_name, Some("Swatch"));
    }

    #[test]
    fn test_style_fn_sees_props() {
        let element = SWATCH.render(&SwatchProps { dark: false }, &cx(), Attributes::new(), None, []);
        assert_eq!(element.style.get("color"), Some(&TokenValue::from("#eee")));
    }

    #[test]
    fn test_without_reset() {
        let plain: Styled<()> = Styled::new(Tag::Span, no_styles, StyledOptions::DEFAULT);
        let element = plain.render(&(), &cx(), Attributes::new(), None, [Node::from("text")]);

        assert!(element.style.is_empty());
        assert_eq!(element.text_content(), "text");
    }

    #[test]
    fn test_root_el_filters_attributes() {
        let attributes = Attributes::new()
            .with("id", "field")
            .with("placeholder", "Name")
            .with("variant", "danger");

        let div = SWATCH.render(&SwatchProps { dark: true }, &cx(), attributes.clone(), None, []);
        assert_eq!(div.attributes.get("id"), Some(&AttrValue::from("field")));
        assert_eq!(div.attributes.get("placeholder"), None);
        assert_eq!(div.attributes.get("variant"), None);

        let as_input: Styled<()> = Styled::new(
            Tag::Div,
            no_styles,
            StyledOptions {
                root_el: Some(Tag::Input),
                ..StyledOptions::DEFAULT
            },
        );
        let element = as_input.render(&(), &cx(), attributes, None, []);
        assert_eq!(element.attributes.get("placeholder"), Some(&AttrValue::from("Name")));
        assert_eq!(element.attributes.get("variant"), None);
    }
}
