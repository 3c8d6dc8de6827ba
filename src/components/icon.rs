use tracing::debug;

use crate::{
    Attributes, Element, IconKind, Node, RenderContext, RenderOnce, Styled, StyledOptions, Tag,
    style::StyleDeclaration,
    svg_path_data,
    theme::{BaseTheme, Length, TokenValue, alias, literal, resolve_component_theme},
};

crate::component_tokens! {
    pub enum IconToken for "Icon" {
        Fill = "Icon_fill" => literal("currentColor"),
        SizeSmall = "Icon_size_small" => alias("iconSize_small"),
        SizeMedium = "Icon_size_medium" => alias("iconSize_medium"),
        SizeLarge = "Icon_size_large" => alias("iconSize_large"),
    }
}

/// Icon dimensions: a themed size or an explicit length.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
    Custom(Length),
}

impl From<Length> for IconSize {
    fn from(length: Length) -> Self {
        Self::Custom(length)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum IconSource {
    Asset(String),
    PathData(String),
}

struct IconStyleProps {
    size: IconSize,
    color: Option<String>,
}

fn icon_styles(props: &IconStyleProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<IconToken>(base);

    let size = match props.size {
        IconSize::Small => theme.get(IconToken::SizeSmall).cloned(),
        IconSize::Medium => theme.get(IconToken::SizeMedium).cloned(),
        IconSize::Large => theme.get(IconToken::SizeLarge).cloned(),
        IconSize::Custom(length) => Some(length.into()),
    };

    let fill = match &props.color {
        Some(color) => Some(TokenValue::from(color.as_str())),
        None => theme.get(IconToken::Fill).cloned(),
    };

    StyleDeclaration::new()
        .set_opt("fill", fill)
        .set("flex-shrink", 0)
        .set_opt("height", size.clone())
        .set_opt("width", size)
}

const ICON: Styled<IconStyleProps> = Styled::new(
    Tag::Svg,
    icon_styles,
    StyledOptions {
        display_name: Some("Icon"),
        include_style_reset: false,
        root_el: None,
    },
);

/// An SVG icon rendered as `<svg role="img">`.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    source: IconSource,
    size: IconSize,
    color: Option<String>,
    title: Option<String>,
    attributes: Attributes,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            source: IconSource::Asset(path.into()),
            size: IconSize::default(),
            color: None,
            title: None,
            attributes: Attributes::new(),
        }
    }

    /// Creates an icon from raw SVG path data on a 24x24 view box.
    pub fn from_path_data(d: impl Into<String>) -> Self {
        Self {
            source: IconSource::PathData(d.into()),
            ..Self::new("")
        }
    }

    pub fn kind(kind: IconKind) -> Self {
        Self::new(kind.path()).title(kind.title())
    }

    pub fn size(mut self, size: impl Into<IconSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Accessible name, rendered as `aria-label`.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<crate::AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl From<IconKind> for Icon {
    fn from(kind: IconKind) -> Self {
        Self::kind(kind)
    }
}

impl RenderOnce for Icon {
    fn render(self, cx: &RenderContext) -> Element {
        let path_data = match &self.source {
            IconSource::Asset(path) => match cx.load_asset(path).map(|svg| svg_path_data(&svg)) {
                Some(Ok(path_data)) => path_data,
                Some(Err(err)) => {
                    debug!(path = %path, "invalid icon svg: {err:#}");
                    Vec::new()
                }
                None => Vec::new(),
            },
            IconSource::PathData(d) => vec![d.clone()],
        };

        if path_data.is_empty() {
            debug!(source = ?self.source, "icon has no path data");
        }

        let mut attributes = Attributes::new()
            .with("role", "img")
            .with("viewBox", "0 0 24 24")
            .with_opt("aria-label", self.title);
        attributes.extend(self.attributes);

        let props = IconStyleProps {
            size: self.size,
            color: self.color,
        };

        ICON.render(
            &props,
            cx,
            attributes,
            None,
            path_data
                .into_iter()
                .map(|d| Node::from(Element::new(Tag::Path).attr("d", d))),
        )
    }
}
