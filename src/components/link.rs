use crate::{
    AttrValue, Attributes, Element, Node, RenderContext, RenderOnce, Styled, StyledOptions, Tag,
    style::StyleDeclaration,
    theme::{BaseTheme, InteractionState, Variant, alias, resolve_component_theme},
};

crate::component_tokens! {
    pub enum LinkToken for "Link" {
        ColorText = "Link_color_text" => alias("color_text_primary"),
        ColorTextHover = "Link_color_text_hover" => alias("color_text_primary_hover"),
        ColorTextFocus = "Link_color_text_focus" => alias("color_text_primary_focus"),
        ColorTextActive = "Link_color_text_active" => alias("color_text_primary_active"),

        ColorTextDanger = "Link_color_text_danger" => alias("color_text_danger"),
        ColorTextDangerHover = "Link_color_text_danger_hover" => alias("color_text_danger_hover"),
        ColorTextDangerFocus = "Link_color_text_danger_focus" => alias("color_text_danger_focus"),
        ColorTextDangerActive = "Link_color_text_danger_active" => alias("color_text_danger_active"),

        ColorTextSuccess = "Link_color_text_success" => alias("color_text_success"),
        ColorTextSuccessHover = "Link_color_text_success_hover" => alias("color_text_success_hover"),
        ColorTextSuccessFocus = "Link_color_text_success_focus" => alias("color_text_success_focus"),
        ColorTextSuccessActive = "Link_color_text_success_active" => alias("color_text_success_active"),

        ColorTextWarning = "Link_color_text_warning" => alias("color_text_warning"),
        ColorTextWarningHover = "Link_color_text_warning_hover" => alias("color_text_warning_hover"),
        ColorTextWarningFocus = "Link_color_text_warning_focus" => alias("color_text_warning_focus"),
        ColorTextWarningActive = "Link_color_text_warning_active" => alias("color_text_warning_active"),

        OutlineColorFocus = "Link_outlineColor_focus" => alias("borderColor_focus"),
    }
}

impl LinkToken {
    /// Text color for a variant, in its resting state or under `state`.
    pub fn color_text(variant: Option<Variant>, state: Option<InteractionState>) -> Self {
        use InteractionState::{Active, Focus, Hover};

        match (variant, state) {
            (None, None) => Self::ColorText,
            (None, Some(Hover)) => Self::ColorTextHover,
            (None, Some(Focus)) => Self::ColorTextFocus,
            (None, Some(Active)) => Self::ColorTextActive,
            (Some(Variant::Danger), None) => Self::ColorTextDanger,
            (Some(Variant::Danger), Some(Hover)) => Self::ColorTextDangerHover,
            (Some(Variant::Danger), Some(Focus)) => Self::ColorTextDangerFocus,
            (Some(Variant::Danger), Some(Active)) => Self::ColorTextDangerActive,
            (Some(Variant::Success), None) => Self::ColorTextSuccess,
            (Some(Variant::Success), Some(Hover)) => Self::ColorTextSuccessHover,
            (Some(Variant::Success), Some(Focus)) => Self::ColorTextSuccessFocus,
            (Some(Variant::Success), Some(Active)) => Self::ColorTextSuccessActive,
            (Some(Variant::Warning), None) => Self::ColorTextWarning,
            (Some(Variant::Warning), Some(Hover)) => Self::ColorTextWarningHover,
            (Some(Variant::Warning), Some(Focus)) => Self::ColorTextWarningFocus,
            (Some(Variant::Warning), Some(Active)) => Self::ColorTextWarningActive,
        }
    }
}

struct LinkStyleProps {
    variant: Option<Variant>,
}

fn link_styles(props: &LinkStyleProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<LinkToken>(base);
    let color = |state: Option<InteractionState>| theme.get(LinkToken::color_text(props.variant, state));

    // Declared in this order so `:active` wins over `:focus` and `:hover`.
    StyleDeclaration::new()
        .set_opt("color", color(None))
        .set("text-decoration", "underline")
        .nest(
            InteractionState::Hover.selector(),
            StyleDeclaration::new().set_opt("color", color(Some(InteractionState::Hover))),
        )
        .nest(
            InteractionState::Focus.selector(),
            StyleDeclaration::new()
                .set_opt("color", color(Some(InteractionState::Focus)))
                .set_opt("outline-color", theme.get(LinkToken::OutlineColorFocus))
                .set("outline-style", "solid")
                .set("outline-width", "1px"),
        )
        .nest(
            InteractionState::Active.selector(),
            StyleDeclaration::new().set_opt("color", color(Some(InteractionState::Active))),
        )
}

const ROOT: Styled<LinkStyleProps> = Styled::new(
    Tag::A,
    link_styles,
    StyledOptions {
        display_name: Some("Link"),
        include_style_reset: false,
        root_el: None,
    },
);

/// An anchor whose colors follow the variant through every interaction state.
#[derive(Debug, Clone)]
pub struct Link {
    href: String,
    variant: Option<Variant>,
    children: Vec<Node>,
    attributes: Attributes,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            variant: None,
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn variant(mut self, variant: impl Into<Option<Variant>>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl RenderOnce for Link {
    fn render(self, cx: &RenderContext) -> Element {
        let mut attributes = Attributes::new().with("href", self.href);
        attributes.extend(self.attributes);

        ROOT.render(
            &LinkStyleProps {
                variant: self.variant,
            },
            cx,
            attributes,
            None,
            self.children,
        )
    }
}
