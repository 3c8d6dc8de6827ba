use crate::{
    AttrValue, Attributes, Element, Node, RenderContext, RenderOnce, Styled, StyledOptions, Tag,
    style::StyleDeclaration,
    theme::{BaseTheme, Variant, alias, resolve_component_theme},
};

crate::component_tokens! {
    pub enum FormFieldMessageToken for "FormFieldMessage" {
        ColorText = "FormFieldMessage_color_text" => alias("color_gray_80"),
        ColorTextDanger = "FormFieldMessage_color_text_danger" => alias("color_text_danger"),
        ColorTextSuccess = "FormFieldMessage_color_text_success" => alias("color_text_success"),
        ColorTextWarning = "FormFieldMessage_color_text_warning" => alias("color_text_warning"),
        FontSize = "FormFieldMessage_fontSize" => alias("fontSize_mouse"),
    }
}

impl FormFieldMessageToken {
    pub fn color_text(variant: Option<Variant>) -> Self {
        match variant {
            Some(Variant::Danger) => Self::ColorTextDanger,
            Some(Variant::Success) => Self::ColorTextSuccess,
            Some(Variant::Warning) => Self::ColorTextWarning,
            None => Self::ColorText,
        }
    }
}

struct MessageStyleProps {
    variant: Option<Variant>,
}

fn message_styles(props: &MessageStyleProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<FormFieldMessageToken>(base);

    StyleDeclaration::new()
        .set_opt("color", theme.get(FormFieldMessageToken::color_text(props.variant)))
        .set_opt("font-size", theme.get(FormFieldMessageToken::FontSize))
}

const ROOT: Styled<MessageStyleProps> = Styled::new(
    Tag::Div,
    message_styles,
    StyledOptions {
        display_name: Some("FormFieldMessage"),
        include_style_reset: true,
        root_el: None,
    },
);

/// Feedback text shown beneath a form field, colored by variant.
#[derive(Debug, Clone, Default)]
pub struct FormFieldMessage {
    message: Option<String>,
    variant: Option<Variant>,
    attributes: Attributes,
}

impl FormFieldMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<Option<Variant>>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl RenderOnce for FormFieldMessage {
    fn render(self, cx: &RenderContext) -> Element {
        ROOT.render(
            &MessageStyleProps {
                variant: self.variant,
            },
            cx,
            self.attributes,
            None,
            self.message.map(Node::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn test_variant_color() {
        let cx = RenderContext::default();

        for (variant, name) in [
            (None, "color_gray_80"),
            (Some(Variant::Danger), "color_text_danger"),
            (Some(Variant::Success), "color_text_success"),
            (Some(Variant::Warning), "color_text_warning"),
        ] {
            let message = FormFieldMessage::new()
                .message("Looks good")
                .variant(variant)
                .render(&cx);

            assert_eq!(message.style.get("color"), DEFAULT_THEME.get(name));
            assert_eq!(message.style.get("font-size"), DEFAULT_THEME.get("fontSize_mouse"));
            assert_eq!(message.text_content(), "Looks good");
        }
    }

    #[test]
    fn test_without_message() {
        let cx = RenderContext::default();
        let message = FormFieldMessage::new().attr("role", "alert").render(&cx);

        assert!(message.children.is_empty());
        assert_eq!(message.display_name, Some("FormFieldMessage"));
        assert_eq!(message.attributes.get("role"), Some(&AttrValue::from("alert")));
    }

    #[test]
    fn test_component_override_wins() {
        let cx = RenderContext::default().with_overrides(
            &BaseTheme::new("Override").token("FormFieldMessage_color_text_danger", "crimson"),
        );
        let message = FormFieldMessage::new().variant(Variant::Danger).render(&cx);

        assert_eq!(message.style.get("color"), Some(&crate::theme::TokenValue::from("crimson")));
    }
}
