use crate::{
    AttrValue, Attributes, Element, Node, RenderContext, RenderOnce, Styled, StyledOptions, Tag,
    no_styles,
    style::{StyleDeclaration, hide_visually},
    theme::{BaseTheme, alias, resolve_component_theme},
};

crate::component_tokens! {
    pub enum FormFieldLabelToken for "FormFieldLabel" {
        ColorText = "FormFieldLabel_color_text" => alias("color_gray_80"),
        FontSize = "FormFieldLabel_fontSize" => alias("fontSize_ui"),
        FontWeight = "FormFieldLabel_fontWeight" => alias("fontWeight_semiBold"),
        MarginBottom = "FormFieldLabel_marginBottom" => alias("space_stack_sm"),

        CaptionFontSize = "FormFieldLabelCaption_fontSize" => alias("fontSize_mouse"),
        CaptionColorText = "FormFieldLabelCaption_color_text" => alias("color_gray_80"),
        CaptionColorTextRequired = "FormFieldLabelCaption_color_text_required" => alias("color_text_danger"),
    }
}

struct TextWrapperProps {
    hidden: bool,
}

fn text_wrapper_styles(props: &TextWrapperProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<FormFieldLabelToken>(base);

    let style = StyleDeclaration::new()
        .set_opt("color", theme.get(FormFieldLabelToken::ColorText))
        .set("display", "flex")
        .set_opt("font-size", theme.get(FormFieldLabelToken::FontSize))
        .set_opt("font-weight", theme.get(FormFieldLabelToken::FontWeight))
        .set("justify-content", "space-between")
        .set_opt("margin-bottom", theme.get(FormFieldLabelToken::MarginBottom));

    let style = match props.hidden {
        true => style.merge(hide_visually()),
        false => style,
    };

    style.nest(
        "& > *",
        StyleDeclaration::new()
            .set("align-self", "flex-end")
            .set("display", "inline-block"),
    )
}

struct CaptionProps {
    required_indicator: bool,
}

fn caption_styles(props: &CaptionProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<FormFieldLabelToken>(base);

    let color = match props.required_indicator {
        true => FormFieldLabelToken::CaptionColorTextRequired,
        false => FormFieldLabelToken::CaptionColorText,
    };

    StyleDeclaration::new()
        .set_opt("color", theme.get(color))
        .set_opt("font-size", theme.get(FormFieldLabelToken::CaptionFontSize))
}

const ROOT: Styled<()> = Styled::new(
    Tag::Label,
    no_styles,
    StyledOptions {
        display_name: Some("FormFieldLabel"),
        include_style_reset: true,
        root_el: Some(Tag::Label),
    },
);

const TEXT_WRAPPER: Styled<TextWrapperProps> =
    Styled::new(Tag::Div, text_wrapper_styles, StyledOptions::DEFAULT);

const CAPTION: Styled<CaptionProps> = Styled::new(Tag::Span, caption_styles, StyledOptions::DEFAULT);

/// The `<label>` of a form field, wrapping the field's inputs.
pub struct FormFieldLabel {
    text: String,
    caption: Option<String>,
    caption_is_required_indicator: bool,
    hidden: bool,
    children: Vec<Node>,
    attributes: Attributes,
}

impl FormFieldLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            caption: None,
            caption_is_required_indicator: false,
            hidden: false,
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Styles the caption as a "required" marker.
    pub fn caption_is_required_indicator(mut self, required: bool) -> Self {
        self.caption_is_required_indicator = required;
        self
    }

    /// Hides the label text visually. It stays available to assistive technologies.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl RenderOnce for FormFieldLabel {
    fn render(self, cx: &RenderContext) -> Element {
        let caption = self.caption.map(|caption| {
            CAPTION.render(
                &CaptionProps {
                    required_indicator: self.caption_is_required_indicator,
                },
                cx,
                Attributes::new(),
                None,
                [Node::from(caption)],
            )
        });

        let text = Element::new(Tag::Span).child(self.text);

        let text_wrapper = TEXT_WRAPPER.render(
            &TextWrapperProps {
                hidden: self.hidden,
            },
            cx,
            Attributes::new(),
            None,
            std::iter::once(text).chain(caption).map(Node::from),
        );

        ROOT.render(
            &(),
            cx,
            self.attributes,
            None,
            std::iter::once(Node::from(text_wrapper)).chain(self.children),
        )
    }
}
