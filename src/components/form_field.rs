use smallvec::SmallVec;
use tracing::warn;

use crate::{
    AttrValue, Attributes, Element, Node, RenderContext, RenderOnce, Styled, StyledOptions, Tag,
    components::{
        Checkbox, FormFieldLabel, FormFieldMessage, InputProps, MergeProps, TextInput,
    },
    no_styles,
    theme::Variant,
};

const ROOT: Styled<()> = Styled::new(
    Tag::Div,
    no_styles,
    StyledOptions {
        display_name: Some("FormField"),
        include_style_reset: true,
        root_el: None,
    },
);

/// An input that a [`FormField`] can hold directly.
pub enum FormInput {
    TextInput(TextInput),
    Checkbox(Checkbox),
}

impl From<TextInput> for FormInput {
    fn from(input: TextInput) -> Self {
        Self::TextInput(input)
    }
}

impl From<Checkbox> for FormInput {
    fn from(input: Checkbox) -> Self {
        Self::Checkbox(input)
    }
}

impl MergeProps for FormInput {
    fn merge_props(self, overrides: &InputProps) -> Self {
        match self {
            Self::TextInput(input) => Self::TextInput(input.merge_props(overrides)),
            Self::Checkbox(input) => Self::Checkbox(input.merge_props(overrides)),
        }
    }
}

impl RenderOnce for FormInput {
    fn render(self, cx: &RenderContext) -> Element {
        match self {
            Self::TextInput(input) => input.render(cx),
            Self::Checkbox(input) => input.render(cx),
        }
    }
}

/// Renders a form field's inputs from the props the field derives.
pub type RenderInputs = Box<dyn FnOnce(InputProps, &RenderContext) -> Vec<Node>>;

pub enum FormFieldChildren {
    /// Inputs that receive the field's props before rendering.
    Inputs(SmallVec<[FormInput; 1]>),
    /// Called exactly once with the field's props. Its output is used as is.
    Render(RenderInputs),
}

impl Default for FormFieldChildren {
    fn default() -> Self {
        Self::Inputs(SmallVec::new())
    }
}

/// Groups one or more inputs with a label and a message, sharing one variant.
pub struct FormField {
    label: String,
    caption: Option<String>,
    caption_is_required_indicator: bool,
    hide_label: bool,
    message: Option<String>,
    variant: Option<Variant>,
    children: FormFieldChildren,
    attributes: Attributes,
}

impl FormField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            caption: None,
            caption_is_required_indicator: false,
            hide_label: false,
            message: None,
            variant: None,
            children: FormFieldChildren::default(),
            attributes: Attributes::new(),
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn caption_is_required_indicator(mut self, required: bool) -> Self {
        self.caption_is_required_indicator = required;
        self
    }

    /// Hides the label visually. It stays available to assistive technologies.
    pub fn hide_label(mut self, hide_label: bool) -> Self {
        self.hide_label = hide_label;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<Option<Variant>>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Adds an input. Replaces a render function set through
    /// [`render_inputs`](Self::render_inputs).
    pub fn input(mut self, input: impl Into<FormInput>) -> Self {
        if matches!(self.children, FormFieldChildren::Render(_)) {
            self.children = FormFieldChildren::default();
        }

        if let FormFieldChildren::Inputs(inputs) = &mut self.children {
            inputs.push(input.into());
        }
        self
    }

    /// Renders the field's inputs with `render` instead of held inputs.
    pub fn render_inputs(
        mut self,
        render: impl FnOnce(InputProps, &RenderContext) -> Vec<Node> + 'static,
    ) -> Self {
        self.children = FormFieldChildren::Render(Box::new(render));
        self
    }

    pub fn children(mut self, children: FormFieldChildren) -> Self {
        self.children = children;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl RenderOnce for FormField {
    fn render(self, cx: &RenderContext) -> Element {
        if self.label.is_empty() {
            warn!("form field rendered with an empty label");
        }

        let input_props = InputProps {
            variant: self.variant,
        };

        let inputs: Vec<Node> = match self.children {
            FormFieldChildren::Inputs(inputs) => inputs
                .into_iter()
                .map(|input| Node::from(input.merge_props(&input_props).render(cx)))
                .collect(),
            FormFieldChildren::Render(render) => render(input_props, cx),
        };

        let mut label = FormFieldLabel::new(self.label)
            .caption_is_required_indicator(self.caption_is_required_indicator)
            .hidden(self.hide_label)
            .children(inputs);
        if let Some(caption) = self.caption {
            label = label.caption(caption);
        }

        let mut message = FormFieldMessage::new().variant(self.variant);
        if let Some(text) = self.message {
            message = message.message(text);
        }

        ROOT.render(
            &(),
            cx,
            self.attributes,
            None,
            [label.render(cx), message.render(cx)].map(Node::from),
        )
    }
}
