use std::rc::Rc;

use crate::{
    AttrValue, Attributes, Element, Event, EventHandler, Node, RenderContext, RenderOnce, Styled,
    StyledOptions, Tag,
    components::{InputProps, MergeProps},
    style::StyleDeclaration,
    theme::{BaseTheme, Variant, alias, focus_ring, resolve_component_theme},
};

crate::component_tokens! {
    pub enum CheckboxToken for "Checkbox" {
        BackgroundColor = "Checkbox_backgroundColor" => alias("backgroundColor_input"),
        BackgroundColorChecked = "Checkbox_backgroundColor_checked" => alias("backgroundColor_checked"),
        BackgroundColorCheckedDanger = "Checkbox_backgroundColor_checked_danger" => alias("color_text_danger"),
        BackgroundColorCheckedSuccess = "Checkbox_backgroundColor_checked_success" => alias("color_text_success"),
        BackgroundColorCheckedWarning = "Checkbox_backgroundColor_checked_warning" => alias("color_text_warning"),
        BackgroundColorDisabled = "Checkbox_backgroundColor_disabled" => alias("backgroundColor_disabled"),
        BorderColor = "Checkbox_borderColor" => alias("borderColor"),
        BorderColorDanger = "Checkbox_borderColor_danger" => alias("borderColor_danger"),
        BorderColorSuccess = "Checkbox_borderColor_success" => alias("borderColor_success"),
        BorderColorWarning = "Checkbox_borderColor_warning" => alias("borderColor_warning"),
        BorderRadius = "Checkbox_borderRadius" => alias("borderRadius_1"),
        BoxShadowFocus = "Checkbox_boxShadow_focus" => focus_ring("borderColor_focus"),
        ColorText = "Checkbox_color_text" => alias("color_gray_80"),
        ColorTextDisabled = "Checkbox_color_text_disabled" => alias("color_text_disabled"),
        Gap = "Checkbox_gap" => alias("space_inline_md"),
        Size = "Checkbox_size" => alias("iconSize_medium"),
    }
}

impl CheckboxToken {
    pub fn border_color(variant: Option<Variant>) -> Self {
        match variant {
            Some(Variant::Danger) => Self::BorderColorDanger,
            Some(Variant::Success) => Self::BorderColorSuccess,
            Some(Variant::Warning) => Self::BorderColorWarning,
            None => Self::BorderColor,
        }
    }

    pub fn background_color_checked(variant: Option<Variant>) -> Self {
        match variant {
            Some(Variant::Danger) => Self::BackgroundColorCheckedDanger,
            Some(Variant::Success) => Self::BackgroundColorCheckedSuccess,
            Some(Variant::Warning) => Self::BackgroundColorCheckedWarning,
            None => Self::BackgroundColorChecked,
        }
    }
}

struct RootStyleProps {
    disabled: bool,
}

fn root_styles(props: &RootStyleProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<CheckboxToken>(base);

    let color = match props.disabled {
        true => CheckboxToken::ColorTextDisabled,
        false => CheckboxToken::ColorText,
    };

    StyleDeclaration::new()
        .set("align-items", "center")
        .set_opt("color", theme.get(color))
        .set("cursor", if props.disabled { "default" } else { "pointer" })
        .set("display", "flex")
        .set_opt("gap", theme.get(CheckboxToken::Gap))
}

struct InputStyleProps {
    disabled: bool,
    variant: Option<Variant>,
}

fn input_styles(props: &InputStyleProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<CheckboxToken>(base);

    let (background_color, border_color, checked_color) = match props.disabled {
        true => (
            CheckboxToken::BackgroundColorDisabled,
            CheckboxToken::BorderColor,
            CheckboxToken::BackgroundColorDisabled,
        ),
        false => (
            CheckboxToken::BackgroundColor,
            CheckboxToken::border_color(props.variant),
            CheckboxToken::background_color_checked(props.variant),
        ),
    };

    let focus_box_shadow = match props.disabled {
        true => None,
        false => theme.get(CheckboxToken::BoxShadowFocus),
    };

    StyleDeclaration::new()
        .set("appearance", "none")
        .set_opt("background-color", theme.get(background_color))
        .set_opt("border-color", theme.get(border_color))
        .set_opt("border-radius", theme.get(CheckboxToken::BorderRadius))
        .set("border-style", "solid")
        .set("border-width", "1px")
        .set("flex-shrink", 0)
        .set_opt("height", theme.get(CheckboxToken::Size))
        .set("margin", 0)
        .set_opt("width", theme.get(CheckboxToken::Size))
        .nest(
            "&:checked",
            StyleDeclaration::new()
                .set_opt("background-color", theme.get(checked_color))
                .set_opt("border-color", theme.get(checked_color)),
        )
        .nest(
            "&:focus",
            StyleDeclaration::new()
                .set("outline", 0)
                .set_opt("box-shadow", focus_box_shadow),
        )
}

const ROOT: Styled<RootStyleProps> = Styled::new(
    Tag::Label,
    root_styles,
    StyledOptions {
        display_name: Some("Checkbox"),
        include_style_reset: true,
        root_el: Some(Tag::Label),
    },
);

const INPUT: Styled<InputStyleProps> = Styled::new(
    Tag::Input,
    input_styles,
    StyledOptions {
        display_name: Some("CheckboxInput"),
        include_style_reset: false,
        root_el: Some(Tag::Input),
    },
);

/// A native checkbox with a text label, colored by variant.
pub struct Checkbox {
    label: String,
    checked: Option<bool>,
    default_checked: bool,
    disabled: bool,
    name: Option<String>,
    on_change: Option<EventHandler>,
    required: bool,
    value: Option<String>,
    variant: Option<Variant>,
    input_props: Attributes,
    attributes: Attributes,
}

impl Checkbox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: None,
            default_checked: false,
            disabled: false,
            name: None,
            on_change: None,
            required: false,
            value: None,
            variant: None,
            input_props: Attributes::new(),
            attributes: Attributes::new(),
        }
    }

    /// Checked state of a controlled checkbox. Takes precedence over `default_checked`.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn default_checked(mut self, default_checked: bool) -> Self {
        self.default_checked = default_checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(&Event) + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<Option<Variant>>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Attributes applied directly to the input element, rather than the label.
    pub fn input_prop(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.input_props.set(name, value);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl MergeProps for Checkbox {
    fn merge_props(mut self, overrides: &InputProps) -> Self {
        self.variant = overrides.variant;
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, cx: &RenderContext) -> Element {
        let mut input_attributes = Attributes::new()
            .with("type", "checkbox")
            .with("checked", self.checked.unwrap_or(self.default_checked))
            .with("disabled", self.disabled)
            .with_opt("name", self.name)
            .with("required", self.required)
            .with_opt("value", self.value);
        input_attributes.extend(self.input_props);

        let mut input = INPUT.render(
            &InputStyleProps {
                disabled: self.disabled,
                variant: self.variant,
            },
            cx,
            input_attributes,
            None,
            [],
        );

        if let Some(on_change) = self.on_change {
            input = input.on("change", on_change);
        }

        ROOT.render(
            &RootStyleProps {
                disabled: self.disabled,
            },
            cx,
            self.attributes,
            None,
            [
                Node::from(input),
                Node::from(Element::new(Tag::Span).child(self.label)),
            ],
        )
    }
}
