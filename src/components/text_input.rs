use std::rc::Rc;

use crate::{
    AttrValue, Attributes, Element, Event, EventHandler, Node, RenderContext, RenderOnce, Styled,
    StyledOptions, Tag,
    components::{Icon, InputProps, MergeProps},
    style::{StyleDeclaration, icon_width_including_margin, normalized_value},
    theme::{
        BaseTheme, InteractionState, Size, ThemeExt, TokenValue, Variant, alias, focus_ring,
        literal, resolve_component_theme,
    },
};

/// Width of an inline icon, in pixels.
pub const ICON_SIZE_PX: f32 = 24.;

crate::component_tokens! {
    pub enum TextInputToken for "TextInput" {
        BackgroundColor = "TextInput_backgroundColor" => alias("backgroundColor_input"),
        BorderColor = "TextInput_borderColor" => alias("borderColor"),
        BorderColorActive = "TextInput_borderColor_active" => alias("borderColor"),
        BorderColorFocus = "TextInput_borderColor_focus" => alias("borderColor"),
        BorderColorDanger = "TextInput_borderColor_danger" => alias("borderColor_danger"),
        BorderColorSuccess = "TextInput_borderColor_success" => alias("borderColor_success"),
        BorderColorWarning = "TextInput_borderColor_warning" => alias("borderColor_warning"),
        BorderRadius = "TextInput_borderRadius" => alias("borderRadius_1"),
        BorderWidth = "TextInput_borderWidth" => literal("1px"),
        BoxShadowActive = "TextInput_boxShadow_active" => focus_ring("borderColor_focus"),
        BoxShadowActiveDanger = "TextInput_boxShadow_active_danger" => focus_ring("borderColor_danger"),
        BoxShadowActiveSuccess = "TextInput_boxShadow_active_success" => focus_ring("borderColor_success"),
        BoxShadowActiveWarning = "TextInput_boxShadow_active_warning" => focus_ring("borderColor_warning"),
        BoxShadowFocus = "TextInput_boxShadow_focus" => focus_ring("borderColor_focus"),
        BoxShadowFocusDanger = "TextInput_boxShadow_focus_danger" => focus_ring("borderColor_danger"),
        BoxShadowFocusSuccess = "TextInput_boxShadow_focus_success" => focus_ring("borderColor_success"),
        BoxShadowFocusWarning = "TextInput_boxShadow_focus_warning" => focus_ring("borderColor_warning"),
        ColorText = "TextInput_color_text" => alias("color_gray_80"),
        ColorPlaceholder = "TextInput_color_placeholder" => alias("color_gray_60"),
        FontSize = "TextInput_fontSize" => alias("fontSize_ui"),
        HeightSmall = "TextInput_height_small" => alias("size_small"),
        HeightMedium = "TextInput_height_medium" => alias("size_medium"),
        HeightLarge = "TextInput_height_large" => alias("size_large"),
        HeightJumbo = "TextInput_height_jumbo" => alias("size_jumbo"),
        PaddingHorizontal = "TextInput_paddingHorizontal" => alias("space_inset_md"),

        IconFill = "TextInputIcon_fill" => alias("color_gray_40"),
        IconFillDanger = "TextInputIcon_fill_danger" => alias("color_text_danger"),
        IconFillSuccess = "TextInputIcon_fill_success" => alias("color_text_success"),
        IconFillWarning = "TextInputIcon_fill_warning" => alias("color_text_warning"),
        IconMarginHorizontal = "TextInputIcon_marginHorizontal" => alias("space_inline_sm"),
    }
}

impl TextInputToken {
    pub fn border_color(variant: Option<Variant>) -> Self {
        match variant {
            Some(Variant::Danger) => Self::BorderColorDanger,
            Some(Variant::Success) => Self::BorderColorSuccess,
            Some(Variant::Warning) => Self::BorderColorWarning,
            None => Self::BorderColor,
        }
    }

    /// Border color of a pseudo-class block. Variants don't apply here.
    pub fn border_color_for(state: InteractionState) -> Option<Self> {
        match state {
            InteractionState::Focus => Some(Self::BorderColorFocus),
            InteractionState::Active => Some(Self::BorderColorActive),
            InteractionState::Hover => None,
        }
    }

    pub fn box_shadow(state: InteractionState, variant: Option<Variant>) -> Option<Self> {
        let token = match (state, variant) {
            (InteractionState::Hover, _) => return None,
            (InteractionState::Focus, None) => Self::BoxShadowFocus,
            (InteractionState::Focus, Some(Variant::Danger)) => Self::BoxShadowFocusDanger,
            (InteractionState::Focus, Some(Variant::Success)) => Self::BoxShadowFocusSuccess,
            (InteractionState::Focus, Some(Variant::Warning)) => Self::BoxShadowFocusWarning,
            (InteractionState::Active, None) => Self::BoxShadowActive,
            (InteractionState::Active, Some(Variant::Danger)) => Self::BoxShadowActiveDanger,
            (InteractionState::Active, Some(Variant::Success)) => Self::BoxShadowActiveSuccess,
            (InteractionState::Active, Some(Variant::Warning)) => Self::BoxShadowActiveWarning,
        };

        Some(token)
    }

    pub fn height(size: Size) -> Self {
        match size {
            Size::Small => Self::HeightSmall,
            Size::Medium => Self::HeightMedium,
            Size::Large => Self::HeightLarge,
            Size::Jumbo => Self::HeightJumbo,
        }
    }

    pub fn icon_fill(variant: Option<Variant>) -> Self {
        match variant {
            Some(Variant::Danger) => Self::IconFillDanger,
            Some(Variant::Success) => Self::IconFillSuccess,
            Some(Variant::Warning) => Self::IconFillWarning,
            None => Self::IconFill,
        }
    }
}

struct InputStyleProps {
    disabled: bool,
    read_only: bool,
    icon_start: bool,
    icon_end: bool,
    size: Size,
    variant: Option<Variant>,
}

fn input_styles(props: &InputStyleProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<TextInputToken>(base);
    let locked = props.disabled || props.read_only;

    let icon_width = icon_width_including_margin(
        base,
        ICON_SIZE_PX,
        theme.length(TextInputToken::IconMarginHorizontal),
    )
    .map(TokenValue::from);
    let padding = theme.get(TextInputToken::PaddingHorizontal).cloned();

    let padding_left = match props.icon_start {
        true => icon_width.clone(),
        false => padding.clone(),
    };
    let padding_right = match props.icon_end || props.variant.is_some() {
        true => icon_width,
        false => padding,
    };

    let background_color = match locked {
        true => base.get("backgroundColor_disabled"),
        false => theme.get(TextInputToken::BackgroundColor),
    };
    let border_color = match locked {
        true => theme.get(TextInputToken::BorderColor),
        false => theme.get(TextInputToken::border_color(props.variant)),
    };
    let color = match props.disabled {
        true => base.get("color_text_disabled"),
        false => theme.get(TextInputToken::ColorText),
    };
    let font_size = theme
        .get(TextInputToken::FontSize)
        .map(|font_size| normalized_value(font_size, base.get("fontSize_ui")));

    let active_box_shadow = match props.disabled {
        true => Some(TokenValue::from("none")),
        false => TextInputToken::box_shadow(InteractionState::Active, props.variant)
            .and_then(|token| theme.get(token).cloned()),
    };

    let state_block = |state: InteractionState, box_shadow: Option<TokenValue>| {
        StyleDeclaration::new()
            .set_opt(
                "border-color",
                TextInputToken::border_color_for(state).and_then(|token| theme.get(token)),
            )
            .set_opt("box-shadow", box_shadow)
    };

    let focus_box_shadow = TextInputToken::box_shadow(InteractionState::Focus, props.variant)
        .and_then(|token| theme.get(token).cloned());

    StyleDeclaration::new()
        .set_opt("background-color", background_color)
        .set_opt("border-color", border_color)
        .set_opt("border-radius", theme.get(TextInputToken::BorderRadius))
        .set("border-style", "solid")
        .set_opt("border-width", theme.get(TextInputToken::BorderWidth))
        .set_opt("color", color)
        .set("font-family", "inherit")
        .set_opt("font-size", font_size)
        .set_opt("height", theme.get(TextInputToken::height(props.size)))
        .set("outline", 0)
        .set("padding-bottom", 0)
        .set_opt("padding-left", padding_left)
        .set_opt("padding-right", padding_right)
        .set("padding-top", 0)
        .set("width", "100%")
        .nest(
            "&::placeholder",
            StyleDeclaration::new()
                .set_opt("color", theme.get(TextInputToken::ColorPlaceholder))
                .set("font-style", "italic"),
        )
        .nest(
            InteractionState::Focus.selector(),
            state_block(InteractionState::Focus, focus_box_shadow),
        )
        .nest(
            InteractionState::Active.selector(),
            state_block(InteractionState::Active, active_box_shadow),
        )
}

struct RootStyleProps {
    variant: Option<Variant>,
}

fn root_styles(props: &RootStyleProps, base: &BaseTheme) -> StyleDeclaration {
    let theme = resolve_component_theme::<TextInputToken>(base);
    let margin = theme
        .get(TextInputToken::IconMarginHorizontal)
        .map(|margin| format!("0 {margin}"));

    StyleDeclaration::new()
        .set("align-items", "center")
        .set("display", "flex")
        .set("position", "relative")
        .nest(
            "& [role=\"img\"]",
            StyleDeclaration::new()
                .set_opt("fill", theme.get(TextInputToken::IconFill))
                .set_opt("margin", margin)
                .set("pointer-events", "none")
                .set("position", "absolute")
                .nest("&:first-child", StyleDeclaration::new().set("left", 0))
                .nest(
                    "&:last-child",
                    StyleDeclaration::new()
                        .set_opt("fill", theme.get(TextInputToken::icon_fill(props.variant)))
                        .set("right", 0),
                ),
        )
}

const ROOT: Styled<RootStyleProps> = Styled::new(
    Tag::Div,
    root_styles,
    StyledOptions {
        display_name: Some("TextInput"),
        include_style_reset: true,
        root_el: None,
    },
);

const INPUT: Styled<InputStyleProps> = Styled::new(
    Tag::Input,
    input_styles,
    StyledOptions {
        display_name: Some("Input"),
        include_style_reset: false,
        root_el: Some(Tag::Input),
    },
);

/// A single-line text field with optional icons and variant styling.
pub struct TextInput {
    default_value: Option<String>,
    disabled: bool,
    icon_start: Option<Icon>,
    icon_end: Option<Icon>,
    input_ref: Option<Box<dyn FnOnce(&Element)>>,
    input_props: Attributes,
    invalid: bool,
    name: Option<String>,
    on_change: Option<EventHandler>,
    placeholder: Option<String>,
    read_only: bool,
    required: bool,
    size: Size,
    input_type: String,
    value: Option<String>,
    variant: Option<Variant>,
    attributes: Attributes,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            default_value: None,
            disabled: false,
            icon_start: None,
            icon_end: None,
            input_ref: None,
            input_props: Attributes::new(),
            invalid: false,
            name: None,
            on_change: None,
            placeholder: None,
            read_only: false,
            required: false,
            size: Size::default(),
            input_type: "text".to_string(),
            value: None,
            variant: None,
            attributes: Attributes::new(),
        }
    }

    /// Initial value of an uncontrolled input.
    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn icon_start(mut self, icon: impl Into<Icon>) -> Self {
        self.icon_start = Some(icon.into());
        self
    }

    /// Icon at the end of the input. A variant icon takes its place when a variant is set.
    pub fn icon_end(mut self, icon: impl Into<Icon>) -> Self {
        self.icon_end = Some(icon.into());
        self
    }

    /// Called with the rendered input element.
    pub fn input_ref(mut self, input_ref: impl FnOnce(&Element) + 'static) -> Self {
        self.input_ref = Some(Box::new(input_ref));
        self
    }

    /// Attributes applied directly to the input element, rather than the wrapper.
    pub fn input_prop(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.input_props.set(name, value);
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
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

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Value of a controlled input. A controlled input ignores `default_value`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<Option<Variant>>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Attribute passed through to the wrapping element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

impl MergeProps for TextInput {
    fn merge_props(mut self, overrides: &InputProps) -> Self {
        self.variant = overrides.variant;
        self
    }
}

impl RenderOnce for TextInput {
    fn render(self, cx: &RenderContext) -> Element {
        let icon_size = cx.get_theme().px_to_em(ICON_SIZE_PX);

        let input_style_props = InputStyleProps {
            disabled: self.disabled,
            read_only: self.read_only,
            icon_start: self.icon_start.is_some(),
            icon_end: self.icon_end.is_some(),
            size: self.size,
            variant: self.variant,
        };

        let (start_icon, end_icon) = match self.disabled || self.read_only {
            true => (None, None),
            false => {
                let end_icon = match self.variant {
                    Some(variant) => Some(Icon::kind(variant.into())),
                    None => self.icon_end,
                };
                (self.icon_start, end_icon)
            }
        };

        let input_attributes = Attributes::new()
            .with_opt("aria-invalid", self.invalid.then_some(true))
            .with_opt("aria-required", self.required.then_some(true))
            .with("disabled", self.disabled)
            .with_opt("name", self.name)
            .with_opt("placeholder", self.placeholder)
            .with("readonly", self.read_only)
            .with("required", self.required)
            .with("type", self.input_type);
        let mut input_attributes = match self.value {
            Some(value) => input_attributes.with("value", value),
            None => input_attributes.with_opt("defaultValue", self.default_value),
        };
        input_attributes.extend(self.input_props);

        let mut input = INPUT.render(&input_style_props, cx, input_attributes, None, []);

        if let Some(on_change) = self.on_change {
            input = input.on("change", on_change);
        }

        if let Some(input_ref) = self.input_ref {
            input_ref(&input);
        }

        let children = [
            start_icon.map(|icon| icon.size(icon_size).render(cx)),
            Some(input),
            end_icon.map(|icon| icon.size(icon_size).render(cx)),
        ]
        .into_iter()
        .flatten()
        .map(Node::from);

        ROOT.render(
            &RootStyleProps {
                variant: self.variant,
            },
            cx,
            self.attributes,
            None,
            children,
        )
    }
}
