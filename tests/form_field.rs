use std::{cell::RefCell, rc::Rc};

use tesserae_css::{
    AttrValue, Element, Node, RenderContext, RenderOnce, Tag,
    components::{
        FormField, FormFieldMessageToken, InputProps, TextInput, TextInputToken,
    },
    theme::{BaseTheme, DEFAULT_THEME, TokenValue, Variant, resolve_component_theme},
};

fn text_inputs(element: &Element) -> Vec<&Element> {
    let nested = element.child_elements().flat_map(text_inputs);

    match element.display_name {
        Some("TextInput") => std::iter::once(element).chain(nested).collect(),
        _ => nested.collect(),
    }
}

fn input_of(text_input: &Element) -> &Element {
    text_input.find_by_tag(Tag::Input).unwrap()
}

fn variant_icon_label(text_input: &Element) -> Option<&AttrValue> {
    text_input
        .child_elements()
        .filter(|element| element.tag == Tag::Svg)
        .last()?
        .attributes
        .get("aria-label")
}

#[test]
fn resolution_is_deterministic() {
    for theme in [
        DEFAULT_THEME.clone(),
        BaseTheme::new("Sparse").token("borderColor", "#000"),
        BaseTheme::new("Empty"),
    ] {
        assert_eq!(
            resolve_component_theme::<TextInputToken>(&theme),
            resolve_component_theme::<TextInputToken>(&theme)
        );
        assert_eq!(
            resolve_component_theme::<FormFieldMessageToken>(&theme),
            resolve_component_theme::<FormFieldMessageToken>(&theme)
        );
    }
}

#[test]
fn variant_token_wins_over_base_token() {
    let cx = RenderContext::default();

    for (variant, border) in [
        (Variant::Danger, "borderColor_danger"),
        (Variant::Success, "borderColor_success"),
        (Variant::Warning, "borderColor_warning"),
    ] {
        let root = TextInput::new().variant(variant).render(&cx);
        assert_eq!(input_of(&root).style.get("border-color"), DEFAULT_THEME.get(border));
    }
}

#[test]
fn disabled_tokens_ignore_variant() {
    let cx = RenderContext::default();

    for variant in [None, Some(Variant::Danger), Some(Variant::Success), Some(Variant::Warning)] {
        let root = TextInput::new().variant(variant).disabled(true).render(&cx);
        let input = input_of(&root);

        assert_eq!(input.style.get("background-color"), DEFAULT_THEME.get("backgroundColor_disabled"));
        assert_eq!(input.style.get("color"), DEFAULT_THEME.get("color_text_disabled"));
    }
}

#[test]
fn icon_padding_in_em() {
    let theme = BaseTheme::new("Padding")
        .token("fontSize_base", "16px")
        .token("space_inline_sm", "0.25em")
        .token("space_inset_md", "0.5em");
    let cx = RenderContext::new(theme);

    let root = TextInput::new()
        .icon_start(tesserae_css::components::Icon::from_path_data("M0 0z"))
        .render(&cx);

    assert_eq!(input_of(&root).style.get("padding-left"), Some(&TokenValue::from("2em")));
    assert_eq!(input_of(&root).style.get("padding-right"), Some(&TokenValue::from("0.5em")));
}

#[test]
fn form_field_variant_reaches_both_children() {
    let cx = RenderContext::default();
    let field = FormField::new("Contact")
        .variant(Variant::Danger)
        .input(TextInput::new().name("email"))
        .input(TextInput::new().name("phone"))
        .render(&cx);

    let inputs = text_inputs(&field);
    assert_eq!(inputs.len(), 2);
    for text_input in inputs {
        assert_eq!(variant_icon_label(text_input), Some(&AttrValue::from("danger")));
        assert_eq!(
            input_of(text_input).style.get("border-color"),
            DEFAULT_THEME.get("borderColor_danger")
        );
    }
}

#[test]
fn render_function_called_once_with_variant() {
    let cx = RenderContext::default();
    let calls = Rc::new(RefCell::new(Vec::new()));

    let seen = calls.clone();
    let field = FormField::new("Custom")
        .variant(Variant::Success)
        .render_inputs(move |props, _| {
            seen.borrow_mut().push(props);
            vec![Node::from("custom slot")]
        })
        .render(&cx);

    assert_eq!(*calls.borrow(), [InputProps { variant: Some(Variant::Success) }]);

    let label = field.find_by_display_name("FormFieldLabel").unwrap();
    assert!(matches!(label.children.last(), Some(Node::Text(text)) if text == "custom slot"));
}

#[test]
fn name_field_with_success_variant() {
    let cx = RenderContext::default();
    let field = FormField::new("Name")
        .variant(Variant::Success)
        .message("Looks good")
        .input(TextInput::new())
        .render(&cx);

    let label = field.find_by_display_name("FormFieldLabel").unwrap();
    let text_wrapper = label.child_elements().next().unwrap();
    assert_eq!(text_wrapper.text_content(), "Name");

    let message = field.find_by_display_name("FormFieldMessage").unwrap();
    assert_eq!(message.text_content(), "Looks good");
    assert_eq!(message.style.get("color"), DEFAULT_THEME.get("color_text_success"));

    let inputs = text_inputs(&field);
    assert_eq!(inputs.len(), 1);
    assert_eq!(variant_icon_label(inputs[0]), Some(&AttrValue::from("success")));
}
