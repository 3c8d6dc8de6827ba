use anyhow::Result;
use tesserae_css::{
    Element, RenderContext, RenderOnce,
    components::{Checkbox, FormField, Icon, Link, TextInput},
    component_theme_docs,
    theme::{BaseTheme, Size, ThemeExt, Variant},
};
use tracing_subscriber::EnvFilter;

const SEARCH_ICON: &str = "M15.5 14h-.79l-.28-.27A6.47 6.47 0 0 0 16 9.5 6.5 6.5 0 1 0 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z";

fn print_styles(element: &Element, depth: usize) {
    let selector = match element.display_name {
        Some(name) => format!(".{name}-{depth}"),
        None => format!("{}-{depth}", element.tag.as_str()),
    };
    print!("{}", element.style.to_css(&selector));

    for child in element.child_elements() {
        print_styles(child, depth + 1);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cx = RenderContext::default();

    let name = FormField::new("Name")
        .caption("Required")
        .caption_is_required_indicator(true)
        .message("Looks good!")
        .variant(Variant::Success)
        .input(TextInput::new().name("name").placeholder("Jane Doe"))
        .render(&cx);

    println!("{}\n", name.to_html());
    print_styles(&name, 0);

    let compact = cx.with_overrides(&BaseTheme::from_json(
        r#"{ "name": "Compact", "tokens": { "fontSize_base": "14px", "TextInput_borderRadius": "0" } }"#,
    )?);

    let search = FormField::new("Search")
        .hide_label(true)
        .input(
            TextInput::new()
                .size(Size::Small)
                .icon_start(Icon::from_path_data(SEARCH_ICON))
                .placeholder("Search"),
        )
        .input(Checkbox::new("Archived only"))
        .render(&compact);

    println!("\n{}\n", search.to_html());
    print_styles(&search, 0);

    let link = Link::new("http://example.com")
        .variant(Variant::Danger)
        .child("Delete account")
        .render(&cx);
    println!("\n{}", link.style.to_css("a.Link"));

    for doc in component_theme_docs(cx.get_theme()) {
        println!("{}", doc.to_json()?);
    }

    Ok(())
}
