use crate::{style::StyleDeclaration, theme::BaseTheme};

/// Normalizing declaration merged beneath a component's root styles.
pub fn style_reset(theme: &BaseTheme) -> StyleDeclaration {
    StyleDeclaration::new()
        .set("box-sizing", "border-box")
        .set_opt("font-family", theme.get("fontFamily"))
        .set_opt("line-height", theme.get("lineHeight"))
        .nest(
            "& *, & *::before, & *::after",
            StyleDeclaration::new().set("box-sizing", "inherit"),
        )
}

/// Hides an element visually while keeping it available to assistive technologies.
pub fn hide_visually() -> StyleDeclaration {
    StyleDeclaration::new()
        .set("border", 0)
        .set("clip", "rect(0 0 0 0)")
        .set("height", "1px")
        .set("margin", "-1px")
        .set("overflow", "hidden")
        .set("padding", 0)
        .set("position", "absolute")
        .set("white-space", "nowrap")
        .set("width", "1px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TokenValue;

    #[test]
    fn test_reset_reads_font_tokens() {
        let theme = BaseTheme::new("Fonts").token("fontFamily", "serif");
        let reset = style_reset(&theme);

        assert_eq!(reset.get("font-family"), Some(&TokenValue::from("serif")));
        assert_eq!(reset.get("line-height"), None);
        assert!(reset.nested("& *, & *::before, & *::after").is_some());
    }

    #[test]
    fn test_hide_visually() {
        let hidden = hide_visually();
        assert_eq!(hidden.get("position"), Some(&TokenValue::from("absolute")));
        assert_eq!(hidden.get("width"), Some(&TokenValue::from("1px")));
    }
}
