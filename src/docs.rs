use serde::Serialize;

use crate::{
    components::{
        CheckboxToken, FormFieldLabelToken, FormFieldMessageToken, IconToken, LinkToken,
        TextInputToken,
    },
    theme::{BaseTheme, ComponentToken, TokenValue, resolve_token},
};

/// One row of a component theme table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRow {
    pub name: &'static str,
    /// Absent when the base theme lacks the token's source.
    pub value: Option<TokenValue>,
}

/// The resolved theme of one component, listed token by token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentThemeDoc {
    pub component: &'static str,
    pub tokens: Vec<TokenRow>,
}

impl ComponentThemeDoc {
    pub fn of<T: ComponentToken>(base: &BaseTheme) -> Self {
        Self {
            component: T::COMPONENT,
            tokens: T::ALL
                .iter()
                .map(|&token| TokenRow {
                    name: token.name(),
                    value: resolve_token(token, base),
                })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens
            .iter()
            .find(|row| row.name == name)
            .and_then(|row| row.value.as_ref())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Documentation tables for every component, resolved against `base`.
pub fn component_theme_docs(base: &BaseTheme) -> Vec<ComponentThemeDoc> {
    vec![
        ComponentThemeDoc::of::<FormFieldLabelToken>(base),
        ComponentThemeDoc::of::<FormFieldMessageToken>(base),
        ComponentThemeDoc::of::<TextInputToken>(base),
        ComponentThemeDoc::of::<CheckboxToken>(base),
        ComponentThemeDoc::of::<IconToken>(base),
        ComponentThemeDoc::of::<LinkToken>(base),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn test_lists_every_token_in_order() {
        let doc = ComponentThemeDoc::of::<FormFieldMessageToken>(&DEFAULT_THEME);

        assert_eq!(doc.component, "FormFieldMessage");
        let names: Vec<_> = doc.tokens.iter().map(|row| row.name).collect();
        assert_eq!(
            names,
            [
                "FormFieldMessage_color_text",
                "FormFieldMessage_color_text_danger",
                "FormFieldMessage_color_text_success",
                "FormFieldMessage_color_text_warning",
                "FormFieldMessage_fontSize",
            ]
        );
        assert_eq!(doc.get("FormFieldMessage_fontSize"), Some(&TokenValue::from("0.75em")));
    }

    #[test]
    fn test_absent_rows_are_kept() {
        let doc = ComponentThemeDoc::of::<FormFieldMessageToken>(&BaseTheme::new("Empty"));

        assert_eq!(doc.tokens.len(), 5);
        assert!(doc.tokens.iter().all(|row| row.value.is_none()));
    }

    #[test]
    fn test_to_json() {
        let base = BaseTheme::new("Small").token("fontSize_mouse", "12px");
        let json = ComponentThemeDoc::of::<FormFieldMessageToken>(&base).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["component"], "FormFieldMessage");
        assert_eq!(value["tokens"][0]["value"], serde_json::Value::Null);
        assert_eq!(value["tokens"][4]["name"], "FormFieldMessage_fontSize");
        assert_eq!(value["tokens"][4]["value"], "12px");
    }

    #[test]
    fn test_every_component_documented() {
        let docs = component_theme_docs(&DEFAULT_THEME);
        let components: Vec<_> = docs.iter().map(|doc| doc.component).collect();

        assert_eq!(
            components,
            ["FormFieldLabel", "FormFieldMessage", "TextInput", "Checkbox", "Icon", "Link"]
        );
        assert!(docs.iter().all(|doc| doc.tokens.iter().all(|row| row.value.is_some())));
    }
}
