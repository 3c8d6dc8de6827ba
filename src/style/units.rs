use crate::theme::{BaseTheme, Length, LengthUnit, TokenValue};

/// Expresses `value` relative to `base` when both are `em` lengths.
///
/// A nested element whose font size is already `base` needs `value / base`
/// to end up at `value`. Other units pass through unchanged.
pub fn normalized_value(value: &TokenValue, base: Option<&TokenValue>) -> TokenValue {
    let lengths = (value.as_length(), base.and_then(TokenValue::as_length));

    match lengths {
        (
            Some(Length { value, unit: LengthUnit::Em }),
            Some(Length { value: base, unit: LengthUnit::Em }),
        ) if base != 0. => Length::em(value / base).into(),
        _ => value.clone(),
    }
}

/// Width of an inline icon plus the margin on both of its sides, in `em`.
///
/// Returns `None` when the margin is absent or not font-relative.
pub fn icon_width_including_margin(
    theme: &BaseTheme,
    icon_px: f32,
    margin: Option<Length>,
) -> Option<Length> {
    let icon = theme.px_to_em(icon_px).value;
    let margin = margin?.to_em(theme.base_font_size_px())?;

    Some(Length::em(icon + margin * 2.))
}
