use crate::definitions::ExtendedColor;
use crate::tables::{BRIGHT, EXTENDED_COLORS, RESET};

/// Reports whether SGR parameters select one of the 16 standard colors.
///
/// Accepts the reset `0`, a basic color `30`-`37` / `40`-`47`, and a basic
/// color followed by the bright suffix `;1`. Nothing else qualifies.
pub fn is_simple_color(params: &[u8]) -> bool {
    if params.is_empty() {
        return false;
    }
    if params == RESET {
        return true;
    }

    let mut fields = params.split(|&b| b == b';');
    let color = fields.next().unwrap_or_default();
    let suffix = fields.next();
    if fields.next().is_some() {
        return false;
    }

    let is_basic = matches!(color, [b'3' | b'4', b'0'..=b'7']);
    match suffix {
        None => is_basic,
        Some(suffix) => is_basic && suffix == BRIGHT,
    }
}

/// Returns the extended color model selected by the leading parameters.
///
/// Only the prefix is inspected; the component values that follow are
/// never validated.
pub fn extended_color(params: &[u8]) -> Option<ExtendedColor> {
    EXTENDED_COLORS
        .into_iter()
        .find(|color| params.starts_with(color.prefix()))
}

pub fn is_extended(params: &[u8]) -> bool {
    extended_color(params).is_some()
}

/// Whether the text following a sequence with these parameters gets wrapped.
pub fn should_decorate(params: &[u8]) -> bool {
    !is_simple_color(params) && is_extended(params)
}
