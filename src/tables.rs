use crate::definitions::ExtendedColor;

/// `ESC [`, the Control Sequence Introducer.
pub const INTRODUCER: &[u8] = b"\x1b[";

/// Final byte of an SGR sequence.
pub const TERMINATOR: u8 = b'm';

pub const LINE_FEED: u8 = b'\n';

/// Reverse video + strikethrough on.
pub const DECORATION_START: &[u8] = b"\x1b[7;9m";

/// Reverse video + strikethrough off.
pub const DECORATION_END: &[u8] = b"\x1b[27;29m";

// Prefixes are matched against the start of the parameter bytes, in this order.
pub const EXTENDED_COLORS: [ExtendedColor; 4] = [
    ExtendedColor::TrueColorForeground,
    ExtendedColor::TrueColorBackground,
    ExtendedColor::IndexedForeground,
    ExtendedColor::IndexedBackground,
];

/// Parameter string of the SGR reset sequence.
pub const RESET: &[u8] = b"0";

/// Parameter string of the bold/bright suffix accepted after a basic color.
pub const BRIGHT: &[u8] = b"1";
