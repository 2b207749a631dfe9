mod classify;
mod definitions;
mod error;
mod filter;
mod pump;
mod scanner;
mod tables;

// Re-export the items used by the binary and by downstream writers
pub use classify::{extended_color, is_extended, is_simple_color, should_decorate};
pub use definitions::{ExtendedColor, Span};
pub use error::{FilterError, Result};
pub use filter::{decorate, decorate_into, ExtendedColorFilter};
pub use pump::{pump, DEFAULT_CHUNK_SIZE};
pub use scanner::{split_spans, Spans};
pub use tables::{DECORATION_END, DECORATION_START};
