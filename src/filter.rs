use std::io::{self, Write};

use log::{debug, trace};

use crate::classify::{extended_color, should_decorate};
use crate::definitions::Span;
use crate::error::{FilterError, Result};
use crate::scanner::split_spans;
use crate::tables::{DECORATION_END, DECORATION_START, INTRODUCER, LINE_FEED, TERMINATOR};

/// Flags text colored with truecolor or 256-color SGR sequences.
///
/// Each chunk is decorated on its own and written to the sink in a single
/// `write_all`. The sequences themselves are copied verbatim; only the text
/// after an extended-color sequence, up to the next line feed or `ESC [`, is
/// wrapped in reverse video + strikethrough.
#[derive(Debug)]
pub struct ExtendedColorFilter<W: Write> {
    inner: W,
}

impl<W: Write> ExtendedColorFilter<W> {
    pub fn new(inner: W) -> ExtendedColorFilter<W> {
        ExtendedColorFilter { inner }
    }

    /// Decorates `chunk` and hands the result to the sink.
    ///
    /// Returns the number of input bytes accepted, which is always
    /// `chunk.len()`; the output may be longer.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Sink`] if the sink rejects the write.
    pub fn transform(&mut self, chunk: &[u8]) -> Result<usize> {
        self.write_decorated(chunk).map_err(FilterError::Sink)
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_decorated(&mut self, chunk: &[u8]) -> io::Result<usize> {
        let output = decorate(chunk);
        self.inner.write_all(&output)?;
        Ok(chunk.len())
    }
}

impl<W: Write> Write for ExtendedColorFilter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_decorated(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Returns `chunk` with decoration inserted after extended-color sequences.
pub fn decorate(chunk: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(chunk.len());
    decorate_into(chunk, &mut output);
    output
}

/// Appends the decorated form of `chunk` to `output`.
pub fn decorate_into(chunk: &[u8], output: &mut Vec<u8>) {
    for span in split_spans(chunk) {
        match span {
            Span::Literal(text) => output.extend_from_slice(text),
            Span::Adjacent => {
                trace!("Adjacent introducers");
                output.extend_from_slice(INTRODUCER);
            }
            Span::Terminated { params, remainder } => {
                output.extend_from_slice(INTRODUCER);
                output.extend_from_slice(params);
                output.push(TERMINATOR);

                if should_decorate(params) {
                    debug!(
                        "Flagging {} SGR {:?}",
                        color_model(params),
                        String::from_utf8_lossy(params)
                    );
                    // Never carry the decoration past the end of the line.
                    let line_end = memchr::memchr(LINE_FEED, remainder).unwrap_or(remainder.len());
                    let (colored, rest) = remainder.split_at(line_end);
                    wrap(output, colored);
                    output.extend_from_slice(rest);
                } else {
                    output.extend_from_slice(remainder);
                }
            }
            Span::Unterminated(body) => {
                output.extend_from_slice(INTRODUCER);
                match extended_color(body) {
                    Some(color) => {
                        debug!("Flagging unterminated {:?} span of {} bytes", color, body.len());
                        wrap(output, body);
                    }
                    None => output.extend_from_slice(body),
                }
            }
            Span::Trailing(body) => {
                debug!("Passing through unterminated sequence at end of chunk ({} bytes)", body.len());
                output.extend_from_slice(INTRODUCER);
                output.extend_from_slice(body);
            }
        }
    }
}

fn color_model(params: &[u8]) -> &'static str {
    match extended_color(params) {
        Some(color) if color.is_truecolor() => "truecolor",
        Some(_) => "256-color",
        None => "unknown",
    }
}

fn wrap(output: &mut Vec<u8>, text: &[u8]) {
    output.extend_from_slice(DECORATION_START);
    output.extend_from_slice(text);
    output.extend_from_slice(DECORATION_END);
}
