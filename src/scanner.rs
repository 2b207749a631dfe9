use crate::definitions::Span;
use crate::tables::{INTRODUCER, TERMINATOR};
use memchr::memmem;

enum Cursor {
    Start,
    // Offset of the first byte after an introducer.
    After(usize),
    Done,
}

/// Iterator over the spans of one chunk, split on `ESC [`.
///
/// Yields one `Span::Literal` first, then one span per introducer. Nothing is
/// remembered between chunks: a sequence cut by the chunk boundary shows up
/// as `Span::Trailing` here and as plain text in the next chunk.
pub struct Spans<'a> {
    chunk: &'a [u8],
    finder: memmem::FindIter<'a, 'static>,
    cursor: Cursor,
}

impl<'a> Spans<'a> {
    pub fn new(chunk: &'a [u8]) -> Spans<'a> {
        Spans {
            chunk,
            finder: memmem::find_iter(chunk, INTRODUCER),
            cursor: Cursor::Start,
        }
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let chunk = self.chunk;
        let start = match self.cursor {
            Cursor::Start => 0,
            Cursor::After(offset) => offset,
            Cursor::Done => return None,
        };
        let is_literal = matches!(self.cursor, Cursor::Start);

        let (body, is_last) = match self.finder.next() {
            Some(position) => {
                self.cursor = Cursor::After(position + INTRODUCER.len());
                (&chunk[start..position], false)
            }
            None => {
                self.cursor = Cursor::Done;
                (&chunk[start..], true)
            }
        };

        if is_literal {
            return Some(Span::Literal(body));
        }
        Some(classify_body(body, is_last))
    }
}

fn classify_body(body: &[u8], is_last: bool) -> Span<'_> {
    if let Some(end) = memchr::memchr(TERMINATOR, body) {
        return Span::Terminated {
            params: &body[..end],
            remainder: &body[end + 1..],
        };
    }
    match (body.is_empty(), is_last) {
        (_, true) => Span::Trailing(body),
        (true, false) => Span::Adjacent,
        (false, false) => Span::Unterminated(body),
    }
}

pub fn split_spans(chunk: &[u8]) -> Spans<'_> {
    Spans::new(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(chunk: &[u8]) -> Vec<Span<'_>> {
        split_spans(chunk).collect()
    }

    #[test]
    fn test_plain_text_is_one_literal() {
        assert_eq!(spans(b"hello"), vec![Span::Literal(b"hello")]);
        assert_eq!(spans(b""), vec![Span::Literal(b"")]);
    }

    #[test]
    fn test_terminated_sequence() {
        assert_eq!(
            spans(b"a\x1b[31mred\n"),
            vec![
                Span::Literal(b"a"),
                Span::Terminated {
                    params: b"31",
                    remainder: b"red\n"
                },
            ]
        );
    }

    #[test]
    fn test_empty_params() {
        assert_eq!(
            spans(b"\x1b[m"),
            vec![
                Span::Literal(b""),
                Span::Terminated {
                    params: b"",
                    remainder: b""
                },
            ]
        );
    }

    #[test]
    fn test_adjacent_introducers() {
        assert_eq!(
            spans(b"\x1b[\x1b[0m"),
            vec![
                Span::Literal(b""),
                Span::Adjacent,
                Span::Terminated {
                    params: b"0",
                    remainder: b""
                },
            ]
        );
    }

    #[test]
    fn test_non_sgr_before_another_sequence() {
        assert_eq!(
            spans(b"\x1b[2J\x1b[H"),
            vec![
                Span::Literal(b""),
                Span::Unterminated(b"2J"),
                Span::Trailing(b"H"),
            ]
        );
    }

    #[test]
    fn test_trailing_introducer() {
        assert_eq!(
            spans(b"x\x1b["),
            vec![Span::Literal(b"x"), Span::Trailing(b"")]
        );
        assert_eq!(
            spans(b"\x1b[38;2;1"),
            vec![Span::Literal(b""), Span::Trailing(b"38;2;1")]
        );
    }

    #[test]
    fn test_first_m_terminates() {
        // The split does not know about CSI final bytes; any `m` ends the span.
        assert_eq!(
            spans(b"\x1b[2Jsome more\n"),
            vec![
                Span::Literal(b""),
                Span::Terminated {
                    params: b"2Jso",
                    remainder: b"e more\n"
                },
            ]
        );
    }

    #[test]
    fn test_lone_escape_is_literal() {
        assert_eq!(spans(b"\x1b\x1bx"), vec![Span::Literal(b"\x1b\x1bx")]);
    }
}
