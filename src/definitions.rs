/// Color models beyond the 16-color palette.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExtendedColor {
    /// `38;2;R;G;B`
    TrueColorForeground,
    /// `48;2;R;G;B`
    TrueColorBackground,
    /// `38;5;N`
    IndexedForeground,
    /// `48;5;N`
    IndexedBackground,
}

impl ExtendedColor {
    /// The parameter prefix that selects this color model.
    pub const fn prefix(self) -> &'static [u8] {
        match self {
            ExtendedColor::TrueColorForeground => b"38;2",
            ExtendedColor::TrueColorBackground => b"48;2",
            ExtendedColor::IndexedForeground => b"38;5",
            ExtendedColor::IndexedBackground => b"48;5",
        }
    }

    pub fn is_truecolor(self) -> bool {
        matches!(
            self,
            ExtendedColor::TrueColorForeground | ExtendedColor::TrueColorBackground
        )
    }
}

/// One piece of a chunk after splitting it on `ESC [`.
///
/// Every span except `Literal` stands for an introducer that was removed by
/// the split; rendering a span puts the introducer back in front of it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Span<'a> {
    /// Text before the first introducer of the chunk. May be empty.
    Literal(&'a [u8]),
    /// An introducer immediately followed by another introducer.
    Adjacent,
    /// An introducer followed by parameters and an `m`.
    /// `remainder` is the text after the `m` up to the next introducer.
    Terminated { params: &'a [u8], remainder: &'a [u8] },
    /// An introducer with no `m` before the next introducer.
    Unterminated(&'a [u8]),
    /// An introducer with no `m` before the end of the chunk.
    Trailing(&'a [u8]),
}
