//! Text bounds: how many lines a stream has and how wide its widest line is.
//!
//! Measuring can be done incrementally. [`scan`] never zeroes the [`Bounds`]
//! it is given: the lines counted by a call are added to [`Bounds::lines`] and
//! [`Bounds::columns`] keeps the widest line seen by any call. Start from
//! [`Bounds::default`] to begin a new measurement.

use crate::source::{CharSource, SliceSource};

pub const TAB_WIDTH: usize = 8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Number of lines, the height of the text.
    pub lines: usize,
    /// Length of the longest line, the width of the text.
    pub columns: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether trailing whitespace counts toward the width of a line.
    /// When false only the last non-whitespace character is used.
    pub count_trailing_whitespace: bool,
}

impl Bounds {
    pub fn new(lines: usize, columns: usize) -> Self {
        Self { lines, columns }
    }
}

impl ScanOptions {
    pub fn trailing_whitespace(count_trailing_whitespace: bool) -> Self {
        Self {
            count_trailing_whitespace,
        }
    }
}

/// Reads `source` until end of stream and folds its bounds into `bounds`.
pub fn scan(source: &mut impl CharSource, bounds: &mut Bounds, options: ScanOptions) {
    let mut lines: usize = 0;
    // last column, even if just whitespace
    let mut col: usize = 0;
    // last non-whitespace column
    let mut ink_col: usize = 0;
    let mut max_col: usize = 0;

    loop {
        let c = source.next_char();
        match c {
            None | Some(b'\n') => {
                if c.is_some() || col > 0 {
                    lines += 1;
                }
                let width = if options.count_trailing_whitespace {
                    col
                } else {
                    ink_col
                };
                max_col = max_col.max(width);
                col = 0;
                ink_col = 0;
            }
            Some(b'\t') => col += TAB_WIDTH - col % TAB_WIDTH,
            Some(b' ') => col += 1,
            Some(_) => {
                col += 1;
                ink_col = col;
            }
        }
        if c.is_none() {
            break;
        }
    }

    log::trace!("scanned {lines} lines, {max_col} columns");
    bounds.lines += lines;
    bounds.columns = bounds.columns.max(max_col);
}

/// Measures an in memory text from scratch.
pub fn measure(text: impl AsRef<[u8]>, options: ScanOptions) -> Bounds {
    let mut bounds = Bounds::default();
    scan(&mut SliceSource::new(text.as_ref()), &mut bounds, options);
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: ScanOptions = ScanOptions {
        count_trailing_whitespace: false,
    };
    const TWS: ScanOptions = ScanOptions {
        count_trailing_whitespace: true,
    };

    #[test]
    fn empty_input() {
        assert_eq!(measure("", INK), Bounds::new(0, 0));
        assert_eq!(measure("", TWS), Bounds::new(0, 0));
    }

    #[test]
    fn reference_text() {
        let text = "This is a test\none\ntwo\nthree\n";
        assert_eq!(measure(text, INK), Bounds::new(4, 14));
        assert_eq!(measure(text, TWS), Bounds::new(4, 14));
    }

    #[test]
    fn unterminated_last_line_counts() {
        assert_eq!(measure("one\ntwo", INK), Bounds::new(2, 3));
        assert_eq!(measure("x", INK), Bounds::new(1, 1));
    }

    #[test]
    fn no_phantom_line_after_final_newline() {
        assert_eq!(measure("one\n", INK).lines, 1);
        assert_eq!(measure("\n\n\n", INK), Bounds::new(3, 0));
    }

    #[test]
    fn whitespace_only_line_without_newline() {
        assert_eq!(measure("   ", INK), Bounds::new(1, 0));
        assert_eq!(measure("   ", TWS), Bounds::new(1, 3));
        assert_eq!(measure("\t", TWS), Bounds::new(1, 8));
    }

    #[test]
    fn tab_stops() {
        assert_eq!(measure("\tx", INK).columns, 9);
        assert_eq!(measure("abc\tx", INK).columns, 9);
        assert_eq!(measure("abcdefgh\tx", INK).columns, 17);
        assert_eq!(measure("abcdefg\t\tx", INK).columns, 17);
    }

    #[test]
    fn trailing_whitespace_policy() {
        assert_eq!(measure("ab  \n", TWS).columns, 4);
        assert_eq!(measure("ab  \n", INK).columns, 2);
        assert_eq!(measure("ab\t\n", TWS).columns, 8);
        assert_eq!(measure("ab\t\n", INK).columns, 2);
    }

    #[test]
    fn inner_whitespace_is_measured() {
        assert_eq!(measure("a   b\n", INK).columns, 5);
        assert_eq!(measure("   b\n", INK).columns, 4);
    }

    #[test]
    fn widest_line_wins() {
        let text = "short\na much longer line\nmid\n";
        assert_eq!(measure(text, INK), Bounds::new(3, 18));
    }

    #[test]
    fn non_ascii_bytes_are_ink() {
        assert_eq!(measure([0u8, 0xff, b'\r', b'\n'], INK), Bounds::new(1, 3));
        // each byte of a multi-byte character is a column
        assert_eq!(measure("é\n", INK).columns, 2);
    }

    #[test]
    fn scans_accumulate_into_state() {
        let mut bounds = Bounds::default();
        scan(&mut SliceSource::new(b"a longer line\n"), &mut bounds, INK);
        assert_eq!(bounds, Bounds::new(1, 13));

        scan(&mut SliceSource::new(b"x\ny\n"), &mut bounds, INK);
        assert_eq!(bounds, Bounds::new(3, 13));

        scan(&mut SliceSource::new(b"the widest line of all\n"), &mut bounds, INK);
        assert_eq!(bounds, Bounds::new(4, 22));

        scan(&mut SliceSource::new(b""), &mut bounds, INK);
        assert_eq!(bounds, Bounds::new(4, 22));
    }

    #[test]
    fn fresh_states_give_identical_results() {
        let text = "a\tb  \nccc\n\n  d";
        assert_eq!(measure(text, TWS), measure(text, TWS));
        assert_eq!(measure(text, INK), measure(text, INK));
    }
}
