//! Frame trimming: the pure line-slicing transform applied to every frame.

/// Lines dropped from the top of a frame when no count is given.
pub const DEFAULT_TOP_LINES: usize = 20;
/// Lines dropped from the bottom of a frame when no count is given.
pub const DEFAULT_BOTTOM_LINES: usize = 20;

/// How many lines to drop from each end of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trim {
    pub top: usize,
    pub bottom: usize,
}

impl Default for Trim {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_LINES, DEFAULT_BOTTOM_LINES)
    }
}

impl Trim {
    pub fn new(top: usize, bottom: usize) -> Self {
        Self { top, bottom }
    }

    pub fn apply(&self, frame: &str) -> String {
        trim_frame(frame, self.top, self.bottom)
    }
}

impl std::fmt::Display for Trim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "top {} / bottom {}", self.top, self.bottom)
    }
}

/// Number of lines in a frame, splitting on `\n` only.
///
/// A trailing newline counts as one more (empty) line, and the empty
/// string is a single empty line.
pub fn line_count(frame: &str) -> usize {
    frame.split('\n').count()
}

/// Drop the first `top` and last `bottom` lines of `frame`.
///
/// Returns an empty string when the frame has no more than `top + bottom`
/// lines. Frames that are already short are not clamped, so trimming twice
/// keeps shortening the frame.
pub fn trim_frame(frame: &str, top: usize, bottom: usize) -> String {
    let lines: Vec<&str> = frame.split('\n').collect();
    let total = lines.len();

    // An overflowing sum is larger than any real frame.
    match top.checked_add(bottom) {
        Some(cut) if total > cut => lines[top..total - bottom].join("\n"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(lines: &[&str]) -> String {
        lines.join("\n")
    }

    #[test]
    fn test_drops_top_and_bottom() {
        assert_eq!(trim_frame("a\nb\nc\nd\ne", 2, 1), "c\nd");
    }

    #[test]
    fn test_over_trim_is_empty() {
        assert_eq!(trim_frame("x\ny", 5, 5), "");
    }

    #[test]
    fn test_exact_threshold_is_empty() {
        assert_eq!(trim_frame("a\nb\nc", 2, 1), "");
        assert_eq!(trim_frame("a\nb\nc\nd", 2, 1), "c");
    }

    #[test]
    fn test_zero_bottom_keeps_tail() {
        assert_eq!(trim_frame("a\nb\nc\nd", 1, 0), "b\nc\nd");
    }

    #[test]
    fn test_zero_top_keeps_head() {
        assert_eq!(trim_frame("a\nb\nc\nd", 0, 2), "a\nb");
    }

    #[test]
    fn test_zero_both_is_identity() {
        let raw = "one\ntwo\n\nthree\n";
        assert_eq!(trim_frame(raw, 0, 0), raw);
    }

    #[test]
    fn test_trailing_newline_counts_as_line() {
        // "a\nb\nc\n" splits into a, b, c, ""
        assert_eq!(line_count("a\nb\nc\n"), 4);
        assert_eq!(trim_frame("a\nb\nc\n", 1, 1), "b\nc");
    }

    #[test]
    fn test_carriage_return_is_content() {
        assert_eq!(trim_frame("a\r\nb\r\nc", 1, 0), "b\r\nc");
    }

    #[test]
    fn test_empty_frame() {
        assert_eq!(line_count(""), 1);
        assert_eq!(trim_frame("", 0, 0), "");
        assert_eq!(trim_frame("", 1, 0), "");
    }

    #[test]
    fn test_huge_counts_do_not_panic() {
        assert_eq!(trim_frame("a\nb", usize::MAX, usize::MAX), "");
        assert_eq!(trim_frame("a\nb", usize::MAX, 0), "");
    }

    #[test]
    fn test_slice_matches_range_for_many_shapes() {
        let lines: Vec<String> = (0..30).map(|i| format!("row {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let raw = frame(&refs);

        for top in 0..20 {
            for bottom in 0..20 {
                let result = trim_frame(&raw, top, bottom);
                if refs.len() <= top + bottom {
                    assert_eq!(result, "");
                } else {
                    assert_eq!(result, frame(&refs[top..refs.len() - bottom]));
                }
            }
        }
    }

    #[test]
    fn test_not_idempotent() {
        let raw = frame(&["1", "2", "3", "4", "5", "6", "7"]);
        let once = trim_frame(&raw, 1, 1);
        let twice = trim_frame(&once, 1, 1);
        assert_eq!(once, "2\n3\n4\n5\n6");
        assert_eq!(twice, "3\n4\n5");
    }

    #[test]
    fn test_trim_struct_defaults() {
        let trim = Trim::default();
        assert_eq!(trim, Trim::new(20, 20));
        let raw = (0..41).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        assert_eq!(trim.apply(&raw), "20");
    }
}
