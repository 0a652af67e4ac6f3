//! Line breaking strategies.
//!
//! - **Greedy** ([`wrap`]): first-fit word wrap via `textwrap`, optionally
//!   breaking words longer than the line.
//! - **Balanced** ([`wrap_balanced`]): same number of lines as greedy, but the
//!   narrowest width that achieves it, so lines come out even.
//! - **Knuth-Plass** ([`wrap_knuth_plass`]): total-fit breaking that minimizes
//!   the sum of line demerits over the whole paragraph.
//!
//! All strategies report each line together with its display width.

use textwrap::{Options, WrapAlgorithm};

use super::width::string_width;

/// Stretch (in cells) a single inter-word gap can absorb at ratio 1.0.
const GAP_STRETCH: f64 = 2.0;

/// Ratios above this contribute the same badness.
const BADNESS_CAP: f64 = 10.0;

/// One output line of a wrapping pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrappedLine {
    pub content: String,
    pub width: usize,
}

impl WrappedLine {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let width = string_width(&content);
        Self { content, width }
    }
}

/// Options for greedy wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    pub max_width: usize,
    /// Split words wider than `max_width` across lines.
    pub break_words: bool,
}

impl WrapOptions {
    pub const fn new(max_width: usize) -> Self {
        Self {
            max_width,
            break_words: false,
        }
    }

    pub const fn break_words(mut self, break_words: bool) -> Self {
        self.break_words = break_words;
        self
    }
}

/// Greedy word wrap. Explicit newlines are hard breaks.
///
/// Empty input yields a single empty line.
pub fn wrap(text: &str, options: WrapOptions) -> Vec<WrappedLine> {
    let opts = Options::new(options.max_width.max(1))
        .break_words(options.break_words)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(text, opts)
        .into_iter()
        .map(|line| WrappedLine::new(line.into_owned()))
        .collect()
}

/// Wrap into as many lines as greedy wrapping would, at the narrowest width
/// that still achieves that count.
pub fn wrap_balanced(text: &str, max_width: usize) -> Vec<WrappedLine> {
    let greedy = wrap(text, WrapOptions::new(max_width));
    let target = greedy.len();
    if target <= 1 {
        return greedy;
    }

    let longest_word = text.split_whitespace().map(string_width).max().unwrap_or(0);
    let mut lo = longest_word.clamp(1, max_width.max(1));
    let mut hi = max_width.max(1);
    let mut best = greedy;

    // `best` always holds the wrap at `hi`.
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let candidate = wrap(text, WrapOptions::new(mid));
        if candidate.len() <= target {
            hi = mid;
            best = candidate;
        } else {
            lo = mid + 1;
        }
    }

    best
}

/// Knuth-Plass total-fit wrap of a single paragraph.
///
/// Each line's adjustment ratio is its slack divided by the stretch of its
/// inter-word gaps. Lines whose ratio exceeds `tolerance` are rejected; when
/// no set of breaks satisfies the tolerance, an emergency pass accepts any
/// ratio. Whitespace runs collapse to single spaces.
pub fn wrap_knuth_plass(text: &str, max_width: usize, tolerance: f64) -> Vec<WrappedLine> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![WrappedLine::default()];
    }
    let widths: Vec<usize> = words.iter().map(|w| string_width(w)).collect();

    let ends = total_fit(&widths, max_width, tolerance)
        .or_else(|| total_fit(&widths, max_width, f64::INFINITY))
        .unwrap_or_else(|| (1..=words.len()).collect());

    let mut lines = Vec::with_capacity(ends.len());
    let mut start = 0;
    for end in ends {
        lines.push(WrappedLine::new(words[start..end].join(" ")));
        start = end;
    }
    lines
}

/// Minimum-demerit break positions. Each entry is the exclusive end index
/// of a line. `None` when no breaks satisfy `tolerance`.
fn total_fit(widths: &[usize], max_width: usize, tolerance: f64) -> Option<Vec<usize>> {
    let n = widths.len();
    let mut best = vec![f64::INFINITY; n + 1];
    let mut prev = vec![0usize; n + 1];
    best[0] = 0.0;

    for j in 1..=n {
        let mut line_width = 0usize;
        for i in (0..j).rev() {
            line_width += widths[i] + usize::from(i + 1 < j);
            let words_in_line = j - i;
            if line_width > max_width && words_in_line > 1 {
                break;
            }
            if best[i].is_infinite() {
                continue;
            }

            let ratio = adjustment_ratio(line_width, max_width, words_in_line - 1, j == n);
            if ratio > tolerance {
                continue;
            }

            let badness = 100.0 * ratio.min(BADNESS_CAP).powi(3);
            let demerits = best[i] + (1.0 + badness).powi(2);
            if demerits < best[j] {
                best[j] = demerits;
                prev[j] = i;
            }
        }
    }

    if best[n].is_infinite() {
        return None;
    }

    let mut ends = Vec::new();
    let mut j = n;
    while j > 0 {
        ends.push(j);
        j = prev[j];
    }
    ends.reverse();
    Some(ends)
}

fn adjustment_ratio(line_width: usize, max_width: usize, gaps: usize, last: bool) -> f64 {
    // An overlong single word and the paragraph's last line are never stretched.
    if last || line_width >= max_width {
        return 0.0;
    }
    let slack = (max_width - line_width) as f64;
    slack / (gaps.max(1) as f64 * GAP_STRETCH)
}
