//! Escape-sequence removal for width measurement.
//!
//! Content strings may carry pre-rendered SGR runs (for example output of
//! another tool). Those bytes occupy no cells, so they are removed before
//! measuring. Recognized forms:
//! - CSI: `ESC [` params/intermediates, one final byte in `0x40..=0x7E`
//! - OSC/DCS/PM/APC: `ESC ]`, `ESC P`, `ESC ^`, `ESC _` up to BEL or `ESC \`
//! - any other `ESC x` pair

use std::borrow::Cow;

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Remove escape sequences, borrowing when there is nothing to remove.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    if !bytes.contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == ESC {
            i = escape_end(s, i);
            continue;
        }
        // ESC is ASCII, so the next ESC (or the end) is always a char boundary.
        let run_end = bytes[i..]
            .iter()
            .position(|&b| b == ESC)
            .map_or(bytes.len(), |p| i + p);
        out.push_str(&s[i..run_end]);
        i = run_end;
    }
    Cow::Owned(out)
}

/// Index just past the escape sequence that starts at `start`.
///
/// The result is always a char boundary of `s`.
fn escape_end(s: &str, start: usize) -> usize {
    let bytes = s.as_bytes();
    let Some(kind) = s[start + 1..].chars().next() else {
        return bytes.len();
    };
    let body = start + 1 + kind.len_utf8();
    match kind {
        '[' => csi_end(bytes, body),
        ']' | 'P' | '^' | '_' => string_end(bytes, body),
        _ => body,
    }
}

fn csi_end(bytes: &[u8], from: usize) -> usize {
    for (offset, &b) in bytes[from..].iter().enumerate() {
        match b {
            0x40..=0x7E => return from + offset + 1,
            0x20..=0x3F => {}
            // Not part of a CSI: stop without consuming it.
            _ => return from + offset,
        }
    }
    bytes.len()
}

fn string_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            BEL => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}
