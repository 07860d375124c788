//! Enum string codec
//!
//! Cyclable menu options are stored as a single string of the form
//! `label#option0|option1|...`. The label is optional; without a `#` the
//! whole string is split on `|`.

/// Return option `index` of an enum string
///
/// Falls back to the text before the first `#`/`|` when the index is out of
/// range, or to an empty string when the source has no delimiter at all.
pub fn option_text(src: &str, index: i32) -> &str {
    let bytes = src.as_bytes();
    let mut i = bytes.iter().position(|&b| b == b'#').map_or(0, |p| p + 1);

    let mut num = 0;
    while i < bytes.len() {
        let begin = i;
        while i < bytes.len() && bytes[i] != b'|' {
            i += 1;
        }
        if index == num {
            return &src[begin..i];
        }
        num += 1;
        i += 1;
    }

    match bytes.iter().position(|&b| b == b'#' || b == b'|') {
        Some(end) => &src[..end],
        None => "",
    }
}

/// Number of options an enum string cycles through
///
/// Counting starts at the first delimiter: a leading `#` counts one, a
/// leading `|` counts two, and every later `|` adds one more. A trailing `|`
/// therefore counts an option that [`option_text`] never yields; menu
/// scripts are authored against exactly these counts.
pub fn option_count(src: &str) -> usize {
    let bytes = src.as_bytes();
    match bytes.iter().position(|&b| b == b'#' || b == b'|') {
        None => 0,
        Some(first) => {
            let base = if bytes[first] == b'|' { 2 } else { 1 };
            base + bytes[first + 1..].iter().filter(|&&b| b == b'|').count()
        }
    }
}
