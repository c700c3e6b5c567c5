//! Brazilian phone mask: `(DD) DDDDD-DDDD`.
//!
//! The digit sequence is the source of truth. Whatever the field holds after
//! an input or paste is reduced to its digits, capped at [`MAX_DIGITS`], and
//! re-rendered from scratch.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Area code (2) plus subscriber number (9).
pub const MAX_DIGITS: usize = 11;

/// Length of a fully rendered number, `(99) 99999-9999`. Used as `maxlength`.
pub const MAX_FORMATTED_LEN: usize = 15;

const AREA_LEN: usize = 2;
const PREFIX_END: usize = 7;

/// ASCII digits of `raw`, in order, truncated to [`MAX_DIGITS`].
#[must_use]
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(MAX_DIGITS).collect()
}

/// Render `raw` as a (possibly partial) phone number.
///
/// | digits | output |
/// |--------|--------|
/// | 0 | `""` |
/// | 1–2 | `(D` / `(DD` |
/// | 3–6 | `(DD) D…` |
/// | 7–11 | `(DD) DDDDD-D…` |
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = digits(raw);
    let n = digits.len();
    let mut out = String::with_capacity(MAX_FORMATTED_LEN);
    if n == 0 {
        return out;
    }
    out.push('(');
    if n <= AREA_LEN {
        out.push_str(&digits);
        return out;
    }
    // Only ASCII digits remain, so byte slicing is char-aligned.
    out.push_str(&digits[..AREA_LEN]);
    out.push_str(") ");
    if n < PREFIX_END {
        out.push_str(&digits[AREA_LEN..]);
    } else {
        out.push_str(&digits[AREA_LEN..PREFIX_END]);
        out.push('-');
        out.push_str(&digits[PREFIX_END..]);
    }
    out
}
