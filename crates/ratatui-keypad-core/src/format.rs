//! Numeric value formatting: raw keystrokes -> canonical string -> grouped
//! display string, and back.
//!
//! These functions sit on the live-typing hot path, so they never fail:
//! degenerate input resolves to an empty string or a truncated prefix.

/// A canonical value together with its grouped display form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedValue {
    /// Ungrouped digits with at most one `.`; the source of truth.
    pub canonical: String,
    /// Thousands-grouped rendition of `canonical`.
    pub display: String,
}

/// Canonicalizes arbitrary input into digits plus at most one `.`.
///
/// A second `.` in the interior of the string invalidates the whole value;
/// a second `.` at the very end is truncated off instead. Leading zero
/// digits are stripped unless they sit against the decimal point.
pub fn sanitize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let mut value: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // ASCII only from here on, so char indices are byte indices.
    let len = value.len();
    let mut dots = 0usize;
    for (i, b) in value.bytes().enumerate() {
        if b == b'.' {
            dots += 1;
        }
        if dots >= 2 {
            if i + 1 == len {
                value.truncate(i);
                break;
            }
            return String::new();
        }
    }

    strip_leading_zeros(&value)
}

fn strip_leading_zeros(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut start = 0;
    while start + 1 < bytes.len() && bytes[start] == b'0' && bytes[start + 1].is_ascii_digit() {
        start += 1;
    }
    value[start..].to_string()
}

/// Inserts a `,` every three digits of the integer part. The fractional
/// part, if any, is reattached ungrouped after the `.`.
pub fn group(canonical: &str) -> String {
    if canonical.is_empty() {
        return String::new();
    }
    match canonical.find('.') {
        Some(dot) => format!(
            "{}.{}",
            group_integer(&canonical[..dot]),
            &canonical[dot + 1..]
        ),
        None => group_integer(canonical),
    }
}

fn group_integer(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Inverse of [`group`]: strips everything that is not a digit or `.` from
/// each side of the first `.` independently. A trailing `,` on an ungrouped
/// display is read as a trailing decimal point (the grouping key doubles as
/// the decimal key on some layouts).
pub fn ungroup(display: &str) -> String {
    match display.find('.') {
        Some(dot) => {
            let before = keep_digits_and_dots(&display[..dot]);
            let after = keep_digits_and_dots(&display[dot + 1..]);
            format!("{before}.{after}")
        }
        None => {
            let mut out = keep_digits_and_dots(display);
            if display.ends_with(',') {
                out.push('.');
            }
            out
        }
    }
}

fn keep_digits_and_dots(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Full pipeline used on every numeric update: sanitize, group, then derive
/// the canonical value back from the grouped display so both stay in lockstep.
pub fn format_value(raw: &str) -> FormattedValue {
    let display = group(&sanitize(raw));
    FormattedValue {
        canonical: ungroup(&display),
        display,
    }
}
