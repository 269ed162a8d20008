//! Leading-numeral scanning.
//!
//! Strings are read the way loosely-typed runtimes cast them: skip leading
//! whitespace, then take the longest prefix shaped like
//!
//! ```text
//! numeral := [+-]? (digits ("." digits?)? | "." digits)
//! ```
//!
//! and ignore whatever follows. There is no exponent form.

/// Whitespace allowed before a numeral.
#[inline]
fn is_leading_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// The numeric prefix of a string, split into its parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Numeral<'a> {
    pub negative: bool,
    /// Digits before the point; empty for `.5`.
    pub integer: &'a str,
    /// Digits after the point; empty when there is no fractional part.
    pub fraction: &'a str,
}

impl<'a> Numeral<'a> {
    /// Scan the leading numeral of `text`, if there is one.
    pub(crate) fn scan(text: &'a str) -> Option<Self> {
        let bytes = text.as_bytes();
        let mut pos = 0;
        while bytes.get(pos).is_some_and(|&b| is_leading_space(b)) {
            pos += 1;
        }

        let mut negative = false;
        if let Some(&sign @ (b'+' | b'-')) = bytes.get(pos) {
            negative = sign == b'-';
            pos += 1;
        }

        let integer_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        // Every byte consumed so far is ASCII, so these are char boundaries.
        let integer = &text[integer_start..pos];

        let mut fraction = "";
        if bytes.get(pos) == Some(&b'.') {
            let fraction_start = pos + 1;
            let mut end = fraction_start;
            while bytes.get(end).is_some_and(u8::is_ascii_digit) {
                end += 1;
            }
            fraction = &text[fraction_start..end];
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        Some(Numeral {
            negative,
            integer,
            fraction,
        })
    }

    /// Integer value truncated toward zero, saturating at the `i64` bounds.
    pub(crate) fn to_i64_saturating(self) -> i64 {
        let magnitude = self.integer.bytes().fold(0u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        });
        let signed = if self.negative {
            -i128::from(magnitude)
        } else {
            i128::from(magnitude)
        };
        i64::try_from(signed).unwrap_or(if self.negative { i64::MIN } else { i64::MAX })
    }

    /// Nearest float; overflows to infinity.
    pub(crate) fn to_f64(self) -> f64 {
        self.to_decimal_text().parse().unwrap_or(0.0)
    }

    /// The numeral in plain `[-]digits.digits` form, always with both parts.
    pub(crate) fn to_decimal_text(self) -> String {
        let sign = if self.negative { "-" } else { "" };
        let integer = if self.integer.is_empty() { "0" } else { self.integer };
        let fraction = if self.fraction.is_empty() { "0" } else { self.fraction };
        format!("{sign}{integer}.{fraction}")
    }
}
