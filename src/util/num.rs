/// Converts literal or input text to its integer value.
///
/// The text is parsed as a decimal number (fraction and exponent are
/// accepted) and truncated toward zero: `floor` for non-negative
/// values, `ceil` for negative ones. Text that does not parse as a
/// number yields 0.
///
/// ## Example
/// ```
/// use jerboa::util::num::number_from_str;
///
/// assert_eq!(number_from_str("42"), 42);
/// assert_eq!(number_from_str("2e3"), 2000);
/// assert_eq!(number_from_str("3E+2"), 300);
/// assert_eq!(number_from_str("-7.9"), -7);
/// assert_eq!(number_from_str("  12  "), 12);
/// assert_eq!(number_from_str("oops"), 0);
/// ```
#[must_use]
pub fn number_from_str(text: &str) -> i64 {
    text.trim().parse::<f64>().map_or(0, truncate_toward_zero)
}

/// Truncates a float toward zero.
///
/// Values beyond the `i64` range saturate at the range bounds, and NaN
/// becomes 0, so the conversion never panics.
///
/// ## Example
/// ```
/// use jerboa::util::num::truncate_toward_zero;
///
/// assert_eq!(truncate_toward_zero(3.9), 3);
/// assert_eq!(truncate_toward_zero(-3.9), -3);
/// assert_eq!(truncate_toward_zero(1e300), i64::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_toward_zero(value: f64) -> i64 {
    // Float-to-integer `as` casts truncate toward zero, saturate at the
    // range bounds, and send NaN to 0.
    value as i64
}
