//! Validation utilities

/// Check that a date field has the exact `YYYY-MM-DD` shape.
///
/// This only checks the layout (four digits, dash, two digits, dash, two
/// digits). Whether the date exists on the calendar is left to the parser.
pub fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}
