//! String hooks for persisting colors in host storage (database columns,
//! config values). Stored form is `#rrggbbaa`; `None` passes through.

use crate::color::Color;
use crate::error::ColorResult;

/// A value handed to [`set`]: either a stored-style string or a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CastValue<'a> {
    Text(&'a str),
    Color(Color),
}

impl<'a> From<&'a str> for CastValue<'a> {
    fn from(text: &'a str) -> Self {
        CastValue::Text(text)
    }
}

impl From<Color> for CastValue<'_> {
    fn from(color: Color) -> Self {
        CastValue::Color(color)
    }
}

/// Decode a stored string.
pub fn get(value: Option<&str>) -> ColorResult<Option<Color>> {
    value.map(Color::from_hex).transpose()
}

/// Encode a value for storage. Strings are parsed first, so malformed input
/// is rejected instead of stored.
pub fn set(value: Option<CastValue<'_>>) -> ColorResult<Option<String>> {
    let color = match value {
        None => return Ok(None),
        Some(CastValue::Text(text)) => Color::from_hex(text)?,
        Some(CastValue::Color(color)) => color,
    };
    Ok(Some(color.to_hex_string(true, false, true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    #[test]
    fn test_null_passes_through() {
        assert_eq!(get(None), Ok(None));
        assert_eq!(set(None), Ok(None));
    }

    #[test]
    fn test_get() {
        assert_eq!(get(Some("#ff0000")), Ok(Some(Color::from_rgb(255, 0, 0))));
        assert!(matches!(get(Some("red")), Err(ColorError::InvalidFormat(_))));
    }

    #[test]
    fn test_set_normalizes() {
        assert_eq!(set(Some("F00".into())), Ok(Some("#ff0000ff".to_string())));
        assert_eq!(
            set(Some(Color::from_rgba(0, 128, 255, 0.5).into())),
            Ok(Some("#0080ff7f".to_string()))
        );
        assert!(set(Some("#12".into())).is_err());
    }

    #[test]
    fn test_stored_alpha_survives() {
        let color = Color::from_rgba(0, 128, 255, 0.5);
        let stored = set(Some(color.into())).unwrap();
        let back = get(stored.as_deref()).unwrap().unwrap();
        assert_eq!(back.to_rgb(), (0, 128, 255));
        assert_eq!(back.to_hex_string(true, false, true), "#0080ff7f");
        assert!((back.alpha() - 127.0 / 255.0).abs() < f64::EPSILON);
    }
}
