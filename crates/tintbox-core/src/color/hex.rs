//! Hexadecimal encoding (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).

use super::Color;
use crate::error::{ColorError, ColorResult};

impl Color {
    /// Parse a hex color. The leading `#` is optional; 3, 4, 6 and 8 digit
    /// forms are accepted, short forms doubling each nibble.
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let digits = hex.trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_hex(hex));
        }
        let bytes = digits.as_bytes();

        match bytes.len() {
            3 | 4 => {
                let r = parse_nibble(bytes[0], hex)?;
                let g = parse_nibble(bytes[1], hex)?;
                let b = parse_nibble(bytes[2], hex)?;
                let a = match bytes.get(3) {
                    Some(&digit) => f64::from(parse_nibble(digit, hex)?) / 255.0,
                    None => 1.0,
                };
                Ok(Self::from_rgba(r.into(), g.into(), b.into(), a))
            }
            6 | 8 => {
                let r = parse_pair(&digits[0..2], hex)?;
                let g = parse_pair(&digits[2..4], hex)?;
                let b = parse_pair(&digits[4..6], hex)?;
                let a = if bytes.len() == 8 {
                    f64::from(parse_pair(&digits[6..8], hex)?) / 255.0
                } else {
                    1.0
                };
                Ok(Self::from_rgba(r.into(), g.into(), b.into(), a))
            }
            _ => Err(invalid_hex(hex)),
        }
    }

    /// Check a string against `^#?([0-9a-fA-F]{3}){1,2}$`.
    ///
    /// Only the 3 and 6 digit forms pass, even though [`Color::from_hex`] also
    /// accepts the 4 and 8 digit alpha forms.
    pub fn is_valid_hex(hex: &str) -> bool {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// `#rrggbb`, lowercase, no alpha.
    pub fn to_hex(&self) -> String {
        self.to_hex_string(false, false, true)
    }

    /// Hex encoding with optional alpha pair, uppercase digits and `#` prefix.
    pub fn to_hex_string(&self, alpha: bool, uppercase: bool, hash: bool) -> String {
        let mut hex = format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue);

        if alpha {
            // Truncates like an integer cast: 0.5 encodes as 7f.
            hex.push_str(&format!("{:02x}", (self.alpha * 255.0) as u8));
        }

        if uppercase {
            hex = hex.to_uppercase();
        }

        if hash {
            hex.insert(0, '#');
        }

        hex
    }
}

fn parse_nibble(digit: u8, source: &str) -> ColorResult<u8> {
    let value = (digit as char)
        .to_digit(16)
        .ok_or_else(|| invalid_hex(source))? as u8;
    Ok(value * 17)
}

fn parse_pair(pair: &str, source: &str) -> ColorResult<u8> {
    u8::from_str_radix(pair, 16).map_err(|_| invalid_hex(source))
}

fn invalid_hex(source: &str) -> ColorError {
    ColorError::InvalidFormat(format!("Invalid hex color format: {:?}", source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        let cases = [
            ("#ff0000", "#ff0000", "#ff0000ff"),
            ("#ff0000ff", "#ff0000", "#ff0000ff"),
            ("#f00", "#ff0000", "#ff0000ff"),
            ("#f0f", "#ff00ff", "#ff00ffff"),
            ("#0f0", "#00ff00", "#00ff00ff"),
            ("#00f0", "#0000ff", "#0000ff00"),
            ("#000", "#000000", "#000000ff"),
            ("#00000000", "#000000", "#00000000"),
            ("#0000", "#000000", "#00000000"),
            ("#ff000080", "#ff0000", "#ff000080"),
            ("#ff0000ee", "#ff0000", "#ff0000ee"),
        ];

        for (input, plain, with_alpha) in cases {
            let color = Color::from_hex(input).unwrap();
            assert_eq!(color.to_hex(), plain, "{input}");
            assert_eq!(color.to_hex_string(true, false, true), with_alpha, "{input}");
        }
    }

    #[test]
    fn test_hash_is_optional() {
        assert_eq!(Color::from_hex("3B82F6").unwrap(), Color::from_rgb(59, 130, 246));
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#3b82f6", "#0a0b0c", "#7f7f80", "#e11d48"] {
            assert_eq!(Color::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn test_invalid_lengths() {
        for input in ["", "#", "#f", "#ff", "#fffff", "#fffffff", "#fffffffff"] {
            assert!(
                matches!(Color::from_hex(input), Err(ColorError::InvalidFormat(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn test_invalid_digits() {
        assert!(matches!(Color::from_hex("#ggg"), Err(ColorError::InvalidFormat(_))));
        assert!(matches!(Color::from_hex("#12345z"), Err(ColorError::InvalidFormat(_))));
        assert!(matches!(Color::from_hex("#+1+2+3"), Err(ColorError::InvalidFormat(_))));
        assert!(matches!(Color::from_hex("#ééé"), Err(ColorError::InvalidFormat(_))));
    }

    #[test]
    fn test_export_flags() {
        let color = Color::from_rgba(171, 205, 239, 0.5);
        assert_eq!(color.to_hex_string(false, true, true), "#ABCDEF");
        assert_eq!(color.to_hex_string(false, false, false), "abcdef");
        assert_eq!(color.to_hex_string(true, true, false), "ABCDEF7F");
    }

    #[test]
    fn test_validator_rejects_alpha_forms() {
        assert!(Color::is_valid_hex("#fff"));
        assert!(Color::is_valid_hex("a1B2c3"));
        assert!(!Color::is_valid_hex("#ffff"));
        assert!(!Color::is_valid_hex("#ff000080"));
        assert!(!Color::is_valid_hex("#ggg"));
        assert!(!Color::is_valid_hex("##fff"));
    }
}
