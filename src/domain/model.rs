use crate::utils::error::{FlagKitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder glyph for anything that does not resolve to a flag.
pub const WHITE_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// Regional Indicator Symbol Letter A.
pub const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Regional Indicator Symbol for an uppercase ASCII letter.
pub fn regional_indicator(letter: u8) -> Option<char> {
    if !letter.is_ascii_uppercase() {
        return None;
    }
    char::from_u32(REGIONAL_INDICATOR_A + u32::from(letter - b'A'))
}

/// ISO 3166-1 alpha-2 country code: always two uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Trims and uppercases `code`, then checks it is exactly two letters.
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        match trimmed.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(CountryCode([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(FlagKitError::InvalidCountryCode {
                value: code.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Lowercase form used as the flag image resource name.
    pub fn asset_name(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    pub fn flag_emoji(&self) -> String {
        self.0.iter().filter_map(|&letter| regional_indicator(letter)).collect()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = FlagKitError;

    fn from_str(s: &str) -> Result<Self> {
        CountryCode::parse(s)
    }
}

impl Serialize for CountryCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CountryCode::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// How a flag image is clipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagStyle {
    #[default]
    Default,
    Circle,
    /// Rounded rectangle with the given corner radius.
    Rounded(f32),
}

impl FromStr for FlagStyle {
    type Err = FlagKitError;

    /// Parses `default`, `circle` or `rounded:<radius>`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| FlagKitError::InvalidConfigValueError {
            field: "style".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(FlagStyle::Default),
            "circle" => Ok(FlagStyle::Circle),
            other => {
                let radius = other
                    .strip_prefix("rounded:")
                    .ok_or_else(|| invalid("Expected default, circle or rounded:<radius>"))?;
                let radius: f32 = radius
                    .parse()
                    .map_err(|_| invalid("Corner radius must be a number"))?;
                if !radius.is_finite() || radius < 0.0 {
                    return Err(invalid("Corner radius must be a non-negative number"));
                }
                Ok(FlagStyle::Rounded(radius))
            }
        }
    }
}

/// Whether the image fills its frame (cropping) or fits inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    #[default]
    Fill,
    Fit,
}

impl FromStr for ContentMode {
    type Err = FlagKitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fill" => Ok(ContentMode::Fill),
            "fit" => Ok(ContentMode::Fit),
            _ => Err(FlagKitError::InvalidConfigValueError {
                field: "content_mode".to_string(),
                value: s.to_string(),
                reason: "Valid values: fill, fit".to_string(),
            }),
        }
    }
}

/// Concrete clip geometry for a style laid out in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ClipShape {
    None,
    Circle { radius: f32 },
    RoundedRect { corner_radius: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_parse_normalizes() {
        let code = CountryCode::parse(" us ").unwrap();
        assert_eq!(code.as_str(), "US");
        assert_eq!(code.asset_name(), "us");
        assert_eq!(code.to_string(), "US");
    }

    #[test]
    fn test_country_code_parse_rejects_invalid() {
        assert!(CountryCode::parse("").is_err());
        assert!(CountryCode::parse("USA").is_err());
        assert!(CountryCode::parse("U1").is_err());
        assert!(CountryCode::parse("ÜS").is_err());
    }

    #[test]
    fn test_country_code_flag_emoji() {
        assert_eq!(CountryCode::parse("cz").unwrap().flag_emoji(), "🇨🇿");
    }

    #[test]
    fn test_white_flag_is_two_scalars() {
        assert_eq!(WHITE_FLAG.chars().count(), 2);
        assert_eq!(WHITE_FLAG, "🏳️");
    }

    #[test]
    fn test_flag_style_from_str() {
        assert_eq!("default".parse::<FlagStyle>().unwrap(), FlagStyle::Default);
        assert_eq!("Circle".parse::<FlagStyle>().unwrap(), FlagStyle::Circle);
        assert_eq!(
            "rounded:8".parse::<FlagStyle>().unwrap(),
            FlagStyle::Rounded(8.0)
        );
        assert!("rounded:-1".parse::<FlagStyle>().is_err());
        assert!("rounded:abc".parse::<FlagStyle>().is_err());
        assert!("square".parse::<FlagStyle>().is_err());
    }

    #[test]
    fn test_content_mode_from_str() {
        assert_eq!("fit".parse::<ContentMode>().unwrap(), ContentMode::Fit);
        assert_eq!("FILL".parse::<ContentMode>().unwrap(), ContentMode::Fill);
        assert!("stretch".parse::<ContentMode>().is_err());
    }

    #[test]
    fn test_clip_shape_serializes_tagged() {
        let json = serde_json::to_string(&ClipShape::Circle { radius: 25.0 }).unwrap();
        assert_eq!(json, r#"{"shape":"circle","radius":25.0}"#);
    }
}
