//! Lookups between country, currency and phone codes and emoji flags.
//!
//! None of these functions fail: a code-to-code miss is `None`, an emoji
//! miss is [`WHITE_FLAG`].

use crate::core::tables::{CURRENCY_CODES, PHONE_CODES};
use crate::domain::model::{regional_indicator, REGIONAL_INDICATOR_A, WHITE_FLAG};
use std::collections::HashMap;
use std::sync::LazyLock;

static PHONE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PHONE_CODES.iter().copied().collect());

static CURRENCY_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CURRENCY_CODES.iter().copied().collect());

const REGIONAL_INDICATOR_Z: u32 = REGIONAL_INDICATOR_A + 25;

/// Country for an international calling code; the leading `+` is optional.
///
/// ```
/// use flagkit::country_code_from_phone_code;
///
/// assert_eq!(country_code_from_phone_code("+420"), Some("CZ"));
/// assert_eq!(country_code_from_phone_code("420"), Some("CZ"));
/// ```
pub fn country_code_from_phone_code(code: &str) -> Option<&'static str> {
    let trimmed = code.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let country = PHONE_INDEX.get(digits).copied();
    if country.is_none() {
        tracing::debug!(code, "unknown phone code");
    }
    country
}

/// Canonical country for an ISO 4217 currency code (case-insensitive).
pub fn country_code_from_currency_code(code: &str) -> Option<&'static str> {
    let normalized = code.trim().to_ascii_uppercase();
    let country = CURRENCY_INDEX.get(normalized.as_str()).copied();
    if country.is_none() {
        tracing::debug!(code, "unknown currency code");
    }
    country
}

/// Emoji flag built from two Regional Indicator Symbols.
///
/// Anything other than exactly two ASCII letters (after uppercasing) gives
/// the white flag.
pub fn flag_emoji_for_country_code(code: &str) -> String {
    let upper = code.to_ascii_uppercase();
    match upper.as_bytes() {
        [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => {
            [*a, *b].into_iter().filter_map(regional_indicator).collect()
        }
        _ => {
            tracing::debug!(code, "not a country code, using white flag");
            WHITE_FLAG.to_string()
        }
    }
}

pub fn flag_emoji_for_currency_code(code: &str) -> String {
    flag_emoji_for_country_code(country_code_from_currency_code(code).unwrap_or_default())
}

pub fn flag_emoji_for_phone_code(code: &str) -> String {
    flag_emoji_for_country_code(country_code_from_phone_code(code).unwrap_or_default())
}

/// True for a string made of exactly two Regional Indicator Symbols.
pub fn is_flag_emoji(s: &str) -> bool {
    country_code_from_flag_emoji(s).is_some()
}

/// Inverse of [`flag_emoji_for_country_code`]. The white flag is `None`.
pub fn country_code_from_flag_emoji(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let (first, second) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }

    [first, second]
        .iter()
        .map(|&c| {
            let scalar = u32::from(c);
            (REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z)
                .contains(&scalar)
                .then(|| char::from(b'A' + (scalar - REGIONAL_INDICATOR_A) as u8))
        })
        .collect()
}

pub fn phone_codes() -> &'static [(&'static str, &'static str)] {
    PHONE_CODES
}

pub fn currency_codes() -> &'static [(&'static str, &'static str)] {
    CURRENCY_CODES
}
