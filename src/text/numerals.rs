// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Spelling out small numbers.

use std::borrow::Cow;

const NAMES: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Errors raised by [`to_words`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// Spelling out was requested beyond the literal names up to ten.
    #[error("cannot spell out {number}: only numbers up to ten have names")]
    Unsupported {
        /// The number that was requested.
        number: i64,
    },
}

/// Spell out `number` in English.
///
/// Zero through ten become words; other numbers keep their digits.
///
/// # Errors
///
/// Returns [`NumeralError::Unsupported`] when `beyond_ten` is set, since
/// only the literal names up to ten are known.
///
/// ```
/// use wordform::to_words;
///
/// assert_eq!(to_words(7, false).unwrap(), "seven");
/// assert_eq!(to_words(42, false).unwrap(), "42");
/// assert!(to_words(42, true).is_err());
/// ```
pub fn to_words(number: i64, beyond_ten: bool) -> Result<Cow<'static, str>, NumeralError> {
    if beyond_ten {
        return Err(NumeralError::Unsupported { number });
    }

    Ok(usize::try_from(number)
        .ok()
        .and_then(|index| NAMES.get(index))
        .map_or_else(|| Cow::Owned(number.to_string()), |name| Cow::Borrowed(*name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_numbers() {
        assert_eq!(to_words(0, false).unwrap(), "zero");
        assert_eq!(to_words(1, false).unwrap(), "one");
        assert_eq!(to_words(10, false).unwrap(), "ten");
    }

    #[test]
    fn test_unnamed_numbers_keep_digits() {
        assert_eq!(to_words(11, false).unwrap(), "11");
        assert_eq!(to_words(-3, false).unwrap(), "-3");
        assert_eq!(to_words(i64::MIN, false).unwrap(), i64::MIN.to_string());
    }

    #[test]
    fn test_beyond_ten_is_unsupported() {
        assert_eq!(
            to_words(3, true),
            Err(NumeralError::Unsupported { number: 3 })
        );
        assert_eq!(
            to_words(12, true),
            Err(NumeralError::Unsupported { number: 12 })
        );
    }
}
