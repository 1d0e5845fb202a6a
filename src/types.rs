#![forbid(unsafe_code)]

//! Core domain types for verstamp
//!
//! The manifest version string has the shape `<base>+<build>`, e.g.
//! `1.2.3+41`. These types model that string without validating it: a
//! malformed build segment is carried through as [`BuildNumber::NaN`]
//! instead of being rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter between the semantic version and the build number
pub const BUILD_DELIMITER: char = '+';

/// A manifest version string split on [`BUILD_DELIMITER`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppVersion {
    segments: Vec<String>,
}

impl AppVersion {
    /// Splits a raw version string on every `+`
    ///
    /// Never fails. `"1.2.3"` yields a single segment.
    pub fn parse(raw: &str) -> Self {
        AppVersion {
            segments: raw.split(BUILD_DELIMITER).map(str::to_string).collect(),
        }
    }

    /// The `major.minor.patch` part before the first `+`
    pub fn base(&self) -> &str {
        &self.segments[0]
    }

    /// The raw build segment, if the version has one
    pub fn build_segment(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    /// The parsed build number
    pub fn build_number(&self) -> BuildNumber {
        match self.build_segment() {
            Some(segment) => BuildNumber::parse(segment),
            None => BuildNumber::NaN,
        }
    }

    /// Returns a copy with the build segment replaced by its successor
    ///
    /// A version without a build segment gains one, so `"1.2.3"` becomes
    /// `"1.2.3+NaN"`. Segments after the build segment are left alone.
    pub fn with_incremented_build(&self) -> Self {
        let next = self.build_number().next().to_string();
        let mut segments = self.segments.clone();
        if segments.len() > 1 {
            segments[1] = next;
        } else {
            segments.push(next);
        }
        AppVersion { segments }
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(&BUILD_DELIMITER.to_string()))
    }
}

/// The integer after the `+`, or `NaN` when it does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildNumber {
    Number(i64),
    NaN,
}

impl BuildNumber {
    /// Lenient base-10 parse
    ///
    /// Leading whitespace is skipped, an optional sign is accepted, and the
    /// longest run of ASCII digits that follows is used. Trailing garbage is
    /// ignored (`"41rc"` parses as 41). No digits at all yields `NaN`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return BuildNumber::NaN;
        }

        match rest[..digits_len].parse::<i64>() {
            Ok(n) if negative => BuildNumber::Number(-n),
            Ok(n) => BuildNumber::Number(n),
            Err(_) => BuildNumber::NaN,
        }
    }

    /// The next build number; `NaN` and overflow stay `NaN`
    pub fn next(self) -> Self {
        match self {
            BuildNumber::Number(n) => n
                .checked_add(1)
                .map_or(BuildNumber::NaN, BuildNumber::Number),
            BuildNumber::NaN => BuildNumber::NaN,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, BuildNumber::NaN)
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildNumber::Number(n) => write!(f, "{}", n),
            BuildNumber::NaN => write!(f, "NaN"),
        }
    }
}

/// Abbreviated commit identifier of the current checkout
///
/// May be empty when the version-control query failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitHash(String);

impl CommitHash {
    /// Creates a CommitHash, trimming surrounding whitespace
    pub fn new(raw: impl AsRef<str>) -> Self {
        CommitHash(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CommitHash> for String {
    fn from(commit: CommitHash) -> Self {
        commit.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_version_split() {
        let version = AppVersion::parse("1.2.3+41");
        assert_eq!(version.base(), "1.2.3");
        assert_eq!(version.build_segment(), Some("41"));
        assert_eq!(version.build_number(), BuildNumber::Number(41));
        assert_eq!(version.to_string(), "1.2.3+41");
    }

    #[test]
    fn test_app_version_without_build() {
        let version = AppVersion::parse("1.2.3");
        assert_eq!(version.base(), "1.2.3");
        assert_eq!(version.build_segment(), None);
        assert!(version.build_number().is_nan());
    }

    #[test]
    fn test_increment_law() {
        assert_eq!(
            AppVersion::parse("1.2.3+41")
                .with_incremented_build()
                .to_string(),
            "1.2.3+42"
        );
        assert_eq!(
            AppVersion::parse("1.2.3+9")
                .with_incremented_build()
                .to_string(),
            "1.2.3+10"
        );
    }

    #[test]
    fn test_increment_drops_zero_padding() {
        assert_eq!(
            AppVersion::parse("1.2.3+007")
                .with_incremented_build()
                .to_string(),
            "1.2.3+8"
        );
    }

    #[test]
    fn test_increment_non_numeric_yields_nan() {
        assert_eq!(
            AppVersion::parse("1.2.3+abc")
                .with_incremented_build()
                .to_string(),
            "1.2.3+NaN"
        );
        assert_eq!(
            AppVersion::parse("1.2.3")
                .with_incremented_build()
                .to_string(),
            "1.2.3+NaN"
        );
        assert_eq!(
            AppVersion::parse("1.2.3+")
                .with_incremented_build()
                .to_string(),
            "1.2.3+NaN"
        );
    }

    #[test]
    fn test_increment_keeps_extra_segments() {
        assert_eq!(
            AppVersion::parse("1.0.0+4+meta")
                .with_incremented_build()
                .to_string(),
            "1.0.0+5+meta"
        );
    }

    #[test]
    fn test_build_number_lenient_parse() {
        assert_eq!(BuildNumber::parse("41"), BuildNumber::Number(41));
        assert_eq!(BuildNumber::parse("  12"), BuildNumber::Number(12));
        assert_eq!(BuildNumber::parse("41rc1"), BuildNumber::Number(41));
        assert_eq!(BuildNumber::parse("-3"), BuildNumber::Number(-3));
        assert_eq!(BuildNumber::parse("+3"), BuildNumber::Number(3));
        assert_eq!(BuildNumber::parse(""), BuildNumber::NaN);
        assert_eq!(BuildNumber::parse("-"), BuildNumber::NaN);
        assert_eq!(BuildNumber::parse("abc"), BuildNumber::NaN);
    }

    #[test]
    fn test_build_number_next() {
        assert_eq!(BuildNumber::Number(0).next(), BuildNumber::Number(1));
        assert_eq!(BuildNumber::Number(-1).next(), BuildNumber::Number(0));
        assert_eq!(BuildNumber::NaN.next(), BuildNumber::NaN);
        assert_eq!(BuildNumber::Number(i64::MAX).next(), BuildNumber::NaN);
    }

    #[test]
    fn test_build_number_overflowing_digits() {
        assert!(BuildNumber::parse("99999999999999999999999").is_nan());
    }

    #[test]
    fn test_commit_hash_trims() {
        let commit = CommitHash::new("  a1b2c3d\n");
        assert_eq!(commit.as_str(), "a1b2c3d");
        assert!(!commit.is_empty());
        assert!(CommitHash::new("\n").is_empty());
    }
}
