//! Error types for version parsing and minimum-version checks.
//!
//! # Error Hierarchy
//!
//! ```text
//! Error (top-level)
//! ├── Parse(ParseError)
//! │   ├── MultipleMetadataSegments
//! │   ├── BadFormat
//! │   ├── InvalidCharacter { section, character, position }
//! │   └── InvalidNumber { segment, source }
//! └── Incompatible { found, required }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sem::error::{ParseError, Section};
//! use sem::Version;
//!
//! let err = Version::parse("1.0.0+blah$").unwrap_err();
//! assert_eq!(
//!     err,
//!     ParseError::InvalidCharacter {
//!         section: Section::Meta,
//!         character: '$',
//!         position: 4,
//!     }
//! );
//! assert_eq!(err.to_string(), "bad meta character: '$', in position 4");
//! ```

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

use crate::version::Version;

/// Top-level error type for the crate.
///
/// [`ParseError`] converts into `Error` via `From`, so `?` works across both.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not a valid semantic version.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A version parsed fine but is older than the required minimum.
    #[error("Incompatible version: found {found}, required at least {required}")]
    Incompatible {
        /// Version that was checked
        found: Version,
        /// Minimum version it had to satisfy
        required: Version,
    },
}

/// Reasons a string fails to parse as a [`Version`].
///
/// The parser stops at the first problem, checking in this order: the number
/// of `+` separators, the metadata characters, the shape of the normal
/// version, its digits, and finally the prerelease characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// More than one `+` in the input.
    #[error("only one +meta is allowed")]
    MultipleMetadataSegments,

    /// The normal version did not split into exactly three dot-separated parts.
    #[error("major.minor.patch must be specified")]
    BadFormat,

    /// A character outside the allowed class for its section.
    #[error("bad {section} character: '{character}', in position {position}")]
    InvalidCharacter {
        /// Section the character was found in
        section: Section,
        /// The offending character
        character: char,
        /// Zero-based position within the section
        position: usize,
    },

    /// A digit-only normal component that still failed integer conversion,
    /// e.g. an empty component or one too large for `u64`.
    #[error("invalid normal version number {segment:?}: {source}")]
    InvalidNumber {
        /// The component text as written
        segment: String,
        /// Underlying conversion failure
        #[source]
        source: ParseIntError,
    },
}

/// The part of a version string a [`ParseError::InvalidCharacter`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `major.minor.patch`
    Normal,
    /// Everything after the first `-` and before `+`
    Prerelease,
    /// Everything after `+`
    Meta,
}

impl Section {
    /// Lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Normal => "normal",
            Section::Prerelease => "prerelease",
            Section::Meta => "meta",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias using the crate's top-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseError::MultipleMetadataSegments.to_string(),
            "only one +meta is allowed"
        );
        assert_eq!(
            ParseError::BadFormat.to_string(),
            "major.minor.patch must be specified"
        );
        let err = ParseError::InvalidCharacter {
            section: Section::Prerelease,
            character: '$',
            position: 2,
        };
        assert_eq!(err.to_string(), "bad prerelease character: '$', in position 2");
    }

    #[test]
    fn test_invalid_number_keeps_source() {
        use std::error::Error as _;

        let source = "".parse::<u64>().unwrap_err();
        let err = ParseError::InvalidNumber {
            segment: String::new(),
            source,
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error_converts_to_error() {
        let err: Error = ParseError::BadFormat.into();
        assert!(matches!(err, Error::Parse(ParseError::BadFormat)));
        assert_eq!(
            err.to_string(),
            "Parse error: major.minor.patch must be specified"
        );
    }

    #[test]
    fn test_incompatible_message() {
        let err = Error::Incompatible {
            found: Version::new(1, 0, 0),
            required: Version::new(1, 2, 0).with_prerelease(["rc", "1"]),
        };
        assert_eq!(
            err.to_string(),
            "Incompatible version: found 1.0.0, required at least 1.2.0-rc.1"
        );
    }

    #[test]
    fn test_section_names() {
        assert_eq!(Section::Normal.to_string(), "normal");
        assert_eq!(Section::Prerelease.to_string(), "prerelease");
        assert_eq!(Section::Meta.to_string(), "meta");
    }
}
