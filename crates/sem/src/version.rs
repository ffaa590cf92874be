//! The [`Version`] value type and its canonical string form.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parse::parse_version;

/// A parsed semantic version.
///
/// Supports versions in the format: `major.minor.patch[-prerelease][+meta]`
///
/// Equality is structural and includes `meta`. For ordering use
/// [`Version::precedence`] or [`Version::is_at_least`], which ignore metadata.
///
/// # Examples
///
/// ```
/// use sem::Version;
///
/// let v = Version::parse("1.0.0-beta.1.1+meta").unwrap();
/// assert_eq!(v.normal, [1, 0, 0]);
/// assert_eq!(v.prerelease, vec!["beta", "1", "1"]);
/// assert_eq!(v.meta, "meta");
/// assert!(v.is_prerelease());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major, minor and patch numbers
    pub normal: [u64; 3],
    /// Dot-separated prerelease identifiers; empty for a release
    pub prerelease: Vec<String>,
    /// Raw build metadata; empty when absent
    pub meta: String,
}

impl Version {
    /// Creates a release version with no prerelease or metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            normal: [major, minor, patch],
            prerelease: Vec::new(),
            meta: String::new(),
        }
    }

    /// Replaces the prerelease identifiers.
    ///
    /// ```
    /// use sem::Version;
    ///
    /// let rc = Version::new(2, 0, 0).with_prerelease(["rc", "1"]);
    /// assert_eq!(rc.to_string(), "2.0.0-rc.1");
    /// ```
    pub fn with_prerelease<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerelease = identifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the build metadata.
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = meta.into();
        self
    }

    /// Parses a version string.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] found; see its docs for the order
    /// in which problems are checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use sem::{ParseError, Version};
    ///
    /// assert_eq!(Version::parse("1.0.0").unwrap(), Version::new(1, 0, 0));
    /// assert_eq!(
    ///     Version::parse("1.1.1-beta+one+two"),
    ///     Err(ParseError::MultipleMetadataSegments)
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_version(input).inspect_err(|error| {
            tracing::trace!(input, %error, "rejected version string");
        })
    }

    /// Major version number
    pub fn major(&self) -> u64 {
        self.normal[0]
    }

    /// Minor version number
    pub fn minor(&self) -> u64 {
        self.normal[1]
    }

    /// Patch version number
    pub fn patch(&self) -> u64 {
        self.normal[2]
    }

    /// Check if this version carries prerelease identifiers.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Get just the `major.minor.patch` part as a string.
    ///
    /// ```
    /// use sem::Version;
    ///
    /// let v = Version::parse("1.0.41-beta.1+build").unwrap();
    /// assert_eq!(v.core_version(), "1.0.41");
    /// ```
    pub fn core_version(&self) -> String {
        format!("{}.{}.{}", self.normal[0], self.normal[1], self.normal[2])
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.normal[0], self.normal[1], self.normal[2])?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }
        if !self.meta.is_empty() {
            write!(f, "+{}", self.meta)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        let cases = [
            (Version::new(1, 0, 41), "1.0.41"),
            (Version::new(1, 0, 0).with_prerelease(["beta"]), "1.0.0-beta"),
            (Version::new(1, 0, 0).with_meta("build.5"), "1.0.0+build.5"),
            (
                Version::new(2, 0, 0)
                    .with_prerelease(["beta", "1", "1"])
                    .with_meta("meta"),
                "2.0.0-beta.1.1+meta",
            ),
        ];
        for (version, expected) in cases {
            assert_eq!(version.to_string(), expected);
        }
    }

    #[test]
    fn test_display_normalizes_leading_zeros() {
        let v = Version::parse("01.002.3").unwrap();
        assert_eq!(v.to_string(), "1.2.3");
        assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn test_accessors() {
        let v = Version::new(3, 14, 15);
        assert_eq!((v.major(), v.minor(), v.patch()), (3, 14, 15));
        assert!(!v.is_prerelease());
        assert!(v.clone().with_prerelease(["alpha"]).is_prerelease());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: Version = "1.2.3-rc.1".parse().unwrap();
        let b = Version::try_from("1.2.3-rc.1").unwrap();
        assert_eq!(a, b);
        assert!("1.2".parse::<Version>().is_err());
    }

    #[test]
    fn test_equality_includes_meta() {
        let a = Version::new(1, 0, 0).with_meta("a");
        let b = Version::new(1, 0, 0).with_meta("b");
        assert_ne!(a, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let v = Version::new(1, 2, 3).with_prerelease(["beta"]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.2.3-beta\"");
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        let bad = serde_json::from_str::<Version>("\"1.2\"").unwrap_err();
        assert!(bad.to_string().contains("major.minor.patch must be specified"));
    }
}
