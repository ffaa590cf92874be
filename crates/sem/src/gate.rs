//! Minimum-version checks on raw version strings.
//!
//! These helpers cover the usual caller flow: take a version reported by a
//! plugin or tool, take the minimum a host supports, and decide.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::parse::parse_version;
use crate::version::Version;

/// Check that `found` satisfies the minimum version `required`.
///
/// Returns the parsed `found` version on success.
///
/// # Errors
///
/// * [`Error::Parse`] if either string is not a valid version
/// * [`Error::Incompatible`] if `found` has lower precedence than `required`
///
/// # Examples
///
/// ```
/// use sem::{require_at_least, Error};
///
/// let v = require_at_least("1.4.0+build.7", "1.2.0").unwrap();
/// assert_eq!(v.meta, "build.7");
///
/// let err = require_at_least("1.2.0-rc.1", "1.2.0").unwrap_err();
/// assert!(matches!(err, Error::Incompatible { .. }));
/// ```
pub fn require_at_least(found: &str, required: &str) -> Result<Version> {
    let found = Version::parse(found)?;
    let required = Version::parse(required)?;

    if found.is_at_least(&required) {
        debug!(%found, %required, "version satisfies minimum");
        Ok(found)
    } else {
        warn!(%found, %required, "version below required minimum");
        Err(Error::Incompatible { found, required })
    }
}

/// Compare two version strings by precedence.
///
/// # Returns
///
/// * `Ordering::Greater` if a > b
/// * `Ordering::Less` if a < b
/// * `Ordering::Equal` if they have equal precedence (or if both are invalid)
///
/// A valid version always sorts above an invalid one.
///
/// # Examples
///
/// ```
/// use sem::compare_versions;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_versions("1.0.41", "1.0.40"), Ordering::Greater);
/// assert_eq!(compare_versions("1.0.0-beta", "1.0.0"), Ordering::Less);
/// assert_eq!(compare_versions("1.0.0", "garbage"), Ordering::Greater);
/// ```
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (Version::parse(a), Version::parse(b)) {
        (Ok(va), Ok(vb)) => va.precedence(&vb),
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Ok(_)) => Ordering::Less,
        (Err(_), Err(_)) => Ordering::Equal,
    }
}

/// Find the first version in free-form text such as `tool --version` output.
///
/// Tokens are split on whitespace; surrounding punctuation and a single
/// leading `v` are stripped before parsing. A token that does not parse as a
/// whole is retried from each digit that starts a new number, so versions
/// glued to a name or label (`claude-1.0.41`, `version:2.0.0`) are found too.
///
/// # Examples
///
/// ```
/// use sem::find_version;
///
/// let v = find_version("claude version 1.0.41\n").unwrap();
/// assert_eq!(v.to_string(), "1.0.41");
///
/// let v = find_version("tool v2.3.4-rc.1 (build abc)").unwrap();
/// assert_eq!(v.to_string(), "2.3.4-rc.1");
///
/// let v = find_version("claude-1.0.41 version:2.0.0").unwrap();
/// assert_eq!(v.to_string(), "1.0.41");
///
/// assert!(find_version("no version here").is_none());
/// ```
pub fn find_version(text: &str) -> Option<Version> {
    let found = text.split_whitespace().find_map(version_in_token);

    match &found {
        Some(version) => debug!(%version, "extracted version from text"),
        None => debug!("no version found in text"),
    }
    found
}

fn version_in_token(token: &str) -> Option<Version> {
    let token = token.trim_matches(|c: char| !c.is_ascii_alphanumeric());
    let token = token.strip_prefix('v').unwrap_or(token);
    if let Ok(version) = parse_version(token) {
        return Some(version);
    }

    // Skip digits that continue a number or a dotted version.
    token
        .char_indices()
        .filter(|&(index, c)| {
            index > 0
                && c.is_ascii_digit()
                && !token[..index].ends_with(|p: char| p.is_ascii_digit() || p == '.')
        })
        .find_map(|(index, _)| parse_version(&token[index..]).ok())
}
