//! Version precedence per Semantic Versioning 2.0.0.
//!
//! Precedence rules:
//! 1. Compare major, minor, patch numerically
//! 2. A release has higher precedence than any prerelease of the same triple
//! 3. Prerelease identifiers compare left to right: numeric ones numerically,
//!    alphanumeric ones by byte order, and alphanumeric beats numeric
//! 4. With all shared identifiers equal, the longer list wins
//!
//! Build metadata never takes part.

use std::cmp::Ordering;

use crate::version::Version;

impl Version {
    /// Compare the precedence of two versions.
    ///
    /// This is a total preorder: versions that differ only in metadata, or
    /// in numerically equal identifiers such as `01` and `1`, compare
    /// `Equal` while still being unequal under `==`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sem::Version;
    /// use std::cmp::Ordering;
    ///
    /// let stable = Version::new(1, 0, 0);
    /// let beta = Version::new(1, 0, 0).with_prerelease(["beta"]);
    /// assert_eq!(stable.precedence(&beta), Ordering::Greater);
    /// ```
    pub fn precedence(&self, other: &Version) -> Ordering {
        self.normal
            .cmp(&other.normal)
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }

    /// Reports whether this version has equal or greater precedence than
    /// `min`, i.e. whether it satisfies `min` as a minimum requirement.
    ///
    /// # Examples
    ///
    /// ```
    /// use sem::Version;
    ///
    /// let v = Version::parse("1.0.0-beta.2").unwrap();
    /// assert!(v.is_at_least(&Version::parse("1.0.0-beta").unwrap()));
    /// assert!(!v.is_at_least(&Version::parse("1.0.0").unwrap()));
    /// ```
    pub fn is_at_least(&self, min: &Version) -> bool {
        self.precedence(min) != Ordering::Less
    }
}

fn compare_prerelease(ours: &[String], theirs: &[String]) -> Ordering {
    match (ours.is_empty(), theirs.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (index, their_id) in theirs.iter().enumerate() {
        let Some(our_id) = ours.get(index) else {
            return Ordering::Less;
        };
        match compare_identifier(our_id, their_id) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    // theirs is a prefix of ours, or they are the same
    ours.len().cmp(&theirs.len())
}

fn compare_identifier(ours: &str, theirs: &str) -> Ordering {
    match (numeric(ours), numeric(theirs)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => ours.cmp(theirs),
    }
}

/// Digit-only identifiers that fit in `u64`; anything else compares as text.
fn numeric(identifier: &str) -> Option<u64> {
    if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    identifier.parse().ok()
}
