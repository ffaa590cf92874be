//! # sem
//!
//! Parsing, formatting and precedence checks for
//! [Semantic Versioning 2.0.0](https://semver.org/spec/v2.0.0.html) strings of
//! the form `major.minor.patch[-prerelease][+meta]`.
//!
//! ## Quick Start
//!
//! ```rust
//! use sem::Version;
//!
//! let plugin = Version::parse("1.4.0-rc.2+build.77").unwrap();
//! let minimum = Version::parse("1.4.0-rc.1").unwrap();
//!
//! assert!(plugin.is_at_least(&minimum));
//! assert_eq!(plugin.to_string(), "1.4.0-rc.2+build.77");
//! ```
//!
//! ## Features
//!
//! - **Strict parsing**: prerelease and metadata limited to `[0-9A-Za-z-.]`,
//!   with the offending character and its position reported on failure
//! - **Semver precedence**: numeric vs alphanumeric identifiers, release beats
//!   prerelease, metadata ignored
//! - **Minimum-version gates**: [`require_at_least`] for plugin and tool checks
//! - **serde** (default feature): `Version` (de)serializes as its string form
//!
//! ## Modules
//!
//! - [`error`]: Error types and the crate [`Result`] alias
//! - [`version`]: The [`Version`] value type and its string form
//! - [`precedence`]: Ordering between versions
//! - [`gate`]: Minimum-version checks on raw strings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod gate;
mod parse;
pub mod precedence;
pub mod version;

pub use error::{Error, ParseError, Result, Section};
pub use gate::{compare_versions, find_version, require_at_least};
pub use version::Version;
