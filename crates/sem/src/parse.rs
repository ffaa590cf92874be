//! String to [`Version`] conversion.
//!
//! Checks run in a fixed order because callers match on which error wins:
//!
//! 1. count of `+` separators
//! 2. metadata characters
//! 3. shape of the normal version (`major.minor.patch`)
//! 4. normal version digits
//! 5. prerelease characters

use crate::error::{ParseError, Section};
use crate::version::Version;

/// Characters allowed in prerelease and metadata sections: `[0-9A-Za-z-.]`.
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

pub(crate) fn parse_version(input: &str) -> Result<Version, ParseError> {
    let mut segments = input.split('+');
    let head = segments.next().unwrap_or_default();
    let meta = segments.next();
    if segments.next().is_some() {
        return Err(ParseError::MultipleMetadataSegments);
    }

    let meta = match meta {
        Some(meta) => {
            check_chars(meta, Section::Meta)?;
            meta.to_owned()
        }
        None => String::new(),
    };

    // '-' is legal inside prerelease identifiers, so only the first one splits.
    let (normal, prerelease) = head.split_once('-').unwrap_or((head, ""));
    let normal = parse_normal(normal)?;

    if prerelease.is_empty() {
        return Ok(Version {
            normal,
            prerelease: Vec::new(),
            meta,
        });
    }

    check_chars(prerelease, Section::Prerelease)?;
    Ok(Version {
        normal,
        prerelease: prerelease.split('.').map(str::to_owned).collect(),
        meta,
    })
}

/// Parses `major.minor.patch`. Positions in errors count from the start of
/// the whole normal section, dots included.
fn parse_normal(normal: &str) -> Result<[u64; 3], ParseError> {
    let segments: Vec<&str> = normal.split('.').collect();
    if segments.len() != 3 {
        return Err(ParseError::BadFormat);
    }

    let mut parsed = [0u64; 3];
    let mut offset = 0;
    for (slot, segment) in parsed.iter_mut().zip(&segments) {
        if let Some((index, character)) = segment
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(ParseError::InvalidCharacter {
                section: Section::Normal,
                character,
                position: offset + index,
            });
        }
        *slot = segment
            .parse::<u64>()
            .map_err(|source| ParseError::InvalidNumber {
                segment: (*segment).to_owned(),
                source,
            })?;
        offset += segment.len() + 1;
    }
    Ok(parsed)
}

fn check_chars(text: &str, section: Section) -> Result<(), ParseError> {
    match text
        .chars()
        .enumerate()
        .find(|&(_, c)| !is_identifier_char(c))
    {
        Some((position, character)) => Err(ParseError::InvalidCharacter {
            section,
            character,
            position,
        }),
        None => Ok(()),
    }
}
