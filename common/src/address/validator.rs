use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::AddressError;

/// Characters read into a single segment before it is closed.
pub const MAX_SEGMENT_DIGITS: usize = 3;

/// Segments a dotted quad must have.
pub const SEGMENT_COUNT: usize = 4;

const MAX_OCTET: u16 = 255;

/// A token that passed [`ValidatedAddress::parse`].
///
/// The text is kept exactly as it was extracted, so `"1..1.1"` is stored and
/// later pinged as `"1..1.1"`, not normalized to `"1.0.1.1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedAddress(String);

impl ValidatedAddress {
    /// Checks `token` against the dotted-quad rule.
    ///
    /// The token is walked segment by segment. A segment ends at a `.`, at the
    /// end of the token, or after [`MAX_SEGMENT_DIGITS`] characters; in the
    /// last case the next character starts a new segment, so `"1234.1.1"`
    /// reads as `123`, `4`, `1`, `1`. The first segment above 255 rejects the
    /// token without looking at the rest. The token is accepted when exactly
    /// [`SEGMENT_COUNT`] segments were read.
    ///
    /// An empty segment counts as 0. `"1..1.1"` and `"1.2.3."` are therefore
    /// accepted. This mirrors the legacy tool and is kept on purpose.
    pub fn parse(token: &str) -> Result<Self, AddressError> {
        let found: usize = count_segments(token)?;
        if found != SEGMENT_COUNT {
            return Err(AddressError::SegmentCount { found });
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidatedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shorthand for `ValidatedAddress::parse(token).is_ok()`.
pub fn is_valid(token: &str) -> bool {
    ValidatedAddress::parse(token).is_ok()
}

/// Counts the in-range segments of `token`, stopping at the first bad one.
fn count_segments(token: &str) -> Result<usize, AddressError> {
    if token.is_empty() {
        return Ok(0);
    }

    let mut chars: Peekable<Chars<'_>> = token.chars().peekable();
    let mut found: usize = 0;

    loop {
        let segment: String = next_segment(&mut chars);
        parse_segment(&segment)?;
        found += 1;

        match chars.peek() {
            Some('.') => {
                // A dot is always followed by another segment, even an empty one.
                chars.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    Ok(found)
}

fn next_segment(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut segment = String::with_capacity(MAX_SEGMENT_DIGITS);
    let mut taken: usize = 0;

    while taken < MAX_SEGMENT_DIGITS {
        match chars.peek() {
            Some('.') | None => break,
            Some(&c) => {
                segment.push(c);
                chars.next();
                taken += 1;
            }
        }
    }

    segment
}

fn parse_segment(segment: &str) -> Result<u8, AddressError> {
    if segment.is_empty() {
        return Ok(0);
    }

    if !segment.chars().all(|c| c.is_ascii_digit()) {
        return Err(AddressError::InvalidCharacter {
            segment: segment.to_string(),
        });
    }

    let value: u16 = segment
        .parse()
        .map_err(|_| AddressError::InvalidCharacter {
            segment: segment.to_string(),
        })?;

    if value > MAX_OCTET {
        return Err(AddressError::OctetOutOfRange {
            segment: segment.to_string(),
        });
    }

    Ok(value as u8)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
