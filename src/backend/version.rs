//! Version numbers reported by external OCR tools.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A `major.minor.patch` tool version. Missing components read as zero, so
/// `"10"` and `"10.0.0"` compare equal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ToolVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Find the first version number in free-form `--version` output,
    /// e.g. `"16.4.2"`, `"ocrmypdf 13.7.0"` or `"v15.2.0+dfsg1"`.
    pub fn find_in(text: &str) -> Option<Self> {
        text.split_whitespace()
            .map(|word| word.trim_start_matches('v'))
            .find_map(|word| word.parse().ok())
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError(String);

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid version: {:?}", self.0)
    }
}

impl std::error::Error for ParseVersionError {}

impl FromStr for ToolVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Drop pre-release and build suffixes ("1.2.3-rc1", "1.2.3+dfsg").
        let core = s.split(['-', '+']).next().unwrap_or_default();
        let mut parts = [0u32; 3];
        let mut count = 0;
        for piece in core.split('.') {
            if count == parts.len() {
                return Err(ParseVersionError(s.to_string()));
            }
            parts[count] = piece
                .parse()
                .map_err(|_| ParseVersionError(s.to_string()))?;
            count += 1;
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl TryFrom<String> for ToolVersion {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ToolVersion> for String {
    fn from(v: ToolVersion) -> Self {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_and_suffixed_versions() {
        assert_eq!("16.4.2".parse(), Ok(ToolVersion::new(16, 4, 2)));
        assert_eq!("10".parse(), Ok(ToolVersion::new(10, 0, 0)));
        assert_eq!("15.2".parse(), Ok(ToolVersion::new(15, 2, 0)));
        assert_eq!("15.2.0+dfsg1".parse(), Ok(ToolVersion::new(15, 2, 0)));
        assert_eq!("14.0.1-rc2".parse(), Ok(ToolVersion::new(14, 0, 1)));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<ToolVersion>().is_err());
        assert!("abc".parse::<ToolVersion>().is_err());
        assert!("1.2.3.4".parse::<ToolVersion>().is_err());
        assert!("1..2".parse::<ToolVersion>().is_err());
    }

    #[test]
    fn finds_version_in_tool_output() {
        assert_eq!(
            ToolVersion::find_in("16.4.2\n"),
            Some(ToolVersion::new(16, 4, 2))
        );
        assert_eq!(
            ToolVersion::find_in("ocrmypdf v13.7.0"),
            Some(ToolVersion::new(13, 7, 0))
        );
        assert_eq!(ToolVersion::find_in("command not found"), None);
    }

    #[test]
    fn orders_numerically() {
        assert!(ToolVersion::new(9, 9, 9) < ToolVersion::new(10, 0, 0));
        assert!(ToolVersion::new(10, 2, 0) > ToolVersion::new(10, 1, 7));
        assert_eq!(ToolVersion::new(10, 0, 0).to_string(), "10.0.0");
    }
}
