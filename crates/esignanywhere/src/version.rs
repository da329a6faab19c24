//! API generations exposed by eSignAnyWhere.

use std::fmt;
use std::str::FromStr;

/// Versioned path segment of the API (`/Api/{version}/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    V4,
    V5,
    #[default]
    V6,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V4 => "v4",
            ApiVersion::V5 => "v5",
            ApiVersion::V6 => "v6",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v4" | "4" => Ok(ApiVersion::V4),
            "v5" | "5" => Ok(ApiVersion::V5),
            "v6" | "6" => Ok(ApiVersion::V6),
            other => Err(format!("unknown API version '{other}'")),
        }
    }
}

/// Versions accepted by the utility endpoints (`version`, `authorization`).
pub(crate) const ANY: &[ApiVersion] = &[ApiVersion::V4, ApiVersion::V5, ApiVersion::V6];
/// Versions accepted by envelope lookup.
pub(crate) const V5_V6: &[ApiVersion] = &[ApiVersion::V5, ApiVersion::V6];
/// Versions accepted by everything else.
pub(crate) const V6_ONLY: &[ApiVersion] = &[ApiVersion::V6];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_or_without_prefix() {
        assert_eq!("v5".parse::<ApiVersion>(), Ok(ApiVersion::V5));
        assert_eq!("6".parse::<ApiVersion>(), Ok(ApiVersion::V6));
        assert_eq!(" V4 ".parse::<ApiVersion>(), Ok(ApiVersion::V4));
        assert!("v7".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn default_is_latest_generation() {
        assert_eq!(ApiVersion::default(), ApiVersion::V6);
        assert_eq!(ApiVersion::default().to_string(), "v6");
    }
}
