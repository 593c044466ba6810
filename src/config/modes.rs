//! Run mode definitions.

use std::fmt;
use std::str::FromStr;

/// Available run modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Extract the media-attachment dataset to CSV (default).
    #[default]
    Media,
    /// Extract the posts dataset to CSV.
    Posts,
    /// Download files referenced by a previously extracted media CSV.
    Download,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Media => write!(f, "media"),
            RunMode::Posts => write!(f, "posts"),
            RunMode::Download => write!(f, "download"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "media" => Ok(RunMode::Media),
            "posts" => Ok(RunMode::Posts),
            "download" => Ok(RunMode::Download),
            _ => Err(format!("Unknown run mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for mode in [RunMode::Media, RunMode::Posts, RunMode::Download] {
            assert_eq!(mode.to_string().parse::<RunMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode() {
        assert!("everything".parse::<RunMode>().is_err());
    }
}
