//! Media kind classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of media a product is.
///
/// Backends occasionally send values outside the known set; those are kept
/// verbatim in [`MediaKind::Other`] instead of failing the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaKind {
    Game,
    Movie,
    TvSeries,
    Other(String),
}

impl MediaKind {
    /// Wire representation (e.g., `"TV_Series"`).
    pub fn as_str(&self) -> &str {
        match self {
            MediaKind::Game => "Game",
            MediaKind::Movie => "Movie",
            MediaKind::TvSeries => "TV_Series",
            MediaKind::Other(raw) => raw,
        }
    }

    /// Parse a media kind, case-insensitively.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "game" => MediaKind::Game,
            "movie" => MediaKind::Movie,
            "tv_series" => MediaKind::TvSeries,
            _ => MediaKind::Other(s.to_string()),
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &str {
        match self {
            MediaKind::Game => "Game",
            MediaKind::Movie => "Movie",
            MediaKind::TvSeries => "TV Series",
            MediaKind::Other(raw) => raw,
        }
    }

    /// Check if this is one of the known kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, MediaKind::Other(_))
    }

    /// Case-insensitive comparison against a wire value.
    pub fn matches(&self, kind: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(kind.trim())
    }
}

impl Default for MediaKind {
    fn default() -> Self {
        MediaKind::Other(String::new())
    }
}

impl From<String> for MediaKind {
    fn from(s: String) -> Self {
        MediaKind::parse(&s)
    }
}

impl From<&str> for MediaKind {
    fn from(s: &str) -> Self {
        MediaKind::parse(s)
    }
}

impl From<MediaKind> for String {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
