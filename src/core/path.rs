//! Repository paths.
//!
//! A RepoPath is a sequence of segments such as `github.com/jurgen-kluft/ctext`.
//! Both `/` and `\` are accepted when parsing; rendering always uses `/`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A separator-agnostic repository path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoPath {
    segments: Vec<String>,
}

impl RepoPath {
    /// Create an empty path.
    pub fn new() -> Self {
        RepoPath {
            segments: Vec::new(),
        }
    }

    /// Parse a path, splitting on either separator and dropping empty segments.
    pub fn parse(s: &str) -> Self {
        let segments = s
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect();
        RepoPath { segments }
    }

    /// Append a segment (or a sub-path) and return the new path.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(RepoPath::parse(segment.as_ref()).segments);
        RepoPath { segments }
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolve against a base directory on the local filesystem.
    pub fn to_native(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        for seg in &self.segments {
            path.push(seg);
        }
        path
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl FromStr for RepoPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RepoPath::parse(s))
    }
}

impl From<&str> for RepoPath {
    fn from(s: &str) -> Self {
        RepoPath::parse(s)
    }
}

impl From<String> for RepoPath {
    fn from(s: String) -> Self {
        RepoPath::parse(&s)
    }
}

impl Serialize for RepoPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RepoPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(RepoPath::parse(&s))
    }
}
