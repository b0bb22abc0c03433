//! Module path type for dotted identifiers

use crate::error::PathError;

/// Module path
///
/// Represents a dotted identifier like "std.math" as segments ["std", "math"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePath {
    /// Path segments
    /// "std.math" -> ["std", "math"]
    pub segments: Vec<String>,
}

impl ModulePath {
    /// Parse a dotted identifier into a ModulePath
    ///
    /// # Examples
    /// ```
    /// use modlink_core::ModulePath;
    ///
    /// let path = ModulePath::parse("math").unwrap();
    /// assert_eq!(path.segments, vec!["math"]);
    ///
    /// let path = ModulePath::parse("std.math").unwrap();
    /// assert_eq!(path.segments, vec!["std", "math"]);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::EmptyPath);
        }

        // Check for invalid characters
        if !s.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.') {
            return Err(PathError::InvalidPath(s.to_string()));
        }

        let segments: Vec<String> = s.split('.').map(|s| s.to_string()).collect();

        // Check for empty segments (e.g., "std..math")
        if segments.iter().any(|s| s.is_empty()) {
            return Err(PathError::EmptySegment(s.to_string()));
        }

        Ok(Self { segments })
    }

    /// Concatenate an optional raw string prefix in front of an identifier
    ///
    /// The prefix is prepended verbatim, so it normally ends with a dot:
    /// `join_prefix("json", Some("app.plugins."))` yields "app.plugins.json".
    pub fn join_prefix(identifier: &str, prefix: Option<&str>) -> String {
        match prefix {
            Some(p) => format!("{p}{identifier}"),
            None => identifier.to_string(),
        }
    }

    /// Get the last segment, which names the module itself
    pub fn name(&self) -> &str {
        self.segments.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get the parent path
    ///
    /// ["std", "math"] -> Some(["std"])
    pub fn parent(&self) -> Option<ModulePath> {
        if self.segments.len() <= 1 {
            return None;
        }

        Some(ModulePath {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Extract the last dot-separated segment of a raw identifier
    ///
    /// Used by the lazy handle's call convention without requiring the
    /// identifier to parse as a valid path first.
    pub fn tail(identifier: &str) -> &str {
        identifier.rsplit('.').next().unwrap_or(identifier)
    }
}

impl std::fmt::Display for ModulePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let path = ModulePath::parse("math").unwrap();
        assert_eq!(path.segments, vec!["math"]);
    }

    #[test]
    fn test_parse_nested() {
        let path = ModulePath::parse("std.math").unwrap();
        assert_eq!(path.segments, vec!["std", "math"]);
    }

    #[test]
    fn test_parse_deep() {
        let path = ModulePath::parse("a.b.c.d").unwrap();
        assert_eq!(path.segments, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(ModulePath::parse(""), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_parse_empty_segment() {
        assert!(matches!(
            ModulePath::parse("std..math"),
            Err(PathError::EmptySegment(_))
        ));
    }

    #[test]
    fn test_parse_invalid_char() {
        assert!(matches!(
            ModulePath::parse("std/math"),
            Err(PathError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_join_prefix() {
        assert_eq!(
            ModulePath::join_prefix("json", Some("app.plugins.")),
            "app.plugins.json"
        );
        assert_eq!(ModulePath::join_prefix("std.math", None), "std.math");
    }

    #[test]
    fn test_name() {
        let path = ModulePath::parse("std.math").unwrap();
        assert_eq!(path.name(), "math");
    }

    #[test]
    fn test_parent() {
        let path = ModulePath::parse("std.math.trig").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent.segments, vec!["std", "math"]);
    }

    #[test]
    fn test_parent_none() {
        let path = ModulePath::parse("math").unwrap();
        assert!(path.parent().is_none());
    }

    #[test]
    fn test_tail() {
        assert_eq!(ModulePath::tail("pkg.sub.foo"), "foo");
        assert_eq!(ModulePath::tail("foo"), "foo");
    }

    #[test]
    fn test_display() {
        let path = ModulePath::parse("std.math").unwrap();
        assert_eq!(path.to_string(), "std.math");
    }
}
