//! Slash-delimited paths, normalized into components.
//!
//! Parsing never fails. Empty segments and `.` are dropped and `..` removes
//! the previous component, so `components` never holds an empty string, `.`
//! or `..`. A `..` at the root is dropped.

use std::fmt;
use std::str::FromStr;

/// An immutable, normalized path. The root has zero components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    components: Vec<String>,
}

impl Path {
    /// Parse a raw string such as `/docs/readme.txt`
    pub fn parse(raw: &str) -> Self {
        Self::from_components(raw.split('/'))
    }

    /// Build a path from already-split components, normalizing them
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for component in components {
            match component.as_ref() {
                "" | "." => {}
                ".." => {
                    _ = normalized.pop();
                }
                name => normalized.push(name.to_string()),
            }
        }
        Self {
            components: normalized,
        }
    }

    /// The root path, `/`
    pub fn root() -> Self {
        Self::default()
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Canonical form, always starting with `/`
    pub fn raw(&self) -> String {
        format!("/{}", self.components.join("/"))
    }

    /// Everything but the last component; `/` for the root or a top-level entry
    pub fn dirname(&self) -> String {
        self.parent().raw()
    }

    /// The last component, or `/` for the root
    pub fn basename(&self) -> String {
        self.components
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    pub fn parent(&self) -> Path {
        let keep = self.components.len().saturating_sub(1);
        Self {
            components: self.components[..keep].to_vec(),
        }
    }

    /// Append the components of `other` and re-normalize
    pub fn join<P: Into<JoinArg>>(&self, other: P) -> Path {
        let other = other.into();
        // A raw string may carry `..`, which must be able to consume our own
        // components, so it is normalized only after concatenation.
        Self::from_components(self.components.iter().chain(other.pending.iter()))
    }
}

/// Right-hand side of [`Path::join`]: a `Path` or a raw string, unresolved.
pub struct JoinArg {
    pending: Vec<String>,
}

impl From<&str> for JoinArg {
    fn from(raw: &str) -> Self {
        JoinArg {
            pending: raw.split('/').map(str::to_string).collect(),
        }
    }
}

impl From<String> for JoinArg {
    fn from(raw: String) -> Self {
        JoinArg::from(raw.as_str())
    }
}

impl From<Path> for JoinArg {
    fn from(path: Path) -> Self {
        JoinArg {
            pending: path.components,
        }
    }
}

impl From<&Path> for JoinArg {
    fn from(path: &Path) -> Self {
        JoinArg {
            pending: path.components.clone(),
        }
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Path::parse(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Path::parse(&raw)
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_empty_segments() {
        let path = Path::parse("//a///b/");
        assert_eq!(path.components(), ["a", "b"]);
        assert_eq!(path.raw(), "/a/b");
    }

    #[test]
    fn test_root() {
        let path = Path::parse("");
        assert!(path.components().is_empty());
        assert!(path.is_root());
        assert_eq!(path.raw(), "/");
        assert_eq!(path.basename(), "/");
        assert_eq!(path.dirname(), "/");
        assert_eq!(Path::parse("/"), Path::root());
    }

    #[test]
    fn test_derivations() {
        let path = Path::parse("/a/b/c");
        assert_eq!(path.basename(), "c");
        assert_eq!(path.dirname(), "/a/b");
        assert_eq!(path.parent().raw(), "/a/b");
        assert_eq!(Path::parse("/top").dirname(), "/");
        assert_eq!(Path::parse("/top").parent(), Path::root());
    }

    #[test]
    fn test_dot_components() {
        assert_eq!(Path::parse("/a/./b/../c").raw(), "/a/c");
        assert_eq!(Path::parse("/..").raw(), "/");
        assert_eq!(Path::parse("../../x").raw(), "/x");
        assert_eq!(Path::parse("a/b/..").components(), ["a"]);
    }

    #[test]
    fn test_reparse_is_idempotent() {
        for raw in ["", "/", "a", "/a/b/", "//x//y", "./a/../b", "/a/b/c/../../d", "..", "a b/c"] {
            let once = Path::parse(raw);
            let twice = Path::parse(&once.raw());
            assert_eq!(once, twice, "re-parsing {raw:?}");
        }
    }

    #[test]
    fn test_join() {
        let base = Path::parse("/a/b");
        assert_eq!(base.join("c/d").raw(), "/a/b/c/d");
        assert_eq!(base.join(Path::parse("/c")).raw(), "/a/b/c");
        assert_eq!(base.join("../x").raw(), "/a/x");
        assert_eq!(base.join("").raw(), "/a/b");
        assert_eq!(Path::root().join("docs").raw(), "/docs");
    }

    #[test]
    fn test_conversions() {
        let path: Path = "/x/y".parse().unwrap_or_default();
        assert_eq!(path.to_string(), "/x/y");
        assert_eq!(Path::from("x/y".to_string()), path);
        assert_eq!(Path::from_components(["x", "", "y"]), path);
    }
}
