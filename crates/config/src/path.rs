use std::fmt;
use std::path;

/// A `/`-separated path inside the project, resolved against the project root
/// at build time.
///
/// Deserialization enforces containment: absolute paths and paths with `..`
/// components are rejected, whether they come from a config file or a CLI
/// override.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String")]
pub struct RelPath(relative_path::RelativePathBuf);

impl RelPath {
    pub fn new() -> Self {
        Self(relative_path::RelativePathBuf::new())
    }

    /// Wrap a path without checking that it stays inside the project.
    pub fn from_unchecked<S: Into<String>>(path: S) -> Self {
        Self(relative_path::RelativePathBuf::from(path.into()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_str().is_empty()
    }

    /// Resolve against `base`, producing a platform-native path.
    pub fn to_path<P: AsRef<path::Path>>(&self, base: P) -> path::PathBuf {
        self.0.to_path(base)
    }
}

impl std::ops::Deref for RelPath {
    type Target = relative_path::RelativePath;

    fn deref(&self) -> &Self::Target {
        self.0.as_relative_path()
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl TryFrom<&str> for RelPath {
    type Error = crate::Status;

    fn try_from(other: &str) -> Result<Self, Self::Error> {
        if other.starts_with('/') {
            return Err(crate::Status::new("Path must be relative to the project root")
                .context_with(|c| c.insert("Path", other.to_owned())));
        }
        let path = relative_path::RelativePathBuf::from(other);
        if path
            .components()
            .any(|c| c == relative_path::Component::ParentDir)
        {
            return Err(crate::Status::new("Path must not leave the project root")
                .context_with(|c| c.insert("Path", other.to_owned())));
        }
        Ok(Self(path))
    }
}

impl TryFrom<String> for RelPath {
    type Error = crate::Status;

    fn try_from(other: String) -> Result<Self, Self::Error> {
        Self::try_from(other.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_from_plain() {
        let actual = RelPath::try_from("src").unwrap();
        assert_eq!(actual.as_str(), "src");
    }

    #[test]
    fn try_from_nested() {
        let actual = RelPath::try_from("src/pages").unwrap();
        assert_eq!(actual.as_str(), "src/pages");
    }

    #[test]
    fn try_from_absolute() {
        assert!(RelPath::try_from("/etc/site").is_err());
    }

    #[test]
    fn try_from_parent_escape() {
        assert!(RelPath::try_from("../outside").is_err());
        assert!(RelPath::try_from("src/../../outside").is_err());
    }

    #[test]
    fn deserialize_applies_containment() {
        let actual: RelPath = serde_yaml::from_str("src/pages").unwrap();
        assert_eq!(actual.as_str(), "src/pages");
        assert!(serde_yaml::from_str::<RelPath>("../outside").is_err());
        assert!(serde_yaml::from_str::<RelPath>("/srv/www").is_err());
    }

    #[test]
    fn to_path_joins() {
        let rel = RelPath::from_unchecked("src/pages");
        let actual = rel.to_path(path::Path::new("base"));
        assert_eq!(actual, path::Path::new("base").join("src").join("pages"));
    }
}
