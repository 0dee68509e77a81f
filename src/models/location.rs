use serde::Serialize;

/// What history is being requested: a repository, an optional branch and an
/// optional path inside the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    repository: String,
    branch: Option<String>,
    path: Option<String>,
}

impl SourceLocation {
    pub fn new(repository: impl Into<String>, branch: Option<&str>, path: Option<&str>) -> Self {
        let branch = branch
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);
        let path = path
            .map(|p| p.trim_matches('/'))
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Self {
            repository: repository.into(),
            branch,
            path,
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Path split into its `/`-separated components, root first.
    pub fn path_components(&self) -> Vec<&str> {
        self.path
            .as_deref()
            .map(|p| p.split('/').filter(|c| !c.is_empty()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_slashes_and_empty_values() {
        let loc = SourceLocation::new("demo", Some(""), Some("/src/lib.rs/"));
        assert_eq!(loc.branch(), None);
        assert_eq!(loc.path(), Some("src/lib.rs"));
        assert_eq!(loc.path_components(), vec!["src", "lib.rs"]);

        let root = SourceLocation::new("demo", Some("main"), Some("/"));
        assert_eq!(root.branch(), Some("main"));
        assert_eq!(root.path(), None);
        assert!(root.path_components().is_empty());
    }
}
