use crate::error::Result;
use crate::git::Repository;
use std::collections::HashSet;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    latest_tag: Option<String>,
    objects: HashSet<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag reported as nearest to HEAD. The tag also becomes a known object.
    pub fn with_latest_tag(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.objects.insert(name.clone());
        self.latest_tag = Some(name);
        self
    }

    /// Register a name that resolves to an object
    pub fn with_object(mut self, name: impl Into<String>) -> Self {
        self.objects.insert(name.into());
        self
    }
}

impl Repository for MockRepository {
    fn latest_tag(&self) -> Result<Option<String>> {
        Ok(self.latest_tag.clone())
    }

    fn object_exists(&self, name: &str) -> Result<bool> {
        Ok(self.objects.contains(name))
    }
}
