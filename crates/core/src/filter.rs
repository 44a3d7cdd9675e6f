/// Scope of an instance enumeration: one project, or the whole fleet.
///
/// The provider translates a scoped filter into an equality match on the
/// `Project` tag; an unscoped filter enumerates every instance visible to
/// the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter(Option<String>);

impl ProjectFilter {
    /// Scope to instances tagged `Project = name`.
    pub fn project(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// No filtering: every instance visible to the session.
    pub fn entire_fleet() -> Self {
        Self(None)
    }

    pub fn project_name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_scoped(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<String>> for ProjectFilter {
    fn from(project: Option<String>) -> Self {
        Self(project)
    }
}
