/// Number of records a list returns when no `limit` is given.
pub const DEFAULT_LIMIT: u64 = 50;

/// Page selection and name filter shared by every list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u64,
    pub skip: u64,
    /// Substring matched against the resource's name field.
    pub search: Option<String>,
}

impl ListQuery {
    /// The search term, ignoring an empty one.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|search| !search.is_empty())
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: 0,
            search: None,
        }
    }
}
