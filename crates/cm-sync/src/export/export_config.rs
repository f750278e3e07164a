use cm_core::{DEFAULT_PARALLEL_LIMIT, SourceExportItem};

/// What to export and how to treat dangling references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub items: Vec<SourceExportItem>,
    pub skip_missing_references: bool,
    pub parallel_limit: usize,
}

impl ExportConfig {
    pub fn new(items: Vec<SourceExportItem>) -> Self {
        Self {
            items,
            skip_missing_references: false,
            parallel_limit: DEFAULT_PARALLEL_LIMIT,
        }
    }

    pub fn with_skip_missing_references(mut self, skip: bool) -> Self {
        self.skip_missing_references = skip;
        self
    }

    pub fn with_parallel_limit(mut self, parallel_limit: usize) -> Self {
        self.parallel_limit = parallel_limit;
        self
    }
}
