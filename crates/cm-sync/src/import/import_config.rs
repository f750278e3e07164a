use cm_core::{DEFAULT_PARALLEL_LIMIT, DefaultExternalIdGenerator, ExternalIdGenerator};

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct ImportConfig {
    pub parallel_limit: usize,
    pub external_id_generator: Arc<dyn ExternalIdGenerator>,
    /// Directory the JSON import report is written to, if any.
    pub report_dir: Option<PathBuf>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            parallel_limit: DEFAULT_PARALLEL_LIMIT,
            external_id_generator: Arc::new(DefaultExternalIdGenerator),
            report_dir: None,
        }
    }
}

impl ImportConfig {
    pub fn with_parallel_limit(mut self, parallel_limit: usize) -> Self {
        self.parallel_limit = parallel_limit;
        self
    }

    pub fn with_external_id_generator(mut self, generator: Arc<dyn ExternalIdGenerator>) -> Self {
        self.external_id_generator = generator;
        self
    }

    pub fn with_report_dir(mut self, report_dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(report_dir.into());
        self
    }
}

impl fmt::Debug for ImportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportConfig")
            .field("parallel_limit", &self.parallel_limit)
            .field("report_dir", &self.report_dir)
            .finish_non_exhaustive()
    }
}
