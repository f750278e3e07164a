use crate::WorkflowStepKind;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a language variant derived from its current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantWorkflowState {
    Draft,
    Published,
    Scheduled,
    Archived,
}

impl From<WorkflowStepKind> for VariantWorkflowState {
    fn from(kind: WorkflowStepKind) -> Self {
        match kind {
            WorkflowStepKind::Step => Self::Draft,
            WorkflowStepKind::Published => Self::Published,
            WorkflowStepKind::Scheduled => Self::Scheduled,
            WorkflowStepKind::Archived => Self::Archived,
        }
    }
}
