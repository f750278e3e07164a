use crate::Reference;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub codename: String,
    #[serde(default)]
    pub scopes: Vec<WorkflowScope>,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
    pub published_step: WorkflowSystemStep,
    pub scheduled_step: WorkflowSystemStep,
    pub archived_step: WorkflowSystemStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub name: String,
    pub codename: String,
    #[serde(default)]
    pub transitions_to: Vec<WorkflowTransition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTransition {
    pub step: Reference,
}

/// Published, scheduled and archived steps exist in every workflow and
/// carry no declared transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSystemStep {
    pub id: String,
    pub name: String,
    pub codename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowScope {
    #[serde(default)]
    pub content_types: Vec<Reference>,
    #[serde(default)]
    pub collections: Vec<Reference>,
}
