use crate::{MigrationError, Result, Workflow, WorkflowSystemStep};

use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStepKind {
    Step,
    Published,
    Scheduled,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStepRef {
    pub id: String,
    pub codename: String,
    pub kind: WorkflowStepKind,
}

/// Directed graph over the regular steps of a workflow plus its published,
/// scheduled and archived steps. Edges keep their declaration order.
#[derive(Debug, Clone)]
pub struct WorkflowStepGraph {
    workflow_codename: String,
    steps: Vec<WorkflowStepRef>,
    published: WorkflowStepRef,
    transitions: HashMap<String, Vec<String>>,
}

impl WorkflowStepGraph {
    pub fn new(workflow: &Workflow) -> Self {
        let mut steps: Vec<WorkflowStepRef> = workflow
            .steps
            .iter()
            .map(|step| WorkflowStepRef {
                id: step.id.clone(),
                codename: step.codename.clone(),
                kind: WorkflowStepKind::Step,
            })
            .collect();

        let system_step = |step: &WorkflowSystemStep, kind| WorkflowStepRef {
            id: step.id.clone(),
            codename: step.codename.clone(),
            kind,
        };
        let published = system_step(&workflow.published_step, WorkflowStepKind::Published);
        steps.extend([
            published.clone(),
            system_step(&workflow.scheduled_step, WorkflowStepKind::Scheduled),
            system_step(&workflow.archived_step, WorkflowStepKind::Archived),
        ]);

        let known: HashSet<&str> = steps.iter().map(|step| step.id.as_str()).collect();
        let transitions = workflow
            .steps
            .iter()
            .map(|step| {
                let targets = step
                    .transitions_to
                    .iter()
                    .filter_map(|transition| transition.step.id())
                    .filter(|id| known.contains(id))
                    .map(str::to_string)
                    .collect();
                (step.id.clone(), targets)
            })
            .collect();

        Self {
            workflow_codename: workflow.codename.clone(),
            steps,
            published,
            transitions,
        }
    }

    pub fn workflow_codename(&self) -> &str {
        &self.workflow_codename
    }

    #[track_caller]
    pub fn step_by_id(&self, id: &str) -> Result<&WorkflowStepRef> {
        self.steps
            .iter()
            .find(|step| step.id == id)
            .ok_or_else(|| MigrationError::missing_workflow_step(&self.workflow_codename, id))
    }

    #[track_caller]
    pub fn step_by_codename(&self, codename: &str) -> Result<&WorkflowStepRef> {
        self.steps
            .iter()
            .find(|step| step.codename == codename)
            .ok_or_else(|| {
                MigrationError::missing_workflow_step(&self.workflow_codename, codename)
            })
    }

    #[track_caller]
    pub fn first_step(&self) -> Result<&WorkflowStepRef> {
        self.steps
            .iter()
            .find(|step| step.kind == WorkflowStepKind::Step)
            .ok_or_else(|| {
                MigrationError::missing_workflow_step(&self.workflow_codename, "<first step>")
            })
    }

    pub fn published_step(&self) -> &WorkflowStepRef {
        &self.published
    }

    /// Shortest sequence of transitions from `from` to `to`, excluding `from`
    /// and including `to`. Ties are broken by declaration order.
    #[track_caller]
    pub fn shortest_path(
        &self,
        from: &WorkflowStepRef,
        to: &WorkflowStepRef,
    ) -> Result<Vec<WorkflowStepRef>> {
        if from.id == to.id {
            return Ok(Vec::new());
        }

        let mut previous: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::from([from.id.as_str()]);
        let mut queue: VecDeque<&str> = VecDeque::from([from.id.as_str()]);

        while let Some(current) = queue.pop_front() {
            let Some(targets) = self.transitions.get(current) else {
                continue;
            };

            for next in targets {
                if !visited.insert(next.as_str()) {
                    continue;
                }
                previous.insert(next.as_str(), current);

                if *next == to.id {
                    return self.reconstruct(&previous, &from.id, &to.id);
                }
                queue.push_back(next.as_str());
            }
        }

        Err(MigrationError::missing_workflow_path(
            &self.workflow_codename,
            &from.codename,
            &to.codename,
        ))
    }

    fn reconstruct(
        &self,
        previous: &HashMap<&str, &str>,
        from: &str,
        to: &str,
    ) -> Result<Vec<WorkflowStepRef>> {
        let mut ids = vec![to];
        let mut current = to;
        while let Some(&parent) = previous.get(current) {
            if parent == from {
                break;
            }
            ids.push(parent);
            current = parent;
        }

        ids.iter()
            .rev()
            .map(|id| self.step_by_id(id).cloned())
            .collect()
    }
}
