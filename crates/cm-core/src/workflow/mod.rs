pub mod variant_workflow_state;
pub mod workflow_step_graph;
