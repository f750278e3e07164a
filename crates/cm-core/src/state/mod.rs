pub mod reference_state;
pub mod referenced_data;
pub mod source_environment_state;
pub mod target_environment_state;
