pub mod migration_error;
pub mod migration_error_kind;
