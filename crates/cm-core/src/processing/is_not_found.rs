use crate::MigrationError;

/// Lets the bounded processor tell a 404 apart from a real failure.
pub trait IsNotFound {
    fn is_not_found(&self) -> bool;
}

impl IsNotFound for MigrationError {
    fn is_not_found(&self) -> bool {
        MigrationError::is_not_found(self)
    }
}
