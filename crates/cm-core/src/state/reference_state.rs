/// Existence of a referenced entity in an environment. `Skip` means the
/// entity is missing and the skip policy allows dropping the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceState<T> {
    Exists(T),
    DoesNotExist,
    Skip,
}

impl<T> ReferenceState<T> {
    pub fn exists(&self) -> bool {
        matches!(self, Self::Exists(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Exists(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> ReferenceState<&T> {
        match self {
            Self::Exists(data) => ReferenceState::Exists(data),
            Self::DoesNotExist => ReferenceState::DoesNotExist,
            Self::Skip => ReferenceState::Skip,
        }
    }
}

impl<T> From<Option<T>> for ReferenceState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => Self::Exists(data),
            None => Self::DoesNotExist,
        }
    }
}
