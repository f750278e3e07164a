#[derive(Debug)]
pub enum ItemProcessingResult<I, O, E> {
    Valid { input: I, output: O },
    Error { input: I, error: E },
    NotFound { input: I },
}

impl<I, O, E> ItemProcessingResult<I, O, E> {
    pub fn input(&self) -> &I {
        match self {
            Self::Valid { input, .. } | Self::Error { input, .. } | Self::NotFound { input } => {
                input
            }
        }
    }

    pub fn output(&self) -> Option<&O> {
        match self {
            Self::Valid { output, .. } => Some(output),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn into_output(self) -> Option<O> {
        match self {
            Self::Valid { output, .. } => Some(output),
            _ => None,
        }
    }
}
