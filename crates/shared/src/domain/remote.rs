/// Lifecycle of a single collaborator call, exposed so the presentation
/// layer can render pending/settled state without inventing its own flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RemoteState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RemoteState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading)
    }

    /// Settled means the request is no longer in flight.
    pub fn is_settled(&self) -> bool {
        matches!(self, RemoteState::Ready(_) | RemoteState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => RemoteState::Ready(value),
            Err(err) => RemoteState::Failed(err.to_string()),
        }
    }
}
