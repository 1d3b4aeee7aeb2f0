use shared::{domain::ListItem, error::LoadError};

/// Lifecycle of one collection load. `Loaded` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(LoadError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug)]
pub enum LoadEvent<T> {
    Started,
    Finished(Result<Vec<T>, LoadError>),
}

impl<T> LoadState<T> {
    pub fn transition(self, event: LoadEvent<T>) -> Self {
        match (self, event) {
            (Self::Idle, LoadEvent::Started) => Self::Loading,
            (Self::Idle | Self::Loading, LoadEvent::Finished(Ok(items))) => Self::Loaded(items),
            (Self::Idle | Self::Loading, LoadEvent::Finished(Err(err))) => Self::Failed(err),
            (state, _) => state,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }

    /// Loaded items, or an empty slice in every other state.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn find(&self, key: &T::Key) -> Option<&T>
    where
        T: ListItem,
    {
        self.items().iter().find(|item| &item.key() == key)
    }

    pub fn failure(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/load_state_tests.rs"]
mod tests;
