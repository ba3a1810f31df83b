/// State of a fetch owned by a single view.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    /// Holds the localized message shown in place of the data.
    Failed(&'static str),
}

impl<T> Loadable<T> {
    /// Collapse a finished fetch into a view state, replacing the error with `message`.
    pub fn from_result<E>(result: Result<T, E>, message: &'static str) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(_) => Loadable::Failed(message),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// State of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded(&'static str),
    Failed(&'static str),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Settle a submission with the matching localized message.
    pub fn settle<T, E>(
        result: &Result<T, E>,
        success: &'static str,
        failure: &'static str,
    ) -> Self {
        match result {
            Ok(_) => SubmitState::Succeeded(success),
            Err(_) => SubmitState::Failed(failure),
        }
    }
}
