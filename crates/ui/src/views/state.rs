use dioxus::prelude::*;
use services::DeckError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    /// The file could not be opened or its text could not be extracted.
    Unreadable,
    /// The document was read but yielded no flashcards.
    NoContent,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::Unreadable => "Could not read this file. Please choose a PDF or text document.",
            Self::NoContent => {
                "Could not generate flashcards from this document. Please try a different PDF with more text content."
            }
        }
    }
}

impl From<&DeckError> for ViewError {
    fn from(err: &DeckError) -> Self {
        if err.is_content_problem() {
            Self::NoContent
        } else {
            Self::Unreadable
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
