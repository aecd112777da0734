use thiserror::Error;

/// Why a raw request could not be handed to the engine. Each variant maps
/// to the wire tag emitted in the `{"error": ...}` reply.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("empty request body")]
    NoInput,

    #[error("request is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl FrameError {
    pub fn tag(&self) -> &'static str {
        match self {
            FrameError::NoInput => "no_input",
            FrameError::InvalidJson(_) => "invalid_json",
        }
    }
}
