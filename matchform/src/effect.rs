use matchform_ipc::{MatcherNode, Response};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Persist { matchers: Vec<MatcherNode> },
    Quit,
}

/// Response to a protocol command plus the side effects the session still has to run.
pub struct CommandResult {
    pub response: Response,
    pub effects: Vec<Effect>,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self::with_response(Response::Ok)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_response(Response::Error {
            message: message.into(),
        })
    }

    pub fn with_response(response: Response) -> Self {
        Self {
            response,
            effects: vec![],
        }
    }

    /// Acknowledge and hand the extracted document to the store.
    pub fn persist(matchers: Vec<MatcherNode>) -> Self {
        Self {
            response: Response::Ok,
            effects: vec![Effect::Persist { matchers }],
        }
    }

    pub fn quit() -> Self {
        Self {
            response: Response::Ok,
            effects: vec![Effect::Quit],
        }
    }
}
