//! Backend commands queued from UI to backend worker.

use shared::protocol::EvaluationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Evaluate(EvaluationRequest),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Evaluate(_) => "evaluate",
        }
    }
}
