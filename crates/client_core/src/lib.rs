use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::Operator,
    error::{ErrorKind, EvaluationError},
    protocol::{EvaluationOutcome, EvaluationRequest},
};
use tracing::{debug, error, info, warn};
use url::Url;

pub mod config;
pub mod session;

pub use config::{load_settings, ClientSettings};
pub use session::{CalculatorSession, ExpressionBuffer, SessionState};

const NO_DATA_MESSAGE: &str = "No data was returned.";

/// Rewrites keypad glyphs into the operators the service parses.
pub fn normalize_operators(expression: &str) -> String {
    expression
        .chars()
        .map(|c| match c {
            '×' => Operator::Multiply.ascii(),
            '÷' => Operator::Divide.ascii(),
            _ => c,
        })
        .collect()
}

/// Turns an expression into a terminal outcome. Exactly one outcome per call.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationOutcome;

    async fn evaluate_expression(&self, expression: &str) -> EvaluationOutcome {
        self.evaluate(&EvaluationRequest::new(expression)).await
    }
}

/// HTTP client for the math.js evaluation API.
#[derive(Debug, Clone)]
pub struct MathJsClient {
    endpoint_url: String,
    http: Client,
}

impl MathJsClient {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, EvaluationError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|err| EvaluationError::RequestConstruction(err.to_string()))?;
        Ok(Self {
            endpoint_url: settings.endpoint_url.clone(),
            http,
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn request_url(&self, request: &EvaluationRequest) -> Result<Url, EvaluationError> {
        let mut url = Url::parse(&self.endpoint_url).map_err(|err| {
            EvaluationError::RequestConstruction(format!("'{}': {err}", self.endpoint_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(EvaluationError::RequestConstruction(format!(
                "unsupported scheme '{}' in '{}'",
                url.scheme(),
                self.endpoint_url
            )));
        }

        url.query_pairs_mut()
            .append_pair("expr", &normalize_operators(&request.expression))
            .append_pair("precision", &request.precision.to_string());
        Ok(url)
    }

    async fn fetch_result(&self, request: &EvaluationRequest) -> Result<String, EvaluationError> {
        let url = self.request_url(request)?;
        debug!(%url, "requesting evaluation");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| EvaluationError::Transport(err.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::BAD_REQUEST => return Err(EvaluationError::InvalidExpression),
            other => {
                return Err(EvaluationError::Protocol(format!(
                    "unexpected status code {other}"
                )))
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| EvaluationError::Protocol(format!("{NO_DATA_MESSAGE} {err}")))?;
        if body.is_empty() {
            return Err(EvaluationError::Protocol(NO_DATA_MESSAGE.to_string()));
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[async_trait]
impl Evaluator for MathJsClient {
    async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationOutcome {
        let outcome = EvaluationOutcome::from(self.fetch_result(request).await);
        match &outcome {
            EvaluationOutcome::Success { display_text } => {
                info!(expression = %request.expression, result = %display_text, "evaluation succeeded");
            }
            EvaluationOutcome::Failure(failure) if failure.kind == ErrorKind::InvalidExpression => {
                warn!(expression = %request.expression, "{}", failure.debug_message);
            }
            EvaluationOutcome::Failure(failure) => {
                error!(
                    expression = %request.expression,
                    kind = ?failure.kind,
                    "{}",
                    failure.debug_message
                );
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
