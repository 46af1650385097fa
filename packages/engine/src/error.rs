use figcode_compiler::SynthesisError;
use serde::Serialize;
use std::error::Error as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Component synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Validation of {file} did not complete")]
    ValidationTask {
        file: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Caller-facing description of a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub message: String,
    pub details: String,
    /// Messages of the underlying causes, outermost first
    pub stack: Vec<String>,
}

impl EngineError {
    pub fn report(&self) -> ErrorReport {
        let mut stack = Vec::new();
        let mut cause = self.source();
        while let Some(error) = cause {
            stack.push(error.to_string());
            cause = error.source();
        }

        ErrorReport {
            message: self.to_string(),
            details: format!("{:?}", self),
            stack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_synthesis_failure() {
        let report = EngineError::from(SynthesisError::MissingInput("markup")).report();

        assert_eq!(report.message, "Component synthesis failed: Missing input: markup is required");
        assert!(report.details.contains("MissingInput"));
        assert_eq!(report.stack, vec!["Missing input: markup is required".to_string()]);
    }

    #[tokio::test]
    async fn test_report_chains_task_failure() {
        let task = tokio::task::spawn_blocking(|| -> u32 { panic!("checker crashed") });
        let source = task.await.unwrap_err();
        let report = EngineError::ValidationTask {
            file: "src/components/Icon.tsx".to_string(),
            source,
        }
        .report();

        assert_eq!(report.message, "Validation of src/components/Icon.tsx did not complete");
        assert_eq!(report.stack.len(), 1);
    }
}
