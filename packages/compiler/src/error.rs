use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Missing input: {0} is required")]
    MissingInput(&'static str),
}
