//! One generation run: extract markup from a design, synthesize the
//! component, validate and measure what was generated, and assemble the
//! result bundle.

mod config;
mod engine;
mod error;
mod output;
mod preview;
mod quality;
mod session;

pub use config::{
    AccessibilityConfig, ComponentLibrary, GenerationConfig, OptimizationConfig, TestingConfig,
    WcagLevel,
};
pub use engine::{
    resolve_component_name, CodeGenerationEngine, DesignData, GeneratedResult, ProgressCallback,
    DEFAULT_COMPONENT_NAME,
};
pub use error::{EngineError, ErrorReport};
pub use output::{
    build_logs, layout_files, validation_language, BuildLog, BuildStatus, FileKind,
    FileValidation, GeneratedFile, LogLevel, ProjectStructure, ValidationSummary, SOURCE_ROOT,
};
pub use preview::{header_comment, render_preview, PREVIEW_EXCERPT_CHARS};
pub use quality::{assess_quality, QualityCategories, QualityInputs, QualityReport};
pub use session::{GenerationContext, GenerationStage, SessionId};

pub use figcode_compiler::{Framework, Styling};
