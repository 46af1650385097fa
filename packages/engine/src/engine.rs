use crate::config::GenerationConfig;
use crate::error::EngineError;
use crate::output::{
    build_logs, layout_files, validation_language, BuildLog, BuildStatus, FileKind,
    FileValidation, GeneratedFile, ProjectStructure, ValidationSummary,
};
use crate::preview::{header_comment, render_preview};
use crate::quality::{assess_quality, QualityInputs, QualityReport};
use crate::session::{GenerationStage, SessionGuard, SessionRegistry};
use chrono::{DateTime, Utc};
use figcode_compiler::synthesize;
use figcode_design::{
    analyze_design, extract, unwrap_document, DesignNode, FetchedDesign, FileMetadata,
    PLACEHOLDER_SVG,
};
use figcode_metrics::{analyze_component, generate_report, CodeMetrics, ComponentMetrics};
use heck::ToUpperCamelCase;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, info_span, Instrument};

pub const DEFAULT_COMPONENT_NAME: &str = "GeneratedComponent";

/// Called with a percentage and a status line as generation advances
pub type ProgressCallback = dyn Fn(u8, &str) + Send + Sync;

/// Input to one generation run
#[derive(Debug, Clone, Default)]
pub struct DesignData {
    /// Design file JSON in any of the accepted shapes
    pub raw: Value,
    /// Pre-rendered markup used instead of extracting from `raw`
    pub markup: Option<String>,
    pub metadata: Option<FileMetadata>,
    pub name: Option<String>,
}

impl DesignData {
    pub fn from_value(raw: Value) -> Self {
        let metadata = FileMetadata::from_value(&raw);
        Self {
            name: metadata.name.clone(),
            metadata: Some(metadata),
            markup: None,
            raw,
        }
    }

    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = Some(markup.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<FetchedDesign> for DesignData {
    fn from(fetched: FetchedDesign) -> Self {
        Self {
            name: fetched.metadata.name.clone(),
            metadata: Some(fetched.metadata),
            markup: None,
            raw: fetched.data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub config: GenerationConfig,
    pub component_name: String,
    pub files: Vec<GeneratedFile>,
    pub structure: ProjectStructure,
    pub metrics: CodeMetrics,
    pub component_metrics: ComponentMetrics,
    pub quality: QualityReport,
    pub validation: ValidationSummary,
    pub build_status: BuildStatus,
    pub build_logs: Vec<BuildLog>,
    pub preview: String,
}

impl GeneratedResult {
    pub fn file(&self, kind: FileKind) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.kind == kind)
    }
}

/// Component name from the config, else the design name in upper camel case
pub fn resolve_component_name(config: &GenerationConfig, design: &DesignData) -> String {
    let configured = config
        .component_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    if let Some(name) = configured {
        return name.to_string();
    }

    design
        .name
        .as_deref()
        .map(|name| name.to_upper_camel_case())
        .filter(|name| name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()))
        .unwrap_or_else(|| DEFAULT_COMPONENT_NAME.to_string())
}

struct Progress<'a> {
    callback: Option<&'a ProgressCallback>,
}

impl Progress<'_> {
    fn report(&self, percent: u8, status: &str) {
        if let Some(callback) = self.callback {
            callback(percent, status);
        }
    }
}

/// Runs extraction, synthesis, validation and measurement for one design
#[derive(Debug, Default)]
pub struct CodeGenerationEngine {
    sessions: SessionRegistry,
}

impl CodeGenerationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generations currently in flight
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub async fn generate_code(
        &self,
        design: &DesignData,
        config: GenerationConfig,
        progress: Option<&ProgressCallback>,
    ) -> Result<GeneratedResult, EngineError> {
        let session = self.sessions.open(&config);
        let span = info_span!("generate_code", session_id = %session.id());

        let result = self
            .run(&session, design, config, Progress { callback: progress })
            .instrument(span)
            .await;

        if let Err(err) = &result {
            let stage = session.stage();
            session.set_stage(GenerationStage::Failed);
            error!(session_id = %session.id(), stage = ?stage, error = %err, "Code generation failed");
        }
        result
    }

    async fn run(
        &self,
        session: &SessionGuard<'_>,
        design: &DesignData,
        config: GenerationConfig,
        progress: Progress<'_>,
    ) -> Result<GeneratedResult, EngineError> {
        info!(framework = %config.framework, styling = %config.styling, "Starting code generation");

        session.set_stage(GenerationStage::Extracting);
        progress.report(10, "Extracting design...");
        let markup = match &design.markup {
            Some(markup) => markup.clone(),
            None => extract(&design.raw),
        };
        let placeholder = markup == PLACEHOLDER_SVG;

        session.set_stage(GenerationStage::Analyzing);
        progress.report(20, "Analyzing design...");
        let suggestions = match DesignNode::from_value(unwrap_document(&design.raw)) {
            Ok(root) => {
                let analysis = analyze_design(&root);
                debug!(
                    nodes = analysis.node_count,
                    depth = analysis.max_depth,
                    "Design analysis complete"
                );
                analysis.suggestions
            }
            Err(err) => {
                debug!(error = %err, "Skipping design analysis");
                Vec::new()
            }
        };

        session.set_stage(GenerationStage::Synthesizing);
        progress.report(30, "Planning structure...");
        let component_name = resolve_component_name(&config, design);
        let options = config.to_synthesis_options();

        progress.report(50, "Generating components...");
        let mut artifacts = synthesize(&markup, &component_name, &options)?;
        let design_name = design.name.as_deref().unwrap_or(&component_name);
        artifacts.component_source = format!(
            "{}{}",
            header_comment(&config, design_name, design.metadata.as_ref()),
            artifacts.component_source
        );
        let files = layout_files(&artifacts);

        session.set_stage(GenerationStage::Validating);
        progress.report(70, "Validating generated code...");
        let validation = validate_files(&files, &artifacts).await?;
        info!(
            files = validation.files.len(),
            valid = validation.is_valid,
            "Validation complete"
        );

        session.set_stage(GenerationStage::Measuring);
        progress.report(85, "Assessing quality...");
        let metrics = generate_report(&artifacts.component_source);
        let component_metrics = analyze_component(&artifacts.component_source, &component_name);

        let reports_of = |kinds: &[FileKind]| -> Vec<(&str, &figcode_validator::ValidationReport)> {
            files
                .iter()
                .filter(|file| kinds.contains(&file.kind))
                .filter_map(|file| {
                    validation
                        .report_for(&file.path)
                        .map(|report| (file.path.as_str(), report))
                })
                .collect()
        };
        let quality = assess_quality(&QualityInputs {
            metrics: &metrics,
            component_source: &artifacts.component_source,
            placeholder,
            style_reports: reports_of(&[FileKind::Style]),
            code_reports: reports_of(&[FileKind::Component, FileKind::Types]),
            design_suggestions: &suggestions,
        });

        session.set_stage(GenerationStage::Assembling);
        progress.report(95, "Finalizing...");
        let structure = ProjectStructure::from_files(&files);
        let preview = render_preview(config.framework, &component_name, &artifacts.component_source);
        let logs = build_logs(&validation);
        let build_status = BuildStatus::from_logs(&logs);

        let result = GeneratedResult {
            id: session.id().to_string(),
            timestamp: Utc::now(),
            config,
            component_name,
            files,
            structure,
            metrics,
            component_metrics,
            quality,
            validation,
            build_status,
            build_logs: logs,
            preview,
        };

        session.set_stage(GenerationStage::Complete);
        let elapsed_ms = session
            .started_at()
            .map(|started| (Utc::now() - started).num_milliseconds());
        info!(
            files = result.files.len(),
            overall = result.quality.overall,
            status = ?result.build_status,
            elapsed_ms,
            "Code generation completed"
        );
        progress.report(100, "Complete!");
        Ok(result)
    }
}

/// Validate every routable file on the blocking pool, all files at once
async fn validate_files(
    files: &[GeneratedFile],
    artifacts: &figcode_compiler::GeneratedArtifactSet,
) -> Result<ValidationSummary, EngineError> {
    let tasks: Vec<_> = files
        .iter()
        .filter_map(|file| {
            let language = validation_language(file, artifacts)?;
            let source = file.content.clone();
            let task = tokio::task::spawn_blocking(move || {
                figcode_validator::validate(&source, language)
            });
            Some((file.path.clone(), language, task))
        })
        .collect();

    let mut results = Vec::with_capacity(tasks.len());
    for (path, language, task) in tasks {
        let report = task
            .await
            .map_err(|source| EngineError::ValidationTask {
                file: path.clone(),
                source,
            })?;
        debug!(file = %path, findings = report.errors.len(), "Validated file");
        results.push(FileValidation {
            path,
            language,
            report,
        });
    }
    Ok(ValidationSummary::new(results))
}
