use figcode_compiler::{GeneratedArtifactSet, Styling};
use figcode_validator::{Language, Severity, ValidationReport};
use serde::Serialize;

pub const SOURCE_ROOT: &str = "src";

/// Which artifact a generated file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Style,
    Types,
    Test,
}

impl FileKind {
    fn directory(&self) -> &'static str {
        match self {
            FileKind::Component => "components",
            FileKind::Style => "styles",
            FileKind::Types => "types",
            FileKind::Test => "__tests__",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Relative to the output root, e.g. `src/components/Icon.tsx`
    pub path: String,
    pub name: String,
    pub content: String,
    /// Content length in bytes
    pub size: usize,
    pub kind: FileKind,
}

impl GeneratedFile {
    pub fn new(kind: FileKind, name: String, content: String) -> Self {
        Self {
            path: format!("{}/{}/{}", SOURCE_ROOT, kind.directory(), name),
            size: content.len(),
            name,
            content,
            kind,
        }
    }
}

/// Files for every artifact present in the set, component first
pub fn layout_files(artifacts: &GeneratedArtifactSet) -> Vec<GeneratedFile> {
    let mut files = vec![
        GeneratedFile::new(
            FileKind::Component,
            artifacts.component_file_name(),
            artifacts.component_source.clone(),
        ),
        GeneratedFile::new(
            FileKind::Style,
            artifacts.style_file_name(),
            artifacts.style_source.clone(),
        ),
    ];
    if let Some(types) = &artifacts.types_source {
        files.push(GeneratedFile::new(FileKind::Types, artifacts.types_file_name(), types.clone()));
    }
    if let Some(test) = &artifacts.test_source {
        files.push(GeneratedFile::new(FileKind::Test, artifacts.test_file_name(), test.clone()));
    }
    files
}

/// Declared output paths, relative to `root`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStructure {
    pub root: String,
    pub components: Vec<String>,
    pub hooks: Vec<String>,
    pub utils: Vec<String>,
    pub types: Vec<String>,
    pub styles: Vec<String>,
    pub tests: Vec<String>,
    pub assets: Vec<String>,
}

impl ProjectStructure {
    pub fn from_files(files: &[GeneratedFile]) -> Self {
        let mut structure = ProjectStructure {
            root: SOURCE_ROOT.to_string(),
            ..Default::default()
        };
        for file in files {
            let relative = format!("{}/{}", file.kind.directory(), file.name);
            match file.kind {
                FileKind::Component => structure.components.push(relative),
                FileKind::Style => structure.styles.push(relative),
                FileKind::Types => structure.types.push(relative),
                FileKind::Test => structure.tests.push(relative),
            }
        }
        structure
    }
}

/// Validator routing for a generated file. Template-based components go
/// through the template validator whatever their extension; styled-components
/// stylesheets and test scaffolds are not validated.
pub fn validation_language(file: &GeneratedFile, artifacts: &GeneratedArtifactSet) -> Option<Language> {
    match file.kind {
        FileKind::Component => Some(match (artifacts.framework.uses_jsx(), artifacts.typescript) {
            (true, true) => Language::TypeScript,
            (true, false) => Language::JavaScript,
            (false, _) => Language::Template,
        }),
        FileKind::Style if artifacts.styling == Styling::StyledComponents => None,
        FileKind::Style | FileKind::Types => Language::from_path(&file.name),
        FileKind::Test => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileValidation {
    pub path: String,
    pub language: Language,
    pub report: ValidationReport,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub files: Vec<FileValidation>,
    /// No error-severity finding in any file
    pub is_valid: bool,
}

impl ValidationSummary {
    pub fn new(files: Vec<FileValidation>) -> Self {
        let is_valid = files.iter().all(|file| file.report.is_valid());
        Self { files, is_valid }
    }

    pub fn report_for(&self, path: &str) -> Option<&ValidationReport> {
        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| &file.report)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildLog {
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// One log entry per validation finding
pub fn build_logs(validation: &ValidationSummary) -> Vec<BuildLog> {
    validation
        .files
        .iter()
        .flat_map(|file| {
            file.report.errors.iter().map(move |finding| BuildLog {
                level: match finding.severity {
                    Severity::Error => LogLevel::Error,
                    Severity::Warning => LogLevel::Warn,
                    Severity::Info => LogLevel::Info,
                },
                message: format!(
                    "{}:{}:{} {}",
                    file.path, finding.line, finding.column, finding.message
                ),
                file: Some(file.path.clone()),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Success,
    Warning,
    Error,
}

impl BuildStatus {
    pub fn from_logs(logs: &[BuildLog]) -> Self {
        if logs.iter().any(|log| log.level == LogLevel::Error) {
            BuildStatus::Error
        } else if logs.iter().any(|log| log.level == LogLevel::Warn) {
            BuildStatus::Warning
        } else {
            BuildStatus::Success
        }
    }
}
