use ariadne::{Color, Label, Report, ReportKind, Source};
use figcode_validator::{Severity, ValidationError};

/// Char offset of each line start, for mapping line/column findings back
/// into the source
struct LineStarts {
    starts: Vec<usize>,
    total: usize,
}

impl LineStarts {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        let mut total = 0;
        for c in source.chars() {
            total += 1;
            if c == '\n' {
                starts.push(total);
            }
        }
        Self { starts, total }
    }

    /// Offset of a 1-based line and column, clamped to the source
    fn offset(&self, line: usize, column: usize) -> usize {
        let start = self
            .starts
            .get(line.saturating_sub(1))
            .copied()
            .unwrap_or(self.total);
        let line_end = self
            .starts
            .get(line)
            .map_or(self.total, |next| next.saturating_sub(1));
        (start + column.saturating_sub(1)).min(line_end.max(start))
    }
}

fn report_kind(severity: Severity) -> (ReportKind<'static>, Color) {
    match severity {
        Severity::Error => (ReportKind::Error, Color::Red),
        Severity::Warning => (ReportKind::Warning, Color::Yellow),
        Severity::Info => (ReportKind::Advice, Color::Blue),
    }
}

/// Pretty-print findings with source context using ariadne
pub fn format_findings(source: &str, filename: &str, findings: &[&ValidationError]) -> String {
    let lines = LineStarts::new(source);
    let mut output = Vec::new();

    for finding in findings {
        let start = lines.offset(finding.line, finding.column);
        let end = (start + 1).min(lines.total).max(start);
        let (kind, color) = report_kind(finding.severity);

        let mut report = Report::build(kind, filename, start)
            .with_message(&finding.message)
            .with_label(
                Label::new((filename, start..end))
                    .with_color(color)
                    .with_message(&finding.category),
            );
        if let Some(code) = &finding.code {
            report = report.with_code(code);
        }
        if let Some(suggestion) = &finding.suggestion {
            report = report.with_help(suggestion);
        }

        let written = report
            .finish()
            .write((filename, Source::from(source)), &mut output);
        if written.is_err() {
            output.extend(
                format!(
                    "{}:{}:{} {}\n",
                    filename, finding.line, finding.column, finding.message
                )
                .into_bytes(),
            );
        }
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}
