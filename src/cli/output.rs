use crate::Misspelling;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A misspelling resolved against its source text for display: human
/// line/column coordinates plus a short context window. The engine itself
/// only speaks byte offsets.
#[derive(Debug, Clone)]
pub struct Finding {
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
    pub suggestions: Vec<String>,
    pub start: usize,
    pub end: usize,
}

impl Finding {
    pub fn from_misspelling(text: &str, m: &Misspelling, suggestions: Vec<String>) -> Self {
        let (line, column) = line_column(text, m.start);
        Self {
            word: m.word.clone(),
            line,
            column,
            context: context_window(text, m.start, m.end),
            suggestions,
            start: m.start,
            end: m.end,
        }
    }
}

/// 1-indexed line and column for a byte offset.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text.as_bytes()[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    (line, offset - line_start + 1)
}

/// Up to 20 bytes of the containing line on each side of the span, with
/// ellipses marking where the line was cut.
fn context_window(text: &str, start: usize, end: usize) -> String {
    let bytes = text.as_bytes();
    let line_start = bytes[..start]
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let line_end = bytes[end.min(bytes.len())..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| end + i)
        .unwrap_or(bytes.len());

    let mut lo = start.saturating_sub(20).max(line_start);
    let mut hi = (end + 20).min(line_end);
    while lo > line_start && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    while hi < line_end && !text.is_char_boundary(hi) {
        hi += 1;
    }

    let window = text[lo..hi].trim_end_matches('\r');
    if lo > line_start && hi < line_end {
        format!("...{}...", window)
    } else if lo > line_start {
        format!("...{}", window)
    } else if hi < line_end {
        format!("{}...", window)
    } else {
        window.to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonError {
    file: String,
    line: usize,
    column: usize,
    word: String,
    suggestions: Vec<String>,
    context: String,
    start: usize,
    end: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    files_checked: usize,
    total_errors: usize,
    errors: Vec<JsonError>,
}

pub fn print_findings(
    file_path: &Path,
    findings: &[Finding],
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_findings(file_path, findings, colored_output),
        OutputFormat::Json => print_json_findings(file_path, findings),
    }
}

fn print_text_findings(file_path: &Path, findings: &[Finding], colored_output: bool) {
    if findings.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for finding in findings {
        let line_info = format!("{}:{}", finding.line, finding.column);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                finding.word.red().bold(),
                format_context(&finding.context, &finding.word, colored_output)
            );

            if !finding.suggestions.is_empty() {
                let suggestions = finding
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            }
        } else {
            println!("  {} {} {}", line_info, finding.word, finding.context);

            if !finding.suggestions.is_empty() {
                println!("    → {}", finding.suggestions.join(", "));
            }
        }
    }
}

fn print_json_findings(file_path: &Path, findings: &[Finding]) {
    let json_errors: Vec<JsonError> = findings
        .iter()
        .map(|f| JsonError {
            file: file_path.display().to_string(),
            line: f.line,
            column: f.column,
            word: f.word.clone(),
            suggestions: f.suggestions.clone(),
            context: f.context.clone(),
            start: f.start,
            end: f.end,
        })
        .collect();

    let output = JsonOutput {
        files_checked: 1,
        total_errors: json_errors.len(),
        errors: json_errors,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}

fn format_context(context: &str, word: &str, colored: bool) -> String {
    if colored {
        context.replace(word, &word.red().bold().to_string())
    } else {
        context.to_string()
    }
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors,
                error_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}
