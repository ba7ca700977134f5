//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::MappingRule;
use crate::core::services::OpenOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a test candidate lookup
#[derive(Debug, Serialize)]
pub struct CandidatesResult {
    /// The source file looked up (absolute)
    pub input: String,
    /// Candidate test files in rule order, possibly none
    pub candidates: Vec<String>,
}

/// Result of a source lookup
#[derive(Debug, Serialize)]
pub struct SourceResult {
    /// The test file looked up (absolute)
    pub input: String,
    /// The source file, if one was found
    pub source: Option<String>,
}

/// Result of an open workflow
#[derive(Debug, Serialize)]
pub struct OpenResult {
    /// The file the workflow started from (absolute)
    pub input: String,
    /// How the workflow ended
    pub outcome: OpenOutcome,
}

/// The effective mapping rules
#[derive(Debug, Serialize)]
pub struct RulesResult {
    /// Absolute project root the rules resolve against
    pub project_root: String,
    /// Rules in the order they are tried
    pub rules: Vec<MappingRule>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn render_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl CandidatesResult {
    /// Whether at least one candidate was found
    #[must_use]
    pub fn matched(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.candidates.is_empty() {
            eprintln!("No test file matched for: {}", self.input);
            return;
        }
        // one path per line so the output pipes cleanly
        for candidate in &self.candidates {
            println!("{candidate}");
        }
    }
}

impl SourceResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.source {
                Some(source) => println!("{source}"),
                None => eprintln!("No source file matched for: {}", self.input),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OpenResult {
    /// Render the result based on output mode
    ///
    /// Failures and "no match" were already shown through the editor, so the
    /// human rendering only reports what ended up open.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.outcome {
                OpenOutcome::OpenedExisting { path } => println!("{} {path}", "Opened".green()),
                OpenOutcome::OpenedAsNew { path } => println!("{} {path}", "Opened new file".green()),
                OpenOutcome::CreationDeclined { path } => {
                    println!("{}", format!("Left {path} uncreated").dimmed());
                },
                OpenOutcome::SelectionCancelled => println!("{}", "Nothing selected".dimmed()),
                OpenOutcome::NoMatch { .. } | OpenOutcome::Failed { .. } => {},
            },
            OutputMode::Json => render_json(self),
        }
    }

    /// Whether the workflow ended without a usable file
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.outcome, OpenOutcome::NoMatch { .. } | OpenOutcome::Failed { .. })
    }
}

impl RulesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Project root: {}", self.project_root.bold());
                if self.rules.is_empty() {
                    println!("\nNo mapping rules configured.");
                    println!("Run 'testmapper init' to create a starter config.");
                    return;
                }
                println!();
                for (i, rule) in self.rules.iter().enumerate() {
                    println!("  {}. {rule}", i + 1);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}
