//! Print mapped paths without touching the editor

use std::path::Path;

use testmapper::output::{CandidatesResult, OutputMode, RulesResult, SourceResult};

use super::Session;

/// Print the candidate test files for `file`
pub fn tests(session: &mut Session, file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let input = session.file_arg(file);
    let candidates = session.resolver.test_candidates(&input).unwrap_or_default();

    let result = CandidatesResult { input, candidates };
    result.render(mode);

    if !result.matched() {
        std::process::exit(1);
    }
    Ok(())
}

/// Print the source file for `file`
pub fn source(session: &mut Session, file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let input = session.file_arg(file);
    let source = session.resolver.source_file(&input);
    let matched = source.is_some();

    SourceResult { input, source }.render(mode);

    if !matched {
        std::process::exit(1);
    }
    Ok(())
}

/// Print the rules in the order they are tried
pub fn rules(session: &Session, mode: OutputMode) -> anyhow::Result<()> {
    RulesResult {
        project_root: session.resolver.project_root().to_string(),
        rules: session.resolver.rules().iter().map(|r| r.rule.clone()).collect(),
    }
    .render(mode);
    Ok(())
}
