//! Open the mapped file, creating it on request

use std::io;

use testmapper::adapters::{LocalFileSystem, TerminalEditor};
use testmapper::core::services::{Direction, Navigator};
use testmapper::output::{OpenResult, OutputMode};

use super::Session;
use crate::cli::OpenArgs;

/// Environment variable naming the editor command
const EDITOR_ENV: &str = "TESTMAPPER_EDITOR";

/// Run the open workflow for `args.file` in `direction`
///
/// Prompts go to stderr so stdout carries only the result.
pub fn open(
    session: &mut Session,
    args: &OpenArgs,
    direction: Direction,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let input = session.file_arg(&args.file);
    let command = args.editor.clone().or_else(|| std::env::var(EDITOR_ENV).ok());

    let editor = TerminalEditor::new(io::stdin().lock(), io::stderr())
        .with_command(command)
        .auto_confirm(args.yes);
    let fs = LocalFileSystem::new();

    let outcome = {
        let mut navigator = Navigator::new(&mut session.resolver, &editor, &fs);
        match direction {
            Direction::ToTest => navigator.open_test_for(&input),
            Direction::ToSource => navigator.open_source_for(&input),
        }
    };

    let result = OpenResult { input, outcome };
    result.render(mode);

    if result.is_failure() {
        std::process::exit(1);
    }
    Ok(())
}
