//! Terminal editor adapter
//!
//! Implements `Editor` with line-based prompts. Pickers and prompts are
//! answered by number or by label; a blank line or end of input dismisses
//! them. Documents are handed to an external editor command when one is set.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::process::Command;

use colored::Colorize;
use log::{info, warn};

use crate::core::ports::Editor;

/// Editor shell driven through a terminal
#[derive(Debug)]
pub struct TerminalEditor<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    command: Option<String>,
    auto_confirm: bool,
}

impl<R: BufRead, W: Write> TerminalEditor<R, W> {
    /// Create an editor reading answers from `input` and prompting on `output`
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            command: None,
            auto_confirm: false,
        }
    }

    /// Open documents with `command` (program plus arguments; the path is appended)
    #[must_use]
    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command.filter(|c| !c.trim().is_empty());
        self
    }

    /// Answer every information prompt with its first action
    #[must_use]
    pub const fn auto_confirm(mut self, yes: bool) -> Self {
        self.auto_confirm = yes;
        self
    }

    /// Consume the editor, returning the prompt output
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn say(&self, text: &str) {
        let mut out = self.output.borrow_mut();
        if let Err(err) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            warn!("failed to write prompt: {err}");
        }
    }

    fn ask(&self, prompt: &str) -> Option<String> {
        {
            let mut out = self.output.borrow_mut();
            if let Err(err) = write!(out, "{prompt}").and_then(|()| out.flush()) {
                warn!("failed to write prompt: {err}");
            }
        }

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()).filter(|answer| !answer.is_empty()),
            Err(err) => {
                warn!("failed to read answer: {err}");
                None
            },
        }
    }
}

/// Match an answer against `options` by 1-based number or by label
fn pick(answer: &str, options: &[String]) -> Option<String> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).cloned();
    }
    options.iter().find(|option| option.eq_ignore_ascii_case(answer)).cloned()
}

impl<R: BufRead, W: Write> Editor for TerminalEditor<R, W> {
    fn present_choice(&self, title: &str, choices: &[String]) -> Option<String> {
        self.say(&title.bold().to_string());
        for (i, choice) in choices.iter().enumerate() {
            self.say(&format!("  {}) {choice}", i + 1));
        }

        let answer = self.ask(&format!("Pick 1-{} (blank to cancel): ", choices.len()))?;
        let picked = pick(&answer, choices);
        if picked.is_none() {
            self.say(&format!("Not a valid choice: {answer}"));
        }
        picked
    }

    fn show_information_prompt(&self, message: &str, actions: &[String]) -> Option<String> {
        self.say(message);
        if self.auto_confirm {
            let first = actions.first().cloned();
            if let Some(action) = &first {
                info!("auto-answering \"{message}\" with \"{action}\"");
            }
            return first;
        }

        let labels: Vec<String> =
            actions.iter().enumerate().map(|(i, a)| format!("[{}] {a}", i + 1)).collect();
        let answer = self.ask(&format!("{} ", labels.join("  ")))?;
        pick(&answer, actions)
    }

    fn show_error_message(&self, message: &str) {
        self.say(&format!("{} {message}", "error:".red().bold()));
    }

    fn open_document(&self, path: &str, as_new: bool) -> anyhow::Result<()> {
        let Some(command) = &self.command else {
            info!("no editor command set, not launching anything for {path}");
            return Ok(());
        };

        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            anyhow::bail!("empty editor command");
        };
        info!("opening {path} with {program}{}", if as_new { " (new file)" } else { "" });

        let status = Command::new(program).args(parts).arg(path).status()?;
        if !status.success() {
            anyhow::bail!("{program} exited with {status}");
        }
        Ok(())
    }
}
