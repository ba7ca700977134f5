//! Open workflows - jump from a source file to its test and back
//!
//! The workflow is an explicit state machine. Each [`Step`] is advanced by one
//! interaction with the editor or the filesystem until it settles on an
//! [`OpenOutcome`]:
//!
//! ```text
//! Resolved ─┬─ none ─────────────────────────────────────────────▶ NoMatch
//!           ├─ one ───────────────────────────┐
//!           └─ many ─▶ AwaitSelection ─┬─ pick ┤
//!                                      └─ dismissed ─────────────▶ SelectionCancelled
//!                                              ▼
//!                                           Attempt ─┬─ exists ──▶ Open ─▶ OpenedExisting
//!                                                    └─ missing ─▶ AwaitConfirm
//! AwaitConfirm ─┬─ declined ─────────────────────────────────────▶ CreationDeclined
//!               └─ confirmed ─▶ Create ─┬─ failed ───────────────▶ Failed
//!                                       └─ created ─▶ Open ──────▶ OpenedAsNew
//! ```

use log::{debug, info};
use serde::Serialize;

use super::resolver::PathResolver;
use crate::core::path::{PathOps, PathStyle};
use crate::core::ports::{Editor, FileSystem};

/// Action label that confirms creating a missing file
pub const CREATE_AND_OPEN: &str = "Create and Open";

/// Action label that declines creating a missing file
pub const CANCEL: &str = "Cancel";

/// Which way a lookup goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From a source file to its tests
    ToTest,
    /// From a test file to its source
    ToSource,
}

impl Direction {
    fn no_match_message(self, input: &str) -> String {
        match self {
            Self::ToTest => format!("No test file matched for: {input}"),
            Self::ToSource => format!("No source file matched for: {input}"),
        }
    }

    const fn picker_title(self) -> &'static str {
        match self {
            Self::ToTest => "Select test file",
            Self::ToSource => "Select source file",
        }
    }
}

/// How an open workflow ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpenOutcome {
    /// Nothing mapped to the input
    NoMatch {
        /// The file the lookup started from
        input: String,
    },
    /// The user dismissed the candidate picker
    SelectionCancelled,
    /// An existing file was opened
    OpenedExisting {
        /// The opened file
        path: String,
    },
    /// A missing file was opened as a new, unsaved document
    OpenedAsNew {
        /// The file the document is named after
        path: String,
    },
    /// The user declined to create a missing file
    CreationDeclined {
        /// The missing file
        path: String,
    },
    /// Creating the directory or opening the document failed
    Failed {
        /// The file being opened
        path: String,
        /// What went wrong
        reason: String,
    },
}

impl OpenOutcome {
    /// The path that ended up open in the editor, if any
    #[must_use]
    pub fn opened_path(&self) -> Option<&str> {
        match self {
            Self::OpenedExisting { path } | Self::OpenedAsNew { path } => Some(path),
            _ => None,
        }
    }

    /// Whether the workflow ended because the user said no
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::SelectionCancelled | Self::CreationDeclined { .. })
    }
}

/// A state of the open workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Lookup done, with every path it produced
    Resolved {
        /// The file the lookup started from
        input: String,
        /// Lookup direction
        direction: Direction,
        /// Resulting paths, possibly none
        candidates: Vec<String>,
    },
    /// Waiting for the user to pick among several candidates
    AwaitSelection {
        /// Lookup direction
        direction: Direction,
        /// Paths offered to the user
        candidates: Vec<String>,
    },
    /// About to open `path`, existence unknown
    Attempt(String),
    /// `path` is missing; waiting for the user to allow creating it
    AwaitConfirm(String),
    /// Creating the directory for `path`
    Create(String),
    /// Handing `path` to the editor
    Open {
        /// File to open
        path: String,
        /// Open as a new unsaved document
        as_new: bool,
    },
    /// Finished
    Done(OpenOutcome),
}

/// Drives the open workflows against an editor and a filesystem
#[derive(Debug)]
pub struct Navigator<'a, E, F, P = PathStyle>
where
    E: Editor,
    F: FileSystem,
    P: PathOps,
{
    resolver: &'a mut PathResolver<P>,
    editor: &'a E,
    fs: &'a F,
}

impl<'a, E, F, P> Navigator<'a, E, F, P>
where
    E: Editor,
    F: FileSystem,
    P: PathOps,
{
    /// Create a navigator over `resolver`, talking to `editor` and `fs`
    pub const fn new(resolver: &'a mut PathResolver<P>, editor: &'a E, fs: &'a F) -> Self {
        Self {
            resolver,
            editor,
            fs,
        }
    }

    /// Open the test file for the source file `source`
    ///
    /// Several candidates are offered to the user; existence is only checked
    /// for the one that gets picked.
    pub fn open_test_for(&mut self, source: &str) -> OpenOutcome {
        let candidates = self.resolver.test_candidates(source).unwrap_or_default();
        self.run(Step::Resolved {
            input: source.to_string(),
            direction: Direction::ToTest,
            candidates,
        })
    }

    /// Open the source file for the test file `test`
    pub fn open_source_for(&mut self, test: &str) -> OpenOutcome {
        let candidates = self.resolver.source_file(test).into_iter().collect();
        self.run(Step::Resolved {
            input: test.to_string(),
            direction: Direction::ToSource,
            candidates,
        })
    }

    /// Run the workflow from `step` until it is done
    pub fn run(&self, mut step: Step) -> OpenOutcome {
        loop {
            step = match self.advance(step) {
                Step::Done(outcome) => {
                    info!("open workflow finished: {outcome:?}");
                    return outcome;
                },
                next => next,
            };
        }
    }

    /// Advance the workflow by one step
    pub fn advance(&self, step: Step) -> Step {
        debug!("open workflow step: {step:?}");
        match step {
            Step::Resolved {
                input,
                direction,
                mut candidates,
            } => match candidates.len() {
                0 => {
                    self.editor.show_error_message(&direction.no_match_message(&input));
                    Step::Done(OpenOutcome::NoMatch { input })
                },
                1 => Step::Attempt(candidates.remove(0)),
                _ => Step::AwaitSelection {
                    direction,
                    candidates,
                },
            },
            Step::AwaitSelection {
                direction,
                candidates,
            } => match self.editor.present_choice(direction.picker_title(), &candidates) {
                Some(pick) => Step::Attempt(pick),
                None => Step::Done(OpenOutcome::SelectionCancelled),
            },
            Step::Attempt(path) => {
                if self.fs.exists(&path) {
                    Step::Open {
                        path,
                        as_new: false,
                    }
                } else {
                    Step::AwaitConfirm(path)
                }
            },
            Step::AwaitConfirm(path) => {
                let actions = [CREATE_AND_OPEN.to_string(), CANCEL.to_string()];
                let message = format!("File does not exist: {path}");
                match self.editor.show_information_prompt(&message, &actions) {
                    Some(choice) if choice == CREATE_AND_OPEN => Step::Create(path),
                    _ => Step::Done(OpenOutcome::CreationDeclined { path }),
                }
            },
            Step::Create(path) => {
                let dir = self.resolver.style().dirname(&path);
                match self.fs.create_dir_all(&dir) {
                    Ok(()) => Step::Open { path, as_new: true },
                    Err(err) => {
                        let reason = format!("Failed to create directory: {err:#}");
                        self.editor.show_error_message(&reason);
                        Step::Done(OpenOutcome::Failed { path, reason })
                    },
                }
            },
            Step::Open { path, as_new } => match self.editor.open_document(&path, as_new) {
                Ok(()) if as_new => Step::Done(OpenOutcome::OpenedAsNew { path }),
                Ok(()) => Step::Done(OpenOutcome::OpenedExisting { path }),
                Err(err) => {
                    let reason = format!("Failed to open {path}: {err:#}");
                    self.editor.show_error_message(&reason);
                    Step::Done(OpenOutcome::Failed { path, reason })
                },
            },
            Step::Done(outcome) => Step::Done(outcome),
        }
    }
}
