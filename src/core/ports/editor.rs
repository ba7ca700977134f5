//! Editor shell port
//!
//! Defines the interactive surface the open workflows talk to: pickers,
//! prompts, messages and documents.

/// Interactive editor shell
///
/// Implementations present choices and messages to the user and open
/// documents. Every prompt may be dismissed; dismissal is reported as `None`.
#[cfg_attr(test, mockall::automock)]
pub trait Editor {
    /// Let the user pick one of `choices`
    ///
    /// Returns the chosen entry, or `None` when the picker is dismissed.
    fn present_choice(&self, title: &str, choices: &[String]) -> Option<String>;

    /// Show an informational message offering `actions`
    ///
    /// Returns the label of the chosen action, or `None` when dismissed.
    fn show_information_prompt(&self, message: &str, actions: &[String]) -> Option<String>;

    /// Show an error message
    fn show_error_message(&self, message: &str);

    /// Open `path` in a non-preview editor
    ///
    /// With `as_new`, the document is opened unsaved and pre-named to `path`
    /// instead of being read from disk.
    fn open_document(&self, path: &str, as_new: bool) -> anyhow::Result<()>;
}
