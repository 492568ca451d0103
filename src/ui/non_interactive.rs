//! Non-interactive UI for CI/headless environments.
//!
//! Prompts are never shown; a multi-select answers with no selections and
//! spinners degrade to plain status lines.

use crate::error::Result;

use super::{OutputMode, PromptOption, SpinnerHandle, UserInterface};

/// UI implementation that never prompts.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("warning: {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn multi_select(
        &mut self,
        _key: &str,
        _question: &str,
        _options: &[PromptOption],
    ) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}", message);
        }
        Box::new(PlainSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

struct PlainSpinner;

impl SpinnerHandle for PlainSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}
