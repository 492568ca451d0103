//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::MultiSelect;

use crate::error::{GroundworkError, Result};

use super::PromptOption;

/// Convert dialoguer errors to GroundworkError.
fn map_dialoguer_err(e: dialoguer::Error) -> GroundworkError {
    GroundworkError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Show a multi-select menu on the terminal.
pub fn prompt_multiselect(
    question: &str,
    options: &[PromptOption],
    term: &Term,
) -> Result<Vec<String>> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let selections = MultiSelect::with_theme(&prompt_theme())
        .with_prompt(question)
        .items(&labels)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(selections
        .iter()
        .map(|&i| options[i].value.clone())
        .collect())
}
