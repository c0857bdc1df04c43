//! Confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{MeritError, Result};

/// Ask the user to confirm an action
///
/// `--yes` skips the prompt. In batch mode there is nobody to ask, so the
/// action is declined unless `--yes` was given.
pub fn confirm_action(prompt: &str, assume_yes: bool, batch: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if batch {
        eprintln!("{} Declined in batch mode (use --yes to proceed)", prompt);
        return Ok(false);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| MeritError::Io(e.to_string()))
}
