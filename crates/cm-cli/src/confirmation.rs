use cm_core::{MigrationError, Result};

use std::io::{self, Write};

/// Asks the operator on stdin. `force` skips the question.
pub(crate) fn confirm(prompt: &str, force: bool) -> Result<()> {
    if force {
        return Ok(());
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() || !is_confirmed(&input) {
        return Err(MigrationError::confirmation_refused());
    }

    Ok(())
}

/// Only an explicit yes counts; an empty answer declines.
pub(crate) fn is_confirmed(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}
