use std::io::{BufRead, IsTerminal, Write};

use hd_store::Confirmation;

/// Resolve a destructive action's confirmation: `--yes`, or an interactive
/// `[y/N]` prompt on stderr. Non-interactive input without `--yes` declines.
pub fn confirm(prompt: &str, yes: bool) -> anyhow::Result<Confirmation> {
    if yes {
        return Ok(Confirmation::Confirmed);
    }
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        tracing::debug!("stdin is not a terminal; declining without --yes");
        return Ok(Confirmation::NotConfirmed);
    }

    let mut stderr = std::io::stderr();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer).into())
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}
