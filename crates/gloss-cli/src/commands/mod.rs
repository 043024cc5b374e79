use gloss_check::ValidationError;
use gloss_config::GlossConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::output;

pub mod export;
pub mod schema;
pub mod score;
pub mod validate;

pub fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    config: &GlossConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Validate(args) => validate::handle(args, flags),
        Commands::Score(args) => score::handle(args, flags),
        Commands::Export(args) => export::handle(args, flags, config),
        Commands::Schema(args) => schema::handle(args),
    }
}

/// Print every violation of a failed validation and turn it into the
/// command's error.
fn fail_validation(flags: &GlobalFlags, error: &ValidationError) -> anyhow::Error {
    let messages = error.messages();
    if let Err(print_error) = output::violations(flags, &messages) {
        return print_error;
    }
    let phase = match error {
        ValidationError::Schema(_) => "schema",
        ValidationError::Consistency(_) => "consistency",
    };
    anyhow::anyhow!("{phase} validation failed with {} violation(s)", messages.len())
}
