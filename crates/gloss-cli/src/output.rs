use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};

/// Print a serializable response as pretty JSON.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print lines in text mode, or the value as JSON.
pub fn report<T: Serialize>(
    flags: &GlobalFlags,
    value: &T,
    lines: &[String],
) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Json => json(value),
        OutputFormat::Text => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Print lines unless quiet. JSON output is never suppressed.
pub fn summary<T: Serialize>(
    flags: &GlobalFlags,
    value: &T,
    lines: &[String],
) -> anyhow::Result<()> {
    if flags.quiet && flags.format == OutputFormat::Text {
        return Ok(());
    }
    report(flags, value, lines)
}

/// Print every violation, one per line (text) or as a JSON list. Violations
/// are printed even in quiet mode.
pub fn violations(flags: &GlobalFlags, messages: &[String]) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Json => json(&serde_json::json!({
            "valid": false,
            "violations": messages,
        })),
        OutputFormat::Text => {
            for message in messages {
                eprintln!("  - {message}");
            }
            Ok(())
        }
    }
}
