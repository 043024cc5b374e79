use anyhow::bail;
use gloss_schema::SchemaRegistry;

use crate::cli::SchemaArgs;
use crate::output;

/// Handle `gloss schema`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = args.name.as_deref() else {
        return output::json(&registry.list());
    };
    match registry.get(name) {
        Some(schema) => output::json(schema),
        None => bail!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        ),
    }
}
