use serde::Serialize;

use crate::cli::{GlobalFlags, ValidateArgs};
use crate::input;
use crate::output;

#[derive(Debug, Serialize)]
struct ValidateResponse {
    valid: bool,
    terms: usize,
    redirects: usize,
}

/// Handle `gloss validate`.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = input::read_json(&args.input)?;
    let base = args.base.as_deref().map(input::read_snapshot).transpose()?;

    let snapshot = gloss_check::validate_document(&raw, base.as_ref())
        .map_err(|error| super::fail_validation(flags, &error))?;

    let response = ValidateResponse {
        valid: true,
        terms: snapshot.terms.len(),
        redirects: snapshot.redirects.len(),
    };
    output::summary(
        flags,
        &response,
        &[format!(
            "ok: {} terms, {} redirects",
            response.terms, response.redirects
        )],
    )
}
