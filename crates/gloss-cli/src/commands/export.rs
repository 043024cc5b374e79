use anyhow::Context;
use chrono::Utc;
use gloss_config::GlossConfig;
use gloss_export::{ExportMeta, ExportOptions, ExportOutcome, Exporter};
use serde::Serialize;
use tracing::debug;

use crate::cli::{ExportArgs, GlobalFlags};
use crate::input;
use crate::output;

/// Version stamped on exports when neither `--release` nor `export.version`
/// is set.
const FALLBACK_VERSION: &str = "dev";

#[derive(Debug, Serialize)]
struct ExportResponse {
    exported: bool,
    path: String,
    version: Option<String>,
    terms_count: Option<usize>,
    size_bytes: Option<u64>,
    oversized: bool,
}

/// Handle `gloss export`.
pub fn handle(args: &ExportArgs, flags: &GlobalFlags, config: &GlossConfig) -> anyhow::Result<()> {
    let raw = input::read_json(&args.input)?;
    let previous = args.previous.as_deref().map(input::read_snapshot).transpose()?;

    let snapshot = gloss_check::validate_document(&raw, previous.as_ref())
        .map_err(|error| super::fail_validation(flags, &error))?;

    let exporter = Exporter::new(export_options(args, config));
    let meta = ExportMeta::new(resolve_version(args, config), Utc::now());

    let path = args.out.display().to_string();
    let response = match exporter.export_if_new(&snapshot, previous.as_ref(), &meta)? {
        ExportOutcome::Unchanged => {
            debug!(path = %path, "no new slugs; export skipped");
            ExportResponse {
                exported: false,
                path,
                version: None,
                terms_count: None,
                size_bytes: None,
                oversized: false,
            }
        }
        ExportOutcome::Exported(artifact) => {
            if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&args.out, &artifact.output)
                .with_context(|| format!("failed to write {path}"))?;
            debug!(
                path = %path,
                size_bytes = artifact.size_bytes,
                terms = artifact.document.terms_count,
                "export written"
            );
            ExportResponse {
                exported: true,
                path,
                version: Some(artifact.document.version),
                terms_count: Some(artifact.document.terms_count),
                size_bytes: Some(artifact.size_bytes),
                oversized: artifact.oversized,
            }
        }
    };

    let line = if response.exported {
        format!(
            "exported {} terms ({} bytes) to {}",
            response.terms_count.unwrap_or_default(),
            response.size_bytes.unwrap_or_default(),
            response.path
        )
    } else {
        format!("no new slugs since previous export; {} left unchanged", response.path)
    };
    output::summary(flags, &response, &[line])
}

fn export_options(args: &ExportArgs, config: &GlossConfig) -> ExportOptions {
    ExportOptions {
        pretty: args.pretty || config.export.pretty,
        size_threshold_bytes: config.export.size_threshold_bytes,
        on_oversize: config.export.on_oversize,
        only_if_new: args.only_if_new || config.export.only_if_new,
    }
}

fn resolve_version(args: &ExportArgs, config: &GlossConfig) -> String {
    args.release
        .as_deref()
        .map(str::trim)
        .filter(|release| !release.is_empty())
        .or_else(|| config.export.version())
        .unwrap_or(FALLBACK_VERSION)
        .to_string()
}
