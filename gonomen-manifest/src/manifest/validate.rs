//! Post-parse validation of a manifest.

use std::collections::HashSet;

use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Methods accepted in `http_method`, compared case-insensitively.
pub(crate) const HTTP_METHODS: &[&str] = &[
    "GET", "PUT", "POST", "DELETE", "OPTIONS", "HEAD", "PATCH", "TRACE",
];

/// Validate the manifest after parsing.
///
/// Structural checks run first, then the engine tables are built and every
/// unit is planned so mapping errors surface with a location.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.models.keys().any(|name| name.trim().is_empty()) {
        return Err(ctx.validation_error("model name cannot be empty"));
    }

    let mut seen = HashSet::new();
    for entry in &manifest.operations {
        if entry.operation_id.trim().is_empty() {
            return Err(ctx.validation_error_at(
                "operation_id cannot be empty",
                find_value_spans(ctx.src(), "operation_id", &entry.operation_id)
                    .first()
                    .copied(),
            ));
        }

        if !HTTP_METHODS
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&entry.http_method))
        {
            return Err(ctx.validation_error_at(
                format!(
                    "unknown HTTP method '{}' for operation '{}'",
                    entry.http_method, entry.operation_id
                ),
                find_value_spans(ctx.src(), "http_method", &entry.http_method)
                    .first()
                    .copied(),
            ));
        }

        if !seen.insert((entry.tag.as_str(), entry.operation_id.as_str())) {
            return Err(ctx.validation_error_at(
                format!(
                    "operation '{}' is declared twice under tag '{}'",
                    entry.operation_id, entry.tag
                ),
                find_value_spans(ctx.src(), "operation_id", &entry.operation_id)
                    .get(1)
                    .copied(),
            ));
        }
    }

    manifest.generator().map_err(|err| {
        let span = find_key_span(ctx.src(), mapping_table(&err), err.name());
        ctx.engine_error(err, span)
    })?;

    manifest.plan().map_err(|err| {
        let span = match &err {
            gonomen_core::Error::DanglingReference { reference, .. } => {
                find_quoted_span(ctx.src(), reference)
            }
            _ => None,
        };
        ctx.engine_error(err, span)
    })?;

    Ok(())
}

/// Manifest table holding the entry an engine error refers to.
fn mapping_table(err: &gonomen_core::Error) -> &'static str {
    match err {
        gonomen_core::Error::EmptyOverride { table, .. } => match *table {
            "variable" => "name_mapping",
            "parameter" => "parameter_name_mapping",
            "model" => "model_name_mapping",
            "enum" => "enum_name_mapping",
            _ => "reserved_words_mapping",
        },
        _ => "reserved_words_mapping",
    }
}

/// Find the span of a key inside a `[table]`, written bare or quoted.
pub(crate) fn find_key_span(src: &str, table: &str, key: &str) -> Option<SourceSpan> {
    let header = format!("[{}]", table);
    let start = src.find(&header)? + header.len();
    let body = &src[start..];
    let end = body.find("\n[").map_or(body.len(), |i| i + 1);

    let candidates = [key.to_string(), format!("\"{}\"", key), format!("'{}'", key)];
    let mut offset = start;
    for line in body[..end].split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        for candidate in &candidates {
            let is_assignment = trimmed
                .strip_prefix(candidate.as_str())
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            if is_assignment {
                return Some(SourceSpan::from((offset + indent, candidate.len())));
            }
        }
        offset += line.len();
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Spans of every `key = "value"` assignment, covering the quoted value.
pub(crate) fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let pattern = format!("{} = \"{}\"", key, value);
    let skip = key.len() + 3;
    src.match_indices(&pattern)
        .map(|(pos, _)| SourceSpan::from((pos + skip, value.len() + 2)))
        .collect()
}

/// Find the span of the contents of the first `"text"` literal.
pub(crate) fn find_quoted_span(src: &str, text: &str) -> Option<SourceSpan> {
    let pos = src.find(&format!("\"{}\"", text))?;
    Some(SourceSpan::from((pos + 1, text.len())))
}
