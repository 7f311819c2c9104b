//! JSON export of scan results.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

use super::ScanResult;

#[derive(Debug, Serialize)]
struct ScanExport<'a> {
    generated_at: String,
    total_apps: usize,
    managed: usize,
    with_equivalent: usize,
    applications: Vec<AppExport<'a>>,
}

#[derive(Debug, Serialize)]
struct AppExport<'a> {
    name: &'a str,
    path: String,
    managed: bool,
    kind: Option<String>,
    suggestion: Option<&'a str>,
}

fn build_export(result: &ScanResult) -> ScanExport<'_> {
    ScanExport {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        total_apps: result.apps.len(),
        managed: result.managed().len(),
        with_equivalent: result.with_suggestions().len(),
        applications: result
            .apps
            .iter()
            .map(|app| AppExport {
                name: &app.name,
                path: app.path.display().to_string(),
                managed: app.managed.is_some(),
                kind: app.managed.map(|k| k.to_string()),
                suggestion: app.suggestion.as_deref(),
            })
            .collect(),
    }
}

/// Serialize a scan result to pretty JSON.
pub fn to_json(result: &ScanResult) -> Result<String> {
    let export = build_export(result);
    Ok(serde_json::to_string_pretty(&export).map_err(anyhow::Error::from)?)
}

/// Write a scan result to a JSON file.
pub fn write_export(result: &ScanResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_json(result)?)?;
    tracing::info!("exported scan results to {}", path.display());
    Ok(())
}
