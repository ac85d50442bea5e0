//! Runs the full icon set: every density bucket plus the store listing icon.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::GeneratorConfig;
use crate::error::{IconError, Result};
use crate::icon::create_icon;
use crate::targets::{plan_targets, OutputTarget};

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<OutputTarget>,
}

/// Render and write every planned target, stopping at the first failure.
pub fn generate_all(config: &GeneratorConfig) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    for target in plan_targets(config) {
        if let Some(dir) = target.path.parent() {
            ensure_dir(dir)?;
        }
        create_icon(target.size, &target.path)?;
        report.written.push(target);
    }
    Ok(report)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!("Creating directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| IconError::CreateDir { path: dir.to_path_buf(), source })
}
