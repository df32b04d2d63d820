//! Watch Mode
//!
//! Re-runs the check whenever the target file changes on disk, until the
//! process is interrupted. Single-threaded: events arrive over a standard
//! channel and each one triggers a fresh, independent check.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Config as NotifyConfig, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::Config;
use crate::report;
use crate::validation::check_file;

/// Check once, then keep re-checking on every change to the file.
pub fn run(config: &Config) -> Result<()> {
    // Initial pass; the file must at least exist to be watched.
    check_and_report(config)?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        tx,
        NotifyConfig::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    // Editors replace files on save, so watch the parent directory and
    // filter events down to the target name.
    let target = config
        .file
        .canonicalize()
        .with_context(|| format!("File {} cannot be opened", config.file.display()))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("/"));
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    log::info!("watching {} for changes", target.display());

    for event in rx {
        match event {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                    continue;
                }
                if event
                    .paths
                    .iter()
                    .any(|path| path.file_name() == target.file_name())
                {
                    log::info!("{} changed, re-checking", target.display());
                    // The file may be mid-replace; report the failure and
                    // wait for the next event.
                    if let Err(err) = check_and_report(config) {
                        log::error!("re-check failed: {err:#}");
                    }
                }
            }
            Err(err) => log::warn!("file watcher error: {err}"),
        }
    }

    Ok(())
}

fn check_and_report(config: &Config) -> Result<()> {
    let result = check_file(&config.file)
        .with_context(|| format!("File {} cannot be opened", config.file.display()))?;
    report::emit(&config.file, config.format, &result)
}
