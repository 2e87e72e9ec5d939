//! Directory scan producing an immutable catalog snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use sigcorr_core::{Catalog, CatalogConfig, SigcorrError};

/// Walk `root/<instrument>/<category>/<file>` and snapshot it.
///
/// Hidden entries (leading `.`) are ignored. A category directory without any
/// accepted data file is left out; its instrument is still listed. When a
/// category holds several data files the lexicographically first is used,
/// unless `strict_single_file` is set, in which case the scan fails.
pub fn scan_catalog(config: &CatalogConfig) -> Result<Catalog<PathBuf>, SigcorrError> {
    let mut catalog = Catalog::new();
    for (instrument, inst_path) in subdirectories(&config.root)? {
        catalog.add_instrument(instrument.clone());
        for (category, cat_path) in subdirectories(&inst_path)? {
            let files = data_files(&cat_path, &config.extensions)?;
            let Some(first) = files.first() else {
                continue;
            };
            if files.len() > 1 {
                if config.strict_single_file {
                    return Err(SigcorrError::Catalog(format!(
                        "{instrument}/{category} holds {} data files; expected exactly one",
                        files.len()
                    )));
                }
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    instrument = %instrument,
                    category = %category,
                    files = files.len(),
                    chosen = %first.display(),
                    "multiple data files in category; using the first"
                );
            }
            catalog.insert(instrument.clone(), category, first.clone());
        }
    }
    Ok(catalog)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>, SigcorrError> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_context(dir, &e))? {
        let entry = entry.map_err(|e| io_context(dir, &e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !is_hidden(&name) {
            out.push((name, path));
        }
    }
    out.sort();
    Ok(out)
}

fn data_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, SigcorrError> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_context(dir, &e))? {
        let path = entry.map_err(|e| io_context(dir, &e))?.path();
        if !path.is_file() {
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_none_or(is_hidden);
        let accepted = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|a| a.eq_ignore_ascii_case(ext)));
        if !hidden && accepted {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn io_context(path: &Path, e: &std::io::Error) -> SigcorrError {
    SigcorrError::Catalog(format!("cannot read {}: {e}", path.display()))
}
