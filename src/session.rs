//! One extraction run end-to-end: scan results in, catalog files out.
//!
//! The session owns the `CatalogStore` for the whole run. File extraction is
//! parallelized with rayon, but every batch lands in the store through one
//! sequential merge loop, so ingestion is commutative and the snapshot never
//! races an in-flight observation. All observing completes before any
//! finalize.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use tempfile::NamedTempFile;

use crate::catalog::{CatalogStore, StalePolicy};
use crate::extract::Extractor;
use crate::issues::SessionIssue;
use crate::po::{CatalogMetadata, PoFile, po_timestamp_now, render, strip_timestamps};

/// Everything a session needs to know up front.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Root the scanned file paths are made relative to in references.
    pub root_dir: PathBuf,
    /// Directory holding one `<locale>.po` per target locale.
    pub output_dir: PathBuf,
    pub locales: Vec<String>,
    /// Project-Id-Version header value.
    pub project_id: String,
    pub stale_policy: StalePolicy,
}

/// Downstream binary-catalog compilation, invoked after a successful write.
pub trait CompileHook: Sync {
    fn catalog_written(&self, locale: &str, path: &Path) -> Result<()>;
}

/// What `finalize` did for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOutcome {
    pub locale: String,
    pub path: PathBuf,
    /// Number of messages in the written catalog.
    pub messages: usize,
    /// False when the existing file already matched modulo timestamps and
    /// was left untouched.
    pub written: bool,
}

pub struct ExtractionSession {
    options: SessionOptions,
    store: CatalogStore,
    /// Parsed prior catalogs, keyed by locale. Missing or malformed files
    /// simply have no entry here.
    baselines: BTreeMap<String, PoFile>,
    issues: Vec<SessionIssue>,
    compile_hook: Option<Box<dyn CompileHook>>,
    files_processed: usize,
}

impl ExtractionSession {
    /// Start a fresh session, loading any existing catalogs as merge
    /// baselines. A malformed existing catalog is a warning, not a failure:
    /// extraction proceeds as if it were empty.
    pub fn new(options: SessionOptions) -> Self {
        let mut baselines = BTreeMap::new();
        let mut issues = Vec::new();

        for locale in &options.locales {
            let path = catalog_path(&options.output_dir, locale);
            if !path.exists() {
                continue;
            }
            let loaded = fs::read_to_string(&path)
                .map_err(|e| anyhow!("{}", e))
                .and_then(|content| crate::po::parse(&content));
            match loaded {
                Ok(file) => {
                    baselines.insert(locale.clone(), file);
                }
                Err(e) => issues.push(SessionIssue::MalformedBaseline {
                    file_path: path.display().to_string(),
                    error: e.to_string(),
                }),
            }
        }

        Self {
            options,
            store: CatalogStore::new(),
            baselines,
            issues,
            compile_hook: None,
            files_processed: 0,
        }
    }

    pub fn set_compile_hook(&mut self, hook: Box<dyn CompileHook>) {
        self.compile_hook = Some(hook);
    }

    /// Destination path for one locale's catalog.
    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        catalog_path(&self.options.output_dir, locale)
    }

    /// Extract one already-read file and ingest its observations.
    pub fn observe(&mut self, content: &str, file_path: &str, extractor: &dyn Extractor) {
        let reference_path = self.reference_path(file_path);
        match extractor.extract(content, &reference_path) {
            Ok(observations) => {
                for observation in observations {
                    self.store.ingest(&observation.text, observation.location);
                }
            }
            Err(e) => self.issues.push(SessionIssue::ExtractionFailed {
                file_path: file_path.to_string(),
                error: e.to_string(),
            }),
        }
        self.files_processed += 1;
    }

    /// Read and extract a set of files in parallel.
    ///
    /// Parallel workers only read and extract; the store is mutated in one
    /// sequential loop afterwards. A file that fails to read or extract is
    /// skipped and reported without affecting the others.
    pub fn observe_files(&mut self, files: &HashSet<String>, extractor: &dyn Extractor) {
        let mut batches: Vec<_> = files
            .par_iter()
            .map(|file_path| {
                let reference_path = self.reference_path(file_path);
                let outcome = fs::read_to_string(file_path)
                    .map_err(|e| anyhow!("Failed to read file: {}", e))
                    .and_then(|content| extractor.extract(&content, &reference_path));
                (file_path.clone(), outcome)
            })
            .collect();
        // Apply in path order so issues are reported deterministically,
        // not in the file set's iteration order
        batches.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        for (file_path, outcome) in batches {
            match outcome {
                Ok(observations) => {
                    for observation in observations {
                        self.store.ingest(&observation.text, observation.location);
                    }
                }
                Err(e) => self.issues.push(SessionIssue::ExtractionFailed {
                    file_path,
                    error: e.to_string(),
                }),
            }
            self.files_processed += 1;
        }
    }

    /// Render and persist the catalog for one locale.
    ///
    /// The store itself is left untouched: the merge runs on a clone, so a
    /// locale's retained baseline entries never leak into another locale's
    /// catalog. The file is replaced atomically (temp file + rename), and is
    /// not rewritten at all when the only difference is the timestamps.
    pub fn finalize(&mut self, locale: &str) -> Result<LocaleOutcome> {
        let mut catalog = self.store.clone();
        let baseline = self.baselines.get(locale);
        if let Some(baseline) = baseline {
            catalog.merge(
                locale,
                baseline.baseline_messages(),
                self.options.stale_policy,
            );
        }
        let snapshot = catalog.snapshot();

        let now = po_timestamp_now()?;
        let creation_date = baseline
            .and_then(|b| b.header_field("POT-Creation-Date"))
            .unwrap_or(&now)
            .to_string();
        let metadata = CatalogMetadata::new(&self.options.project_id, creation_date, now);
        let rendered = render(&snapshot, &metadata, locale);

        let path = self.catalog_path(locale);
        if let Ok(existing) = fs::read_to_string(&path)
            && strip_timestamps(&existing) == strip_timestamps(&rendered)
        {
            return Ok(LocaleOutcome {
                locale: locale.to_string(),
                path,
                messages: snapshot.len(),
                written: false,
            });
        }

        write_atomic(&path, &rendered)?;

        if let Some(hook) = &self.compile_hook {
            hook.catalog_written(locale, &path)?;
        }

        Ok(LocaleOutcome {
            locale: locale.to_string(),
            path,
            messages: snapshot.len(),
            written: true,
        })
    }

    /// Finalize every configured locale, in configuration order.
    pub fn finalize_all(&mut self) -> Result<Vec<LocaleOutcome>> {
        let locales = self.options.locales.clone();
        locales
            .iter()
            .map(|locale| self.finalize(locale))
            .collect()
    }

    pub fn issues(&self) -> &[SessionIssue] {
        &self.issues
    }

    pub fn files_processed(&self) -> usize {
        self.files_processed
    }

    pub fn message_count(&self) -> usize {
        self.store.message_count()
    }

    pub fn reference_count(&self) -> usize {
        self.store.reference_count()
    }

    /// Reference form of a scanned path: relative to the root when possible.
    fn reference_path(&self, file_path: &str) -> String {
        Path::new(file_path)
            .strip_prefix(&self.options.root_dir)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| file_path.to_string())
    }
}

fn catalog_path(output_dir: &Path, locale: &str) -> PathBuf {
    output_dir.join(format!("{}.po", locale))
}

/// Replace `path` atomically: full render goes to a temp file in the same
/// directory, which is then renamed over the destination. An aborted run
/// never leaves a truncated catalog behind.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace catalog: {}", path.display()))?;
    Ok(())
}
