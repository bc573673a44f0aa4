//! Command dispatch and the `extract`/`init` command bodies.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::{Command, ExtractArgs, ExtractCommand};
use super::exit_status::ExitStatus;
use crate::catalog::StalePolicy;
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::extract::KeywordExtractor;
use crate::reporter::{RunReport, print_report};
use crate::scanner::scan_files;
use crate::session::{ExtractionSession, SessionOptions};

pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Extract(cmd) => extract(cmd),
        Command::Init => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
    }
}

fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let ExtractArgs {
        common,
        retain_obsolete,
    } = cmd.args;
    let verbose = common.verbose;

    // Priority: CLI args > config file > defaults
    let source_root = common.source_root.unwrap_or_else(|| PathBuf::from("."));
    let root_str = source_root
        .to_str()
        .with_context(|| format!("Invalid path: {:?}", source_root))?;

    let config_result = load_config(&source_root)?;
    if verbose && !config_result.from_file {
        eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
    }
    let mut config = config_result.config;

    if let Some(ref output_dir) = common.output_dir {
        config.output_dir = output_dir.to_string_lossy().to_string();
    }
    if !common.locales.is_empty() {
        config.locales = common.locales;
    }
    if retain_obsolete {
        config.retain_obsolete = true;
    }

    let scan_result = scan_files(
        root_str,
        &config.includes,
        &config.ignores,
        &config.extensions,
        config.ignore_test_files,
        verbose,
    );
    if scan_result.skipped_count > 0 {
        eprintln!(
            "Warning: {} path(s) skipped due to access errors{}",
            scan_result.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    let extractor = KeywordExtractor::new(&config.keywords)?;

    let mut session = ExtractionSession::new(SessionOptions {
        root_dir: source_root.clone(),
        output_dir: resolve_output_dir(&source_root, &config.output_dir),
        locales: config.locales.clone(),
        project_id: config.project_id.clone(),
        stale_policy: if config.retain_obsolete {
            StalePolicy::Retain
        } else {
            StalePolicy::Drop
        },
    });
    session.observe_files(&scan_result.files, &extractor);
    let outcomes = session.finalize_all()?;

    let report = RunReport {
        files_processed: session.files_processed(),
        message_count: session.message_count(),
        reference_count: session.reference_count(),
        outcomes,
        issues: session.issues().to_vec(),
    };
    print_report(&report);

    if report.error_count() > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Resolve the output directory relative to the source root.
fn resolve_output_dir(root_dir: &Path, output_dir: &str) -> PathBuf {
    let p = Path::new(output_dir);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        // With `--source-root .` keep the original relative path to avoid
        // noisy "././locales" in output
        let is_cur_dir = root_dir.components().all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            root_dir.join(rel)
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
