//! Command-line interface for batch deduplication of PNG tile sheets

use crate::algorithm::pipeline::{DedupConfig, deduplicate};
use crate::io::configuration::{ATLAS_ROW_TILES, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::image::{load_rgb_image, save_rgb_png};
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fliptile")]
#[command(
    author,
    version,
    about = "Reduce a tile sheet to its unique tiles, treating mirrored tiles as duplicates"
)]
/// Command-line arguments for the deduplication tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output path (single input file only; defaults to <input>_opt.png)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Maximum tiles per atlas row
    #[arg(short, long, default_value_t = ATLAS_ROW_TILES)]
    pub columns: usize,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Report per-stage tile counts
    #[arg(short, long)]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Library configuration derived from the arguments
    pub const fn dedup_config(&self) -> DedupConfig {
        DedupConfig {
            atlas_row_tiles: self.columns,
        }
    }
}

/// Outcome of one processed file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// Source image
    pub input: PathBuf,
    /// Written atlas
    pub output: PathBuf,
    /// Flip-equivalence classes found
    pub class_count: usize,
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation fails or any file cannot be
    /// decoded, split into tiles or written. Processing stops at the first
    /// failing file.
    pub fn process(&mut self) -> Result<Vec<FileReport>> {
        if self.cli.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &self.cli.columns,
                &"atlas rows must hold at least one tile",
            ));
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            reports.push(self.process_file(file)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"Target file must be a PNG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(invalid_parameter(
                    "output",
                    &target.display(),
                    &"An explicit output path needs a single input file",
                ));
            }
            let mut files = Vec::new();
            let read_error =
                |source: std::io::Error| file_system("read directory", target, source);
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if is_png(&path) && !is_generated(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path_for(input_path);
        if output_path.exists() {
            warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<FileReport> {
        let start_time = Instant::now();
        let output_path = self.output_path_for(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_rgb_image(input_path)?;
        let outcome = deduplicate(&source, &self.cli.dedup_config())?;
        save_rgb_png(&outcome.atlas, &output_path)?;

        let elapsed = start_time.elapsed();
        let report = || {
            info!(
                "{}: {} tiles, with flips",
                input_path.display(),
                outcome.class_count()
            );
            debug!(
                "{}: {} source tiles, {} byte-distinct, written to {} in {elapsed:.2?}",
                input_path.display(),
                outcome.source_tiles,
                outcome.unique_tiles,
                output_path.display(),
            );
        };
        self.progress_manager
            .as_ref()
            .map_or_else(report, |pm| pm.suspend(report));

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(FileReport {
            input: input_path.to_path_buf(),
            output: output_path,
            class_count: outcome.class_count(),
        })
    }

    fn output_path_for(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_path(input_path))
    }

    /// Default atlas path for an input: `<stem>_opt.png` next to it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION))
}

// Atlases written by an earlier run share the input directory
fn is_generated(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
