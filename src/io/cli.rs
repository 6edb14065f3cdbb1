//! Command-line interface for batch solving PNG samples

use crate::algorithm::executor::{Solver, SolverConfig};
use crate::analysis::rules::analyze;
use crate::io::configuration::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_RADIUS,
    DEFAULT_SEED, DEFAULT_UPSCALE, MAX_RADIUS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter, path_error};
use crate::io::image::{export_symbols_as_png, load_png_as_symbols};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate textures from a sample image with wave function collapse"
)]
/// Command-line arguments for the texture generation tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output width in cells
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Output height in cells
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Adjacency radius used when scanning the sample
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: u32,

    /// Restarts tolerated before a solve is declared unsolvable
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Pixel edge length each output cell is scaled to
    #[arg(short = 'x', long, default_value_t = DEFAULT_UPSCALE)]
    pub upscale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

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

    /// Output grid shape as (rows, cols), squaring a lone dimension
    pub const fn output_shape(&self) -> (usize, usize) {
        match (self.height, self.width) {
            (Some(h), Some(w)) => (h, w),
            (Some(h), None) => (h, h),
            (None, Some(w)) => (w, w),
            (None, None) => (DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH),
        }
    }
}

/// Orchestrates batch solving of PNG files with progress tracking
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
    /// Returns an error if target validation, solving, or file I/O fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.radius == 0 || self.cli.radius > MAX_RADIUS {
            return Err(invalid_parameter(
                "radius",
                &self.cli.radius,
                &format!("must be between 1 and {MAX_RADIUS}"),
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(path_error("Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        let sample = load_png_as_symbols(input_path)?;
        let ruleset = analyze(&sample, self.cli.radius)?;

        let (rows, cols) = self.cli.output_shape();
        let config = SolverConfig {
            max_attempts: self.cli.attempts,
        };
        let mut solver = Solver::new(&ruleset, rows, cols, config, self.cli.seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, solver.grid().cell_count());
        }

        loop {
            let more = solver.step()?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_solve(index, solver.grid().collapsed_count(), solver.restarts());
            }
            if !more {
                break;
            }
        }

        let output = solver.into_symbols()?;
        export_symbols_as_png(
            &output,
            self.cli.upscale,
            output_path
                .to_str()
                .ok_or_else(|| path_error("Invalid output path"))?,
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
