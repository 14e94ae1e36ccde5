//! Command-line interface for generating single maps or seeded batches

use crate::algorithm::generator::MapGenerator;
use crate::io::configuration::{
    DEFAULT_BRIDGE_CHANCE, DEFAULT_HEIGHT, DEFAULT_MARGIN, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_DEPTH, DEFAULT_SEED, DEFAULT_WIDTH, GeneratorConfig, Layout, OUTPUT_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::export_map_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::export_map_as_text;
use crate::spatial::Map;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mesagen")]
#[command(
    author,
    version,
    about = "Generate mesa-and-bridge tile maps by recursive partitioning"
)]
/// Command-line arguments for the map generator
pub struct Cli {
    /// Map width in tiles
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation (first seed of a batch)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of maps to generate, one per consecutive seed
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Mesa placement strategy
    #[arg(short, long, value_enum, default_value_t = Layout::Bsp)]
    pub layout: Layout,

    /// Minimum distance between a split line and its region edges
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: usize,

    /// Partition depth that forces a leaf
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Build each candidate bridge with probability 1/N
    #[arg(short, long, default_value_t = DEFAULT_BRIDGE_CHANCE)]
    pub bridge_chance: u32,

    /// Do not force bridges across partition splits
    #[arg(long)]
    pub no_join: bool,

    /// Whole-map attempts before giving up on a seed
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Directory for text and PNG output (prints to stdout when omitted)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generator configuration described by the arguments
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            height: self.height,
            layout: self.layout,
            margin: self.margin,
            max_depth: self.max_depth,
            bridge_chance: self.bridge_chance,
            join_siblings: !self.no_join,
            max_attempts: self.attempts,
            ..GeneratorConfig::default()
        }
    }

    /// Seeds of every map in the batch
    pub fn seeds(&self) -> impl Iterator<Item = u64> + use<> {
        let first = self.seed;
        (0..self.count as u64).map(move |offset| first.wrapping_add(offset))
    }

    /// Check if progress should be displayed
    ///
    /// Only batches written to disk get a bar; stdout carries the maps otherwise.
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.output.is_some() && self.count > 1
    }
}

/// Generates every map requested on the command line
pub struct MapProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and emit every map
    ///
    /// A failing seed in a batch is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns the configuration error, or the first generation or export
    /// error when no map could be produced
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.config();
        config.validate()?;

        let mut first_error = None;
        for seed in self.cli.seeds() {
            match self.process_seed(config, seed) {
                Ok(()) => self.progress_manager.complete_map(seed),
                Err(error) => {
                    log::error!("seed {seed}: {error}");
                    self.progress_manager.fail_map(seed);
                    first_error.get_or_insert(error);
                }
            }
        }
        self.progress_manager.finish();
        log::info!(
            "batch done: {} generated, {} failed",
            self.progress_manager.completed(),
            self.progress_manager.failed()
        );

        match first_error {
            Some(error) if self.progress_manager.completed() == 0 => Err(error),
            _ => Ok(()),
        }
    }

    fn process_seed(&self, config: GeneratorConfig, seed: u64) -> Result<()> {
        let mut generator = MapGenerator::new(config, seed)?;
        let map = generator.generate()?;
        let stats = generator.stats();
        log::debug!(
            "seed {seed}: {} walls, {} walkable, deepest leaf {}, {} unjoined splits",
            stats.walls,
            stats.walkable,
            stats.deepest_leaf,
            stats.unjoined_splits
        );

        match &self.cli.output {
            Some(dir) => Self::write_map(&map, dir, seed),
            None => {
                Self::print_map(&map);
                Ok(())
            }
        }
    }

    fn write_map(map: &Map, dir: &Path, seed: u64) -> Result<()> {
        let (text_path, image_path) = Self::get_output_paths(dir, seed);
        export_map_as_text(map, &text_path)?;
        export_map_as_png(map, &image_path)
    }

    // Allow print: stdout is the output channel when no directory is given
    #[allow(clippy::print_stdout)]
    fn print_map(map: &Map) {
        print!("{map}");
    }

    /// Text and PNG paths for a seed inside an output directory
    pub fn get_output_paths(dir: &Path, seed: u64) -> (PathBuf, PathBuf) {
        let stem = format!("{OUTPUT_PREFIX}{seed}");
        (
            dir.join(format!("{stem}.txt")),
            dir.join(format!("{stem}.png")),
        )
    }
}
