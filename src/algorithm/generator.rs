//! Map generation pipeline with whole-map retries
//!
//! One attempt runs mesa layout, wall dilation and bridge placement in that
//! order on a fresh map. An attempt that fails with a retryable error is
//! discarded and the next attempt continues from the same seeded stream, so
//! a given seed always yields the same result.

use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::connectivity::{build_bridges, join_siblings};
use crate::algorithm::partition::Partitioner;
use crate::algorithm::scatter::scatter_mesas;
use crate::algorithm::showcase::showcase;
use crate::io::configuration::{GeneratorConfig, Layout};
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::spatial::Map;
use crate::spatial::tiles::TileKind;

/// Summary of one successful attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Attempt number that succeeded, starting at 1
    pub attempt: usize,
    /// Walls raised by dilation
    pub walls: usize,
    /// Tiles an actor can stand on in the finished map
    pub walkable: usize,
    /// Partition splits whose halves could not be bridged
    pub unjoined_splits: usize,
    /// Deepest partition level that became a leaf
    pub deepest_leaf: usize,
}

/// Seeded map generator
pub struct MapGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    stats: GenerationStats,
}

impl MapGenerator {
    /// Create a generator after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is rejected
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            stats: GenerationStats::default(),
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Statistics of the most recent successful generation
    pub const fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Generate a complete map
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` wrapping the last error once every attempt
    /// has failed, or the first non-retryable error immediately. Fixed
    /// layouts get a single attempt.
    pub fn generate(&mut self) -> Result<Map> {
        let attempts = if self.config.layout.is_randomised() {
            self.config.max_attempts
        } else {
            self.config.max_attempts.min(1)
        };
        let mut last = None;

        for attempt in 1..=attempts {
            match self.attempt() {
                Ok(map) => {
                    self.stats.attempt = attempt;
                    log::info!(
                        "generated {}x{} map: {} mesas, {} bridges (attempt {attempt})",
                        map.width(),
                        map.height(),
                        map.mesas().len(),
                        map.bridges().len()
                    );
                    return Ok(map);
                }
                Err(error) if error.is_retryable() => {
                    log::warn!("generation attempt {attempt} failed: {error}");
                    last = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        Err(MapError::GenerationFailed {
            attempts,
            last: Box::new(last.unwrap_or_else(|| {
                invalid_parameter("max_attempts", &0, &"no attempt was made")
            })),
        })
    }

    fn attempt(&mut self) -> Result<Map> {
        let config = self.config;
        let mut map = Map::new(config.width, config.height);
        let mut stats = GenerationStats::default();

        match config.layout {
            Layout::Bsp => {
                let outcome = Partitioner::new(&mut map, &config, &mut self.rng).run()?;
                stats.deepest_leaf = outcome.deepest;
                stats.walls = map.dilate_walls();
                build_bridges(&mut map, config.bridge_chance, &mut self.rng)?;
                if config.join_siblings {
                    stats.unjoined_splits = join_siblings(&mut map, &outcome.joins, &mut self.rng)?;
                }
            }
            Layout::Scatter => {
                scatter_mesas(
                    &mut map,
                    config.scatter_max_radius,
                    config.scatter_density,
                    &mut self.rng,
                )?;
                stats.walls = map.dilate_walls();
                build_bridges(&mut map, config.bridge_chance, &mut self.rng)?;
            }
            Layout::Showcase => {
                showcase(&mut map, &mut self.rng)?;
                stats.walls = map.grid().count(TileKind::Wall);
            }
        }

        stats.walkable = map
            .grid()
            .indexed_tiles()
            .filter(|&(_, _, tile)| tile.is_walkable())
            .count();
        self.stats = stats;
        Ok(map)
    }
}
