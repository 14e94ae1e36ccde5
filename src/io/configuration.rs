//! Generator constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Partition parameters
/// Minimum distance kept between a split line and the edges of its region
pub const DEFAULT_MARGIN: usize = 4;
/// Recursion depth at which a region becomes a leaf regardless of size
pub const DEFAULT_MAX_DEPTH: usize = 10;
/// Beta(k, k) concentration used when choosing the split axis
pub const SPLIT_CONCENTRATION: usize = 5;

// A candidate bridge is built when a draw from [0, n) lands on zero
/// Denominator of the chance that a candidate bridge is built
pub const DEFAULT_BRIDGE_CHANCE: u32 = 4;

// Scatter layout parameters
/// Largest radius drawn by the scatter layout
pub const SCATTER_MAX_RADIUS: usize = 6;
/// Fraction of the map the scatter layout covers with mesa area
pub const SCATTER_DENSITY: f64 = 0.02;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed map dimension
pub const MAX_MAP_DIMENSION: usize = 10_000;

/// Number of whole-map attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default map width in tiles
pub const DEFAULT_WIDTH: usize = 80;
/// Default map height in tiles (one terminal line left for status)
pub const DEFAULT_HEIGHT: usize = 23;

// Output settings
/// Prefix of exported map filenames
pub const OUTPUT_PREFIX: &str = "map_";

/// Strategy used to place mesas before walls and bridges are derived
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Layout {
    /// One mesa per leaf of a recursive binary space partition
    #[default]
    Bsp,
    /// Random mesas until a target share of the map is covered
    Scatter,
    /// A fixed row of five mesas of increasing radius
    Showcase,
}

impl Layout {
    /// Whether the layout draws from the generator's random stream
    ///
    /// A fixed layout fails the same way on every attempt.
    pub const fn is_randomised(self) -> bool {
        !matches!(self, Self::Showcase)
    }
}

/// Parameters controlling mesa layout and bridge placement
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Map width in tiles
    pub width: usize,
    /// Map height in tiles
    pub height: usize,
    /// Mesa placement strategy
    pub layout: Layout,
    /// Minimum distance between a split line and its region edges
    pub margin: usize,
    /// Recursion depth that forces a leaf
    pub max_depth: usize,
    /// Beta concentration for split axis selection
    pub split_concentration: usize,
    /// A candidate bridge is built with probability `1 / bridge_chance`
    pub bridge_chance: u32,
    /// Guarantee a bridge across each partition split where possible
    pub join_siblings: bool,
    /// Largest scatter radius
    pub scatter_max_radius: usize,
    /// Scatter coverage target
    pub scatter_density: f64,
    /// Whole-map attempts before failing
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            layout: Layout::default(),
            margin: DEFAULT_MARGIN,
            max_depth: DEFAULT_MAX_DEPTH,
            split_concentration: SPLIT_CONCENTRATION,
            bridge_chance: DEFAULT_BRIDGE_CHANCE,
            join_siblings: true,
            scatter_max_radius: SCATTER_MAX_RADIUS,
            scatter_density: SCATTER_DENSITY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for a map of the given size
    pub fn sized(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check every parameter before any generation work starts
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_MAP_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_MAP_DIMENSION}"),
                ));
            }
        }
        if self.margin == 0 {
            return Err(invalid_parameter("margin", &self.margin, &"must be positive"));
        }
        if self.split_concentration == 0 {
            return Err(invalid_parameter(
                "split_concentration",
                &self.split_concentration,
                &"must be positive",
            ));
        }
        if self.bridge_chance == 0 {
            return Err(invalid_parameter(
                "bridge_chance",
                &self.bridge_chance,
                &"must be positive",
            ));
        }
        if !(self.scatter_density > 0.0 && self.scatter_density <= 1.0) {
            return Err(invalid_parameter(
                "scatter_density",
                &self.scatter_density,
                &"must be in (0, 1]",
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one attempt is required",
            ));
        }
        Ok(())
    }
}
