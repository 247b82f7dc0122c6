//! Seeded forest demo.
//!
//! Plants `tree_count` trees, each a random species from [`SPECIES`] at a
//! random position, into a [`Collection`] backed by a shared
//! [`RecordStore`]. The same seed always plants the same forest.

use std::io::Write;
use std::sync::Arc;

use canopy_foundation::Result;
use canopy_store::{Collection, CollectionStats, RecordStore};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::species::SPECIES;

/// Forest demo driver.
#[derive(Debug)]
pub struct Demo {
    config: DemoConfig,
    store: Arc<RecordStore>,
}

impl Demo {
    /// Creates a demo that plants into `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: DemoConfig, store: Arc<RecordStore>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, store })
    }

    /// Returns the demo configuration.
    #[must_use]
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Plants a new forest according to the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be built.
    pub fn plant(&self) -> Result<Collection> {
        let mut forest = Collection::builder()
            .store(Arc::clone(&self.store))
            .with_capacity(self.config.tree_count)
            .build()?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);

        for _ in 0..self.config.tree_count {
            let species = SPECIES[rng.gen_range(0..SPECIES.len())];
            let x = rng.gen_range(0..self.config.field_width);
            let y = rng.gen_range(0..self.config.field_width);
            forest.add(x, y, species.name, species.color, species.texture);
        }

        debug!(
            seed = self.config.seed,
            trees = forest.count(),
            "planted forest"
        );
        Ok(forest)
    }

    /// Plants a forest, draws it if configured, and writes statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if planting fails or `out` cannot be written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<CollectionStats> {
        let forest = self.plant()?;

        if self.config.draw {
            writeln!(out, "--- Drawing all trees in the forest ---")?;
            forest.draw(out)?;
        }

        let stats = forest.stats();
        writeln!(out, "----------------------------------------")?;
        writeln!(out, "{stats}")?;

        info!(
            trees = stats.entities,
            distinct_records = stats.distinct_records,
            shared_savings = stats.shared_savings(),
            "forest demo complete"
        );
        Ok(stats)
    }
}
