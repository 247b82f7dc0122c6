//! Configuration for the forest demo.

use canopy_foundation::{Error, Result};

/// Options for a demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of trees to plant.
    pub tree_count: usize,
    /// Seed for species and placement choices.
    pub seed: u64,
    /// Coordinates are drawn from `0..field_width` on both axes.
    pub field_width: i64,
    /// Whether to draw every tree before printing statistics.
    pub draw: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tree_count: 1000,
            seed: 42,
            field_width: 1000,
            draw: true,
        }
    }
}

impl DemoConfig {
    /// Builder method to set the number of trees.
    #[must_use]
    pub fn with_tree_count(mut self, count: usize) -> Self {
        self.tree_count = count;
        self
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the field width.
    #[must_use]
    pub fn with_field_width(mut self, width: i64) -> Self {
        self.field_width = width;
        self
    }

    /// Builder method to enable or disable drawing.
    #[must_use]
    pub fn with_draw(mut self, draw: bool) -> Self {
        self.draw = draw;
        self
    }

    /// Checks that the configuration can be run.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](canopy_foundation::ErrorKind::InvalidConfig)
    /// if the field width is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.field_width <= 0 {
            return Err(Error::invalid_config(
                "field_width",
                format!("must be positive, got {}", self.field_width),
            ));
        }
        Ok(())
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Print usage and exit.
    Help,
    /// Print the version and exit.
    Version,
    /// Run the demo.
    Run {
        /// Demo options.
        config: DemoConfig,
        /// Raise the default log level to `debug`.
        verbose: bool,
    },
}

impl CliCommand {
    /// Parses command-line arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](canopy_foundation::ErrorKind::InvalidConfig)
    /// for unknown options, missing values, or unparseable numbers.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = DemoConfig::default();
        let mut verbose = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => return Ok(Self::Help),
                "-V" | "--version" => return Ok(Self::Version),
                "-q" | "--quiet" => config.draw = false,
                "-v" | "--verbose" => verbose = true,
                "-n" | "--trees" => config.tree_count = parse_value(arg, args.next())?,
                "-s" | "--seed" => config.seed = parse_value(arg, args.next())?,
                "-w" | "--width" => config.field_width = parse_value(arg, args.next())?,
                other => {
                    return Err(Error::invalid_config(other, "unknown option"));
                }
            }
        }

        config.validate()?;
        Ok(Self::Run { config, verbose })
    }
}

fn parse_value<T, S>(option: &str, value: Option<S>) -> Result<T>
where
    T: std::str::FromStr,
    S: AsRef<str>,
{
    let value = value.ok_or_else(|| Error::invalid_config(option, "requires a value"))?;
    let value = value.as_ref();
    value
        .parse()
        .map_err(|_| Error::invalid_config(option, format!("not a number: {value}")))
}
