mod defaults;

use crate::cli::{CompareArgs, ConvolutionArgs, ExhaustiveArgs, LeaderboardArgs, SelectionArgs};
use crate::error::{CliError, Result};
use cyclopep::core::mass_table::Alphabet;
use cyclopep::engine::config::{
    self as core_config, CompareConfig, ConvolutionConfig, ExhaustiveConfig, LeaderboardConfig,
    MassRange,
};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSearchConfig {
    alphabet: Option<String>,
    #[serde(rename = "record-tree")]
    record_tree: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialLeaderboardConfig {
    #[serde(rename = "trim-width")]
    trim_width: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialConvolutionConfig {
    #[serde(rename = "top-k")]
    top_k: Option<usize>,
    #[serde(rename = "min-mass")]
    min_mass: Option<u32>,
    #[serde(rename = "max-mass")]
    max_mass: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    search: Option<PartialSearchConfig>,
    leaderboard: Option<PartialLeaderboardConfig>,
    convolution: Option<PartialConvolutionConfig>,
}

/// Values given as command-line flags; `None` leaves the file value in place.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub alphabet: Option<String>,
    pub record_tree: Option<bool>,
    pub trim_width: Option<usize>,
    pub top_k: Option<usize>,
    pub min_mass: Option<u32>,
    pub max_mass: Option<u32>,
}

impl CliOverrides {
    fn with_selection(mut self, selection: &SelectionArgs) -> Self {
        self.top_k = selection.top_k;
        self.min_mass = selection.min_mass;
        self.max_mass = selection.max_mass;
        self
    }
}

impl From<&ExhaustiveArgs> for CliOverrides {
    fn from(args: &ExhaustiveArgs) -> Self {
        Self {
            alphabet: args.alphabet.clone(),
            record_tree: args.record_tree.then_some(true),
            ..Self::default()
        }
    }
}

impl From<&LeaderboardArgs> for CliOverrides {
    fn from(args: &LeaderboardArgs) -> Self {
        Self {
            alphabet: args.alphabet.clone(),
            trim_width: args.trim_width,
            ..Self::default()
        }
    }
}

impl From<&ConvolutionArgs> for CliOverrides {
    fn from(args: &ConvolutionArgs) -> Self {
        Self {
            trim_width: args.trim_width,
            ..Self::default()
        }
        .with_selection(&args.selection)
    }
}

impl From<&CompareArgs> for CliOverrides {
    fn from(args: &CompareArgs) -> Self {
        Self {
            alphabet: args.alphabet.clone(),
            trim_width: args.trim_width,
            ..Self::default()
        }
        .with_selection(&args.selection)
    }
}

/// Fully resolved settings: defaults, then the config file, then flags, then `--set`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub alphabet: Alphabet,
    pub record_tree: bool,
    pub trim_width: usize,
    pub top_k: usize,
    pub mass_range: MassRange,
}

impl Settings {
    pub fn exhaustive(&self) -> Result<ExhaustiveConfig> {
        core_config::ExhaustiveConfigBuilder::new()
            .alphabet(self.alphabet.clone())
            .record_tree(self.record_tree)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn leaderboard(&self) -> Result<LeaderboardConfig> {
        core_config::LeaderboardConfigBuilder::new()
            .alphabet(self.alphabet.clone())
            .trim_width(self.trim_width)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn convolution(&self) -> Result<ConvolutionConfig> {
        core_config::ConvolutionConfigBuilder::new()
            .top_k(self.top_k)
            .mass_range(self.mass_range)
            .trim_width(self.trim_width)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn compare(&self) -> Result<CompareConfig> {
        core_config::CompareConfigBuilder::new()
            .alphabet(self.alphabet.clone())
            .trim_width(self.trim_width)
            .top_k(self.top_k)
            .mass_range(self.mass_range)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

impl PartialConfig {
    /// Loads the config file when one is given; otherwise every value falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, overrides: &CliOverrides, set_values: &[String]) -> Result<Settings> {
        self.apply_overrides(overrides);
        self.apply_set_values(set_values)?;

        let defaults = DefaultsConfig::default();
        let search = self.search.unwrap_or_default();
        let leaderboard = self.leaderboard.unwrap_or_default();
        let convolution = self.convolution.unwrap_or_default();

        let symbols = search.alphabet.unwrap_or(defaults.alphabet);
        let alphabet = Alphabet::from_symbols(&symbols).map_err(|e| {
            CliError::Config(format!("Invalid alphabet '{}': {}", symbols, e))
        })?;
        let mass_range = MassRange::new(
            convolution.min_mass.unwrap_or(defaults.min_mass),
            convolution.max_mass.unwrap_or(defaults.max_mass),
        )
        .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(Settings {
            alphabet,
            record_tree: search.record_tree.unwrap_or(defaults.record_tree),
            trim_width: leaderboard.trim_width.unwrap_or(defaults.trim_width),
            top_k: convolution.top_k.unwrap_or(defaults.top_k),
            mass_range,
        })
    }

    fn apply_overrides(&mut self, overrides: &CliOverrides) {
        let search = self.search.get_or_insert_with(Default::default);
        if let Some(alphabet) = &overrides.alphabet {
            search.alphabet = Some(alphabet.clone());
        }
        if overrides.record_tree.is_some() {
            search.record_tree = overrides.record_tree;
        }

        if overrides.trim_width.is_some() {
            self.leaderboard
                .get_or_insert_with(Default::default)
                .trim_width = overrides.trim_width;
        }

        let convolution = self.convolution.get_or_insert_with(Default::default);
        if overrides.top_k.is_some() {
            convolution.top_k = overrides.top_k;
        }
        if overrides.min_mass.is_some() {
            convolution.min_mass = overrides.min_mass;
        }
        if overrides.max_mass.is_some() {
            convolution.max_mass = overrides.max_mass;
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "search.alphabet" => {
                    self.search.get_or_insert_with(Default::default).alphabet =
                        Some(value_str.to_string());
                }
                "search.record-tree" => {
                    self.search.get_or_insert_with(Default::default).record_tree =
                        Some(parse_value(key, value_str, "boolean")?);
                }
                "leaderboard.trim-width" => {
                    self.leaderboard
                        .get_or_insert_with(Default::default)
                        .trim_width = Some(parse_value(key, value_str, "integer")?);
                }
                "convolution.top-k" => {
                    self.convolution.get_or_insert_with(Default::default).top_k =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "convolution.min-mass" => {
                    self.convolution
                        .get_or_insert_with(Default::default)
                        .min_mass = Some(parse_value(key, value_str, "integer")?);
                }
                "convolution.max-mass" => {
                    self.convolution
                        .get_or_insert_with(Default::default)
                        .max_mass = Some(parse_value(key, value_str, "integer")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}
