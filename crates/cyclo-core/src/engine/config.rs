use crate::core::mass_table::Alphabet;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_CONVOLUTION_MIN_MASS: u32 = 57;
pub const DEFAULT_CONVOLUTION_MAX_MASS: u32 = 200;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Inclusive range of mass differences considered plausible monomer masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MassRange {
    pub min: u32,
    pub max: u32,
}

impl MassRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    #[inline]
    pub fn contains(&self, mass: u32) -> bool {
        self.min <= mass && mass <= self.max
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidParameter {
                name: "mass_range",
                reason: format!("minimum {} exceeds maximum {}", self.min, self.max),
            });
        }
        Ok(())
    }
}

impl Default for MassRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_CONVOLUTION_MIN_MASS,
            max: DEFAULT_CONVOLUTION_MAX_MASS,
        }
    }
}

fn require_positive(name: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(value)
}

/// Configuration shared by brute force and branch-and-bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhaustiveConfig {
    pub alphabet: Alphabet,
    pub record_tree: bool,
}

impl ExhaustiveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardConfig {
    pub alphabet: Alphabet,
    /// Number of candidates kept per round, before ties at the cutoff are added back.
    pub trim_width: usize,
}

impl LeaderboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("trim_width", self.trim_width)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionConfig {
    pub top_k: usize,
    pub mass_range: MassRange,
    pub trim_width: usize,
}

impl ConvolutionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("top_k", self.top_k)?;
        require_positive("trim_width", self.trim_width)?;
        self.mass_range.validate()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    pub exhaustive: ExhaustiveConfig,
    pub leaderboard: LeaderboardConfig,
    pub convolution: ConvolutionConfig,
}

impl CompareConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.exhaustive.validate()?;
        self.leaderboard.validate()?;
        self.convolution.validate()
    }
}

#[derive(Default)]
pub struct ExhaustiveConfigBuilder {
    alphabet: Option<Alphabet>,
    record_tree: Option<bool>,
}

impl ExhaustiveConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }
    pub fn record_tree(mut self, record: bool) -> Self {
        self.record_tree = Some(record);
        self
    }

    pub fn build(self) -> Result<ExhaustiveConfig, ConfigError> {
        let config = ExhaustiveConfig {
            alphabet: self
                .alphabet
                .ok_or(ConfigError::MissingParameter("alphabet"))?,
            record_tree: self.record_tree.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct LeaderboardConfigBuilder {
    alphabet: Option<Alphabet>,
    trim_width: Option<usize>,
}

impl LeaderboardConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }
    pub fn trim_width(mut self, n: usize) -> Self {
        self.trim_width = Some(n);
        self
    }

    pub fn build(self) -> Result<LeaderboardConfig, ConfigError> {
        let config = LeaderboardConfig {
            alphabet: self
                .alphabet
                .ok_or(ConfigError::MissingParameter("alphabet"))?,
            trim_width: self
                .trim_width
                .ok_or(ConfigError::MissingParameter("trim_width"))?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct ConvolutionConfigBuilder {
    top_k: Option<usize>,
    mass_range: Option<MassRange>,
    trim_width: Option<usize>,
}

impl ConvolutionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }
    pub fn mass_range(mut self, range: MassRange) -> Self {
        self.mass_range = Some(range);
        self
    }
    pub fn trim_width(mut self, n: usize) -> Self {
        self.trim_width = Some(n);
        self
    }

    pub fn build(self) -> Result<ConvolutionConfig, ConfigError> {
        let config = ConvolutionConfig {
            top_k: self.top_k.ok_or(ConfigError::MissingParameter("top_k"))?,
            mass_range: self.mass_range.unwrap_or_default(),
            trim_width: self
                .trim_width
                .ok_or(ConfigError::MissingParameter("trim_width"))?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct CompareConfigBuilder {
    alphabet: Option<Alphabet>,
    trim_width: Option<usize>,
    top_k: Option<usize>,
    mass_range: Option<MassRange>,
}

impl CompareConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }
    pub fn trim_width(mut self, n: usize) -> Self {
        self.trim_width = Some(n);
        self
    }
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }
    pub fn mass_range(mut self, range: MassRange) -> Self {
        self.mass_range = Some(range);
        self
    }

    pub fn build(self) -> Result<CompareConfig, ConfigError> {
        let alphabet = self
            .alphabet
            .ok_or(ConfigError::MissingParameter("alphabet"))?;
        let trim_width = self
            .trim_width
            .ok_or(ConfigError::MissingParameter("trim_width"))?;

        let exhaustive = ExhaustiveConfigBuilder::new()
            .alphabet(alphabet.clone())
            .record_tree(false)
            .build()?;
        let leaderboard = LeaderboardConfigBuilder::new()
            .alphabet(alphabet)
            .trim_width(trim_width)
            .build()?;
        let mut convolution = ConvolutionConfigBuilder::new()
            .top_k(self.top_k.ok_or(ConfigError::MissingParameter("top_k"))?)
            .trim_width(trim_width);
        if let Some(range) = self.mass_range {
            convolution = convolution.mass_range(range);
        }

        Ok(CompareConfig {
            exhaustive,
            leaderboard,
            convolution: convolution.build()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_builder_requires_alphabet() {
        let result = ExhaustiveConfigBuilder::new().record_tree(true).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("alphabet")));
    }

    #[test]
    fn exhaustive_builder_defaults_to_no_tree() {
        let config = ExhaustiveConfigBuilder::new()
            .alphabet(Alphabet::standard())
            .build()
            .unwrap();
        assert!(!config.record_tree);
    }

    #[test]
    fn leaderboard_builder_rejects_zero_trim_width() {
        let result = LeaderboardConfigBuilder::new()
            .alphabet(Alphabet::standard())
            .trim_width(0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "trim_width",
                ..
            })
        ));
    }

    #[test]
    fn convolution_builder_uses_default_mass_range() {
        let config = ConvolutionConfigBuilder::new()
            .top_k(20)
            .trim_width(10)
            .build()
            .unwrap();
        assert_eq!(config.mass_range, MassRange { min: 57, max: 200 });
    }

    #[test]
    fn convolution_builder_rejects_zero_top_k() {
        let result = ConvolutionConfigBuilder::new()
            .top_k(0)
            .trim_width(10)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "top_k", .. })
        ));
    }

    #[test]
    fn mass_range_rejects_inverted_bounds() {
        assert!(MassRange::new(200, 57).is_err());
        let range = MassRange::new(57, 57).unwrap();
        assert!(range.contains(57));
        assert!(!range.contains(58));
    }

    #[test]
    fn compare_builder_shares_alphabet_and_width() {
        let config = CompareConfigBuilder::new()
            .alphabet(Alphabet::from_symbols("GAW").unwrap())
            .trim_width(5)
            .top_k(3)
            .build()
            .unwrap();
        assert_eq!(config.exhaustive.alphabet.symbols(), "GAW");
        assert_eq!(config.leaderboard.trim_width, 5);
        assert_eq!(config.convolution.trim_width, 5);
        assert_eq!(config.convolution.top_k, 3);
        assert!(!config.exhaustive.record_tree);
    }

    #[test]
    fn compare_builder_reports_missing_top_k() {
        let result = CompareConfigBuilder::new()
            .alphabet(Alphabet::standard())
            .trim_width(5)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("top_k")));
    }
}
