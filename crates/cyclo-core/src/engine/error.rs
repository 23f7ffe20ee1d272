use super::config::ConfigError;
use crate::core::mass_table::MassError;
use crate::core::models::spectrum::SpectrumError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid target spectrum: {source}")]
    InvalidSpectrum {
        #[from]
        source: SpectrumError,
    },

    #[error("Monomer lookup failed: {source}")]
    MassLookup {
        #[from]
        source: MassError,
    },

    #[error("Invalid search configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
