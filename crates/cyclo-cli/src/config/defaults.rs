use cyclopep::core::mass_table::STANDARD_SYMBOLS;
use cyclopep::engine::config::{DEFAULT_CONVOLUTION_MAX_MASS, DEFAULT_CONVOLUTION_MIN_MASS};

pub struct DefaultsConfig {
    pub alphabet: String,
    pub record_tree: bool,
    pub trim_width: usize,
    pub top_k: usize,
    pub min_mass: u32,
    pub max_mass: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            alphabet: STANDARD_SYMBOLS.iter().collect(),
            record_tree: false,
            trim_width: 10,
            top_k: 20,
            min_mass: DEFAULT_CONVOLUTION_MIN_MASS,
            max_mass: DEFAULT_CONVOLUTION_MAX_MASS,
        }
    }
}
