pub mod search;
pub mod spectrum;

use crate::cli::{OutputArgs, TargetArgs};
use crate::error::{CliError, Result};
use cyclopep::core::models::spectrum::parse_masses;
use cyclopep::engine::error::EngineError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{debug, info};

/// Reads the raw target masses from `--spectrum` or `--input`; ordering is checked later
/// by the core.
pub fn read_masses(target: &TargetArgs) -> Result<Vec<u32>> {
    if let Some(path) = &target.input {
        debug!("Reading target spectrum from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        return parse_masses(&content).map_err(|e| CliError::FileParsing {
            path: path.clone(),
            source: e.into(),
        });
    }
    let text = target.spectrum.as_deref().unwrap_or_default();
    parse_masses(text).map_err(|e| CliError::Core(EngineError::from(e)))
}

pub fn write_output<T: Serialize>(output: &OutputArgs, value: &T) -> Result<()> {
    match &output.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_json(&mut writer, output.compact, value)?;
            writer.flush()?;
            info!("Results written to {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_json(&mut writer, output.compact, value)?;
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, compact: bool, value: &T) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
