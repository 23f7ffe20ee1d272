use super::write_output;
use crate::cli::SpectrumArgs;
use crate::error::{CliError, Result};
use cyclopep::core::models::peptide::Peptide;
use cyclopep::core::models::spectrum::{Fragment, TargetSpectrum};
use cyclopep::core::scoring;
use cyclopep::core::spectrum::{cyclic_fragments, cyclic_spectrum, linear_fragments, linear_spectrum};
use cyclopep::engine::error::EngineError;
use cyclopep::engine::state::SpectrumKind;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct SpectrumReport {
    peptide: Peptide,
    mass: u32,
    kind: SpectrumKind,
    spectrum: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fragments: Option<Vec<Fragment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<usize>,
}

fn build_report(args: &SpectrumArgs) -> Result<SpectrumReport> {
    let peptide: Peptide = args
        .peptide
        .parse()
        .map_err(|e| CliError::Core(EngineError::from(e)))?;

    let (kind, spectrum) = if args.linear {
        (SpectrumKind::Linear, linear_spectrum(&peptide))
    } else {
        (SpectrumKind::Cyclic, cyclic_spectrum(&peptide))
    };
    let fragments = args.annotate.then(|| match kind {
        SpectrumKind::Linear => linear_fragments(&peptide),
        SpectrumKind::Cyclic => cyclic_fragments(&peptide),
    });
    let score = args
        .target
        .as_deref()
        .map(|masses| masses.parse::<TargetSpectrum>().map(|target| scoring::score(&spectrum, &target)))
        .transpose()
        .map_err(|e| CliError::Core(EngineError::from(e)))?;

    Ok(SpectrumReport {
        mass: peptide.mass(),
        peptide,
        kind,
        spectrum: spectrum.into_inner(),
        fragments,
        score,
    })
}

pub fn run(args: SpectrumArgs) -> Result<()> {
    let report = build_report(&args)?;
    info!(
        "{} spectrum of {} has {} masses.",
        if args.linear { "Linear" } else { "Cyclic" },
        report.peptide,
        report.spectrum.len()
    );
    write_output(&args.output, &report)
}
