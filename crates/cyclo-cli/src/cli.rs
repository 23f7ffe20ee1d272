use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "cyclopep - Reconstruct cyclic peptide sequences from their mass spectra.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to score candidates.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate every sequence whose cyclic spectrum equals the target exactly.
    BruteForce(ExhaustiveArgs),
    /// Like brute-force, but prune candidates inconsistent with the target.
    BranchAndBound(ExhaustiveArgs),
    /// Beam search for the best-scoring sequences of a noisy spectrum.
    Leaderboard(LeaderboardArgs),
    /// Leaderboard search over the alphabet implied by the spectral convolution.
    Convolution(ConvolutionArgs),
    /// Run every strategy on one spectrum and report their execution times.
    Compare(CompareArgs),
    /// Print the theoretical spectrum of a peptide, optionally scored against a target.
    Spectrum(SpectrumArgs),
}

/// Where the target spectrum comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Target masses separated by commas or whitespace (e.g. "0,113,128,241").
    #[arg(short, long, value_name = "MASSES", allow_hyphen_values = true)]
    pub spectrum: Option<String>,

    /// Path to a text file holding the target masses.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write the JSON result to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file and flags.
    /// Can be used multiple times. Example: -S leaderboard.trim-width=25
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `brute-force` and `branch-and-bound` subcommands.
#[derive(Args, Debug)]
pub struct ExhaustiveArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Override the extension alphabet (one-letter monomer symbols, e.g. "GASP").
    #[arg(short, long, value_name = "SYMBOLS")]
    pub alphabet: Option<String>,

    /// Record the search tree and the annotated spectra of full-mass candidates.
    #[arg(long)]
    pub record_tree: bool,
}

/// Arguments for the `leaderboard` subcommand.
#[derive(Args, Debug)]
pub struct LeaderboardArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Override the extension alphabet (one-letter monomer symbols, e.g. "GASP").
    #[arg(short, long, value_name = "SYMBOLS")]
    pub alphabet: Option<String>,

    /// Override the number of candidates kept per round (ties at the cutoff are kept too).
    #[arg(short = 'n', long, value_name = "INT")]
    pub trim_width: Option<usize>,
}

/// Arguments for the `convolution` subcommand.
#[derive(Args, Debug)]
pub struct ConvolutionArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Override the number of candidates kept per round (ties at the cutoff are kept too).
    #[arg(short = 'n', long, value_name = "INT")]
    pub trim_width: Option<usize>,
}

/// Overrides for the spectral convolution alphabet selection.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Override how many of the most frequent mass differences are selected.
    #[arg(short = 'k', long, value_name = "INT")]
    pub top_k: Option<usize>,

    /// Override the smallest mass difference considered.
    #[arg(long, value_name = "MASS")]
    pub min_mass: Option<u32>,

    /// Override the largest mass difference considered.
    #[arg(long, value_name = "MASS")]
    pub max_mass: Option<u32>,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Override the extension alphabet (one-letter monomer symbols, e.g. "GASP").
    #[arg(short, long, value_name = "SYMBOLS")]
    pub alphabet: Option<String>,

    /// Override the number of candidates kept per round (ties at the cutoff are kept too).
    #[arg(short = 'n', long, value_name = "INT")]
    pub trim_width: Option<usize>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the `spectrum` subcommand.
#[derive(Args, Debug)]
pub struct SpectrumArgs {
    /// The peptide as one-letter monomer symbols (e.g. "NQEL").
    #[arg(required = true)]
    pub peptide: String,

    /// Generate the linear spectrum instead of the cyclic one.
    #[arg(long)]
    pub linear: bool,

    /// Include the sub-peptide behind every mass.
    #[arg(long)]
    pub annotate: bool,

    /// Score the spectrum against these target masses.
    #[arg(short = 't', long, value_name = "MASSES")]
    pub target: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["cyclopep", "brute-force"]).is_err());
        assert!(
            Cli::try_parse_from([
                "cyclopep",
                "brute-force",
                "--spectrum",
                "0,57",
                "--input",
                "masses.txt"
            ])
            .is_err()
        );
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "cyclopep",
            "leaderboard",
            "-s",
            "0,57,114",
            "-n",
            "5",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Leaderboard(args) = cli.command else {
            panic!("Expected 'leaderboard' subcommand");
        };
        assert_eq!(args.trim_width, Some(5));
        assert_eq!(args.target.spectrum.as_deref(), Some("0,57,114"));
    }

    #[test]
    fn set_values_can_be_repeated() {
        let cli = Cli::try_parse_from([
            "cyclopep",
            "convolution",
            "-i",
            "masses.txt",
            "-S",
            "convolution.top-k=5",
            "-S",
            "leaderboard.trim-width=3",
        ])
        .unwrap();
        let Commands::Convolution(args) = cli.command else {
            panic!("Expected 'convolution' subcommand");
        };
        assert_eq!(args.config.set_values.len(), 2);
        assert_eq!(args.target.input, Some(PathBuf::from("masses.txt")));
    }
}
