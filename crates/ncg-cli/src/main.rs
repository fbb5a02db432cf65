mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ncg_core::{
    CliffordAlgebra, GaussianInt, ModelParameters, VERIFIED_MAX_DIMENSION,
    euclidean_gamma5_prefactor, is_verified_dimension,
};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "ncg", about = "Clifford algebra gamma matrices for signature (p,q)")]
struct Cli {
    /// TOML config file with a [model] table (default: $NCG_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the gamma matrices of signature (p,q)
    Gammas(SignatureArgs),

    /// Check the Clifford relations of signature (p,q)
    Check(SignatureArgs),

    /// Print the Euclidean gamma matrices of signature (d,0)
    Euclidean {
        /// Number of generators
        d: usize,

        /// Phase of the odd-dimensional gamma5, e.g. "i", "-1", "(1,1)"
        #[arg(long, allow_hyphen_values = true)]
        prefactor: Option<GaussianInt>,
    },
}

#[derive(Args)]
struct SignatureArgs {
    /// Generators squaring to +1
    #[arg(short, long)]
    p: Option<usize>,

    /// Generators squaring to -1
    #[arg(short, long)]
    q: Option<usize>,

    /// Phase of the odd-dimensional gamma5, e.g. "i", "-1", "(1,1)"
    #[arg(long, allow_hyphen_values = true)]
    prefactor: Option<GaussianInt>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Gammas(args) => cmd_gammas(&cli, args),
        Commands::Check(args) => cmd_check(&cli, args),
        Commands::Euclidean { d, prefactor } => cmd_euclidean(*d, *prefactor),
    }
}

fn load_params(cli: &Cli, args: &SignatureArgs) -> Result<ModelParameters> {
    let config = Config::load(cli.config.as_deref())?;
    Ok(config.resolve(args.p, args.q, args.prefactor))
}

fn build_algebra(params: ModelParameters) -> Result<CliffordAlgebra> {
    let (p, q) = params.signature();
    let d = params.d();
    if d > 0 && !is_verified_dimension(d) {
        tracing::warn!(
            "d = {d} exceeds {VERIFIED_MAX_DIMENSION}: construction is unverified in this range"
        );
    }
    tracing::debug!(
        "generating signature ({p},{q}) with gamma5 prefactor {}",
        params.gamma5_prefactor
    );

    let algebra = CliffordAlgebra::new(params)
        .with_context(|| format!("failed to generate gamma matrices for ({p},{q})"))?;
    tracing::debug!(
        "generated {} matrices of dimension {}",
        algebra.len(),
        algebra.matrix_dimension()
    );
    Ok(algebra)
}

fn cmd_gammas(cli: &Cli, args: &SignatureArgs) -> Result<()> {
    let algebra = build_algebra(load_params(cli, args)?)?;
    print!("{algebra}");
    Ok(())
}

fn cmd_check(cli: &Cli, args: &SignatureArgs) -> Result<()> {
    let algebra = build_algebra(load_params(cli, args)?)?;
    let report = algebra.verify();
    print!("{report}");
    if !report.is_valid() {
        anyhow::bail!("Clifford relations violated");
    }
    Ok(())
}

fn cmd_euclidean(d: usize, prefactor: Option<GaussianInt>) -> Result<()> {
    let params = ModelParameters::new(d, 0)
        .with_gamma5_prefactor(prefactor.unwrap_or_else(|| euclidean_gamma5_prefactor(d)));
    let algebra = build_algebra(params)?;
    print!("{algebra}");
    Ok(())
}
