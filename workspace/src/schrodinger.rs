use std::{ fs, io::Write, path::PathBuf };
use anyhow::Context;
use clap::Parser;
use ndarray as nd;
use tracing::info;
use tracing_subscriber::EnvFilter;
use fspace::{
    config::{ BasisConfig, Domain },
    potential::SampledPotential,
    solve::{ ground_state, Selection },
    units::Units,
};

/// Solve for the ground state of a particle in a sampled one-dimensional
/// potential.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Whitespace-delimited table of `x V` samples
    file: PathBuf,

    /// Number of Fourier basis functions
    #[arg(short = 'n', long, default_value_t = 5)]
    basis_size: usize,

    /// Kinetic energy scale constant (ħ²/2m in reduced units)
    #[arg(short = 'c', long, default_value_t = fspace::config::DEF_KINETIC_SCALE)]
    scale: f64,

    /// Derive the kinetic scale from a particle mass (electron masses) and a
    /// length unit (Bohr radii) for coordinates, with energies in Hartrees
    #[arg(long, num_args = 2, value_names = ["MASS", "LENGTH"], conflicts_with = "scale")]
    atomic: Option<Vec<f64>>,

    /// Kinetic energy integration domain [default: the sampled range]
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    domain: Option<Vec<f64>>,

    /// Select the ground state by scanning eigenvalues in solver order instead
    /// of sorting them first
    #[arg(long)]
    native_scan: bool,

    /// Write the normalized ground-state wavefunction to this file
    #[arg(long, value_name = "FILE")]
    wf_out: Option<PathBuf>,

    /// Number of points at which to sample the wavefunction
    #[arg(long, default_value_t = 1000)]
    wf_points: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let pot = SampledPotential::load(&args.file)
        .with_context(|| format!("loading potential from {:?}", args.file))?;
    let domain: Option<Domain>
        = args.domain.as_deref()
        .map(|d| Domain::new(d[0], d[1]))
        .transpose()
        .context("invalid --domain")?;
    let scale
        = args.atomic.as_deref()
        .map(|u| Units::from_au(u[0], u[1]).kinetic_scale(1.0))
        .unwrap_or(args.scale);
    let config
        = BasisConfig::for_potential(&pot, args.basis_size, Some(scale), domain)
        .context("invalid basis configuration")?;
    let selection
        = if args.native_scan {
            Selection::NativeScan
        } else {
            Selection::SmallestPositive
        };
    info!(
        samples = pot.len(),
        basis_size = config.basis_size(),
        kinetic_scale = config.kinetic_scale(),
        min = config.domain().min(),
        max = config.domain().max(),
        "solving"
    );

    let sol = ground_state(&pot, &config, selection)
        .context("failed to compute the ground state")?;
    println!("energy: {}", sol.e);
    println!("index: {}", sol.index);
    println!("coefficients:");
    for (i, c) in sol.coeffs.iter().enumerate() {
        println!("  {i:>3} {c:+.10e}");
    }

    if let Some(outfile) = args.wf_out.as_ref() {
        anyhow::ensure!(args.wf_points >= 2, "--wf-points must be at least 2");
        let x: nd::Array1<f64>
            = nd::Array1::linspace(
                config.domain().min(), config.domain().max(), args.wf_points);
        let psi = sol.wavefunction_normalized(&x);
        let mut out = fs::File::create(outfile)
            .with_context(|| format!("creating {outfile:?}"))?;
        writeln!(out, "# x psi")?;
        for (xk, pk) in x.iter().zip(&psi) {
            writeln!(out, "{xk:.10e} {pk:+.10e}")?;
        }
        info!(path = %outfile.display(), points = args.wf_points, "wrote wavefunction");
    }
    Ok(())
}
