use clap::{Parser, Subcommand};
use springsim_core::{SceneConfig, Simulation};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "springsim")]
#[command(about = "springsim - A mass-spring particle simulator", long_about = None)]
struct Cli {
    /// Log every step at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene and print the final particle states
    Run {
        /// Path to the scene file (TOML)
        file: PathBuf,
        /// Override the number of steps from the scene
        #[arg(long)]
        steps: Option<usize>,
        /// Override the time step from the scene
        #[arg(long)]
        dt: Option<f32>,
    },
    /// Load and validate a scene without running it
    Check {
        /// Path to the scene file (TOML)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run { file, steps, dt } => run_file(&file, steps, dt),
        Commands::Check { file } => check_file(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_file(
    file: &PathBuf,
    steps: Option<usize>,
    dt: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let scene = SceneConfig::load(file)?;
    let mut sim = Simulation::from_scene(&scene)?;
    let steps = steps.unwrap_or(scene.steps);
    let dt = dt.unwrap_or(scene.dt);

    tracing::info!(
        particles = sim.particle_count(),
        springs = sim.springs().len(),
        steps,
        dt,
        "running scene"
    );
    sim.run(dt, steps)?;

    for state in sim.particle_states() {
        println!(
            "{}: pos=({:.6}, {:.6}, {:.6}) vel=({:.6}, {:.6}, {:.6})",
            state.index,
            state.pos.x,
            state.pos.y,
            state.pos.z,
            state.vel.x,
            state.vel.y,
            state.vel.z
        );
    }
    println!("kinetic energy = {}", sim.kinetic_energy());

    Ok(())
}

fn check_file(file: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let scene = SceneConfig::load(file)?;
    scene.validate()?;
    let sim = Simulation::from_scene(&scene)?;

    println!("particles = {}", sim.particle_count());
    println!("springs = {}", sim.springs().len());
    println!("dt = {}, steps = {}", scene.dt, scene.steps);

    Ok(())
}
