mod arena_app;

use arena_app::ArenaApp;
use ballpit_core::{SimConfig, Simulation};
use clap::{Args, Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg64;

#[derive(Parser)]
#[command(name = "ballpit")]
#[command(about = "Ballpit - balls bouncing around a walled arena", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the arena window; click to drop a ball
    Run {
        #[command(flatten)]
        physics: PhysicsArgs,
        /// Seed for impulses and colours (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run without a window and print final body states
    Simulate {
        #[command(flatten)]
        physics: PhysicsArgs,
        /// Spawn point as `x,y`; repeat for more balls
        #[arg(long = "spawn", value_parser = parse_point, required = true)]
        spawns: Vec<(f64, f64)>,
        /// Number of steps to run
        #[arg(long, default_value_t = 200)]
        steps: u64,
        /// Wall-clock milliseconds fed to each step
        #[arg(long, default_value_t = 5.0)]
        elapsed_ms: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Args, Debug, Clone)]
struct PhysicsArgs {
    /// Arena width
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Arena height
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    #[arg(long, default_value_t = 0.8)]
    bounce_factor: f64,
    #[arg(long, default_value_t = 10.0)]
    mass: f64,
    #[arg(long, default_value_t = 10.0)]
    gravity: f64,
    #[arg(long, default_value_t = 15.0)]
    radius: f64,
    /// Smallest dt in seconds; also the tick interval
    #[arg(long, default_value_t = 0.005)]
    min_timestep: f64,
    #[arg(long, default_value_t = -1000.0, allow_negative_numbers = true)]
    impulse_min: f64,
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    impulse_max: f64,
    /// Seconds a spawn impulse keeps pushing
    #[arg(long, default_value_t = 0.10)]
    impulse_ttl: f64,
}

impl PhysicsArgs {
    fn config(&self) -> SimConfig {
        SimConfig {
            bounce_factor: self.bounce_factor,
            mass: self.mass,
            gravity: self.gravity,
            radius: self.radius,
            min_timestep: self.min_timestep,
            impulse_range: (self.impulse_min, self.impulse_max),
            impulse_ttl: self.impulse_ttl,
        }
    }

    fn build(&self) -> Result<Simulation, Box<dyn std::error::Error>> {
        Ok(Simulation::new(self.config(), self.width, self.height)?)
    }
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok((x, y))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { physics, seed } => run_window(&physics, seed),
        Commands::Simulate {
            physics,
            spawns,
            steps,
            elapsed_ms,
            seed,
        } => run_headless(&physics, &spawns, steps, elapsed_ms, seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_window(physics: &PhysicsArgs, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let sim = physics.build()?;
    let rng = match seed {
        Some(s) => Pcg64::seed_from_u64(s),
        None => Pcg64::from_entropy(),
    };
    info!("opening {}x{} arena", physics.width, physics.height);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([physics.width as f32 + 16.0, physics.height as f32 + 48.0])
            .with_title("ballpit"),
        ..Default::default()
    };
    eframe::run_native(
        "ballpit",
        options,
        Box::new(move |_cc| Ok(Box::new(ArenaApp::new(sim, rng)))),
    )?;
    Ok(())
}

fn run_headless(
    physics: &PhysicsArgs,
    spawns: &[(f64, f64)],
    steps: u64,
    elapsed_ms: f64,
    seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = physics.build()?;
    let mut rng = Pcg64::seed_from_u64(seed);
    for &(x, y) in spawns {
        sim.spawn_random(x, y, &mut rng);
    }
    info!("simulating {} bodies for {} steps", sim.body_count(), steps);

    for _ in 0..steps {
        sim.step(elapsed_ms);
    }

    println!("t = {:.6}s after {} steps", sim.elapsed_sim_time(), sim.steps());
    for (i, body) in sim.bodies().iter().enumerate() {
        println!("ball {} at ({:.4}, {:.4}) color {}", i, body.pos.x, body.pos.y, body.color);
    }

    Ok(())
}
