//! Plan-and-execute demo over stub collaborators.
//!
//! `arm-demo run` spawns the worker that seeds the planning scene and runs
//! the IK probe, signals readiness, then services scripted frame/pose events
//! through the motion driver, printing what it would publish.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use arm_core::SplitMix64;
use arm_demo::{load_events, DemoConfig, LoggingScene, StubKinematics, StubPipeline};
use arm_motion::{readiness, ChannelPublisher, MotionDriver, SystemClock};

#[derive(Parser)]
#[command(name = "arm-demo")]
#[command(about = "Plan-and-execute demo driver", version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = "arm-demo.yaml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo driver
    Run {
        /// Scripted events file (YAML); without it the demo plans to `pose1`
        #[arg(long)]
        events: Option<PathBuf>,

        /// Seed for the IK probe
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt().with_env_filter(filter).init();

    let config = DemoConfig::load(&cli.config)?;

    match cli.command {
        Commands::Run { events, seed } => run(config, events, seed),
        Commands::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
    }
}

fn run(config: DemoConfig, events_path: Option<PathBuf>, seed: u64) -> Result<()> {
    info!(group = %config.group_name, tip = %config.tip_link, "initializing demo driver");

    let (display_pub, display_rx) = ChannelPublisher::new();
    let (trajectory_pub, trajectory_rx) = ChannelPublisher::new();

    let driver = MotionDriver::new(
        Box::new(StubPipeline::new()),
        Box::new(StubKinematics::new()),
        Box::new(SystemClock::new()),
        Box::new(display_pub),
        Box::new(trajectory_pub),
        config.tip_link.clone(),
    )
    .with_parameters(config.planning.to_parameters());

    let events = match events_path {
        Some(path) => load_events(&path, &config.base_frame)?,
        None => vec![arm_motion::Event::Frame("pose1".to_string())],
    };

    // Consumers standing in for the display and controller subscribers.
    let display = thread::spawn(move || {
        for state in display_rx {
            debug!(positions = ?state.positions, "display waypoint");
        }
    });
    let controller = thread::spawn(move || {
        for trajectory in trajectory_rx {
            info!(
                joints = trajectory.joint_names.len(),
                waypoints = trajectory.len(),
                duration_secs = trajectory.duration().as_secs_f64(),
                "trajectory handed to controller"
            );
        }
    });

    // Worker owns the driver: scene setup and IK probe first, then readiness,
    // then event dispatch on the same thread.
    let (signal, gate) = readiness();
    let dispatch_gate = gate.clone();
    let (tx, rx) = mpsc::channel();
    let collision_objects = config.collision_objects.clone();
    let worker = thread::spawn(move || {
        let mut driver = driver;
        let mut scene = LoggingScene;
        driver.setup_scene(&mut scene, collision_objects);
        let mut rng = SplitMix64::new(seed);
        driver.probe_ik(&mut rng);
        signal.ready();
        driver.dispatch(&dispatch_gate, rx);
    });

    gate.wait();
    info!(events = events.len(), "driver ready, feeding events");
    for event in events {
        tx.send(event)
            .map_err(|_| anyhow!("driver stopped before all events were sent"))?;
    }
    drop(tx);

    worker
        .join()
        .map_err(|_| anyhow!("driver worker panicked"))?;
    display.join().map_err(|_| anyhow!("display consumer panicked"))?;
    controller
        .join()
        .map_err(|_| anyhow!("controller consumer panicked"))?;

    info!("demo finished");
    Ok(())
}
