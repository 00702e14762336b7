use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use glam::{Vec2, Vec3};
use tracing_subscriber::EnvFilter;
use thirdperson_controller::{
    CharacterMotor, ControllerConfig, FlatGround, FrameContext, HeadlessCursor,
    ThirdPersonController,
};
use thirdperson_input::{InputScript, ScriptStep};
use thirdperson_tools::ControllerInspector;

#[derive(Parser)]
#[command(name = "thirdperson-cli", about = "Headless driver for the third-person controller")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the default tuning
    Info,
    /// Print the default configuration
    Config {
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: Format,
    },
    /// Run scripted input against a flat floor and print frame summaries
    Simulate {
        /// Controller config (.yaml, .yml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Input script (.yaml); a built-in demo runs when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Stop after this many frames
        #[arg(short, long)]
        frames: Option<u64>,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Print a summary every N frames
        #[arg(short, long, default_value = "15")]
        every: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let config = ControllerConfig::default();
            println!("thirdperson-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("controller: {}", thirdperson_controller::crate_info());
            println!("input: {}", thirdperson_input::crate_info());
            println!("tools: {}", thirdperson_tools::crate_info());
            println!(
                "speeds: walk={} sprint={} crouch={}",
                config.walk_speed, config.sprint_speed, config.crouch_speed
            );
            println!(
                "jump: height={} gravity={} launch={:.3}",
                config.jump_height,
                config.gravity,
                config.jump_velocity()
            );
        }
        Commands::Config { format } => {
            let config = ControllerConfig::default();
            let out = match format {
                Format::Yaml => config.to_yaml_string()?,
                Format::Json => config.to_json_string()?,
            };
            println!("{out}");
        }
        Commands::Simulate {
            config,
            script,
            frames,
            dt,
            every,
        } => {
            if !(dt.is_finite() && dt > 0.0) {
                anyhow::bail!("dt must be a positive number of seconds, got {dt}");
            }
            let config = match config {
                Some(path) => ControllerConfig::load(path)?,
                None => ControllerConfig::default(),
            };
            let script = match script {
                Some(path) => InputScript::load(path)?,
                None => demo_script(),
            };
            simulate(config, &script, frames, dt, every.max(1));
        }
    }

    Ok(())
}

fn simulate(config: ControllerConfig, script: &InputScript, limit: Option<u64>, dt: f32, every: u64) {
    let total = limit.map_or(script.total_frames(), |n| n.min(script.total_frames()));
    tracing::info!(frames = total, dt, "simulation starting");

    let mut controller = ThirdPersonController::new(config);
    let mut motor = FlatGround::new(Vec3::ZERO, 0.0);
    let mut cursor = HeadlessCursor::default();
    controller.activate(&mut cursor);

    let ctx = FrameContext::new(dt);
    for input in script.frames().take(total as usize) {
        controller.step(&input, ctx, &mut motor);
        for event in controller.drain_events() {
            println!("  {}", ControllerInspector::describe_event(&event));
        }
        if controller.tick() % every == 0 {
            println!("{}", ControllerInspector::summary(&controller, &motor));
        }
    }

    controller.deactivate(&mut cursor);
    let end = motor.position();
    println!(
        "done: {} frames, {:.2}s simulated, horizontal distance {:.2}",
        controller.tick(),
        controller.tick() as f32 * dt,
        Vec2::new(end.x, end.z).length()
    );
}

fn demo_script() -> InputScript {
    let forward = Vec2::new(0.0, 1.0);
    InputScript::new(vec![
        ScriptStep {
            frames: 60,
            move_axis: forward,
            ..ScriptStep::default()
        },
        ScriptStep {
            frames: 90,
            move_axis: forward,
            sprint: true,
            jump: true,
            ..ScriptStep::default()
        },
        ScriptStep {
            frames: 45,
            move_axis: forward,
            look: Vec2::new(20.0, 4.0),
            ..ScriptStep::default()
        },
        ScriptStep {
            frames: 60,
            move_axis: Vec2::new(-0.5, 0.5),
            crouch: true,
            sprint: true,
            ..ScriptStep::default()
        },
        ScriptStep {
            frames: 30,
            ..ScriptStep::default()
        },
    ])
}
