use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fractal_ramp::{CliRenderController, CliRenderPlan, ExplorerConfig, PpmFilePresenter, Resolution};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fractal-ramp", about = "Render a progressively refined Mandelbrot frame to a PPM file")]
struct Cli {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, default_value_t = 100)]
    max_iterations: u32,

    /// Animation duration in seconds; 0 renders full detail immediately.
    #[arg(long, default_value_t = 3.0)]
    duration: f64,

    /// Simulated time between ticks.
    #[arg(long, default_value_t = 16)]
    frame_interval_ms: u64,

    /// Number of zoom-in steps applied before rendering.
    #[arg(long, default_value_t = 0)]
    zoom_in: u32,

    /// Horizontal drag in canvas pixels.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pan_x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pan_y: f64,

    #[arg(long, short, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ExplorerConfig {
        resolution: Resolution::new(cli.width, cli.height)?,
        max_iterations: cli.max_iterations,
        ..ExplorerConfig::default()
    };
    let plan = CliRenderPlan::new(
        cli.zoom_in,
        (cli.pan_x, cli.pan_y),
        cli.duration,
        Duration::from_millis(cli.frame_interval_ms),
    );

    let mut controller = CliRenderController::new(PpmFilePresenter::new(), config);
    controller.generate(&plan)?;

    if let Some(parent) = cli.output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    controller.write(&cli.output)?;
    info!(path = %cli.output.display(), "saved");

    Ok(())
}
