use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{ArgAction, Parser};

use paintpad::input::{PointerButton, PointerEvent};
use paintpad::io::export;
use paintpad::{Config, PaintWidget};

#[derive(Parser, Debug)]
#[command(name = "paintpad")]
#[command(version, about = "Headless driver for the paintpad widget")]
struct Cli {
    /// Path to a config file (defaults to ~/.config/paintpad/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Image to load into the canvas before drawing
    #[arg(long, short = 'o', value_name = "FILE")]
    open: Option<PathBuf>,

    /// Replay a small scripted drawing session on the canvas
    #[arg(long, short = 's', action = ArgAction::SetTrue)]
    scribble: bool,

    /// Write the PNG snapshot to this exact path instead of the
    /// configured save directory
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Override the configured surface width
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Override the configured surface height
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.open.is_none() && !cli.scribble && cli.output.is_none() {
        // No work requested: show usage.
        println!("paintpad: headless driver for the paintpad widget");
        println!();
        println!("Usage:");
        println!("  paintpad --scribble --output out.png     Draw a demo session and save it");
        println!("  paintpad --open in.png --output out.png  Round-trip an image through the canvas");
        println!("  paintpad --help                          Show all options");
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.surface.width = width;
    }
    if let Some(height) = cli.height {
        config.surface.height = height;
    }

    let mut widget = PaintWidget::new(&config);
    log::info!(
        "Surface ready: {}x{} pixels",
        widget.canvas().width(),
        widget.canvas().height()
    );

    if let Some(path) = &cli.open {
        widget.open_file(path);
        log::info!(
            "Canvas after open: {}x{} pixels",
            widget.canvas().width(),
            widget.canvas().height()
        );
    }

    if cli.scribble {
        scribble(&mut widget);
    }

    let path = match &cli.output {
        Some(path) => {
            export::save_png(widget.canvas(), path)?;
            path.clone()
        }
        None => export::save_snapshot(
            widget.canvas(),
            &config.export.save_directory,
            &config.export.filename_template,
        )?,
    };
    println!("{}", path.display());

    Ok(())
}

/// Replays a short drawing session through the widget's event API:
/// a freehand stroke, a spray burst, an erase pass, and a stamp.
fn scribble(widget: &mut PaintWidget) {
    let width = widget.canvas().width() as f64;
    let height = widget.canvas().height() as f64;
    let tick = Duration::from_millis(25);

    widget.set_brush_size(3.0);
    widget.set_color("#225588");
    drag(
        widget,
        &[
            (width * 0.1, height * 0.8),
            (width * 0.3, height * 0.2),
            (width * 0.5, height * 0.7),
            (width * 0.7, height * 0.3),
            (width * 0.9, height * 0.6),
        ],
    );

    widget.select_tool("Spray");
    widget.set_brush_size(35.0);
    widget.set_color("#cc4422");
    let start = Instant::now();
    widget.pointer_pressed(
        &PointerEvent::press(width * 0.25, height * 0.35, PointerButton::Primary),
        start,
    );
    for step in 1..=8 {
        widget.pump(start + tick * step);
    }
    widget.pointer_released(&PointerEvent::release(
        width * 0.25,
        height * 0.35,
        PointerButton::Primary,
    ));

    widget.select_tool("Erase");
    widget.set_brush_size(12.0);
    drag(
        widget,
        &[(width * 0.3, height * 0.5), (width * 0.7, height * 0.5)],
    );

    widget.select_tool("Stamp");
    widget.set_brush_size(25.0);
    widget.set_color("#228833");
    widget.pointer_pressed(
        &PointerEvent::press(width * 0.8, height * 0.8, PointerButton::Primary),
        Instant::now(),
    );

    log::info!("Scribble session replayed");
}

fn drag(widget: &mut PaintWidget, path: &[(f64, f64)]) {
    let Some(&(x, y)) = path.first() else {
        return;
    };
    widget.pointer_pressed(&PointerEvent::press(x, y, PointerButton::Primary), Instant::now());
    for &(x, y) in &path[1..] {
        widget.pointer_moved(&PointerEvent::motion(x, y));
    }
    if let Some(&(x, y)) = path.last() {
        widget.pointer_released(&PointerEvent::release(x, y, PointerButton::Primary));
    }
}
