//! Headless scene runner.
//!
//! Loads a JSON scene description, preloads its assets against the retained
//! backend, drives a fixed number of frames with scripted input and logs what
//! the backend ends up displaying.

mod demo;
mod script;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use arcade_engine::backend::RetainedBackend;
use arcade_engine::description::SceneDescription;
use arcade_engine::logging::{init_logging, LoggingConfig};
use arcade_engine::preload::preload_assets;
use arcade_engine::time::FrameClock;
use arcade_engine::{FrameStatus, Scene};
use clap::Parser;

use demo::Demo;
use script::{HostEvent, Script, Step};

const DEMO_SCENE: &str = include_str!("../scenes/demo.json");

#[derive(Parser, Debug)]
#[command(name = "arcade-studio")]
#[command(about = "Run an arcade scene headlessly", long_about = None)]
struct Cli {
    /// Scene description (JSON). Runs the bundled demo scene when omitted.
    scene: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Pace frames against the wall clock instead of stepping them
    #[arg(long)]
    realtime: bool,

    /// Force the debug overlay on
    #[arg(long)]
    debug: bool,

    /// Make the update callback fail on this frame
    #[arg(long)]
    fail_at: Option<u64>,

    /// Scripted input, e.g. `key:ArrowRight@1..30`, `move:300,300@40`, `click@41`
    #[arg(long = "input", value_name = "STEP")]
    inputs: Vec<Step>,

    /// Log filter in env_logger syntax (falls back to RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Print the final draw list as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let text = match &cli.scene {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?,
        None => DEMO_SCENE.to_owned(),
    };
    let description = SceneDescription::from_json(&text).context("parsing scene description")?;
    let (mut config, model) = description.into_parts();
    config.debug |= cli.debug;

    let mut backend = RetainedBackend::new();
    let summary = preload_assets(&model, &config, &mut backend);
    log::info!(
        "scene {}x{} @ {} fps: {} object(s), {} clip(s), {} image(s) preloaded",
        config.width,
        config.height,
        config.fps,
        model.objects().len(),
        model.clips().len(),
        summary.images,
    );

    let demo = Demo::for_model(&model, cli.fail_at);
    let mut scene = Scene::build(config, model, backend, demo, demo::update);
    let script = Script::new(cli.inputs);

    let interval = Duration::from_secs_f64(scene.config().frame_interval_ms() / 1000.0);
    let mut clock = FrameClock::new();
    let mut ran = 0;
    // Building may take a while; the first realtime delta starts here.
    clock.reset();

    for frame in 1..=cli.frames {
        for ev in script.before(frame) {
            match ev {
                HostEvent::Input(ev) => scene.handle_input(&ev),
                HostEvent::Pointer(pos) => {
                    let events = scene.backend_mut().pointer_moved(pos);
                    for ev in &events {
                        scene.handle_input(ev);
                    }
                }
            }
        }

        let t = if cli.realtime {
            std::thread::sleep(interval);
            clock.tick()
        } else {
            clock.advance(interval)
        };

        ran = frame;
        if scene.frame(t.elapsed_ms, t.delta_ms) == FrameStatus::Frozen {
            log::warn!("scene frozen at frame {frame}; stopping");
            break;
        }
    }

    log::info!("ran {ran} frame(s), score {}", scene.state().score);
    if let Some(overlay) = scene.backend().overlay().and_then(|n| n.text()) {
        if !overlay.is_empty() {
            log::info!("overlay:\n{overlay}");
        }
    }

    let mut list = scene.backend().snapshot();
    let mut dump = Vec::with_capacity(list.len());
    for item in list.iter_in_paint_order() {
        log::debug!("{:?}", item.cmd);
        dump.push(serde_json::json!({
            "handle": item.cmd.handle.0,
            "shape": format!("{:?}", item.cmd.shape),
            "position": [item.cmd.position.x, item.cmd.position.y],
            "rotation": item.cmd.rotation,
            "color": format!("#{:08x}", item.cmd.color),
            "alpha": item.cmd.alpha,
        }));
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    let backend = scene.teardown();
    log::debug!("{} node(s) left after teardown", backend.live_nodes());
    Ok(())
}
