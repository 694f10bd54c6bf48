mod cli;
mod scene;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use mosaic_common::types::Size;
use mosaic_common::Result;
use mosaic_config::MosaicConfig;
use mosaic_tiling::LayoutContainer;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::scene::{Scene, SlotCollector};

const DEFAULT_DIRECTIVE: &str = "mosaic=info";

fn init_logging(directive: &str) {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_DIRECTIVE.parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<MosaicConfig> {
    match &args.config {
        Some(path) => Ok(mosaic_config::load_config_from(path)?),
        None => Ok(mosaic_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            MosaicConfig::default()
        })),
    }
}

fn read_scene(args: &Args) -> Result<Scene> {
    let mut scene = match (args.tiles, &args.scene) {
        (Some(count), _) => {
            let container = Size::new(
                args.width.unwrap_or_default(),
                args.height.unwrap_or_default(),
            );
            Scene::synthetic(container, count, &args.big)?
        }
        (None, Some(path)) => Scene::load(path)?,
        (None, None) => Scene::load(Path::new("-"))?,
    };
    scene.resize(args.width, args.height);
    Ok(scene)
}

fn run(args: &Args, config: MosaicConfig) -> Result<()> {
    let scene = read_scene(args)?;
    let container = LayoutContainer::new(config.layout)?;

    let mut sink = SlotCollector::default();
    let layout = container.layout(&scene, &mut sink);
    tracing::info!(
        width = scene.container.width,
        height = scene.container.height,
        tiles = layout.len(),
        laid_out = layout.laid_out_count(),
        "Layout computed"
    );

    let entries = sink.into_entries();
    let json = if args.pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = load_config(&args);
    let directive = match (&args.log_level, &config) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.directive(),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    let result = config.and_then(|config| run(&args, config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mosaic: {e}");
            ExitCode::FAILURE
        }
    }
}
