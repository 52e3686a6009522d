use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use airtype::capture::{DetectorSettings, RecordedDetector, ReplaySource};
use airtype::config::Config;
use airtype::draw::{CairoSurface, CommandRecorder, FontDescriptor, RenderSurface};
use airtype::layout::{KeyKind, Layout};
use airtype::session::{Session, install_stop_handler, options_from_config};
use airtype::ui::UiStyle;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("AIRTYPE_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "airtype")]
#[command(version = VERSION, about = "Virtual keyboard typed with fingertip pinch gestures")]
struct Cli {
    /// Recorded landmark stream to replay (JSON lines, one frame per line)
    #[arg(
        long,
        short = 'r',
        value_name = "FILE",
        required_unless_present_any = ["print_layout", "print_config_schema", "init_config"]
    )]
    replay: Option<PathBuf>,

    /// Write every rendered frame as frame-NNNNNN.png into this directory
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/airtype/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long, value_name = "N")]
    max_frames: Option<u64>,

    /// Print the keyboard layout and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_layout: bool,

    /// Print the config file JSON schema and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config_schema: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let layout = Layout::default();

    if cli.print_config_schema {
        println!("{}", Config::json_schema()?);
        return Ok(());
    }

    if cli.print_layout {
        print_layout(&layout);
        return Ok(());
    }

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(replay) = cli.replay else {
        return Err(anyhow::anyhow!("--replay <FILE> is required"));
    };

    let stop = install_stop_handler()?;

    let (width, height) = (config.camera.width, config.camera.height);
    let mut source = ReplaySource::open(&replay, width, height)
        .with_context(|| format!("Failed to open recording {}", replay.display()))?;
    let mut detector = RecordedDetector::new(DetectorSettings::from_config(&config));

    let mut surface: Box<dyn RenderSurface> = match &cli.output {
        Some(dir) => {
            log::info!("Writing frames to {}", dir.display());
            let font = FontDescriptor::from_config(&config.keyboard);
            Box::new(CairoSurface::new(width, height, font)?.with_output_dir(dir))
        }
        None => Box::new(CommandRecorder::new()),
    };

    let options = options_from_config(&config).with_max_frames(cli.max_frames);
    let mut session = Session::new(&layout, UiStyle::from_config(&config), options);
    let summary = session.run(&mut source, &mut detector, surface.as_mut(), &stop)?;

    log::info!(
        "Processed {} frames, {} keys typed",
        summary.frames,
        summary.commits
    );
    println!("Typed: {}", summary.text);

    Ok(())
}

fn print_layout(layout: &Layout) {
    for key in layout.keys() {
        let kind = match key.kind {
            KeyKind::Character(_) => "character",
            KeyKind::Space => "space",
            KeyKind::Delete => "delete",
        };
        let b = &key.bounds;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            key.label, kind, b.x, b.y, b.width, b.height
        );
    }
}
