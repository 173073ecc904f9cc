use clap::Parser;
use log::warn;
use std::io::{self, Write};
use std::process::ExitCode;
use sysgrab::config::{ACCENT_COLOR, BASE_COLOR};
use sysgrab::display::render_banner;
use sysgrab::paths::ResourcePaths;
use sysgrab::{art, collect_system_info, ConfigStore, Palette, Result};

#[derive(Parser, Debug)]
#[clap(
    name = "sysgrab",
    version,
    disable_version_flag = true,
    about = "Display system information next to ASCII art",
    after_help = "Examples:\n  sysgrab                          Display sysgrab\n  sysgrab -b 255,255,255           Set base color to white\n  sysgrab --accent-color 0,0,0     Set accent color to black"
)]
struct Cli {
    #[clap(short, long, value_name = "r,g,b", help = "Set base color in the format r,g,b")]
    base_color: Option<String>,

    #[clap(short, long, value_name = "r,g,b", help = "Set accent color in the format r,g,b")]
    accent_color: Option<String>,

    #[clap(long, value_name = "PATH", help = "Config file to use instead of ~/.config/sysgrab/config.txt")]
    config: Option<String>,

    #[clap(long, value_name = "PATH", help = "Art file to use instead of ~/.config/sysgrab/art.txt")]
    art: Option<String>,

    #[clap(short = 'v', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sysgrab: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let paths = ResourcePaths::resolve(cli.config.as_deref(), cli.art.as_deref())?;
    paths.ensure_exists()?;

    let store = ConfigStore::new(&paths.config);
    let edits = [(BASE_COLOR, &cli.base_color), (ACCENT_COLOR, &cli.accent_color)];
    for (name, value) in edits {
        if let Some(value) = value {
            // rejected edits are reported but do not stop the display
            if let Err(e) = store.edit(name, value) {
                eprintln!("{}", e);
            }
        }
    }

    let palette = match store.load() {
        Ok(config) => Palette::from_config(&config),
        Err(e) => {
            warn!("using default colors: {}", e);
            Palette::default()
        }
    };

    let art = art::load_art(&paths.art).unwrap_or_else(|e| {
        warn!("ignoring art: {}", e);
        None
    });

    let facts = collect_system_info();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_banner(&mut out, &palette, &facts, art.as_ref())?;
    out.flush()?;
    Ok(())
}
