use clap::Parser;
use log::{info, warn};
use postview::DisplayZone;
use postview::core::config::{self, CliOverrides, PostviewConfig};
use postview::core::post::{self, Post, PostError};
use postview::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "postview", about = "Read a post and discuss it in the terminal")]
struct Args {
    /// TOML file with the post to show (defaults to a built-in demo post)
    #[arg(short, long)]
    post: Option<PathBuf>,

    /// Clock used for the absolute publish date
    #[arg(short, long, value_enum)]
    timezone: Option<DisplayZone>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger isn't up yet, so a bad config is reported once it is
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (PostviewConfig::default(), Some(e)),
    };

    let cli = CliOverrides {
        post_file: args.post,
        timezone: args.timezone,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        warn!("Config error, using defaults: {}", e);
    }
    info!("Postview starting up: {:?}", resolved);

    let post = match load(resolved.post_file.as_deref()) {
        Ok(post) => post,
        Err(e) => {
            eprintln!("postview: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    tui::run(post, &resolved)
}

fn load(path: Option<&Path>) -> Result<Post, PostError> {
    match path {
        Some(path) => post::load_post(path),
        None => post::demo_post(),
    }
}
