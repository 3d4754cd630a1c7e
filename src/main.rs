// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use iced_reel::config::paths;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "iced_reel=info,wgpu=warn";

const HELP: &str = "\
iced_reel - video player with playlist and frame effects

USAGE:
  iced_reel [OPTIONS] [VIDEO]...

OPTIONS:
  --lang <LANG>        UI language, e.g. en-US or tr
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  RUST_LOG               Log filter (default: iced_reel=info,wgpu=warn)
  ICED_REEL_CONFIG_DIR   Config directory when --config-dir is not given
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring invalid --lang");
        None
    });
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir").unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring invalid --config-dir");
        None
    });
    paths::init_cli_override(config_dir);

    let files: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();
    tracing::info!(files = files.len(), "starting");

    app::run(Flags { lang, files })
}
