// SPDX-License-Identifier: MPL-2.0
use fasal_mitra::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
FasalMitra - farming companion

USAGE:
  fasal_mitra [OPTIONS]

OPTIONS:
  --lang <CODE>        Interface language for this session (en, hi, pa, mr)
  --route <PATH>       Page to open first (/, /weather, /market, /chat, ...)
  --data-dir <PATH>    Directory holding local state (state.cbor)
  --config-dir <PATH>  Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fasal_mitra=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = read_option(&mut args, "--lang");
    let route = read_option(&mut args, "--route");
    let data_dir = read_option(&mut args, "--data-dir");
    let config_dir = read_option(&mut args, "--config-dir");

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(data_dir, config_dir);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting FasalMitra");

    app::run(Flags { lang, route })
}

fn read_option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, option = name, "ignoring invalid option");
            None
        }
    }
}
