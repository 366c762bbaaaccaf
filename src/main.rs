// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_gallery

USAGE:
  iced_gallery [OPTIONS] [PATH...]

OPTIONS:
  --lang LANG         UI language, e.g. en-US or fr
  --config-dir DIR    Directory holding settings.toml
  --samples-dir DIR   Add every image in DIR to the samples
  -h, --help          Print this help

ARGS:
  PATH...             Sample images shown at startup
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional(&mut args, "--lang"),
        config_dir: optional(&mut args, "--config-dir"),
        samples_dir: optional::<String>(&mut args, "--samples-dir").map(PathBuf::from),
        paths: args.finish().into_iter().map(PathBuf::from).collect(),
    };

    app::run(flags)
}

/// Reads an optional `--key value` pair; a malformed value is logged and ignored.
fn optional<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}
