// SPDX-License-Identifier: MPL-2.0
use chat_preview::app::{self, Flags};
use chat_preview::ui::theming::ThemeMode;
use std::process::ExitCode;

const HELP: &str = "\
chat_preview

USAGE:
  chat_preview [OPTIONS]

OPTIONS:
  --lang <TAG>         UI language (e.g. en-US, fr, ko)
  --theme <MODE>       light, dark or system
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  CHAT_PREVIEW_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                  Log filter (default: warn)
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, String> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").map_err(|e| e.to_string())?,
        theme_mode: args
            .opt_value_from_str::<_, ThemeMode>("--theme")
            .map_err(|e| e.to_string())?,
        config_dir: args
            .opt_value_from_str("--config-dir")
            .map_err(|e| e.to_string())?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        let remaining: Vec<_> = remaining
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        return Err(format!("unexpected arguments: {}", remaining.join(" ")));
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}
