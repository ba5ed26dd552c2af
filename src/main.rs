// SPDX-License-Identifier: MPL-2.0
use mood_journal::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir = args
        .opt_value_from_str::<_, PathBuf>("--config-dir")
        .unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags { lang, config_dir })
}
