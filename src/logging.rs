//! File logging.
//!
//! The terminal belongs to the game, so log records go to a file through log4rs.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// Install a file logger at `level`
pub fn init_log(level: LevelFilter, file_path: &Path) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}",
        )))
        .build(file_path)
        .with_context(|| format!("logging: open {}", file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .context("logging: build config")?;

    log4rs::init_config(config).context("logging: install logger")?;
    Ok(())
}
