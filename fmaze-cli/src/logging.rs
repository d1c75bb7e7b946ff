use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use crossterm::style::{Color, Stylize as _};
use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn))
}

/// Installs the logger. Calling it again only changes the level.
pub fn init(level: LevelFilter) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_err() {
        log::debug!("Logger already installed");
    }
    log::set_max_level(LevelFilter::Trace);
}

/// Formats records as `[LEVEL] module -> message` on stderr.
pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(|err| err.into_inner())
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(|err| err.into_inner()) = level;
    }

    pub fn format(record: &Record) -> String {
        let color = match record.level() {
            log::Level::Error => Color::Red,
            log::Level::Warn => Color::Yellow,
            log::Level::Info => Color::White,
            log::Level::Debug => Color::Blue,
            log::Level::Trace => Color::Grey,
        };

        format!(
            "[{}] {} -> {}",
            record.level().as_str().with(color),
            record.module_path().unwrap_or("unknown").dim(),
            record.args()
        )
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Level picked from the settings, raised by every `--verbose` flag.
pub fn level_with_verbosity(base: LevelFilter, verbose: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let idx = LEVELS.iter().position(|&l| l == base).unwrap_or(2) + verbose as usize;
    LEVELS[idx.min(LEVELS.len() - 1)]
}
