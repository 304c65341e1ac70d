use log::{
    Level,
    LevelFilter,
    Log,
    Metadata,
    Record,
};
use std::sync::{
    Mutex,
    OnceLock,
};

/// A logger that keeps every record so tests can assert on what was
/// reported.  As the logger is process-wide, tests relying on it should
/// live in their own test binary.
pub struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

impl CaptureLogger {
    /// Installs the capturing logger, if not already, and returns it.
    pub fn install() -> &'static CaptureLogger {
        let logger = LOGGER.get_or_init(|| CaptureLogger {
            records: Mutex::new(Vec::new()),
        });
        if log::set_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        logger
    }

    pub fn take(&self) -> Vec<(Level, String)> {
        self.records.lock()
            .map(|mut records| std::mem::take(&mut *records))
            .unwrap_or_default()
    }

    pub fn take_at(&self, level: Level) -> Vec<String> {
        self.take()
            .into_iter()
            .filter_map(|(l, message)| (l == level).then_some(message))
            .collect()
    }
}
