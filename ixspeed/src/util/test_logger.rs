//! captures log records per thread so tests can assert on emitted warnings.
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.push((thread::current().id(), record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// runs `f` and returns its result along with the warning messages it logged
/// from the calling thread.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Warn);
        }
    });
    let id = thread::current().id();
    take_records(id);
    let result = f();
    let warnings = take_records(id)
        .into_iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect();
    (result, warnings)
}

fn take_records(id: ThreadId) -> Vec<(Level, String)> {
    let mut records = LOGGER.records.lock().unwrap_or_else(|e| e.into_inner());
    let (taken, kept): (Vec<_>, Vec<_>) = records.drain(..).partition(|(tid, _, _)| *tid == id);
    *records = kept;
    taken
        .into_iter()
        .map(|(_, level, message)| (level, message))
        .collect()
}
