//! Per-thread capture of `runpm-core` log output.

use core::fmt;
use core::marker::PhantomData;
use std::cell::RefCell;
use std::string::String;
use std::vec::Vec;

use runpm_core::LogLevel;
use runpm_core::log::{set_log_fn, set_print_fn};

/// One captured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Level for `klog!` output, `None` for raw `kprint!` output.
    pub level: Option<LogLevel>,
    /// Formatted message.
    pub message: String,
}

std::thread_local! {
    static CAPTURED: RefCell<Option<Vec<LogRecord>>> = const { RefCell::new(None) };
}

fn capture_print(args: fmt::Arguments<'_>) {
    push(None, args);
}

fn capture_log(level: LogLevel, args: fmt::Arguments<'_>) {
    push(Some(level), args);
}

fn push(level: Option<LogLevel>, args: fmt::Arguments<'_>) {
    CAPTURED.with(|c| {
        if let Some(records) = c.borrow_mut().as_mut() {
            records.push(LogRecord {
                level,
                message: std::format!("{args}"),
            });
        }
    });
}

/// Captures log output produced on the current thread while alive.
///
/// Output from threads without an active capture is dropped.
pub struct LogCapture {
    // Capture state is thread-local; keep the guard on its thread.
    _not_send: PhantomData<*const ()>,
}

impl LogCapture {
    /// Installs the capturing sinks and starts an empty buffer for this thread.
    #[must_use]
    pub fn install() -> Self {
        CAPTURED.with(|c| *c.borrow_mut() = Some(Vec::new()));
        // SAFETY: both sinks only touch thread-local state and never block.
        unsafe {
            set_print_fn(capture_print);
            set_log_fn(capture_log);
        }
        Self {
            _not_send: PhantomData,
        }
    }

    /// Everything captured so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        CAPTURED.with(|c| c.borrow().clone().unwrap_or_default())
    }

    /// Messages logged at exactly `level`.
    #[must_use]
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == Some(level))
            .map(|r| r.message)
            .collect()
    }

    /// Returns `true` if `message` was logged at `level`.
    #[must_use]
    pub fn contains(&self, level: LogLevel, message: &str) -> bool {
        self.messages_at(level).iter().any(|m| m == message)
    }

    /// Drops everything captured so far.
    pub fn clear(&self) {
        CAPTURED.with(|c| {
            if let Some(records) = c.borrow_mut().as_mut() {
                records.clear();
            }
        });
    }
}

impl Drop for LogCapture {
    fn drop(&mut self) {
        CAPTURED.with(|c| *c.borrow_mut() = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_levels_and_raw_output() {
        let capture = LogCapture::install();
        runpm_core::kinfo!("dev->pm.usage_count: {}", 1);
        runpm_core::kprint!("raw");

        assert_eq!(
            capture.records(),
            [
                LogRecord {
                    level: Some(LogLevel::Info),
                    message: "dev->pm.usage_count: 1".into(),
                },
                LogRecord {
                    level: None,
                    message: "raw".into(),
                },
            ]
        );
        assert!(capture.contains(LogLevel::Info, "dev->pm.usage_count: 1"));

        capture.clear();
        assert!(capture.records().is_empty());
    }

    #[test]
    fn other_threads_are_not_captured() {
        let capture = LogCapture::install();
        std::thread::spawn(|| runpm_core::kerr!("elsewhere"))
            .join()
            .unwrap();
        assert!(capture.records().is_empty());
    }
}
