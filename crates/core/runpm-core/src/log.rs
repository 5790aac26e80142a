//! Log output plumbing for driver code.
//!
//! Drivers format through [`kprint!`] / [`kprintln!`] for raw text and
//! [`klog!`] or the per-level shorthands (`kerr!`, `kinfo!`, ...) for
//! leveled records. Both paths end in a function pointer that the host
//! integration installs with [`set_print_fn`] / [`set_log_fn`]. Until then
//! the pointers hold no-op sinks and output is dropped.

use core::fmt;
use core::sync::atomic::{AtomicPtr, Ordering};

// ---------------------------------------------------------------------------
// Log levels (lower is more severe)
// ---------------------------------------------------------------------------

/// Severity attached to a leveled log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Unrecoverable; the host is about to stop.
    Fatal = 0,
    /// An operation failed and the error was returned to the caller.
    Error = 1,
    /// Unexpected but tolerated.
    Warn = 2,
    /// Operator-facing diagnostics.
    Info = 3,
    /// Developer diagnostics.
    Debug = 4,
    /// Step-by-step tracing.
    Trace = 5,
}

impl LogLevel {
    /// Fixed-width tag, suitable for aligned console prefixes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN ",
            Self::Info => "INFO ",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().trim_end())
    }
}

// ---------------------------------------------------------------------------
// Raw print sink (kprint! / kprintln!)
// ---------------------------------------------------------------------------

/// Signature of the raw print sink.
pub type PrintFn = fn(fmt::Arguments<'_>);

fn discard_print(_args: fmt::Arguments<'_>) {}

static PRINT_FN: AtomicPtr<()> = AtomicPtr::new(discard_print as *mut ());

/// Installs the raw print sink.
///
/// # Safety
///
/// `f` will be called from whatever context a driver happens to print in,
/// including PM callbacks, so it must be callable from any such context.
/// Replacing the sink more than once is allowed.
pub unsafe fn set_print_fn(f: PrintFn) {
    PRINT_FN.store(f as *mut (), Ordering::Release);
}

#[inline]
fn print_fn() -> PrintFn {
    let ptr = PRINT_FN.load(Ordering::Acquire);
    // SAFETY: PRINT_FN only ever holds `discard_print` or a `PrintFn`
    // stored by `set_print_fn`.
    unsafe { core::mem::transmute::<*mut (), PrintFn>(ptr) }
}

/// Backend of [`kprint!`]. Not public API.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments<'_>) {
    print_fn()(args);
}

/// Writes raw text to the print sink.
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => { $crate::log::_print(format_args!($($arg)*)) };
}

/// Writes raw text plus a newline to the print sink.
#[macro_export]
macro_rules! kprintln {
    () => { $crate::kprint!("\n") };
    ($($arg:tt)*) => { $crate::kprint!("{}\n", format_args!($($arg)*)) };
}

// ---------------------------------------------------------------------------
// Leveled sink (klog! and shorthands)
// ---------------------------------------------------------------------------

/// Signature of the leveled log sink.
pub type LogFn = fn(LogLevel, fmt::Arguments<'_>);

fn discard_log(_level: LogLevel, _args: fmt::Arguments<'_>) {}

static LOG_FN: AtomicPtr<()> = AtomicPtr::new(discard_log as *mut ());

/// Installs the leveled log sink.
///
/// # Safety
///
/// Same contract as [`set_print_fn`].
pub unsafe fn set_log_fn(f: LogFn) {
    LOG_FN.store(f as *mut (), Ordering::Release);
}

#[inline]
fn log_fn() -> LogFn {
    let ptr = LOG_FN.load(Ordering::Acquire);
    // SAFETY: LOG_FN only ever holds `discard_log` or a `LogFn` stored by
    // `set_log_fn`.
    unsafe { core::mem::transmute::<*mut (), LogFn>(ptr) }
}

/// Backend of [`klog!`]. Not public API.
#[doc(hidden)]
pub fn _log(level: LogLevel, args: fmt::Arguments<'_>) {
    log_fn()(level, args);
}

/// Emits a record at an explicit level.
#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {
        $crate::log::_log($level, format_args!($($arg)*))
    };
}

/// Emits a [`Fatal`](crate::log::LogLevel::Fatal) record.
#[macro_export]
macro_rules! kfatal {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Fatal, $($arg)*) };
}

/// Emits an [`Error`](crate::log::LogLevel::Error) record.
#[macro_export]
macro_rules! kerr {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Error, $($arg)*) };
}

/// Emits a [`Warn`](crate::log::LogLevel::Warn) record.
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Warn, $($arg)*) };
}

/// Emits an [`Info`](crate::log::LogLevel::Info) record.
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Info, $($arg)*) };
}

/// Emits a [`Debug`](crate::log::LogLevel::Debug) record.
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Debug, $($arg)*) };
}

/// Emits a [`Trace`](crate::log::LogLevel::Trace) record.
#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Trace, $($arg)*) };
}
