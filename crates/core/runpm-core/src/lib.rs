//! Logging and error-number primitives shared by the runpm driver crates.
//!
//! Everything here is `no_std` and allocation-free so the driver crates can
//! be linked into a kernel image, while still being host-testable with
//! `cargo test`.

#![cfg_attr(not(test), no_std)]

pub mod errno;
pub mod log;

pub use errno::Errno;
pub use log::LogLevel;
