//! Runtime PM debugging stub for NVIDIA display controllers.
//!
//! Binds to every NVIDIA (vendor `0x10DE`) display-class PCI function,
//! forces its runtime PM status back to active on attach and reports the
//! PM usage count, so runtime suspend/resume can be exercised on a GPU
//! without a real graphics driver in the way.
//!
//! - [`config`] -- policy constants and [`StubConfig`].
//! - [`supervisor`] -- the attach/detach/suspend/resume callbacks.
//! - [`module`] -- registration record plus `module_init` / `module_exit`.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod module;
pub mod supervisor;

pub use config::StubConfig;
pub use module::{DRIVER_INFO, DRIVER_NAME, ID_TABLE, driver_entry, module_exit, module_init};
pub use supervisor::Supervisor;
