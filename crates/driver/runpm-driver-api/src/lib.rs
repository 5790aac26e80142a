//! PCI driver contract between runpm drivers and their host framework.
//!
//! The host framework (device discovery, matching, callback dispatch and
//! the runtime PM engine) lives outside this workspace. This crate defines
//! what a driver consumes from it and what it hands back:
//!
//! - **Identification** -- [`PciDeviceId`] match rows, [`PciDeviceInfo`], BARs and
//!   [`PciResource`] bounds.
//! - **Device primitives** -- [`PciDevice`] and its [`RuntimePm`] accounting, borrowed
//!   by a driver for the duration of one callback.
//! - **Driver callbacks** -- [`PciDriver`]: probe, remove, runtime suspend/resume.
//! - **Registration** -- [`PciDriverEntry`] records handed to a [`DriverRegistry`].

#![cfg_attr(not(test), no_std)]

pub mod category;
pub mod device;
pub mod driver;
pub mod error;
pub mod pci;
pub mod power;
pub mod registration;

// Re-export all public types at the crate root for ergonomic imports.
pub use category::PciDriver;
pub use device::{PciDevice, RuntimePm};
pub use driver::{BindState, DriverInfo};
pub use error::DriverError;
pub use pci::{PCI_ANY_ID, PciAddress, PciBar, PciCommand, PciDeviceId, PciDeviceInfo, PciResource};
pub use power::PowerState;
pub use registration::{DriverRegistry, PciDriverEntry};
pub use runpm_core::Errno;
