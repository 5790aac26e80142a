//! PCI identification, matching and resource types.

use core::fmt;

/// PCI bus/device/function address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PciAddress {
    /// Bus number (0-255).
    pub bus: u8,
    /// Device number (0-31).
    pub device: u8,
    /// Function number (0-7).
    pub function: u8,
}

impl fmt::Display for PciAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}:{:02x}.{}", self.bus, self.device, self.function)
    }
}

/// Base class codes (byte 2 of the 24-bit class code).
pub mod class {
    /// Mass storage controller.
    pub const PCI_BASE_CLASS_STORAGE: u8 = 0x01;
    /// Network controller.
    pub const PCI_BASE_CLASS_NETWORK: u8 = 0x02;
    /// Display controller (VGA, 3D, other).
    pub const PCI_BASE_CLASS_DISPLAY: u8 = 0x03;
    /// Multimedia controller (audio functions of GPUs live here).
    pub const PCI_BASE_CLASS_MULTIMEDIA: u8 = 0x04;
    /// Bridge device.
    pub const PCI_BASE_CLASS_BRIDGE: u8 = 0x06;

    /// Class mask that keeps only the base-class byte significant.
    pub const BASE_CLASS_MASK: u32 = 0x00FF_0000;
}

/// Wildcard for vendor/device/subsystem fields of a [`PciDeviceId`].
pub const PCI_ANY_ID: u16 = 0xFFFF;

/// One row of a driver's ID table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PciDeviceId {
    /// Vendor ID (`PCI_ANY_ID` = wildcard).
    pub vendor: u16,
    /// Device ID (`PCI_ANY_ID` = wildcard).
    pub device: u16,
    /// Subsystem vendor ID (`PCI_ANY_ID` = wildcard).
    pub subvendor: u16,
    /// Subsystem device ID (`PCI_ANY_ID` = wildcard).
    pub subdevice: u16,
    /// Class code: `(class << 16) | (subclass << 8) | prog_if`.
    pub class: u32,
    /// Mask applied to both class codes before comparison (0 = ignore class).
    pub class_mask: u32,
}

impl PciDeviceId {
    /// Matches a specific vendor/device pair.
    #[must_use]
    pub const fn new(vendor: u16, device: u16) -> Self {
        Self {
            vendor,
            device,
            subvendor: PCI_ANY_ID,
            subdevice: PCI_ANY_ID,
            class: 0,
            class_mask: 0,
        }
    }

    /// Matches any device of a vendor whose base class equals `base_class`,
    /// regardless of subclass and programming interface.
    #[must_use]
    pub const fn with_vendor_base_class(vendor: u16, base_class: u8) -> Self {
        Self {
            vendor,
            device: PCI_ANY_ID,
            subvendor: PCI_ANY_ID,
            subdevice: PCI_ANY_ID,
            class: (base_class as u32) << 16,
            class_mask: class::BASE_CLASS_MASK,
        }
    }

    /// Returns `true` if this row matches `info`.
    #[must_use]
    pub fn matches(&self, info: &PciDeviceInfo) -> bool {
        let field = |want: u16, have: u16| want == PCI_ANY_ID || want == have;

        field(self.vendor, info.vendor_id)
            && field(self.device, info.device_id)
            && field(self.subvendor, info.subsystem_vendor_id)
            && field(self.subdevice, info.subsystem_device_id)
            && (info.class_code() & self.class_mask) == (self.class & self.class_mask)
    }
}

/// Decoded Base Address Register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PciBar {
    /// Memory-mapped BAR.
    Memory {
        /// Base physical address.
        base: u64,
        /// Size in bytes.
        size: u64,
        /// Whether the region is prefetchable.
        prefetchable: bool,
        /// Whether this is a 64-bit BAR (consumes two BAR slots).
        is_64bit: bool,
    },
    /// I/O port BAR.
    Io {
        /// Base I/O port.
        base: u32,
        /// Size in bytes.
        size: u32,
    },
    /// Unused slot, or the upper half of a 64-bit BAR.
    Unused,
}

impl PciBar {
    /// Bounds of the region this BAR decodes.
    #[must_use]
    pub const fn resource(&self) -> PciResource {
        match *self {
            Self::Memory { base, size, .. } => PciResource {
                start: base,
                len: size,
            },
            Self::Io { base, size } => PciResource {
                start: base as u64,
                len: size as u64,
            },
            Self::Unused => PciResource::EMPTY,
        }
    }
}

/// Base address and length of one addressable region of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PciResource {
    /// First address of the region.
    pub start: u64,
    /// Length in bytes (0 = region absent).
    pub len: u64,
}

impl PciResource {
    /// An absent region.
    pub const EMPTY: Self = Self { start: 0, len: 0 };

    /// Returns `true` if the region has no extent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for PciResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("[empty]")
        } else {
            write!(
                f,
                "[{:#x}-{:#x}]",
                self.start,
                self.start.wrapping_add(self.len - 1)
            )
        }
    }
}

bitflags::bitflags! {
    /// Bits of the PCI Command register touched by enable/disable and bus mastering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PciCommand: u16 {
        /// Respond to I/O space accesses.
        const IO_SPACE     = 1 << 0;
        /// Respond to memory space accesses.
        const MEMORY_SPACE = 1 << 1;
        /// Allowed to initiate transactions (DMA).
        const BUS_MASTER   = 1 << 2;
    }
}

/// Static information about a discovered PCI function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PciDeviceInfo {
    /// Bus/device/function address.
    pub address: PciAddress,
    /// Vendor ID.
    pub vendor_id: u16,
    /// Device ID.
    pub device_id: u16,
    /// Revision ID.
    pub revision: u8,
    /// Programming interface byte.
    pub prog_if: u8,
    /// Subclass code.
    pub subclass: u8,
    /// Base class code.
    pub class: u8,
    /// Header type (bits 0-6), multi-function flag (bit 7).
    pub header_type: u8,
    /// Subsystem vendor ID.
    pub subsystem_vendor_id: u16,
    /// Subsystem device ID.
    pub subsystem_device_id: u16,
    /// Interrupt line configured by firmware.
    pub interrupt_line: u8,
    /// Interrupt pin (0 = none, 1 = INTA, ..., 4 = INTD).
    pub interrupt_pin: u8,
    /// Base Address Registers.
    pub bars: [PciBar; 6],
}

impl PciDeviceInfo {
    /// The 24-bit class code `(class << 16) | (subclass << 8) | prog_if`.
    #[must_use]
    pub const fn class_code(&self) -> u32 {
        ((self.class as u32) << 16) | ((self.subclass as u32) << 8) | (self.prog_if as u32)
    }
}
