//! Device power states.

use core::fmt;

/// PowerState field of the PM Control/Status register.
pub const PMCSR_STATE_MASK: u16 = 0x0003;

/// PCI device power state as last recorded by the platform.
///
/// Discriminants follow the PCI PM register encoding for D0-D3hot, with
/// `D3Cold` and `Unknown` appended after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PowerState {
    /// Fully powered and operational.
    D0 = 0,
    /// Light sleep.
    D1 = 1,
    /// Deeper sleep.
    D2 = 2,
    /// Powered down, auxiliary power and config space still available.
    D3Hot = 3,
    /// Power removed.
    D3Cold = 4,
    /// Not yet read, or unreadable (config space returned all ones).
    Unknown = 5,
}

impl PowerState {
    /// Decodes the PowerState field (bits 1:0) of a PMCSR read.
    ///
    /// An all-ones read means config space is gone, which is reported as
    /// `Unknown`; D3cold is never visible through PMCSR.
    #[must_use]
    pub const fn from_pmcsr(pmcsr: u16) -> Self {
        if pmcsr == u16::MAX {
            return Self::Unknown;
        }
        match pmcsr & PMCSR_STATE_MASK {
            0 => Self::D0,
            1 => Self::D1,
            2 => Self::D2,
            _ => Self::D3Hot,
        }
    }

    /// Returns `true` for [`PowerState::D0`].
    #[must_use]
    pub const fn is_d0(self) -> bool {
        matches!(self, Self::D0)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::D0 => "D0",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3Hot => "D3hot",
            Self::D3Cold => "D3cold",
            Self::Unknown => "unknown",
        })
    }
}
