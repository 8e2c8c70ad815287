//! Management-register address map.
//!
//! These addresses are decoded by the hardware core itself, outside the
//! guest-visible I/O space, and are fixed by that core's RTL.

/// Identify-block window for drive 0: the core latches one 32-bit value per
/// write and advances an internal word pointer.
pub const HDD_IDENTIFY: u16 = 0xF000;

/// Media cylinders, uncapped (the identify block's 16383 limit does not
/// apply here).
pub const HDD_CYLINDERS: u16 = 0xF001;

/// Media heads.
pub const HDD_HEADS: u16 = 0xF002;

/// Media sectors per track.
pub const HDD_SECTORS_PER_TRACK: u16 = 0xF003;

/// Sectors per cylinder (heads times sectors per track).
pub const HDD_SECTORS_PER_CYLINDER: u16 = 0xF004;

/// Total addressable sectors.
pub const HDD_TOTAL_SECTORS: u16 = 0xF005;

/// First backing sector of the drive. This machine maps the whole image, so
/// it is programmed to zero.
pub const HDD_BASE_SECTOR: u16 = 0xF006;

/// Base of the CMOS window; `CMOS_BASE + cell` addresses one CMOS byte.
pub const CMOS_BASE: u16 = 0xF400;
