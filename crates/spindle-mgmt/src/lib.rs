#![forbid(unsafe_code)]

//! The management-register bus of the simulated machine.
//!
//! Before reset is released, the harness programs the hardware core through
//! a side-band register file: drive geometry and identify data, CMOS
//! contents, and similar bring-up state. [`MgmtWrite`] is the write half of
//! that bus. Device programmers in this workspace are generic over it, so a
//! Verilated core, a recording test double, or a textual dumper can all
//! carry the same sequence.

pub mod cmos;
pub mod regs;

pub use cmos::{program_cmos, CmosDate, CmosSettings, FloppyA};

/// Write access to the management-register file.
pub trait MgmtWrite {
    /// Writes `value` to the management register at `address`.
    fn write_register(&mut self, address: u16, value: u32);
}
