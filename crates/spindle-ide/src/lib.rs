#![forbid(unsafe_code)]

//! IDE drive bring-up: ATA IDENTIFY DEVICE synthesis and the register
//! programming that hands a drive's parameters to the hardware core.

mod identify;
mod program;

pub use identify::{IdentifyBlock, IDENTIFY_WORDS, MAX_IDENTIFY_CYLINDERS};
pub use program::program_drive;
