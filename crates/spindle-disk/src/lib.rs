#![forbid(unsafe_code)]

//! Disk-image analysis for legacy IDE bring-up.
//!
//! A disk partitioned under BIOS CHS addressing records each partition
//! boundary twice: as a cylinder/head/sector triple and as a flat LBA. Those
//! pairs pin down the translation geometry the partitioning BIOS was using,
//! and this crate recovers it:
//!
//! - [`DiskImage`]: the boot sector plus image size, the engine's only inputs
//! - [`PartitionTable`]: the four MBR slots, CHS fields pre-decoded
//! - [`infer_geometry`]: catalogue evaluation and ranking, yielding a
//!   [`DriveGeometry`] or `None` when the disk was partitioned pure-LBA
//!
//! Everything past the probe is pure: the same sector and size always produce
//! the same geometry.

mod chs;
mod error;
mod geometry;
mod mbr;
mod probe;

pub use chs::ChsAddress;
pub use error::{DiskError, Result};
pub use geometry::{
    infer_geometry, plausible_geometries, DriveGeometry, GeometryCandidate, GEOMETRY_CANDIDATES,
};
pub use mbr::{PartitionEntry, PartitionTable, PARTITION_SLOTS, PARTITION_TABLE_OFFSET};
pub use probe::DiskImage;

/// Bytes per sector; everything here assumes 512-byte sectors.
pub const SECTOR_SIZE: usize = 512;

#[cfg(test)]
mod proptests;
