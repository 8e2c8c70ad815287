//! CHS translation-geometry inference.
//!
//! Partition tables written by a CHS-era BIOS record every partition
//! boundary both as a CHS triple and as a flat LBA. Those pairs pin down
//! the translation geometry the BIOS was using; this module tests a
//! catalogue of historical schemes against them and keeps the ones that
//! reproduce every pair.

use crate::mbr::PartitionTable;
use crate::SECTOR_SIZE;

/// A (heads, sectors-per-track) translation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryCandidate {
    pub heads: u16,
    pub sectors_per_track: u16,
}

const fn candidate(heads: u16, sectors_per_track: u16) -> GeometryCandidate {
    GeometryCandidate { heads, sectors_per_track }
}

/// Translation schemes legacy BIOSes are known to have used, in evaluation
/// order. Every entry has nonzero heads and sectors per track.
pub const GEOMETRY_CANDIDATES: [GeometryCandidate; 11] = [
    candidate(255, 63),
    candidate(240, 63),
    candidate(224, 56),
    candidate(128, 63),
    candidate(64, 63),
    candidate(32, 63),
    candidate(16, 63),
    candidate(15, 63),
    candidate(15, 32),
    candidate(8, 32),
    candidate(4, 32),
];

/// The geometry selected for a drive, cylinder count included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveGeometry {
    /// True cylinder count. Identify data caps this at 16383; the geometry
    /// registers do not.
    pub cylinders: u32,
    pub heads: u16,
    pub sectors_per_track: u16,
}

impl DriveGeometry {
    fn from_candidate(candidate: GeometryCandidate, image_bytes: u64) -> Self {
        let per_cylinder = u64::from(candidate.heads) * u64::from(candidate.sectors_per_track);
        let cylinders = image_bytes / SECTOR_SIZE as u64 / per_cylinder;
        Self {
            // Past the 32-bit sector space CHS addressing is moot; saturate.
            cylinders: u32::try_from(cylinders).unwrap_or(u32::MAX),
            heads: candidate.heads,
            sectors_per_track: candidate.sectors_per_track,
        }
    }

    /// Sectors in one full cylinder.
    pub fn sectors_per_cylinder(&self) -> u32 {
        u32::from(self.heads) * u32::from(self.sectors_per_track)
    }

    /// Sectors reachable through CHS addressing. The image may extend past
    /// this point; the tail is simply unreachable in CHS terms.
    pub fn total_sectors(&self) -> u32 {
        let total = u64::from(self.cylinders) * u64::from(self.sectors_per_cylinder());
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}

/// Whether `candidate` reproduces every CHS/LBA pair recorded by the
/// table's in-use entries.
fn satisfies_table(candidate: GeometryCandidate, table: &PartitionTable) -> bool {
    let GeometryCandidate { heads, sectors_per_track } = candidate;
    for entry in table.in_use_entries() {
        if let Some(start) = entry.start_chs {
            if start.to_lba(heads, sectors_per_track) != entry.lba_start {
                return false;
            }
        }
        if let Some(end) = entry.end_chs {
            // Inclusive end in the 32-bit wrapping arithmetic the table was
            // written with; a zero-length extent just never matches.
            let last = entry.lba_start.wrapping_add(entry.lba_sectors).wrapping_sub(1);
            if end.to_lba(heads, sectors_per_track) != last {
                return false;
            }
        }
    }
    true
}

/// Catalogue candidates the partition table does not rule out, in catalogue
/// order. An empty result means no CHS scheme reproduces the table.
pub fn plausible_geometries(table: &PartitionTable) -> Vec<GeometryCandidate> {
    GEOMETRY_CANDIDATES
        .into_iter()
        .filter(|candidate| satisfies_table(*candidate, table))
        .collect()
}

/// Infers the translation geometry the partitioning BIOS used for an image
/// of `image_bytes` bytes.
///
/// `None` means no catalogue geometry reproduces the table's CHS/LBA pairs:
/// the disk was almost certainly partitioned under pure-LBA addressing.
/// That is an expected outcome for newer images, not a failure.
pub fn infer_geometry(table: &PartitionTable, image_bytes: u64) -> Option<DriveGeometry> {
    let mut plausible = plausible_geometries(table);
    // Highest sectors-per-track wins; head count breaks ties.
    plausible.sort_by(|a, b| {
        b.sectors_per_track
            .cmp(&a.sectors_per_track)
            .then(b.heads.cmp(&a.heads))
    });
    plausible
        .first()
        .map(|winner| DriveGeometry::from_candidate(*winner, image_bytes))
}
