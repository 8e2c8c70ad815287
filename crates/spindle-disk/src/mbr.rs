//! Partition-table extraction from a raw boot sector.
//!
//! Fields are pulled out by explicit byte offset; nothing in the sector is
//! assumed valid beyond its length. A sector without the 0x55AA marker still
//! parses — whether to trust it is the caller's call.

use crate::chs::ChsAddress;
use crate::SECTOR_SIZE;

/// Byte offset of the first partition entry.
pub const PARTITION_TABLE_OFFSET: usize = 0x1BE;
/// Primary partition slots in an MBR.
pub const PARTITION_SLOTS: usize = 4;

const ENTRY_SIZE: usize = 16;
const BOOT_SIGNATURE: u16 = 0xAA55;

/// One 16-byte partition slot, with both CHS fields pre-decoded.
#[derive(Debug, Clone, Copy)]
pub struct PartitionEntry {
    /// 0x80 marks the active partition; anything else is inactive.
    pub boot_indicator: u8,
    /// Start address in CHS terms, when specified and representable.
    pub start_chs: Option<ChsAddress>,
    /// Partition type byte; zero marks an unused slot.
    pub kind: u8,
    /// End address (inclusive) in CHS terms, when specified and representable.
    pub end_chs: Option<ChsAddress>,
    /// First sector of the partition as a flat LBA.
    pub lba_start: u32,
    /// Length of the partition in sectors.
    pub lba_sectors: u32,
}

impl PartitionEntry {
    /// Whether this slot holds a partition at all.
    pub fn in_use(&self) -> bool {
        self.kind != 0
    }

    fn parse(raw: &[u8]) -> Self {
        Self {
            boot_indicator: raw[0],
            start_chs: ChsAddress::decode([raw[1], raw[2], raw[3]]),
            kind: raw[4],
            end_chs: ChsAddress::decode([raw[5], raw[6], raw[7]]),
            lba_start: le_u32(&raw[8..12]),
            lba_sectors: le_u32(&raw[12..16]),
        }
    }
}

/// The four partition slots of a boot sector plus its trailing signature.
#[derive(Debug, Clone)]
pub struct PartitionTable {
    entries: [PartitionEntry; PARTITION_SLOTS],
    signature: u16,
}

impl PartitionTable {
    /// Decodes the table from a 512-byte boot sector. Never fails: garbage
    /// input yields garbage entries, which the geometry evaluator then
    /// discards.
    pub fn parse(sector: &[u8; SECTOR_SIZE]) -> Self {
        let entries = std::array::from_fn(|slot| {
            let offset = PARTITION_TABLE_OFFSET + slot * ENTRY_SIZE;
            PartitionEntry::parse(&sector[offset..offset + ENTRY_SIZE])
        });
        Self {
            entries,
            signature: le_u16(&sector[SECTOR_SIZE - 2..]),
        }
    }

    /// All four slots, in table order.
    pub fn entries(&self) -> &[PartitionEntry] {
        &self.entries
    }

    /// Slots that actually hold a partition.
    pub fn in_use_entries(&self) -> impl Iterator<Item = &PartitionEntry> {
        self.entries.iter().filter(|entry| entry.in_use())
    }

    /// Whether the sector carries the conventional 0x55AA boot signature.
    /// Inference works without it; callers that care can warn.
    pub fn has_boot_signature(&self) -> bool {
        self.signature == BOOT_SIGNATURE
    }
}

fn le_u16(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

fn le_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
