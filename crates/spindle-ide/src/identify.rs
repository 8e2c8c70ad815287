//! ATA-3 IDENTIFY DEVICE data for the simulated fixed disk.

use spindle_disk::DriveGeometry;

/// 16-bit words in an IDENTIFY DEVICE block.
pub const IDENTIFY_WORDS: usize = 256;

/// The identify block's cylinder fields saturate here (ATA-3 field limit);
/// the geometry registers carry the real count.
pub const MAX_IDENTIFY_CYLINDERS: u32 = 16383;

/// Space-padded into words 10–19 (serial number field).
const SERIAL_NUMBER: &str = "SPNDL1000001";
/// Space-padded into words 27–46 (model number field).
const MODEL_NUMBER: &str = "Spindle Harddrive";

/// A fully-populated IDENTIFY DEVICE block. Immutable once built; the
/// programming step only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyBlock {
    words: [u16; IDENTIFY_WORDS],
}

impl IdentifyBlock {
    /// Builds the block describing a fixed drive with the given geometry.
    pub fn for_drive(geometry: DriveGeometry) -> Self {
        let mut w = [0u16; IDENTIFY_WORDS];

        let cylinders = geometry.cylinders.min(MAX_IDENTIFY_CYLINDERS) as u16;
        let heads = geometry.heads;
        let spt = geometry.sectors_per_track;
        let total = geometry.total_sectors();

        w[0] = 0x0040; // fixed drive
        w[1] = cylinders;
        w[3] = heads;
        w[4] = 512 * spt; // unformatted bytes per track
        w[5] = 512; // unformatted bytes per sector
        w[6] = spt;
        pack_ata_string(&mut w[10..20], SERIAL_NUMBER);
        w[20] = 3; // buffer type
        w[21] = 512; // buffer size, 512-byte units
        w[22] = 4; // ECC bytes on long commands
        pack_ata_string(&mut w[27..47], MODEL_NUMBER);
        w[47] = 16; // sectors per READ/WRITE MULTIPLE
        w[48] = 1; // double-word I/O
        w[49] = 1 << 9; // LBA supported
        w[51] = 0x0200; // PIO transfer mode
        w[52] = 0x0200;
        w[53] = 0x0007; // words 54-58 and 64-70 valid
        w[54] = cylinders;
        w[55] = heads;
        w[56] = spt;
        w[57] = total as u16; // current capacity in sectors
        w[58] = (total >> 16) as u16;
        w[60] = total as u16; // LBA capacity
        w[61] = (total >> 16) as u16;
        for word in &mut w[65..=68] {
            *word = 120; // PIO/DMA cycle times, ns
        }
        w[80] = 0x007E; // supported ATA major versions
        w[82] = 1 << 14; // NOP supported
        w[83] = (1 << 14) | (1 << 13) | (1 << 12) | (1 << 10);
        w[84] = 1 << 14;
        w[85] = 1 << 14; // NOP enabled
        w[86] = (1 << 14) | (1 << 13) | (1 << 12) | (1 << 10);
        w[87] = 1 << 14;
        w[93] = 1 | (1 << 14) | 0x2000; // hardware reset result
        w[100] = total as u16;
        w[101] = (total >> 16) as u16;

        Self { words: w }
    }

    /// The raw words, in standard order.
    pub fn words(&self) -> &[u16; IDENTIFY_WORDS] {
        &self.words
    }

    /// Adjacent word pairs packed the way the identify window wants them:
    /// word `2i` in the low half, word `2i+1` in the high half.
    pub fn dwords(&self) -> impl Iterator<Item = u32> + '_ {
        self.words
            .chunks_exact(2)
            .map(|pair| u32::from(pair[1]) << 16 | u32::from(pair[0]))
    }
}

/// ATA string convention: two ASCII characters per word, first character in
/// the high byte, space padded to the field width.
fn pack_ata_string(words: &mut [u16], text: &str) {
    let bytes = text.as_bytes();
    for (index, word) in words.iter_mut().enumerate() {
        let hi = bytes.get(2 * index).copied().unwrap_or(b' ');
        let lo = bytes.get(2 * index + 1).copied().unwrap_or(b' ');
        *word = u16::from(hi) << 8 | u16::from(lo);
    }
}
