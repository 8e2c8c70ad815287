//! The packed cylinder/head/sector form used by MBR partition entries.

/// A decoded CHS address.
///
/// Sectors are 1-based (1–63). Cylinders carry 10 bits; on disk the top two
/// live in the high bits of the sector byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChsAddress {
    pub cylinder: u16,
    pub head: u8,
    pub sector: u8,
}

impl ChsAddress {
    /// Decodes the on-disk byte triple `[head, sector/cyl-high, cyl-low]`.
    ///
    /// Returns `None` for the all-0xFF "unspecified" sentinel and for a
    /// decoded sector of 0 (no 1-based address has one); either way the
    /// field carries no geometry constraint.
    pub fn decode(raw: [u8; 3]) -> Option<Self> {
        if raw == [0xFF; 3] {
            return None;
        }
        let sector = raw[1] & 0x3F;
        if sector == 0 {
            return None;
        }
        Some(Self {
            cylinder: u16::from(raw[1] & 0xC0) << 2 | u16::from(raw[2]),
            head: raw[0],
            sector,
        })
    }

    /// Flattens this address under a translation geometry:
    /// `(cylinder * heads + head) * spt + sector - 1`.
    pub fn to_lba(self, heads: u16, sectors_per_track: u16) -> u32 {
        let track = u32::from(self.cylinder) * u32::from(heads) + u32::from(self.head);
        track * u32::from(sectors_per_track) + u32::from(self.sector) - 1
    }
}
