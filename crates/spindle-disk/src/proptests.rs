use proptest::prelude::*;

use crate::{
    infer_geometry, ChsAddress, GeometryCandidate, PartitionTable, GEOMETRY_CANDIDATES,
    PARTITION_TABLE_OFFSET, SECTOR_SIZE,
};

/// A partition extent expressed in CHS terms under some generating geometry.
#[derive(Debug, Clone, Copy)]
struct Extent {
    start: ChsAddress,
    end: ChsAddress,
}

fn chs_strategy(heads: u16, sectors_per_track: u16) -> impl Strategy<Value = ChsAddress> {
    (0u16..=1023, 0..heads, 1..=sectors_per_track).prop_map(|(cylinder, head, sector)| {
        ChsAddress {
            cylinder,
            head: head as u8,
            sector: sector as u8,
        }
    })
}

fn extent_strategy(heads: u16, sectors_per_track: u16) -> impl Strategy<Value = Extent> {
    let pair = (
        chs_strategy(heads, sectors_per_track),
        chs_strategy(heads, sectors_per_track),
    );
    pair.prop_map(move |(a, b)| {
        if a.to_lba(heads, sectors_per_track) <= b.to_lba(heads, sectors_per_track) {
            Extent { start: a, end: b }
        } else {
            Extent { start: b, end: a }
        }
    })
}

/// A generating geometry from the catalogue plus 1–4 extents laid out under it.
fn table_strategy() -> impl Strategy<Value = (GeometryCandidate, Vec<Extent>)> {
    (0..GEOMETRY_CANDIDATES.len()).prop_flat_map(|index| {
        let generator = GEOMETRY_CANDIDATES[index];
        prop::collection::vec(
            extent_strategy(generator.heads, generator.sectors_per_track),
            1..=4,
        )
        .prop_map(move |extents| (generator, extents))
    })
}

fn pack_chs(chs: ChsAddress) -> [u8; 3] {
    [
        chs.head,
        (chs.sector & 0x3F) | ((chs.cylinder >> 2) & 0xC0) as u8,
        (chs.cylinder & 0xFF) as u8,
    ]
}

fn sector_with_extents(extents: &[Extent], generator: GeometryCandidate) -> [u8; SECTOR_SIZE] {
    let heads = generator.heads;
    let spt = generator.sectors_per_track;
    let mut sector = [0u8; SECTOR_SIZE];
    sector[SECTOR_SIZE - 2] = 0x55;
    sector[SECTOR_SIZE - 1] = 0xAA;
    for (slot, extent) in extents.iter().enumerate() {
        let start_lba = extent.start.to_lba(heads, spt);
        let last_lba = extent.end.to_lba(heads, spt);
        let offset = PARTITION_TABLE_OFFSET + slot * 16;
        let entry = &mut sector[offset..offset + 16];
        entry[1..4].copy_from_slice(&pack_chs(extent.start));
        entry[4] = 0x06;
        entry[5..8].copy_from_slice(&pack_chs(extent.end));
        entry[8..12].copy_from_slice(&start_lba.to_le_bytes());
        entry[12..16].copy_from_slice(&(last_lba - start_lba + 1).to_le_bytes());
    }
    sector
}

proptest! {
    /// Whatever candidate wins, it must reproduce every stored CHS/LBA pair
    /// exactly; the generating geometry guarantees at least one fits.
    #[test]
    fn winning_geometry_reproduces_every_stored_pair(
        (generator, extents) in table_strategy(),
    ) {
        let sector = sector_with_extents(&extents, generator);
        let table = PartitionTable::parse(&sector);

        let max_last = extents
            .iter()
            .map(|extent| extent.end.to_lba(generator.heads, generator.sectors_per_track))
            .max()
            .expect("at least one extent is generated");
        let image_bytes = (u64::from(max_last) + 1) * SECTOR_SIZE as u64;

        let geometry = infer_geometry(&table, image_bytes)
            .expect("the generating geometry always remains plausible");
        for entry in table.entries().iter().filter(|entry| entry.in_use()) {
            let start = entry.start_chs.expect("generated start CHS is always valid");
            prop_assert_eq!(
                start.to_lba(geometry.heads, geometry.sectors_per_track),
                entry.lba_start
            );
            let end = entry.end_chs.expect("generated end CHS is always valid");
            prop_assert_eq!(
                end.to_lba(geometry.heads, geometry.sectors_per_track),
                entry.lba_start + entry.lba_sectors - 1
            );
        }
    }
}
