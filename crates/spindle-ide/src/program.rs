//! Drive parameter programming over the management bus.

use spindle_disk::DriveGeometry;
use spindle_mgmt::{regs, MgmtWrite};

use crate::identify::IdentifyBlock;

/// Pushes a drive's identify block and geometry into the hardware core.
///
/// The identify window consumes 128 packed writes; the discrete registers
/// then receive the uncapped geometry the core translates CHS against.
pub fn program_drive(bus: &mut impl MgmtWrite, geometry: DriveGeometry, identify: &IdentifyBlock) {
    tracing::debug!(
        cylinders = geometry.cylinders,
        heads = geometry.heads,
        sectors_per_track = geometry.sectors_per_track,
        total_sectors = geometry.total_sectors(),
        "programming drive 0"
    );

    for dword in identify.dwords() {
        bus.write_register(regs::HDD_IDENTIFY, dword);
    }
    bus.write_register(regs::HDD_CYLINDERS, geometry.cylinders);
    bus.write_register(regs::HDD_HEADS, u32::from(geometry.heads));
    bus.write_register(
        regs::HDD_SECTORS_PER_TRACK,
        u32::from(geometry.sectors_per_track),
    );
    bus.write_register(regs::HDD_SECTORS_PER_CYLINDER, geometry.sectors_per_cylinder());
    bus.write_register(regs::HDD_TOTAL_SECTORS, geometry.total_sectors());
    bus.write_register(regs::HDD_BASE_SECTOR, 0);
}
