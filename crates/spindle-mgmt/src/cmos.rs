//! CMOS seed values.
//!
//! The BIOS reads its equipment list, memory size, and RTC date out of CMOS
//! during POST; the bring-up path writes those cells through the management
//! bus before releasing reset.

use crate::{regs, MgmtWrite};

const CELL_RTC_DAY: u8 = 0x07;
const CELL_RTC_MONTH: u8 = 0x08;
const CELL_RTC_YEAR: u8 = 0x09;
const CELL_FLOPPY_TYPE: u8 = 0x10;
const CELL_EQUIPMENT: u8 = 0x14;
const CELL_EXT_MEMORY_LO: u8 = 0x30;
const CELL_EXT_MEMORY_HI: u8 = 0x31;
const CELL_RTC_CENTURY: u8 = 0x32;

/// Drive A floppy type, stored in the high nibble of cell 0x10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloppyA {
    None,
    F360K,
    F1200K,
    F720K,
    F1440K,
    F2880K,
}

impl FloppyA {
    fn type_nibble(self) -> u8 {
        match self {
            FloppyA::None => 0,
            FloppyA::F360K => 1,
            FloppyA::F1200K => 2,
            FloppyA::F720K => 3,
            FloppyA::F1440K => 4,
            FloppyA::F2880K => 5,
        }
    }
}

/// RTC date in calendar terms; written out as BCD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmosDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// Everything the firmware expects to find in CMOS at power-on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmosSettings {
    /// Extended (above 1 MiB) memory in KiB, cells 0x30/0x31.
    pub extended_memory_kib: u16,
    pub floppy_a: FloppyA,
    pub date: CmosDate,
}

impl Default for CmosSettings {
    fn default() -> Self {
        Self {
            extended_memory_kib: 1024,
            floppy_a: FloppyA::F1200K,
            date: CmosDate { year: 2024, month: 1, day: 1 },
        }
    }
}

fn bcd(value: u8) -> u8 {
    debug_assert!(value < 100);
    (value / 10) << 4 | (value % 10)
}

/// Seeds the CMOS cells the BIOS consults during POST.
pub fn program_cmos(bus: &mut impl MgmtWrite, settings: &CmosSettings) {
    tracing::debug!(
        extended_memory_kib = settings.extended_memory_kib,
        floppy_a = ?settings.floppy_a,
        "seeding cmos"
    );

    let mut cell = |index: u8, value: u8| {
        bus.write_register(regs::CMOS_BASE + u16::from(index), u32::from(value));
    };

    cell(CELL_EXT_MEMORY_LO, (settings.extended_memory_kib & 0xFF) as u8);
    cell(CELL_EXT_MEMORY_HI, (settings.extended_memory_kib >> 8) as u8);

    let equipment = match settings.floppy_a {
        FloppyA::None => 0x00,
        // One diskette drive installed.
        _ => 0x01,
    };
    cell(CELL_EQUIPMENT, equipment);
    cell(CELL_FLOPPY_TYPE, settings.floppy_a.type_nibble() << 4);

    cell(CELL_RTC_YEAR, bcd((settings.date.year % 100) as u8));
    cell(CELL_RTC_MONTH, bcd(settings.date.month));
    cell(CELL_RTC_DAY, bcd(settings.date.day));
    cell(CELL_RTC_CENTURY, bcd((settings.date.year / 100) as u8));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(u16, u32)>);

    impl MgmtWrite for Recorder {
        fn write_register(&mut self, address: u16, value: u32) {
            self.0.push((address, value));
        }
    }

    #[test]
    fn default_seed_matches_the_firmware_expectations() {
        let mut bus = Recorder::default();
        program_cmos(&mut bus, &CmosSettings::default());
        assert_eq!(
            bus.0,
            vec![
                (0xF430, 0x00), // 1024 KiB extended memory, low byte
                (0xF431, 0x04), // high byte
                (0xF414, 0x01), // equipment: one diskette drive
                (0xF410, 0x20), // drive A: 1.2M
                (0xF409, 0x24), // year (BCD)
                (0xF408, 0x01), // month
                (0xF407, 0x01), // day
                (0xF432, 0x20), // century (BCD)
            ]
        );
    }

    #[test]
    fn no_floppy_clears_equipment_and_type() {
        let mut bus = Recorder::default();
        let settings = CmosSettings { floppy_a: FloppyA::None, ..Default::default() };
        program_cmos(&mut bus, &settings);
        assert!(bus.0.contains(&(0xF414, 0x00)));
        assert!(bus.0.contains(&(0xF410, 0x00)));
    }

    #[test]
    fn bcd_encoding() {
        assert_eq!(bcd(0), 0x00);
        assert_eq!(bcd(9), 0x09);
        assert_eq!(bcd(10), 0x10);
        assert_eq!(bcd(59), 0x59);
        assert_eq!(bcd(99), 0x99);
    }

    #[test]
    fn date_cells_are_bcd_encoded() {
        let mut bus = Recorder::default();
        let settings = CmosSettings {
            date: CmosDate { year: 1997, month: 12, day: 31 },
            ..Default::default()
        };
        program_cmos(&mut bus, &settings);
        assert!(bus.0.contains(&(0xF409, 0x97)));
        assert!(bus.0.contains(&(0xF408, 0x12)));
        assert!(bus.0.contains(&(0xF407, 0x31)));
        assert!(bus.0.contains(&(0xF432, 0x19)));
    }
}
