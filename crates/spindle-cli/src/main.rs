#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spindle_disk::{infer_geometry, plausible_geometries, DiskImage, PartitionTable};
use spindle_ide::{program_drive, IdentifyBlock};
use spindle_mgmt::{program_cmos, CmosSettings, MgmtWrite};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Infer BIOS CHS geometry from a disk image and build its IDENTIFY block")]
struct Args {
    /// Disk image to analyze (raw, MBR-partitioned).
    #[arg(long)]
    disk: PathBuf,

    /// Print the 256 identify words as a hex table.
    #[arg(long)]
    dump_identify: bool,

    /// Print every management-register write (CMOS seed plus drive setup)
    /// in issue order.
    #[arg(long)]
    dump_writes: bool,

    /// Extended memory (above 1 MiB) to seed into CMOS, in KiB.
    #[arg(long, default_value_t = 1024)]
    ext_memory_kib: u16,
}

/// Collects the write stream instead of driving hardware.
#[derive(Default)]
struct WriteLog(Vec<(u16, u32)>);

impl MgmtWrite for WriteLog {
    fn write_register(&mut self, address: u16, value: u32) {
        self.0.push((address, value));
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let image = DiskImage::open(&args.disk)
        .with_context(|| format!("failed to read boot sector of {}", args.disk.display()))?;
    let table = PartitionTable::parse(image.boot_sector());
    if !table.has_boot_signature() {
        tracing::warn!(
            disk = %args.disk.display(),
            "boot sector has no 0x55AA signature; treating it as an MBR anyway"
        );
    }

    let Some(geometry) = infer_geometry(&table, image.size_bytes()) else {
        println!("no CHS geometry fits this partition table (pure-LBA disk)");
        return Ok(());
    };
    tracing::debug!(
        cylinders = geometry.cylinders,
        heads = geometry.heads,
        sectors_per_track = geometry.sectors_per_track,
        "geometry inferred"
    );

    println!(
        "geometry: {} cylinders, {} heads, {} sectors/track ({} sectors total)",
        geometry.cylinders,
        geometry.heads,
        geometry.sectors_per_track,
        geometry.total_sectors()
    );
    let survivors = plausible_geometries(&table)
        .iter()
        .map(|candidate| format!("{}/{}", candidate.heads, candidate.sectors_per_track))
        .collect::<Vec<_>>()
        .join(" ");
    println!("candidates surviving the partition table: {survivors}");

    let identify = IdentifyBlock::for_drive(geometry);
    if args.dump_identify {
        print!("{}", format_identify(&identify));
    }

    if args.dump_writes {
        let mut log = WriteLog::default();
        let cmos = CmosSettings {
            extended_memory_kib: args.ext_memory_kib,
            ..Default::default()
        };
        program_cmos(&mut log, &cmos);
        program_drive(&mut log, geometry, &identify);
        for (address, value) in &log.0 {
            println!("{address:04X} <- {value:08X}");
        }
    }

    Ok(())
}

fn format_identify(identify: &IdentifyBlock) -> String {
    let mut out = String::new();
    for (row, words) in identify.words().chunks(8).enumerate() {
        out.push_str(&format!("{:3}:", row * 8));
        for word in words {
            out.push_str(&format!(" {word:04X}"));
        }
        out.push('\n');
    }
    out
}
