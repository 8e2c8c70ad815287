//! One-shot acquisition of the inputs the geometry engine needs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{DiskError, Result};
use crate::SECTOR_SIZE;

/// A disk image's boot sector plus its byte size, captured up front so the
/// rest of the pipeline stays free of I/O.
#[derive(Debug, Clone)]
pub struct DiskImage {
    boot_sector: [u8; SECTOR_SIZE],
    size_bytes: u64,
}

impl DiskImage {
    /// Wraps an already-acquired boot sector. `size_bytes` is the size of
    /// the whole image, not of the sector.
    pub fn new(boot_sector: [u8; SECTOR_SIZE], size_bytes: u64) -> Self {
        Self { boot_sector, size_bytes }
    }

    /// Reads the boot sector of the image file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path)?;
        let size_bytes = file.metadata()?.len();
        if size_bytes < SECTOR_SIZE as u64 {
            return Err(DiskError::TooSmall { size: size_bytes });
        }
        let mut boot_sector = [0u8; SECTOR_SIZE];
        file.read_exact(&mut boot_sector)?;
        Ok(Self::new(boot_sector, size_bytes))
    }

    /// Wraps an in-memory image (the whole image, not just its boot sector).
    pub fn from_bytes(image: &[u8]) -> Result<Self> {
        if image.len() < SECTOR_SIZE {
            return Err(DiskError::TooSmall { size: image.len() as u64 });
        }
        let mut boot_sector = [0u8; SECTOR_SIZE];
        boot_sector.copy_from_slice(&image[..SECTOR_SIZE]);
        Ok(Self::new(boot_sector, image.len() as u64))
    }

    pub fn boot_sector(&self) -> &[u8; SECTOR_SIZE] {
        &self.boot_sector
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn open_reads_sector_and_size() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        let mut image = vec![0u8; 4096];
        image[0] = 0xEB;
        image[510] = 0x55;
        image[511] = 0xAA;
        tmp.write_all(&image).unwrap();
        tmp.flush().unwrap();

        let disk = DiskImage::open(tmp.path()).unwrap();
        assert_eq!(disk.size_bytes(), 4096);
        assert_eq!(disk.boot_sector()[0], 0xEB);
        assert_eq!(disk.boot_sector()[511], 0xAA);
    }

    #[test]
    fn short_files_are_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[0u8; 100]).unwrap();
        tmp.flush().unwrap();

        match DiskImage::open(tmp.path()) {
            Err(DiskError::TooSmall { size: 100 }) => {}
            other => panic!("expected TooSmall, got {other:?}"),
        }
    }

    #[test]
    fn missing_files_surface_the_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.img");
        assert!(matches!(DiskImage::open(&missing), Err(DiskError::Io(_))));
    }

    #[test]
    fn in_memory_images_need_a_full_sector() {
        assert!(DiskImage::from_bytes(&[0u8; 511]).is_err());
        let disk = DiskImage::from_bytes(&[0u8; 2048]).unwrap();
        assert_eq!(disk.size_bytes(), 2048);
    }
}
