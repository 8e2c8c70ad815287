use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiskError>;

/// Errors raised while acquiring a disk image's boot sector.
///
/// Geometry inference itself never fails: once a boot sector is in hand the
/// engine always produces either a geometry or the no-fit outcome.
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("image too small for a boot sector: {size} bytes")]
    TooSmall { size: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
