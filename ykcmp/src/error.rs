use thiserror::Error;

/// Problems with the fixed container header, found before any decoding starts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
	#[error("container header needs 20 bytes, only {available} available")]
	TooShort {available: usize},
	#[error("bad magic {0:02X?}, expected YKCMP_V1")]
	BadMagic([u8; 8]),
	#[error("archive size {0} is smaller than the 20 byte header")]
	ArchiveTooSmall(u32),
	#[error("payload truncated, header declares {expected} bytes but only {available} are present")]
	Truncated {expected: usize, available: usize}
}

#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Header(#[from] HeaderError),
	#[error("declared output size {size} exceeds the limit of {limit} bytes")]
	OutputTooLarge {size: u32, limit: usize},
	#[error("format version {found} does not match the required version {required}")]
	UnsupportedVersion {found: u32, required: u32},
	#[error("zlib payload could not be inflated: {0}")]
	Inflate(String),
	#[error("expected {expected} bytes when decompressing, got only {actual}")]
	ShortDecode {expected: u32, actual: u32}
}
