//! Decoder for YKCMP_V1 containers, the compressed wrapper around game assets in several
//! Nippon Ichi titles.
//!
//! [`decode()`] runs the raw token stream. [`Container`] validates the 20 byte header in front of it
//! and picks between the token stream and the zlib payloads written by repacking tools.

use file_data::FileData;

pub mod file_data;
pub mod byte_slice;
mod token;
pub use token::{CopyForm, Token};
mod decode;
pub use decode::{decode, DecodeStatus, Decoded};
mod container;
pub use container::{Container, Decompressed, Header, PayloadKind, HEADER_SIZE, KNOWN_VERSION, MAGIC};
mod options;
pub use options::{DecodeOptions, PayloadHint};
mod error;
pub use error::{Error, HeaderError};
mod batch;
pub use batch::decompress_all;
mod data_formats;
pub use data_formats::DATA_DECODERS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Certainty {
	Impossible,
	Possible,
	Certain
}

impl Certainty {
	pub const fn certain_if(cond: bool) -> Self {
		if cond {
			Self::Certain
		} else {
			Self::Impossible
		}
	}

	pub const fn possible_if(cond: bool) -> Self {
		if cond {
			Self::Possible
		} else {
			Self::Impossible
		}
	}
}

/// A detectable input format and how to decode it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Decoder<T> {
	id: &'static str,
	desc: &'static str,
	detect: fn(data: &mut FileData) -> Certainty,
	decode: fn(data: &mut FileData) -> Result<T, String>
}

impl<T> Decoder<T> {
	pub fn id(&self) -> &'static str {
		self.id
	}

	pub fn desc(&self) -> &'static str {
		self.desc
	}

	pub fn detect(&self, data: &mut FileData) -> Certainty {
		(self.detect)(data)
	}
}

/// Runs the first registered decoder that recognizes `data`, returning its id and output.
///
/// Decoders that are only possibly right are tried after all certain matches, and their errors
/// are swallowed.
pub fn auto_decode(data: &mut FileData) -> Result<(&'static str, Box<[u8]>), String> {
	for decoder in DATA_DECODERS.iter() {
		if let Certainty::Certain = (decoder.detect)(data) {
			return (decoder.decode)(data)
				.map(|x| (decoder.id, x))
				.map_err(|msg| {
					if msg.is_empty() {
						format!("unspecified error from {}", decoder.id)
					} else {
						format!("error from {}: {}", decoder.id, msg)
					}
				});
		}
	}
	for decoder in DATA_DECODERS.iter() {
		if let Certainty::Possible = (decoder.detect)(data) {
			if let Ok(x) = (decoder.decode)(data) {
				return Ok((decoder.id, x));
			}
		}
	}
	Err("no known format detected".into())
}
