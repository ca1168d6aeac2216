use tracing::{debug, warn};
use zune_inflate::{DeflateDecoder, DeflateOptions};
use crate::{byte_slice::ByteSlice, decode::{decode, DecodeStatus, Decoded}, error::{Error, HeaderError}, options::{DecodeOptions, PayloadHint}};

pub const MAGIC: &[u8; 8] = b"YKCMP_V1";
pub const HEADER_SIZE: usize = 0x14;
/// every container seen in the wild carries this version
pub const KNOWN_VERSION: u32 = 4;

// magic[8] version[4] archive_size[4] output_size[4], all little endian
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
	pub version: u32,
	/// header plus payload
	pub archive_size: u32,
	pub output_size: u32
}

impl Header {
	pub fn parse(bytes: &[u8]) -> Result<Self, HeaderError> {
		let too_short = HeaderError::TooShort {available: bytes.len()};
		let magic: [u8; 8] = bytes.get_array_at(0).ok_or(too_short.clone())?;
		if &magic != MAGIC {
			return Err(HeaderError::BadMagic(magic));
		}
		let (Some(version), Some(archive_size), Some(output_size)) = (bytes.get_u32_at(0x08), bytes.get_u32_at(0x0C), bytes.get_u32_at(0x10)) else {
			return Err(too_short);
		};
		if (archive_size as usize) < HEADER_SIZE {
			return Err(HeaderError::ArchiveTooSmall(archive_size));
		}
		Ok(Self {version, archive_size, output_size})
	}

	pub fn payload_size(&self) -> usize {
		self.archive_size as usize - HEADER_SIZE
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadKind {
	/// token stream, as shipped with the games
	Tokens,
	/// repacked by modding tools with plain zlib
	Zlib
}

/// A validated container borrowing its payload from the host buffer.
#[derive(Clone, Copy, Debug)]
pub struct Container<'a> {
	pub header: Header,
	pub payload: &'a [u8]
}

#[derive(Clone, Debug)]
pub struct Decompressed {
	pub header: Header,
	pub method: PayloadKind,
	pub decoded: Decoded
}

impl<'a> Container<'a> {
	pub fn parse(host: &'a [u8]) -> Result<Self, HeaderError> {
		Self::parse_at(host, 0)
	}

	/// Validates the header found at `start` in `host`.
	///
	/// The payload is exactly the `archive_size - 20` bytes after the header, anything past that in
	/// `host` is ignored.
	pub fn parse_at(host: &'a [u8], start: usize) -> Result<Self, HeaderError> {
		let bytes = host.get(start..).unwrap_or_default();
		let header = Header::parse(bytes)?;
		let expected = header.payload_size();
		let payload = bytes.get(HEADER_SIZE..HEADER_SIZE + expected).ok_or(HeaderError::Truncated {
			expected,
			available: bytes.len() - HEADER_SIZE
		})?;
		Ok(Self {header, payload})
	}

	pub fn payload_kind(&self) -> PayloadKind {
		if looks_like_zlib(self.payload) {
			PayloadKind::Zlib
		} else {
			PayloadKind::Tokens
		}
	}

	pub fn decompress(&self, options: &DecodeOptions) -> Result<Decompressed, Error> {
		let header = self.header;
		match options.required_version {
			Some(required) if required != header.version => {
				return Err(Error::UnsupportedVersion {found: header.version, required});
			}
			None if header.version != KNOWN_VERSION => {
				warn!(version = header.version, "unexpected YKCMP_V1 format version, decoding anyway");
			}
			_ => {}
		}
		if header.output_size as usize > options.max_output_size {
			return Err(Error::OutputTooLarge {size: header.output_size, limit: options.max_output_size});
		}

		let (method, decoded) = match (options.payload, self.payload_kind()) {
			(PayloadHint::Tokens, _) | (PayloadHint::Auto, PayloadKind::Tokens) => {
				(PayloadKind::Tokens, decode(self.payload, header.output_size))
			}
			(PayloadHint::Zlib, _) => {
				(PayloadKind::Zlib, inflate(self.payload, header.output_size, options.max_output_size).map_err(Error::Inflate)?)
			}
			(PayloadHint::Auto, PayloadKind::Zlib) => match inflate(self.payload, header.output_size, options.max_output_size) {
				Ok(decoded) => (PayloadKind::Zlib, decoded),
				Err(msg) => {
					debug!(error = %msg, "payload looked like zlib but did not inflate, decoding as tokens");
					(PayloadKind::Tokens, decode(self.payload, header.output_size))
				}
			}
		};

		if decoded.status == DecodeStatus::Short && !options.allow_short {
			return Err(Error::ShortDecode {expected: header.output_size, actual: decoded.decoded_len});
		}
		Ok(Decompressed {header, method, decoded})
	}
}

fn looks_like_zlib(payload: &[u8]) -> bool {
	let Some(cmf_flg) = payload.get_u16_at_be(0) else {
		return false;
	};
	let cmf = cmf_flg >> 8;
	// deflate, window <= 32K, no preset dictionary, valid check bits
	cmf & 0x0F == 8 && cmf >> 4 <= 7 && cmf_flg & 0x20 == 0 && cmf_flg % 31 == 0
}

fn inflate(payload: &[u8], output_size: u32, limit: usize) -> Result<Decoded, String> {
	let output_size = output_size as usize;
	let mut data = DeflateDecoder::new_with_options(
		payload,
		DeflateOptions::default().set_limit(limit).set_size_hint(output_size)
	).decode_zlib().map_err(|e| format!("{e}"))?;
	let produced = data.len();
	if produced > output_size {
		debug!(extra = produced - output_size, "zlib payload inflates past the declared size, truncating");
	}
	data.resize(output_size, 0);
	Ok(Decoded {
		data: data.into_boxed_slice(),
		decoded_len: produced.min(output_size) as u32,
		status: if produced >= output_size {DecodeStatus::Complete} else {DecodeStatus::Short},
		consumed: payload.len(),
		zero_filled: 0
	})
}
