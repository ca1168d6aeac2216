/// How to interpret the bytes following the container header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayloadHint {
	/// inflate payloads that open with a zlib header, falling back to the token decoder if that fails
	#[default]
	Auto,
	Tokens,
	Zlib
}

/// Knobs for [`Container::decompress`](crate::Container::decompress).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
	pub max_output_size: usize,
	pub allow_short: bool,
	pub payload: PayloadHint,
	pub required_version: Option<u32>
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_output_size: 256 * 1024 * 1024,
			allow_short: true,
			payload: PayloadHint::Auto,
			required_version: None
		}
	}
}

impl DecodeOptions {
	/// Rejects containers declaring a larger output before allocating anything.
	pub fn with_max_output_size(mut self, limit: usize) -> Self {
		self.max_output_size = limit;
		self
	}

	/// When disabled, a short decode is returned as [`Error::ShortDecode`](crate::Error::ShortDecode).
	pub fn with_allow_short(mut self, allow: bool) -> Self {
		self.allow_short = allow;
		self
	}

	pub fn with_payload(mut self, payload: PayloadHint) -> Self {
		self.payload = payload;
		self
	}

	pub fn with_required_version(mut self, version: u32) -> Self {
		self.required_version = Some(version);
		self
	}
}
