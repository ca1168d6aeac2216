use tracing::debug;
use crate::token::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStatus {
	/// the output was filled to its declared size
	Complete,
	/// the input ran out first, the rest of the output is zero
	Short
}

/// Output of a single decode call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
	/// always exactly the requested output size
	pub data: Box<[u8]>,
	/// bytes produced by tokens before the loop stopped
	pub decoded_len: u32,
	pub status: DecodeStatus,
	/// payload bytes read
	pub consumed: usize,
	/// bytes written as zero because a back-reference pointed before the start of the output
	pub zero_filled: usize
}

impl Decoded {
	pub fn is_complete(&self) -> bool {
		self.status == DecodeStatus::Complete
	}
}

/// Decodes a YKCMP_V1 token stream into a buffer of exactly `output_size` bytes.
///
/// Never fails: truncated input gives a [`DecodeStatus::Short`] result with a zero-filled tail,
/// and back-references reaching before the start of the output read as zero.
pub fn decode(input: &[u8], output_size: u32) -> Decoded {
	TokenDecoder {
		input,
		out: vec![0u8; output_size as usize].into_boxed_slice(),
		read_pos: 0,
		write_pos: 0,
		zero_filled: 0
	}.run()
}

struct TokenDecoder<'a> {
	input: &'a [u8],
	out: Box<[u8]>,
	read_pos: usize,
	write_pos: usize,
	zero_filled: usize
}

impl TokenDecoder<'_> {
	fn run(mut self) -> Decoded {
		while self.read_pos < self.input.len() && self.write_pos < self.out.len() {
			let Some(token) = Token::read(&self.input[self.read_pos..]) else {
				debug!(read_pos = self.read_pos, write_pos = self.write_pos, "token stream ends inside a copy opcode");
				break;
			};
			self.read_pos += token.size();
			match token {
				Token::Nop => {}
				Token::Literal {len} => self.copy_literal(len),
				Token::Copy {length, distance, ..} => self.copy_back(length, distance)
			}
		}
		self.finish()
	}

	fn copy_literal(&mut self, len: usize) {
		let len = len
			.min(self.input.len() - self.read_pos)
			.min(self.out.len() - self.write_pos);
		self.out[self.write_pos..self.write_pos + len].copy_from_slice(&self.input[self.read_pos..self.read_pos + len]);
		self.read_pos += len;
		self.write_pos += len;
	}

	// must go byte by byte, a distance shorter than the length re-reads bytes written by this same copy
	fn copy_back(&mut self, length: usize, distance: usize) {
		let zero_filled_before = self.zero_filled;
		for _ in 0..length {
			if self.write_pos >= self.out.len() {
				break;
			}
			self.out[self.write_pos] = match self.write_pos.checked_sub(distance) {
				Some(src) => self.out[src],
				None => {
					self.zero_filled += 1;
					0
				}
			};
			self.write_pos += 1;
		}
		if self.zero_filled > zero_filled_before {
			debug!(
				write_pos = self.write_pos,
				distance,
				substituted = self.zero_filled - zero_filled_before,
				"back-reference reaches before the start of the output, writing zeros"
			);
		}
	}

	fn finish(self) -> Decoded {
		let status = if self.write_pos == self.out.len() {
			DecodeStatus::Complete
		} else {
			DecodeStatus::Short
		};
		if status == DecodeStatus::Complete && self.read_pos < self.input.len() {
			debug!(unread = self.input.len() - self.read_pos, "output filled before the end of the token stream");
		}
		Decoded {
			data: self.out,
			// bounded by the u32 output size
			decoded_len: self.write_pos as u32,
			status,
			consumed: self.read_pos,
			zero_filled: self.zero_filled
		}
	}
}
