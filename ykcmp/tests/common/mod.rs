#![allow(dead_code)]

use ykcmp::{HEADER_SIZE, MAGIC};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::DEBUG)
		.with_test_writer()
		.try_init();
}

pub fn container(version: u32, payload: &[u8], output_size: u32) -> Vec<u8> {
	let mut buf = MAGIC.to_vec();
	buf.extend_from_slice(&version.to_le_bytes());
	buf.extend_from_slice(&((HEADER_SIZE + payload.len()) as u32).to_le_bytes());
	buf.extend_from_slice(&output_size.to_le_bytes());
	buf.extend_from_slice(payload);
	buf
}

/// Token stream made only of literal runs.
pub fn literals(data: &[u8]) -> Vec<u8> {
	let mut stream = Vec::new();
	for chunk in data.chunks(0x7F) {
		stream.push(chunk.len() as u8);
		stream.extend_from_slice(chunk);
	}
	stream
}

pub fn zlib_stored(data: &[u8]) -> Vec<u8> {
	let (mut a, mut b) = (1u32, 0u32);
	for &x in data {
		a = (a + x as u32) % 65521;
		b = (b + a) % 65521;
	}
	let len = data.len() as u16;
	let mut buf = vec![0x78, 0x01, 0x01];
	buf.extend_from_slice(&len.to_le_bytes());
	buf.extend_from_slice(&(!len).to_le_bytes());
	buf.extend_from_slice(data);
	buf.extend_from_slice(&(b << 16 | a).to_be_bytes());
	buf
}
