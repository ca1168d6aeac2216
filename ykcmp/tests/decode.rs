mod common;

use common::{container, init_tracing, literals};
use ykcmp::{decode, CopyForm, DecodeStatus, Token};

// tokens for "the quick quick quick brown fox" plus a run of dots
fn sample_tokens() -> Vec<Vec<u8>> {
	vec![
		[&[0x0A][..], b"the quick "].concat(),
		vec![0xCA, 0x05],  // 12 bytes from 6 back
		[&[0x09][..], b"brown fox"].concat(),
		vec![0x01, b'.'],
		vec![0xE0, 0x20, 0x00]  // 5 bytes from 1 back
	]
}

const SAMPLE: &[u8] = b"the quick quick quick brown fox......";

#[test]
fn sample_stream_decodes() {
	init_tracing();
	let stream = sample_tokens().concat();
	let result = decode(&stream, SAMPLE.len() as u32);
	assert_eq!(result.status, DecodeStatus::Complete);
	assert_eq!(&*result.data, SAMPLE);
	assert_eq!(result.consumed, stream.len());
}

#[test]
fn nops_between_any_tokens_are_ignored() {
	let tokens = sample_tokens();
	for gap in 0..=tokens.len() {
		for count in [1, 2, 17] {
			let mut stream = Vec::new();
			for (i, token) in tokens.iter().enumerate() {
				if i == gap {
					stream.extend(std::iter::repeat_n(0u8, count));
				}
				stream.extend_from_slice(token);
			}
			if gap == tokens.len() {
				stream.extend(std::iter::repeat_n(0u8, count));
			}
			let result = decode(&stream, SAMPLE.len() as u32);
			assert_eq!(&*result.data, SAMPLE, "nops at token {gap}, {count} of them");
			assert!(result.is_complete());
		}
	}
}

#[test]
fn literal_only_streams_round_trip() {
	for len in [0usize, 1, 126, 127, 128, 254, 255, 4096] {
		let data = (0..len).map(|i| (i as u8).wrapping_mul(31) ^ 0x5C).collect::<Vec<_>>();
		let result = decode(&literals(&data), len as u32);
		assert_eq!(result.status, DecodeStatus::Complete, "length {len}");
		assert_eq!(&*result.data, &data[..]);
	}
}

#[test]
fn run_expansion_from_distance_one() {
	for length in 2..=33usize {
		let stream = [0x01, 0x42, 0xC0 | (length - 2) as u8, 0x00];
		let result = decode(&stream, 1 + length as u32);
		assert!(result.is_complete());
		assert!(result.data.iter().all(|&b| b == 0x42));
	}
}

#[test]
fn short_decode_prefix_matches_full_decode() {
	init_tracing();
	let stream = sample_tokens().concat();
	// cut inside the second literal run
	let cut = 11 + 2 + 1 + 3;
	let result = decode(&stream[..cut], SAMPLE.len() as u32);
	assert_eq!(result.status, DecodeStatus::Short);
	let produced = result.decoded_len as usize;
	assert_eq!(produced, 10 + 12 + 3);
	assert_eq!(&result.data[..produced], &SAMPLE[..produced]);
	assert!(result.data[produced..].iter().all(|&b| b == 0));
	assert_eq!(result.data.len(), SAMPLE.len());
}

#[test]
fn documented_short_scenario() {
	let result = decode(&[0x03, b'a', b'b', b'c', 0x81, 0x02], 6);
	assert_eq!(result.status, DecodeStatus::Short);
	assert_eq!(result.decoded_len, 4);
	assert_eq!(&*result.data, b"abcb\0\0");
}

#[test]
fn boundary_opcodes() {
	let expect = |bytes: &[u8], form, length, distance| {
		assert_eq!(Token::read(bytes), Some(Token::Copy {form, length, distance}), "{bytes:02X?}");
	};
	expect(&[0x80], CopyForm::Short, 1, 1);
	expect(&[0xBF], CopyForm::Short, 4, 16);
	expect(&[0xC0, 0x00], CopyForm::Medium, 2, 1);
	expect(&[0xE0, 0x00, 0x00], CopyForm::Long, 3, 1);
}

#[test]
fn corrupt_reference_still_fills_the_buffer() {
	init_tracing();
	// long copy reaching 4096 bytes back at the very start
	let result = decode(&[0xEF, 0xFF, 0xFF], 64);
	assert!(result.is_complete());
	assert_eq!(result.zero_filled, 64);
	assert!(result.data.iter().all(|&b| b == 0));
}

#[test]
fn container_payload_uses_declared_size() {
	let payload = sample_tokens().concat();
	let buf = container(4, &payload, SAMPLE.len() as u32);
	let container = ykcmp::Container::parse(&buf).unwrap();
	assert_eq!(container.header.output_size as usize, SAMPLE.len());
	assert_eq!(container.payload, &payload[..]);
	let direct = decode(container.payload, container.header.output_size);
	assert_eq!(&*direct.data, SAMPLE);
}
