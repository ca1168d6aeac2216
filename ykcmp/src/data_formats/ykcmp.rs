use tracing::warn;
use crate::{container::{Container, MAGIC}, decode::DecodeStatus, file_data::FileData, options::DecodeOptions, Certainty, Decoder};

pub const ENTRY_YKCMP: Decoder<Box<[u8]>> = Decoder {
	id: "ykcmp",
	desc: "YKCMP_V1 compressed container used by Nippon Ichi titles",
	detect: |data| Certainty::certain_if(data.starts_with(MAGIC)),
	decode
};

fn decode(data: &mut FileData) -> Result<Box<[u8]>, String> {
	let bytes = data.read().map_err(|e| format!("could not read container: {e}"))?;
	let container = Container::parse(bytes).map_err(|e| e.to_string())?;
	let out = container.decompress(&DecodeOptions::default()).map_err(|e| e.to_string())?;
	if out.decoded.status == DecodeStatus::Short {
		warn!(
			expected = out.header.output_size,
			actual = out.decoded.decoded_len,
			"container decoded short, the tail is zero-filled"
		);
	}
	Ok(out.decoded.data)
}
