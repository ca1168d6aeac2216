use std::sync::LazyLock;
use super::Decoder;

mod ykcmp;

pub static DATA_DECODERS: LazyLock<Vec<Decoder<Box<[u8]>>>> = LazyLock::new(|| [
	ykcmp::ENTRY_YKCMP
].into());
