macro_rules! impl_byte_readers {
	($($t:ty),*) => {paste::paste! {$(
		fn [<get_ $t _at>](&self, offset: usize) -> Option<$t> {
			Some($t::from_le_bytes(self.get_array_at(offset)?))
		}
		fn [<get_ $t _at_be>](&self, offset: usize) -> Option<$t> {
			Some($t::from_be_bytes(self.get_array_at(offset)?))
		}
	)*}}
}

/// Bounds-checked integer reads out of a byte slice.
pub trait ByteSlice {
	fn get_array_at<const LEN: usize>(&self, offset: usize) -> Option<[u8; LEN]>;
	fn get_u16_at(&self, offset: usize) -> Option<u16>;
	fn get_u16_at_be(&self, offset: usize) -> Option<u16>;
	fn get_u32_at(&self, offset: usize) -> Option<u32>;
	fn get_u32_at_be(&self, offset: usize) -> Option<u32>;
}

impl ByteSlice for &[u8] {
	fn get_array_at<const LEN: usize>(&self, offset: usize) -> Option<[u8; LEN]> {
		self.get(offset..offset.checked_add(LEN)?)?.try_into().ok()
	}

	impl_byte_readers!(u16, u32);
}
