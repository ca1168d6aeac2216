/// Which of the three back-reference encodings a copy token came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyForm {
	/// `0x80..=0xBF`, length and distance packed into the control byte
	Short,
	/// `0xC0..=0xDF`, one operand byte holding the distance
	Medium,
	/// `0xE0..=0xFF`, two operand bytes sharing length and distance bits
	Long
}

impl CopyForm {
	pub const fn size(self) -> usize {
		match self {
			Self::Short => 1,
			Self::Medium => 2,
			Self::Long => 3
		}
	}
}

/// One decoded control byte of a YKCMP_V1 token stream, with its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
	Nop,
	/// `len` raw bytes follow the control byte
	Literal {len: usize},
	/// copy `length` bytes starting `distance` bytes behind the write cursor
	Copy {form: CopyForm, length: usize, distance: usize}
}

impl Token {
	/// Parses the token at the start of `bytes`.
	///
	/// Returns `None` if `bytes` is empty or the operand bytes of a medium or long copy are cut off.
	pub fn read(bytes: &[u8]) -> Option<Self> {
		let a = *bytes.first()? as usize;
		Some(match a {
			0x00 => Self::Nop,
			0x01..=0x7F => Self::Literal {len: a},
			0x80..=0xBF => Self::Copy {
				form: CopyForm::Short,
				length: (a >> 4 & 0x03) + 1,
				distance: (a & 0x0F) + 1
			},
			0xC0..=0xDF => {
				let b = *bytes.get(1)? as usize;
				Self::Copy {
					form: CopyForm::Medium,
					length: (a & 0x3F) + 2,
					distance: b + 1
				}
			}
			_ => {
				let b = *bytes.get(1)? as usize;
				let c = *bytes.get(2)? as usize;
				Self::Copy {
					form: CopyForm::Long,
					length: ((a & 0x1F) << 4 | b >> 4) + 3,
					distance: ((b & 0x0F) << 8 | c) + 1
				}
			}
		})
	}

	/// Control and operand bytes taken by this token, not counting literal payload.
	pub const fn size(&self) -> usize {
		match self {
			Self::Nop | Self::Literal {..} => 1,
			Self::Copy {form, ..} => form.size()
		}
	}
}
