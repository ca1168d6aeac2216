use std::{fs::File, io::{self, BufReader, Read, Seek, SeekFrom}, path::{Path, PathBuf}};

/// Input bytes, either already in memory or read from disk on first use.
pub enum FileData {
	Memory {
		buf: Box<[u8]>
	},
	Stream {
		path: PathBuf,
		file: Option<BufReader<File>>,
		size: usize
	}
}

impl FileData {
	pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
		let path = path.as_ref().to_path_buf();
		let size = usize::try_from(path.metadata()?.len()).map_err(|_| io::Error::other("file too large to address"))?;
		Ok(Self::Stream {path, file: None, size})
	}

	pub fn len(&self) -> usize {
		match self {
			Self::Memory {buf} => buf.len(),
			Self::Stream {size, ..} => *size
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn starts_with_at(&mut self, needle: &[u8], offset: usize) -> bool {
		let mut sig = vec![0u8; needle.len()];
		self.read_chunk_exact(&mut sig, offset).is_ok() && sig == needle
	}

	pub fn starts_with(&mut self, needle: &[u8]) -> bool {
		self.starts_with_at(needle, 0)
	}

	pub fn read_chunk_exact(&mut self, out_buf: &mut [u8], chunk_start: usize) -> io::Result<()> {
		let out_of_bounds = || io::Error::new(io::ErrorKind::UnexpectedEof, "chunk lies past the end of the data");
		let chunk_end = chunk_start.checked_add(out_buf.len()).ok_or_else(out_of_bounds)?;
		match self {
			Self::Memory {buf} => {
				out_buf.copy_from_slice(buf.get(chunk_start..chunk_end).ok_or_else(out_of_bounds)?);
			}
			Self::Stream {path, file, size} => {
				if chunk_end > *size {
					return Err(out_of_bounds());
				}
				let file = match file {
					Some(file) => file,
					slot => slot.insert(BufReader::new(File::open(&*path)?))
				};
				file.seek(SeekFrom::Start(chunk_start as u64))?;
				file.read_exact(out_buf)?;
			}
		}
		Ok(())
	}

	/// Loads the whole input into memory if it isn't already.
	pub fn read(&mut self) -> io::Result<&[u8]> {
		if let Self::Stream {path, size, ..} = self {
			let mut buf = vec![0u8; *size];
			File::open(&*path)?.read_exact(&mut buf)?;
			*self = Self::Memory {buf: buf.into_boxed_slice()};
		}
		match self {
			Self::Memory {buf} => Ok(&buf[..]),
			Self::Stream {..} => unreachable!()
		}
	}
}

impl From<Box<[u8]>> for FileData {
	fn from(buf: Box<[u8]>) -> Self {
		Self::Memory {buf}
	}
}

impl From<Vec<u8>> for FileData {
	fn from(buf: Vec<u8>) -> Self {
		Self::Memory {buf: buf.into_boxed_slice()}
	}
}

impl Clone for FileData {
	fn clone(&self) -> Self {
		match self {
			Self::Memory {buf} => Self::Memory {buf: buf.clone()},
			Self::Stream {path, size, ..} => Self::Stream {
				path: path.clone(),
				file: None,
				size: *size
			}
		}
	}
}
