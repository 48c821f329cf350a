use std::io::{self, Read, Seek, SeekFrom};

const CHUNK_SIZE: u64 = 1024;

/// Reads a seekable source line by line, starting from the end.
///
/// Only the tail that has been scanned so far is held in memory, so the
/// cost of a pass is proportional to how far back the caller reads, not to
/// the size of the source.
pub struct ReverseLines<R> {
    reader: R,
    pos: u64,
    buf: Vec<u8>,
    done: bool,
}

impl<R: Read + Seek> ReverseLines<R> {
    /// Wraps `reader`, taking its current length as the starting position.
    pub fn new(mut reader: R) -> io::Result<Self> {
        let len = reader.seek(SeekFrom::End(0))?;
        Ok(Self::with_len(reader, len))
    }

    fn with_len(reader: R, len: u64) -> Self {
        Self {
            reader,
            pos: len,
            buf: Vec::new(),
            done: false,
        }
    }

    /// Returns the previous line without its terminator, or `None` once the
    /// first byte of the source has been consumed.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        loop {
            if let Some(idx) = self.buf.iter().rposition(|&b| b == b'\n') {
                let line = decode(&self.buf[idx + 1..]);
                self.buf.truncate(idx);
                return Ok(Some(line));
            }
            if self.pos == 0 {
                self.done = true;
                if self.buf.is_empty() {
                    return Ok(None);
                }
                let line = decode(&self.buf);
                self.buf.clear();
                return Ok(Some(line));
            }
            self.read_chunk()?;
        }
    }

    fn read_chunk(&mut self) -> io::Result<()> {
        let size = CHUNK_SIZE.min(self.pos);
        let start = self.pos - size;
        let mut chunk = vec![0u8; size as usize];
        self.reader.seek(SeekFrom::Start(start))?;
        self.reader.read_exact(&mut chunk)?;
        // Advance only after a successful read.
        self.pos = start;
        chunk.extend_from_slice(&self.buf);
        self.buf = chunk;
        Ok(())
    }
}

impl<R: Read + Seek> Iterator for ReverseLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
