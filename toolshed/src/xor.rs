//! Repeating key XOR

use std::io::{self, Read, Write};

/// XORs a stream with a key that is repeated as often as needed
///
/// The position within the key carries over from one [Xor::apply] to the
/// next, so a stream can be processed in chunks of any size.
///
/// ```
/// use toolshed::xor::Xor;
///
/// let mut xor = Xor::new(b"ab").unwrap();
/// let mut data = *b"abc";
/// xor.apply(&mut data);
/// assert_eq!(data, [0, 0, b'c' ^ b'a']);
/// ```
#[derive(Debug, Clone)]
pub struct Xor<'k> {
    key: &'k [u8],
    pos: usize,
}

impl<'k> Xor<'k> {
    /// `None` for an empty key
    pub fn new(key: &'k [u8]) -> Option<Self> {
        match key.is_empty() {
            true => None,
            false => Some(Self { key, pos: 0 }),
        }
    }

    pub fn apply(&mut self, data: &mut [u8]) {
        for byte in data {
            *byte ^= self.key[self.pos];
            self.pos = (self.pos + 1) % self.key.len();
        }
    }
}

/// Bytes moved by [xor_stream]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub read: u64,
    pub written: u64,
}

/// XOR everything from `input` with `key` and write it to `output`
pub fn xor_stream<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    xor: &mut Xor<'_>,
) -> io::Result<Counts> {
    let mut buf = [0u8; 8192];
    let mut counts = Counts::default();
    loop {
        let len = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(len) => len,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        counts.read += len as u64;

        xor.apply(&mut buf[..len]);
        output.write_all(&buf[..len])?;
        counts.written += len as u64;
    }
    output.flush()?;
    Ok(counts)
}
