//! Line end conversion
//!
//! Any of `LF`, `CR`, `CR LF` and `LF CR` counts as a single line end in the
//! input, so files with mixed conventions come out uniform. Two line ends of
//! the same kind in a row (`LF LF`, `CR CR`) are two lines.

use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};

/// The line end to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EolStyle {
    /// `LF`
    #[default]
    Unix,
    /// `CR`
    Mac,
    /// `CR LF`
    Dos,
}

impl EolStyle {
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            EolStyle::Unix => b"\n",
            EolStyle::Mac => b"\r",
            EolStyle::Dos => b"\r\n",
        }
    }
}

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// What the previous input byte was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// Start of input or an ordinary byte
    #[default]
    Plain,
    /// A line end that started with `LF`
    AfterLf,
    /// A line end that started with `CR`
    AfterCr,
}

/// Incremental line end converter
///
/// The converter remembers the end of the last chunk, so a `CR LF` split over
/// two reads is still recognized as one line end.
///
/// ```
/// use toolshed::eol::{EolConverter, EolStyle};
///
/// let mut conv = EolConverter::new(EolStyle::Unix);
/// let mut out = Vec::new();
/// conv.convert_chunk(b"one\r", &mut out);
/// conv.convert_chunk(b"\ntwo\r\rthree\n\r", &mut out);
/// assert_eq!(out, b"one\ntwo\n\nthree\n");
/// ```
#[derive(Debug, Clone)]
pub struct EolConverter {
    style: EolStyle,
    state: State,
}

impl EolConverter {
    pub fn new(style: EolStyle) -> Self {
        Self {
            style,
            state: State::default(),
        }
    }

    /// Convert `input`, appending the result to `out`
    pub fn convert_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) {
        use State::*;
        for &byte in input {
            self.state = match (byte, self.state) {
                (CR, Plain | AfterCr) => {
                    out.extend_from_slice(self.style.bytes());
                    AfterCr
                }
                // Second half of `LF CR`
                (CR, AfterLf) => Plain,
                (LF, Plain | AfterLf) => {
                    out.extend_from_slice(self.style.bytes());
                    AfterLf
                }
                // Second half of `CR LF`
                (LF, AfterCr) => Plain,
                (byte, _) => {
                    out.push(byte);
                    Plain
                }
            };
        }
    }
}

/// Copy `input` to `output`, converting all line ends to `style`
///
/// Returns the number of bytes written.
pub fn convert<R: Read, W: Write>(mut input: R, mut output: W, style: EolStyle) -> io::Result<u64> {
    let mut conv = EolConverter::new(style);
    let mut buf = [0u8; 8192];
    let mut out = Vec::with_capacity(2 * buf.len());
    let mut written = 0u64;

    loop {
        let len = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(len) => len,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        out.clear();
        conv.convert_chunk(&buf[..len], &mut out);
        output.write_all(&out)?;
        written += out.len() as u64;
    }

    output.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_str(input: &[u8], style: EolStyle) -> Vec<u8> {
        let mut out = Vec::new();
        convert(input, &mut out, style).unwrap();
        out
    }

    #[test]
    fn all_conventions_are_recognized() {
        let input = b"unix\nmac\rdos\r\nacorn\n\rend";
        assert_eq!(
            convert_str(input, EolStyle::Unix),
            b"unix\nmac\ndos\nacorn\nend"
        );
        assert_eq!(
            convert_str(input, EolStyle::Mac),
            b"unix\rmac\rdos\racorn\rend"
        );
        assert_eq!(
            convert_str(input, EolStyle::Dos),
            b"unix\r\nmac\r\ndos\r\nacorn\r\nend"
        );
    }

    #[test]
    fn repeated_line_ends_are_empty_lines() {
        assert_eq!(convert_str(b"\n\n", EolStyle::Dos), b"\r\n\r\n");
        assert_eq!(convert_str(b"\r\r", EolStyle::Unix), b"\n\n");
        assert_eq!(convert_str(b"\r\n\r\n", EolStyle::Unix), b"\n\n");
        assert_eq!(convert_str(b"\n\r\n\r", EolStyle::Unix), b"\n\n");
        // `CR LF CR` is a dos line end followed by a mac one
        assert_eq!(convert_str(b"\r\n\r", EolStyle::Unix), b"\n\n");
    }

    #[test]
    fn conversion_is_idempotent() {
        let input = b"a\r\nb\rc\n\nd\n\re";
        for style in [EolStyle::Unix, EolStyle::Mac, EolStyle::Dos] {
            let once = convert_str(input, style);
            assert_eq!(convert_str(&once, style), once, "{style:?}");
        }
    }

    #[test]
    fn line_ends_may_span_chunks() {
        let mut conv = EolConverter::new(EolStyle::Mac);
        let mut out = Vec::new();
        for chunk in [&b"x\r"[..], b"\n", b"y\n", b"\r", b"z"] {
            conv.convert_chunk(chunk, &mut out);
        }
        assert_eq!(out, b"x\ry\rz");
    }

    #[test]
    fn input_without_line_ends_is_copied() {
        assert_eq!(convert_str(b"", EolStyle::Dos), b"");
        assert_eq!(convert_str(b"\x00binary\xff", EolStyle::Dos), b"\x00binary\xff");
    }
}
