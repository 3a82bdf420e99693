//! Plain-text PPM (`P3`) encoder and decoder.
//!
//! Layout written by [`PpmEncoder`]:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <r> <g> <b>        (one line per pixel, row-major)
//! ```

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Magic token on the first line.
pub const MAGIC: &str = "P3";

/// Maximum channel value written on the third line.
pub const MAX_VALUE: u32 = 255;

/// Plain-text PPM encoder for framebuffer output.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Write a framebuffer to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write<W: Write>(fb: &Framebuffer, mut writer: W) -> Result<()> {
        writeln!(writer, "{MAGIC}")?;
        writeln!(writer, "{} {}", fb.width(), fb.height())?;
        writeln!(writer, "{MAX_VALUE}")?;

        for px in fb.pixels() {
            let packed = px.to_packed();
            writeln!(
                writer,
                "{} {} {}",
                (packed >> 16) & 0xFF,
                (packed >> 8) & 0xFF,
                packed & 0xFF
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write a framebuffer to a PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::write(fb, BufWriter::new(file))
    }

    /// Encode a framebuffer to a PPM string.
    #[must_use]
    pub fn to_string(fb: &Framebuffer) -> String {
        let mut buffer = Vec::with_capacity(16 + fb.pixel_count() * 12);
        // Writing into a Vec cannot fail
        if Self::write(fb, &mut buffer).is_err() {
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

/// Plain-text PPM decoder.
///
/// Accepts any whitespace between tokens and `#` comments, so files from
/// other `P3` writers parse as well. Only a maximum value of 255 is supported.
pub struct PpmDecoder;

impl PpmDecoder {
    /// Parse PPM text into a framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for a bad header, an out-of-range channel, or a
    /// sample count different from `width * height * 3`.
    pub fn parse(text: &str) -> Result<Framebuffer> {
        let mut tokens = Tokens::new(text);

        let (line, magic) = tokens.next_token().ok_or_else(|| parse_err(1, "missing magic token"))?;
        if magic != MAGIC {
            return Err(parse_err(line, format!("expected {MAGIC}, found {magic:?}")));
        }

        let width = tokens.next_u32("width")?;
        let height = tokens.next_u32("height")?;
        let (line, max) = tokens.next_number("max value")?;
        if max != MAX_VALUE {
            return Err(parse_err(line, format!("unsupported max value {max}")));
        }

        let count = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| parse_err(tokens.last_line, format!("image size {width}x{height} is too large")))?;
        // Each pixel takes at least six bytes of text ("0 0 0\n")
        let mut pixels = Vec::with_capacity(count.min(text.len() / 6));
        for _ in 0..count {
            let r = tokens.next_channel()?;
            let g = tokens.next_channel()?;
            let b = tokens.next_channel()?;
            pixels.push(Rgb::new(r, g, b));
        }

        if let Some((line, extra)) = tokens.next_token() {
            return Err(parse_err(line, format!("trailing data {extra:?}")));
        }

        Framebuffer::from_pixels(width, height, pixels)
    }

    /// Read and parse a PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Framebuffer> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

fn parse_err(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

/// Whitespace tokenizer that skips `#` comments and tracks line numbers.
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, std::str::SplitWhitespace<'a>)>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            current: None,
            last_line: 1,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(word) = words.next() {
                    return Some((*line, word));
                }
            }
            let (idx, raw) = self.lines.next()?;
            let content = raw.split('#').next().unwrap_or("");
            self.last_line = idx + 1;
            self.current = Some((idx + 1, content.split_whitespace()));
        }
    }

    fn next_number(&mut self, what: &str) -> Result<(usize, u32)> {
        let (line, token) = self
            .next_token()
            .ok_or_else(|| parse_err(self.last_line, format!("unexpected end of input, expected {what}")))?;
        let value = token
            .parse::<u32>()
            .map_err(|_| parse_err(line, format!("invalid {what} {token:?}")))?;
        Ok((line, value))
    }

    fn next_u32(&mut self, what: &str) -> Result<u32> {
        let (line, value) = self.next_number(what)?;
        if value == 0 {
            return Err(parse_err(line, format!("{what} must be positive")));
        }
        Ok(value)
    }

    fn next_channel(&mut self) -> Result<u8> {
        let (line, value) = self.next_number("channel value")?;
        u8::try_from(value).map_err(|_| parse_err(line, format!("channel value {value} exceeds {MAX_VALUE}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_layout() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.set_pixel(1, 0, Rgb::RED);
        fb.set_pixel(0, 1, Rgb::new(1, 2, 3));
        fb.set_pixel(1, 1, Rgb::BLACK);

        let text = PpmEncoder::to_string(&fb);
        assert_eq!(
            text,
            "P3\n2 2\n255\n255 255 255\n255 0 0\n1 2 3\n0 0 0\n"
        );
    }

    #[test]
    fn test_line_count() {
        let fb = Framebuffer::new(7, 5).unwrap();
        let text = PpmEncoder::to_string(&fb);
        assert_eq!(text.lines().count(), 3 + 35);
    }

    #[test]
    fn test_parse_roundtrip() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.set_pixel(0, 0, Rgb::new(10, 20, 30));
        fb.set_pixel(2, 1, Rgb::YELLOW);

        let parsed = PpmDecoder::parse(&PpmEncoder::to_string(&fb)).unwrap();
        assert_eq!(parsed, fb);
    }

    #[test]
    fn test_parse_free_layout_and_comments() {
        let text = "P3 # magic\n# size follows\n2 1\n255\n0 0 0 255\n255 255\n";
        let fb = PpmDecoder::parse(text).unwrap();
        assert_eq!(fb.get_pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(fb.get_pixel(1, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn test_parse_rejects_bad_magic() {
        let err = PpmDecoder::parse("P6\n1 1\n255\n0 0 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_channel_overflow() {
        let err = PpmDecoder::parse("P3\n1 1\n255\n0 256 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }));
    }

    #[test]
    fn test_parse_rejects_short_data() {
        let err = PpmDecoder::parse("P3\n2 1\n255\n0 0 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_huge_header_is_an_error() {
        let err = PpmDecoder::parse("P3\n4000000000 4000000000\n255\n0 0 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_header_larger_than_data() {
        let err = PpmDecoder::parse("P3\n65536 65536\n255\n1 2 3\n4 5 6\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }));
    }

    #[test]
    fn test_parse_rejects_trailing_data() {
        assert!(PpmDecoder::parse("P3\n1 1\n255\n0 0 0\n7\n").is_err());
    }

    #[test]
    fn test_parse_rejects_other_max_value() {
        assert!(PpmDecoder::parse("P3\n1 1\n15\n0 0 0\n").is_err());
    }

    #[test]
    fn test_parse_rejects_zero_dimension() {
        assert!(PpmDecoder::parse("P3\n0 1\n255\n").is_err());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");

        let fb = Framebuffer::filled(3, 3, Rgb::BLUE).unwrap();
        PpmEncoder::write_to_file(&fb, &path).unwrap();

        let back = PpmDecoder::read_from_file(&path).unwrap();
        assert_eq!(back, fb);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.ppm");

        let fb = Framebuffer::new(1, 1).unwrap();
        let err = PpmEncoder::write_to_file(&fb, &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
