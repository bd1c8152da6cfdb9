// C/C++ declarations for embedded data.
//
// Two layouts:
//   - Base85 string literal, wrapped every 112 input bytes
//   - Array of little-endian 32-bit words, 12 per line
//
// Both start with a comment naming the source file and its original size.

use std::io::{self, Write};

use super::base85;

/// Input bytes per Base85 string line.
const BASE85_LINE_BYTES: usize = 112;

/// Words per line in array mode.
const ARRAY_COLUMNS: usize = 12;

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `constexpr unsigned int` word array.
    #[default]
    Array,
    /// `static const char` Base85 string.
    Base85,
}

/// One embedded blob.
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    /// Name shown in the leading comment.
    pub source_name: &'a str,
    /// Size of the file before compression.
    pub original_len: usize,
    /// Symbol prefix for the generated identifiers.
    pub symbol: &'a str,
    /// Whether `data` is a compressed stream.
    pub compressed: bool,
    /// Bytes to embed.
    pub data: &'a [u8],
}

impl Declaration<'_> {
    /// Suffix inserted between the symbol and the generated names.
    pub fn name_suffix(&self) -> &'static str {
        if self.compressed { "_compressed" } else { "_" }
    }

    /// Write the declaration in `format` to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W, format: Format) -> io::Result<()> {
        writeln!(
            w,
            "// File: '{}' ({} bytes)",
            self.source_name, self.original_len
        )?;
        match format {
            Format::Array => self.write_array(w),
            Format::Base85 => self.write_base85(w),
        }
    }

    fn write_base85<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(
            w,
            "static const char {}{}data_base85[{} + 1] =\n\t\"",
            self.symbol,
            self.name_suffix(),
            base85::encoded_len(self.data.len())
        )?;

        let mut prev = 0u8;
        for (i, word) in base85::words(self.data).enumerate() {
            for c in base85::encode_word(word) {
                // "??x" is a trigraph to older compilers.
                if c == b'?' && prev == b'?' {
                    w.write_all(b"\\")?;
                }
                w.write_all(&[c])?;
                prev = c;
            }
            if (i * 4) % BASE85_LINE_BYTES == BASE85_LINE_BYTES - 4 {
                w.write_all(b"\"\n\t\"")?;
            }
        }
        w.write_all(b"\";\n")
    }

    fn write_array<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let n = self.data.len();
        let suffix = self.name_suffix();
        writeln!(w, "constexpr unsigned int {}{}Size = {};", self.symbol, suffix, n)?;
        write!(
            w,
            "constexpr unsigned int {}{}Data[{} / 4] = {{",
            self.symbol,
            suffix,
            n.div_ceil(4) * 4
        )?;

        for (i, word) in base85::words(self.data).enumerate() {
            if i % ARRAY_COLUMNS == 0 {
                write!(w, "\n\t")?;
            }
            write!(w, "0x{word:08x}, ")?;
        }
        w.write_all(b"\n};\n")
    }

    /// Render to a string.
    pub fn render(&self, format: Format) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut out, format);
        String::from_utf8_lossy(&out).into_owned()
    }
}
