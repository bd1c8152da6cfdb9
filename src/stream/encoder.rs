// Stream encoder: writes framed opcodes to an output sink.
//
// The encoder owns the sink and the running checksum.  It knows nothing
// about match finding; the scan loop in `engine` decides what to emit and
// hands over literal runs and copy opcodes in stream order.

use std::io::{self, Write};

use super::header::{HEADER_LEN, StreamHeader, StreamTrailer, TRAILER_LEN};
use super::opcode::{MAX_LITERAL_RUN, Opcode};
use crate::checksum::RunningChecksum;

/// Counters collected while encoding one stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Total encoded bytes, header and trailer included.
    pub bytes_out: u64,
    /// Literal opcodes emitted.
    pub literal_ops: u64,
    /// Input bytes carried as literals.
    pub literal_bytes: u64,
    /// Copy opcodes emitted.
    pub matches: u64,
    /// Input bytes covered by copies.
    pub matched_bytes: u64,
    /// Adler-32 written in the trailer.
    pub checksum: u32,
}

/// Writes one compressed stream to `W`.
pub struct StreamEncoder<W: Write> {
    writer: W,
    checksum: RunningChecksum,
    stats: StreamStats,
}

impl<W: Write> StreamEncoder<W> {
    /// Start a stream by writing `header` to `writer`.
    pub fn new(mut writer: W, header: StreamHeader) -> io::Result<Self> {
        header.write_to(&mut writer)?;
        Ok(Self {
            writer,
            checksum: RunningChecksum::new(),
            stats: StreamStats {
                bytes_out: HEADER_LEN as u64,
                ..Default::default()
            },
        })
    }

    /// Emit `run` as literal opcodes, splitting it into blocks of at most
    /// `MAX_LITERAL_RUN` bytes.  An empty run emits nothing.
    pub fn literals(&mut self, run: &[u8]) -> io::Result<()> {
        for block in run.chunks(MAX_LITERAL_RUN) {
            let n = Opcode::literal(block.len()).write_to(&mut self.writer)?;
            self.writer.write_all(block)?;
            self.stats.bytes_out += (n + block.len()) as u64;
            self.stats.literal_ops += 1;
            self.stats.literal_bytes += block.len() as u64;
        }
        Ok(())
    }

    /// Emit a copy opcode.
    pub fn copy(&mut self, op: Opcode) -> io::Result<()> {
        debug_assert!(!op.is_literal());
        let n = op.write_to(&mut self.writer)?;
        self.stats.bytes_out += n as u64;
        self.stats.matches += 1;
        self.stats.matched_bytes += op.span() as u64;
        Ok(())
    }

    /// Fold input bytes the scan has moved past into the checksum.
    #[inline]
    pub fn fold(&mut self, consumed: &[u8]) {
        self.checksum.update(consumed);
    }

    /// Input bytes folded into the checksum so far.
    pub fn bytes_folded(&self) -> u64 {
        self.checksum.bytes()
    }

    /// Write the trailer and hand back the sink.
    pub fn finish(mut self) -> io::Result<(W, StreamStats)> {
        let trailer = StreamTrailer {
            checksum: self.checksum.value(),
        };
        trailer.write_to(&mut self.writer)?;
        self.stats.bytes_out += TRAILER_LEN as u64;
        self.stats.checksum = trailer.checksum;
        Ok((self.writer, self.stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(length: u32) -> StreamHeader {
        StreamHeader {
            length,
            window: 0x4_0000,
        }
    }

    #[test]
    fn empty_stream_is_header_and_trailer() {
        let enc = StreamEncoder::new(Vec::new(), header(0)).unwrap();
        let (out, stats) = enc.finish().unwrap();
        assert_eq!(out.len(), HEADER_LEN + TRAILER_LEN);
        assert_eq!(&out[16..], &[0x05, 0xFA, 0, 0, 0, 1]);
        assert_eq!(stats.bytes_out, 22);
        assert_eq!(stats.checksum, 1);
    }

    #[test]
    fn literal_run_split_in_blocks() {
        let run = vec![0xA5u8; MAX_LITERAL_RUN * 2 + 10];
        let mut enc = StreamEncoder::new(Vec::new(), header(run.len() as u32)).unwrap();
        enc.literals(&run).unwrap();
        enc.fold(&run);
        let (out, stats) = enc.finish().unwrap();

        assert_eq!(stats.literal_ops, 3);
        assert_eq!(stats.literal_bytes, run.len() as u64);
        assert_eq!(&out[16..19], &[0x07, 0xFF, 0xFF]);
        let second = 19 + MAX_LITERAL_RUN;
        assert_eq!(&out[second..second + 3], &[0x07, 0xFF, 0xFF]);
        let third = second + 3 + MAX_LITERAL_RUN;
        assert_eq!(out[third], 0x29);
        assert_eq!(stats.bytes_out, out.len() as u64);
    }

    #[test]
    fn empty_literal_run_emits_nothing() {
        let mut enc = StreamEncoder::new(Vec::new(), header(0)).unwrap();
        enc.literals(&[]).unwrap();
        let (out, stats) = enc.finish().unwrap();
        assert_eq!(out.len(), 22);
        assert_eq!(stats.literal_ops, 0);
    }

    #[test]
    fn copy_counts_matched_bytes() {
        let input = b"ABCD".repeat(17);
        let mut enc = StreamEncoder::new(Vec::new(), header(68)).unwrap();
        enc.literals(&input[..4]).unwrap();
        enc.copy(Opcode::for_match(64, 4).unwrap()).unwrap();
        enc.fold(&input);
        assert_eq!(enc.bytes_folded(), 68);
        let (out, stats) = enc.finish().unwrap();
        assert_eq!(stats.matches, 1);
        assert_eq!(stats.matched_bytes, 64);
        assert_eq!(
            &out[16..],
            &[
                0x23, b'A', b'B', b'C', b'D', 0xBF, 0x03, 0x05, 0xFA, 0x61, 0x76, 0x11, 0xAB
            ]
        );
    }
}
