// Scan loop: ties the match finder to the stream encoder.
//
// A cursor walks the input.  At each position the match finder proposes a
// back-reference; accepted ones flush the pending literal run and emit a
// copy opcode, everything else advances the cursor by one byte.  The last
// LOOKAHEAD - 1 bytes are never probed (the hash cascade would read past
// the end) and always leave as literals.

use std::io::{self, Write};

use log::trace;

use crate::hash::config::LOOKAHEAD;
use crate::hash::matching::MatchFinder;
use crate::stream::encoder::StreamEncoder;
use crate::stream::opcode::Opcode;

/// Encode the body of a stream: every byte of `input` as literals and
/// copies, folded into the stream checksum in scan order.
///
/// The stream header must already be written; the caller finishes the
/// stream afterwards.
pub fn scan<W: Write>(
    input: &[u8],
    finder: &mut MatchFinder,
    stream: &mut StreamEncoder<W>,
) -> io::Result<()> {
    let end = input.len();
    let mut pos = 0usize;
    let mut lit_start = 0usize;

    while pos + LOOKAHEAD <= end {
        let op = finder
            .probe(input, pos)
            .and_then(|m| Opcode::for_match(m.length, m.distance));

        let Some(op) = op else {
            pos += 1;
            continue;
        };

        trace!("copy at {pos}: {op:?}");
        stream.literals(&input[lit_start..pos])?;
        stream.copy(op)?;
        pos += op.span();
        stream.fold(&input[lit_start..pos]);
        lit_start = pos;
    }

    stream.literals(&input[lit_start..])?;
    stream.fold(&input[lit_start..]);
    Ok(())
}
