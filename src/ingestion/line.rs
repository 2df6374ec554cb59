//! Line-oriented reading with terminator normalization and backspace editing.
//!
//! [`LineReader`] produces one logical line at a time from any byte stream.
//! It reads a single byte per step, so wrap raw files in a
//! [`std::io::BufReader`] (the loader does this for you).

use std::io::{self, Read};

/// Starting capacity of the line buffer; grows by 50% when exhausted.
const INITIAL_CAPACITY: usize = 10;

const BACKSPACE: u8 = 0x08;

/// Produces logical lines from a byte stream.
///
/// A logical line is one newline-terminated unit of text, independent of
/// which terminator sequence (`\n`, `\r`, `\r\n`) ended it. Two reading modes
/// exist:
///
/// - **Batch** ([`LineReader::new`]): a terminator seen before any content on
///   the current line is leftover from the previous terminator sequence and
///   is skipped, so `\r\n` collapses and blank lines disappear.
/// - **Interactive** ([`LineReader::interactive`], for terminal-style
///   sources): every terminator ends a line, including consecutive ones.
///
/// A backspace byte (`0x08`) deletes the most recently buffered byte instead
/// of being stored; on an empty buffer it is a no-op.
///
/// Out-of-memory while growing the line buffer aborts the process (the global
/// allocator's behavior); the engine has no recovery path for it.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    interactive: bool,
}

impl<R: Read> LineReader<R> {
    /// Create a batch-mode reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            interactive: false,
        }
    }

    /// Create an interactive-mode reader, where consecutive terminators
    /// produce empty lines instead of being skipped.
    pub fn interactive(inner: R) -> Self {
        Self {
            inner,
            interactive: true,
        }
    }

    /// Returns the next logical line, without its terminator.
    ///
    /// `Ok(None)` means end-of-stream: nothing was buffered and no terminator
    /// ended a line during this call. This is distinct from
    /// `Ok(Some(String::new()))`, a legitimately empty line (possible in
    /// interactive mode, or when backspaces erased every buffered byte).
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf: Vec<u8> = Vec::with_capacity(INITIAL_CAPACITY);
        // Cleared by the first non-terminator byte; mirrors the skip rule for
        // leftover terminator bytes at the start of a line.
        let mut at_start = true;
        let mut terminated = false;

        while let Some(byte) = self.read_byte()? {
            match byte {
                b'\n' | b'\r' => {
                    if at_start && !self.interactive {
                        continue;
                    }
                    terminated = true;
                    break;
                }
                BACKSPACE => {
                    at_start = false;
                    buf.pop();
                }
                other => {
                    at_start = false;
                    if buf.len() == buf.capacity() {
                        buf.reserve_exact(buf.capacity() / 2);
                    }
                    buf.push(other);
                }
            }
        }

        if !terminated && at_start {
            return Ok(None);
        }

        buf.shrink_to_fit();
        let line = match String::from_utf8(buf) {
            Ok(s) => s,
            // Inputs are nominally single-byte encoded; anything that is not
            // valid UTF-8 is carried through lossily rather than failing.
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        Ok(Some(line))
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LineReader;

    fn lines(input: &str) -> Vec<String> {
        let mut reader = LineReader::new(input.as_bytes());
        let mut out = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn splits_on_lf_and_normalizes_crlf() {
        assert_eq!(lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn batch_mode_skips_blank_lines() {
        assert_eq!(lines("a\n\n\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn interactive_mode_preserves_empty_lines() {
        let mut reader = LineReader::interactive("a\n\nb\n".as_bytes());
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn backspace_deletes_previous_byte() {
        assert_eq!(lines("ab\x08c\n"), vec!["ac"]);
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        assert_eq!(lines("\x08\x08ab\n"), vec!["ab"]);
    }

    #[test]
    fn backspace_can_erase_a_whole_line() {
        // The backspaces count as content, so the terminator still ends an
        // (empty) line rather than being skipped.
        assert_eq!(lines("ab\x08\x08\nc\n"), vec!["", "c"]);
    }

    #[test]
    fn last_line_without_terminator_is_returned() {
        assert_eq!(lines("a,b"), vec!["a,b"]);
    }

    #[test]
    fn end_of_stream_is_none_not_an_empty_line() {
        assert_eq!(lines(""), Vec::<String>::new());
        assert_eq!(lines("\n\r\n"), Vec::<String>::new());
    }

    #[test]
    fn exhausted_buffer_grows_past_initial_capacity() {
        let long = "x".repeat(1000);
        let input = format!("{long}\nshort\n");
        assert_eq!(lines(&input), vec![long.as_str(), "short"]);
    }

    #[test]
    fn end_of_stream_is_sticky() {
        let mut reader = LineReader::new("a\n".as_bytes());
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.next_line().unwrap(), None);
    }
}
