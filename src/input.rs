use std::io::{self, BufRead};

/// Reads whitespace-delimited tokens from a buffered stream, skipping any
/// leading whitespace including line breaks. Token bytes are returned as read.
pub struct TokenReader<R> {
    inner: R,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Next token, or an empty token once the stream is exhausted.
    /// Bytes after the token on the same line stay buffered for the next call.
    pub fn next_token(&mut self) -> io::Result<Vec<u8>> {
        let mut token = Vec::new();

        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                if is_space(byte) {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            self.inner.consume(used);

            if done {
                break;
            }
        }

        Ok(token)
    }
}

/// Space, tab, newline, vertical tab, form feed and carriage return.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}
