//! Line editor
//!
//! Reads bytes until carriage return with a small set of editing keys,
//! always working at the end of the line. The editor echoes what it accepts
//! and erases on screen with backspace-space-backspace.

use crate::console::Console;

const CR: u8 = b'\r';
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;
/// ^W, erase the last word
const ERASE_WORD: u8 = 0x17;
/// ^U, erase the whole line
const ERASE_LINE: u8 = 0x15;

const RUBOUT: &[u8] = b"\x08 \x08";

impl Console {
    /// Read an edited line into `buf`.
    ///
    /// At most `max_len` characters are kept, further capped so that the
    /// trailing `'\n'` and NUL always fit inside `buf`. Once the line is full
    /// the next byte read ends editing and is discarded. Returns the number of
    /// characters, not counting the added `'\n'`.
    pub fn gets(&self, buf: &mut [u8], max_len: usize) -> usize {
        if buf.len() < 2 {
            if let Some(first) = buf.first_mut() {
                *first = 0;
            }
            return 0;
        }

        let limit = max_len.min(buf.len() - 2);
        let mut len = 0;
        buf[0] = 0;

        loop {
            let c = self.getc(true);
            if c == CR || len >= limit {
                break;
            }

            match c {
                BACKSPACE | DELETE => {
                    if len > 0 {
                        len -= 1;
                        self.puts(RUBOUT);
                    }
                }
                ERASE_WORD => {
                    // the whitespace that ends the word goes too
                    while len > 0 {
                        len -= 1;
                        self.puts(RUBOUT);
                        if buf[len].is_ascii_whitespace() {
                            break;
                        }
                    }
                }
                ERASE_LINE => {
                    while len > 0 {
                        len -= 1;
                        self.puts(RUBOUT);
                    }
                }
                _ => {
                    buf[len] = c;
                    self.putc(c);
                    len += 1;
                }
            }
            buf[len] = 0;
        }

        buf[len] = b'\n';
        buf[len + 1] = 0;
        len
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockPlatform;

    fn edit(input: &[u8], max_len: usize) -> (Vec<u8>, usize, Vec<u8>) {
        let (mock, console) = MockPlatform::console_with_input(input);
        let mut buf = [0xffu8; 64];
        let len = console.gets(&mut buf, max_len);
        let end = buf.iter().position(|&c| c == 0).unwrap();
        (buf[..end].to_vec(), len, mock.take_tx())
    }

    #[test]
    fn test_plain_line() {
        let (line, len, echo) = edit(b"abc\r", 16);
        assert_eq!(line, b"abc\n");
        assert_eq!(len, 3);
        assert_eq!(echo, b"abc");
    }

    #[test]
    fn test_backspace() {
        let (line, len, echo) = edit(b"ab\x08c\r", 16);
        assert_eq!(line, b"ac\n");
        assert_eq!(len, 2);
        assert_eq!(echo, b"ab\x08 \x08c");
    }

    #[test]
    fn test_delete_on_empty_line() {
        let (line, len, echo) = edit(b"\x7f\x7fz\r", 16);
        assert_eq!(line, b"z\n");
        assert_eq!(len, 1);
        assert_eq!(echo, b"z");
    }

    #[test]
    fn test_erase_line() {
        let (line, len, _) = edit(b"\x15x\r", 16);
        assert_eq!(line, b"x\n");
        assert_eq!(len, 1);

        let (line, len, echo) = edit(b"hey\x15ok\r", 16);
        assert_eq!(line, b"ok\n");
        assert_eq!(len, 2);
        assert_eq!(echo, b"hey\x08 \x08\x08 \x08\x08 \x08ok");
    }

    #[test]
    fn test_erase_word() {
        let (line, len, _) = edit(b"foo bar\x17\r", 16);
        assert_eq!(line, b"foo\n");
        assert_eq!(len, 3);

        let (line, len, _) = edit(b"single\x17x\r", 16);
        assert_eq!(line, b"x\n");
        assert_eq!(len, 1);
    }

    #[test]
    fn test_full_line_ends_editing() {
        let (mock, console) = MockPlatform::console_with_input(b"abcdefXY");
        let mut buf = [0u8; 64];
        let len = console.gets(&mut buf, 5);

        assert_eq!(len, 5);
        assert_eq!(&buf[..7], b"abcde\n\0");
        assert_eq!(mock.take_tx(), b"abcde");
        // 'f' was consumed and dropped, the rest is still queued
        assert_eq!(console.getc(false), b'X');
    }

    #[test]
    fn test_terminator_fits_small_buffer() {
        let (_mock, console) = MockPlatform::console_with_input(b"abcdef\r");
        let mut buf = [0xffu8; 4];
        let len = console.gets(&mut buf, 100);

        assert_eq!(len, 2);
        assert_eq!(buf, *b"ab\n\0");
    }

    #[test]
    fn test_echoed_line_feed_gets_carriage_return() {
        let (_, len, echo) = edit(b"a\nb\r", 16);
        assert_eq!(len, 3);
        assert_eq!(echo, b"a\n\rb");
    }
}
