//! Chunk scanning and token splitting.
//!
//! Tokenization runs in two phases. First the text is cut into line chunks:
//! a chunk starts at the beginning of a line (offset 0 or just after `\n`)
//! that is not itself empty, runs to the end of that line, and takes the whole
//! run of `\r`/`\n` characters that follows. Blank lines are absorbed by the
//! chunk before them, and blank lines at the very start produce nothing.
//!
//! Then each chunk that contains a space is split on single spaces, keeping
//! its terminator attached to the last piece. Chunks without a space stay
//! whole, which is what keeps space-less lines intact.

/// Iterator over the line chunks of a text. See the module docs for the rules.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    input: &'a str,
    pos: usize,
}

/// Scan `input` into line chunks.
pub fn chunks(input: &str) -> Chunks<'_> {
    Chunks { input, pos: 0 }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = &self.input[self.pos..];
            if rest.is_empty() {
                return None;
            }

            let at_line_start = self.pos == 0 || self.input.as_bytes()[self.pos - 1] == b'\n';
            if !at_line_start || rest.starts_with('\n') {
                // Nothing can start here; resume at the next line.
                match rest.find('\n') {
                    Some(i) => {
                        self.pos += i + 1;
                        continue;
                    }
                    None => {
                        self.pos = self.input.len();
                        return None;
                    }
                }
            }

            let line_end = rest.find('\n').unwrap_or(rest.len());
            let terminator = rest[line_end..]
                .bytes()
                .take_while(|b| matches!(b, b'\r' | b'\n'))
                .count();
            let end = line_end + terminator;
            self.pos += end;
            return Some(&rest[..end]);
        }
    }
}

/// Split one chunk into tokens.
///
/// Trailing empty pieces are dropped, so a chunk of only spaces yields
/// nothing. Leading and interior empty pieces (from repeated spaces) are kept
/// and count as tokens.
fn split_chunk(chunk: &str) -> Vec<&str> {
    if !chunk.contains(' ') {
        return vec![chunk];
    }
    let mut pieces: Vec<&str> = chunk.split(' ').collect();
    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Line-preserving tokens of `input`, in order.
pub fn line_tokens(input: &str) -> Vec<&str> {
    chunks(input).flat_map(split_chunk).collect()
}

/// Plain whitespace-separated words of `input`.
///
/// Whitespace is space, `\t`, `\n`, `\x0b` (vertical tab), `\x0c` and `\r`.
pub fn whitespace_tokens(input: &str) -> Vec<&str> {
    input
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_word_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}
