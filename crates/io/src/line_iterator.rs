use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use streaming_iterator::StreamingIterator;

/// A lending iterator over the lines of a type implementing Read, reusing a
/// single line buffer. Trailing line endings are stripped.
pub struct LineIterator<R: Read> {
    reader: BufReader<R>,
    line: String,
    done: bool,
}

impl<R: Read> LineIterator<R> {
    pub fn new(reader: R) -> LineIterator<R> {
        LineIterator {
            reader: BufReader::new(reader),
            line: String::new(),
            done: false,
        }
    }
}

impl<R: Read> StreamingIterator for LineIterator<R> {
    type Item = String;

    fn advance(&mut self) {
        self.line.clear();

        match self.reader.read_line(&mut self.line) {
            Ok(0) | Err(_) => self.done = true,
            Ok(_) => {
                while self.line.ends_with(['\n', '\r']) {
                    self.line.pop();
                }
            }
        }
    }

    fn get(&self) -> Option<&String> {
        if self.done {
            None
        } else {
            Some(&self.line)
        }
    }
}
