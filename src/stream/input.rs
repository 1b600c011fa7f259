use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, StdinLock};
use std::path::Path;

use crate::error::Error;


/// Lines of any buffered reader; a file, stdin, or an in-memory cursor.
pub struct LineReader<R: BufRead> {
    reader: Lines<R>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: reader.lines(),
        }
    }
}

impl LineReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> LineReader<StdinLock<'a>> {
    pub fn stdin(stdin: &'a io::Stdin) -> Self {
        Self::new(stdin.lock())
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.reader.next()?;
        Some(res.map_err(|e| e.into()))
    }
}


/// Lines of an in-memory string.
pub struct StringReader {
    lines: std::vec::IntoIter<String>,
}

impl StringReader {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let lines = s
            .as_ref()
            .lines()
            .map(|line| line.to_owned())
            .collect::<Vec<_>>();
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl Iterator for StringReader {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(Ok)
    }
}
