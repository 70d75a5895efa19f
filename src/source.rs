//! Pull based byte sources consumed by [`crate::bounds::scan`].
//!
//! A source yields one byte at a time and `None` once the stream is exhausted.
//! Any byte value is a valid character.

use std::io::{ErrorKind, Read};

const READ_BUFFER_SIZE: usize = 8 * 1024;

pub trait CharSource {
    /// Returns the next byte of the stream, or `None` at end of stream.
    fn next_char(&mut self) -> Option<u8>;
}

impl<F> CharSource for F
where
    F: FnMut() -> Option<u8>,
{
    fn next_char(&mut self) -> Option<u8> {
        self()
    }
}

/// Adapts any byte iterator into a [`CharSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I> IterSource<I>
where
    I: Iterator<Item = u8>,
{
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self(iter.into_iter())
    }
}

impl<I> CharSource for IterSource<I>
where
    I: Iterator<Item = u8>,
{
    fn next_char(&mut self) -> Option<u8> {
        self.0.next()
    }
}

/// In memory cursor over a byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    text: &'a [u8],
    idx: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text, idx: 0 }
    }

    pub fn position(&self) -> usize {
        self.idx
    }
}

impl<'a> CharSource for SliceSource<'a> {
    fn next_char(&mut self) -> Option<u8> {
        let c = self.text.get(self.idx).copied()?;
        self.idx += 1;
        Some(c)
    }
}

/// Buffered byte source over a reader.
///
/// A read error ends the stream. The error is kept and handed back by
/// [`ReaderSource::finish`], so the scan itself never has to fail.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buffer: Box<[u8]>,
    pos: usize,
    len: usize,
    done: bool,
    error: Option<std::io::Error>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: vec![0; READ_BUFFER_SIZE].into_boxed_slice(),
            pos: 0,
            len: 0,
            done: false,
            error: None,
        }
    }

    /// Consumes the source, returning the reader or the error that ended the stream.
    pub fn finish(self) -> std::io::Result<R> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.reader),
        }
    }

    fn fill(&mut self) {
        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(0) => {
                    self.done = true;
                    return;
                }
                Ok(n) => {
                    self.pos = 0;
                    self.len = n;
                    return;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    log::trace!("read error ends the stream: {err}");
                    self.error = Some(err);
                    self.done = true;
                    return;
                }
            }
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<u8> {
        if self.pos == self.len && !self.done {
            self.fill();
        }
        if self.done {
            return None;
        }
        let c = self.buffer[self.pos];
        self.pos += 1;
        Some(c)
    }
}
