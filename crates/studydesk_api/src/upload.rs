//! Bridge from async multipart chunks to the blocking upload writer.
//!
//! # Invariants
//! - At most `CHUNK_CHANNEL_CAPACITY` chunks are buffered between the request
//!   body and the file being written.
//! - Chunks are yielded in the order they were sent; a sent error ends the
//!   stream with that error.

use axum::body::Bytes;
use std::io::{self, Read};
use tokio::sync::mpsc;

const CHUNK_CHANNEL_CAPACITY: usize = 8;

pub type ChunkSender = mpsc::Sender<io::Result<Bytes>>;

/// Creates a bounded chunk pipe: the async side sends, the blocking side reads.
pub fn chunk_channel() -> (ChunkSender, ChunkReader) {
    let (sender, chunks) = mpsc::channel(CHUNK_CHANNEL_CAPACITY);
    (
        sender,
        ChunkReader {
            chunks,
            current: Bytes::new(),
        },
    )
}

/// Blocking `Read` over chunks sent from async code.
///
/// Must only be read outside the async runtime (e.g. in `spawn_blocking`).
pub struct ChunkReader {
    chunks: mpsc::Receiver<io::Result<Bytes>>,
    current: Bytes,
}

impl Read for ChunkReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.current.is_empty() {
            match self.chunks.blocking_recv() {
                Some(Ok(chunk)) => self.current = chunk,
                Some(Err(err)) => return Err(err),
                None => return Ok(0),
            }
        }

        let len = buf.len().min(self.current.len());
        buf[..len].copy_from_slice(&self.current[..len]);
        self.current = self.current.slice(len..);
        Ok(len)
    }
}
