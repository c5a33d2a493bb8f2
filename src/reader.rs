//! Key-file ingestion: one key per line.

use bytes::BytesMut;
use tokio::fs::File;
use tokio_stream::StreamExt;
use tokio_util::codec::{Decoder, Framed};

/// Frames a byte stream into newline-separated keys. Carriage returns are
/// stripped so CRLF files behave like LF files; a final line without a
/// trailing newline is still emitted (see `decode_eof`).
struct KeyDecoder;

fn frame_to_key(frame: &[u8]) -> String {
    let frame = match frame.last() {
        Some(b'\r') => &frame[..frame.len() - 1],
        _ => frame,
    };
    String::from_utf8_lossy(frame).into_owned()
}

impl Decoder for KeyDecoder {
    type Item = String;
    type Error = std::io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match memchr::memchr(b'\n', src) {
            Some(index) => {
                let line = src.split_to(index + 1);
                Ok(Some(frame_to_key(&line[..index])))
            }
            None => Ok(None),
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(key) => Ok(Some(key)),
            None if src.is_empty() => Ok(None),
            None => {
                let line = src.split_to(src.len());
                Ok(Some(frame_to_key(&line)))
            }
        }
    }
}

/// Reads every non-empty key from the file at `path`, in file order.
#[tokio::main]
pub async fn read_keys(path: &str) -> std::io::Result<Vec<String>> {
    let file = File::open(path).await?;
    let mut framed = Framed::new(file, KeyDecoder);
    let mut keys = Vec::new();
    while let Some(key) = framed.next().await {
        let key = key?;
        if !key.is_empty() {
            keys.push(key);
        }
    }
    Ok(keys)
}
