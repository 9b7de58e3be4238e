//! Binary decoder for mpiP communication-graph dumps.
//!
//! The dump is a bare concatenation of process records with no file header,
//! no record-boundary markers, and no checksums:
//!
//! - Header: two 4-byte signed integers, `process_id` then `message_count`.
//! - Then exactly `message_count` descriptors, each an 8-byte IEEE-754 double
//!   (`size` in bytes) followed by a 4-byte signed integer (`destination`).
//!
//! All fields are little-endian; the format does not self-describe
//! endianness, so this decoder pins LE to match the producing platform.
//! Message sizes are truncated toward zero when narrowed to an integer.

use crate::domain::error::{GraphError, GraphResult};
use crate::domain::graph::{CommGraph, MessageEdge};

const HEADER_LEN: usize = 8;
const DESCRIPTOR_LEN: usize = 12;

/// Cursor state: either at a record boundary or inside a descriptor run.
enum DecodeState {
    ReadHeader,
    ReadDescriptor {
        pid: i32,
        remaining: usize,
        edges: Vec<MessageEdge>,
    },
}

/// Decode a complete dump buffer into a `CommGraph`.
///
/// Parsing is strictly sequential from offset 0. After each complete record
/// the cursor is checked against the end of the buffer; a buffer that ends
/// mid-header or mid-descriptor-run is malformed, as is an empty buffer.
pub fn decode(buf: &[u8]) -> GraphResult<CommGraph> {
    if buf.is_empty() {
        return Err(GraphError::malformed(0, "empty input, expected a process record header"));
    }

    let mut graph = CommGraph::new();
    let mut offset = 0usize;
    let mut state = DecodeState::ReadHeader;

    loop {
        state = match state {
            DecodeState::ReadHeader => {
                let (pid, msg_count) = read_header(buf, offset)?;
                offset += HEADER_LEN;
                // A negative count has no descriptors to read; the producing
                // tool is not known to emit one, but the original analyser
                // treats it as an empty run.
                let remaining = usize::try_from(msg_count).unwrap_or(0);
                // Capacity is capped by what the buffer can still hold so a
                // bogus count cannot force a huge allocation before the
                // descriptor read fails.
                let cap = remaining.min(buf.len().saturating_sub(offset) / DESCRIPTOR_LEN);
                DecodeState::ReadDescriptor {
                    pid,
                    remaining,
                    edges: Vec::with_capacity(cap),
                }
            }
            DecodeState::ReadDescriptor {
                pid,
                remaining: 0,
                edges,
            } => {
                graph.insert(pid, edges);
                if offset >= buf.len() {
                    return Ok(graph);
                }
                DecodeState::ReadHeader
            }
            DecodeState::ReadDescriptor {
                pid,
                remaining,
                mut edges,
            } => {
                edges.push(read_descriptor(buf, offset)?);
                offset += DESCRIPTOR_LEN;
                DecodeState::ReadDescriptor {
                    pid,
                    remaining: remaining - 1,
                    edges,
                }
            }
        };
    }
}

/// Read a `(process_id, message_count)` header at `offset`.
fn read_header(buf: &[u8], offset: usize) -> GraphResult<(i32, i32)> {
    let bytes = take(buf, offset, HEADER_LEN, "process record header")?;
    let pid = i32::from_le_bytes(bytes[0..4].try_into().unwrap());
    let msg_count = i32::from_le_bytes(bytes[4..8].try_into().unwrap());
    Ok((pid, msg_count))
}

/// Read one `(size, destination)` descriptor at `offset`.
///
/// The wire order is size-then-destination; the exposed edge swaps them.
fn read_descriptor(buf: &[u8], offset: usize) -> GraphResult<MessageEdge> {
    let bytes = take(buf, offset, DESCRIPTOR_LEN, "message descriptor")?;
    let size = f64::from_le_bytes(bytes[0..8].try_into().unwrap());
    let dest = i32::from_le_bytes(bytes[8..12].try_into().unwrap());
    // Deliberate truncation toward zero, never rounding.
    Ok(MessageEdge::new(dest, size as i64))
}

fn take<'a>(buf: &'a [u8], offset: usize, len: usize, what: &str) -> GraphResult<&'a [u8]> {
    match buf.get(offset..offset + len) {
        Some(bytes) => Ok(bytes),
        None => Err(GraphError::malformed(
            offset,
            format!("buffer ends inside a {} ({} bytes needed, {} left)",
                what, len, buf.len().saturating_sub(offset)),
        )),
    }
}
