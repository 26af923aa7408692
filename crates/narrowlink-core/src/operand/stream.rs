//! Stream and topic operands.

use crate::directory::{StreamDirectory, StreamId};

use super::legacy::decode_legacy;

/// The shapes a stream operand can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOperand<'a> {
    /// `<id>-<slug>`, used since 2018. The slug is whatever the name was when
    /// the link was made and is ignored in favor of the directory. `id` is
    /// `None` when the digits overflow, which no directory can contain.
    ById { id: Option<StreamId>, slug: &'a str },
    /// Bare legacy-escaped stream name.
    ByName(&'a str),
}

type ShapeMatcher = for<'a> fn(&'a str) -> Option<StreamOperand<'a>>;

/// Tried in order; the first matcher that claims the operand decides its shape.
const SHAPES: &[ShapeMatcher] = &[match_id_prefixed, match_name];

fn match_id_prefixed(operand: &str) -> Option<StreamOperand<'_>> {
    let (digits, slug) = operand.split_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(StreamOperand::ById {
        id: digits.parse().ok(),
        slug,
    })
}

fn match_name(operand: &str) -> Option<StreamOperand<'_>> {
    Some(StreamOperand::ByName(operand))
}

impl<'a> StreamOperand<'a> {
    pub fn parse(operand: &'a str) -> Self {
        SHAPES
            .iter()
            .find_map(|shape| shape(operand))
            .unwrap_or(StreamOperand::ByName(operand))
    }

    /// Current stream name for this operand, or `None` if an id is not in
    /// `streams` or a name does not decode.
    pub fn resolve<D: StreamDirectory + ?Sized>(&self, streams: &D) -> Option<String> {
        match *self {
            StreamOperand::ById { id, slug } => match id.and_then(|id| streams.stream(id)) {
                Some(stream) => Some(stream.name.clone()),
                None => {
                    tracing::debug!(stream_id = ?id, slug, "stream id not in directory");
                    None
                }
            },
            StreamOperand::ByName(raw) => decode_legacy(raw),
        }
    }
}

/// Parses the operand of a `stream` operator into a stream name.
pub fn parse_stream_operand<D: StreamDirectory + ?Sized>(operand: &str, streams: &D) -> Option<String> {
    StreamOperand::parse(operand).resolve(streams)
}

/// Parses the operand of a `topic` or `subject` operator.
pub fn parse_topic_operand(operand: &str) -> Option<String> {
    decode_legacy(operand)
}
