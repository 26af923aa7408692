//! Narrows: structured descriptions of which messages to show.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What to view. Built only through the factory functions below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Narrow {
    Topic { stream: String, topic: String },
    Stream { stream: String },
    /// Direct-message conversation; participants in link order.
    Group { emails: Vec<String> },
    /// Filtered view named by the raw `is/<filter>` segment.
    Special { filter: String },
}

/// One operator/operand pair, the server's wire form of a narrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrowTerm {
    pub operator: &'static str,
    pub operand: String,
}

pub fn topic_narrow(stream: impl Into<String>, topic: impl Into<String>) -> Narrow {
    Narrow::Topic {
        stream: stream.into(),
        topic: topic.into(),
    }
}

pub fn stream_narrow(stream: impl Into<String>) -> Narrow {
    Narrow::Stream {
        stream: stream.into(),
    }
}

/// Repeated addresses are dropped; the first occurrence keeps its place.
pub fn group_narrow<I, S>(emails: I) -> Narrow
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for email in emails {
        let email = email.into();
        if !out.contains(&email) {
            out.push(email);
        }
    }
    Narrow::Group { emails: out }
}

pub fn special_narrow(filter: impl Into<String>) -> Narrow {
    Narrow::Special {
        filter: filter.into(),
    }
}

impl Narrow {
    pub fn terms(&self) -> Vec<NarrowTerm> {
        let term = |operator: &'static str, operand: &str| NarrowTerm {
            operator,
            operand: operand.to_string(),
        };
        match self {
            Narrow::Topic { stream, topic } => vec![term("stream", stream), term("topic", topic)],
            Narrow::Stream { stream } => vec![term("stream", stream)],
            Narrow::Group { emails } => vec![term("pm-with", &emails.join(","))],
            Narrow::Special { filter } => vec![term("is", filter)],
        }
    }
}

impl fmt::Display for Narrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", term.operator, term.operand)?;
        }
        Ok(())
    }
}
