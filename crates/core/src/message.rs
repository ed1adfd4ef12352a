//! Response messages returned by a Bolt server
//!
//! Every request sent over a connection is answered by one or more of these
//! messages. The set is closed: callers match exhaustively instead of testing
//! for a concrete type at runtime.
//!
//! | Message | Meaning |
//! |---------|---------|
//! | SUCCESS | The request completed; carries summary metadata |
//! | FAILURE | The server rejected the request |
//! | RECORD | One row of a result stream |
//! | IGNORED | The request was skipped after an earlier failure |

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A server response message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    /// Acknowledgement of a request
    Success {
        /// Summary metadata (e.g. `bookmark`, `t_last`)
        metadata: HashMap<String, Value>,
    },

    /// Request rejected by the server
    Failure {
        /// Status code, e.g. `Neo.ClientError.Transaction.TransactionNotFound`
        code: String,
        /// Human-readable description
        message: String,
    },

    /// A single result row
    Record {
        /// Field values in column order
        fields: Vec<Value>,
    },

    /// Request ignored by the server
    Ignored,
}

/// Tag identifying a [`Message`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// SUCCESS
    Success,
    /// FAILURE
    Failure,
    /// RECORD
    Record,
    /// IGNORED
    Ignored,
}

impl MessageKind {
    /// Protocol name of the message
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "SUCCESS",
            MessageKind::Failure => "FAILURE",
            MessageKind::Record => "RECORD",
            MessageKind::Ignored => "IGNORED",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Message {
    /// An acknowledgement with no metadata
    pub fn success() -> Self {
        Message::Success {
            metadata: HashMap::new(),
        }
    }

    /// An acknowledgement carrying metadata
    pub fn success_with(metadata: HashMap<String, Value>) -> Self {
        Message::Success { metadata }
    }

    /// A failure with the given code and description
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Message::Failure {
            code: code.into(),
            message: message.into(),
        }
    }

    /// A record with the given fields
    pub fn record(fields: Vec<Value>) -> Self {
        Message::Record { fields }
    }

    /// Variant tag of this message
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Success { .. } => MessageKind::Success,
            Message::Failure { .. } => MessageKind::Failure,
            Message::Record { .. } => MessageKind::Record,
            Message::Ignored => MessageKind::Ignored,
        }
    }

    /// Check if this message is an acknowledgement
    pub fn is_success(&self) -> bool {
        matches!(self, Message::Success { .. })
    }

    /// Metadata of an acknowledgement, `None` for every other variant
    pub fn metadata(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Message::Success { metadata } => Some(metadata),
            _ => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Success { metadata } => {
                write!(f, "SUCCESS {}", Value::Map(metadata.clone()))
            }
            Message::Failure { code, message } => write!(f, "FAILURE {}: {}", code, message),
            Message::Record { fields } => write!(f, "RECORD {}", Value::List(fields.clone())),
            Message::Ignored => write!(f, "IGNORED"),
        }
    }
}
