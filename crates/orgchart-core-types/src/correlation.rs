//! Correlation types for tying log events to a command session
//!
//! A `SessionId` names one run of the command loop; every line the loop
//! processes gets its own `CommandId`. Both travel in `CommandContext`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one interactive or scripted session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new SessionId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a single command line within a session
///
/// Command ids are sequence numbers, so log output from a session reads
/// in the same order the commands were typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommandId(u64);

impl CommandId {
    pub fn new(seq: u64) -> Self {
        Self(seq)
    }

    pub fn seq(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cmd-{}", self.0)
    }
}

/// Context carried from the command loop into core operations
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub session_id: SessionId,
    pub command_id: CommandId,
}

impl CommandContext {
    /// Create a context for the first command of a fresh session
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            command_id: CommandId::new(1),
        }
    }

    /// Advance to the next command in the same session
    pub fn advance(&mut self) -> CommandId {
        self.command_id = self.command_id.next();
        self.command_id
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}
