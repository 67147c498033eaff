//! Chat room state with optimistic sends.
//!
//! A sent message shows up at once as a placeholder keyed by its
//! `client_id`. The placeholder is swapped for the stored record when the
//! backend acknowledges the write, dropped when the write fails, and
//! dropped when a snapshot already carries the same `(author, client_id)`.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::backend::Backend;
use crate::error::{ClientError, InputError, MSG_DELETE_MESSAGE_FAILED, MSG_LOAD_MESSAGES_FAILED, MSG_SEND_FAILED};
use crate::model::{ChatMessage, UserId};

/// One displayed line. Placeholders have neither `id` nor `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: Option<u64>,
    pub client_id: u64,
    pub author: UserId,
    pub author_name: String,
    pub text: String,
    pub timestamp: Option<u64>,
}

impl ChatEntry {
    pub fn is_pending(&self) -> bool {
        self.id.is_none()
    }
}

impl From<&ChatMessage> for ChatEntry {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: Some(message.id),
            client_id: message.client_id,
            author: message.author.clone(),
            author_name: message.author_name.clone(),
            text: message.text.clone(),
            timestamp: Some(message.timestamp),
        }
    }
}

/// A staged write: what to hand to [`Backend::post_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub client_id: u64,
    pub text: String,
}

#[derive(Debug)]
pub struct ChatView {
    persisted: Vec<ChatMessage>,
    pending: Vec<ChatEntry>,
    draft: String,
    next_client_id: u64,
    error: Option<String>,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView {
    /// Client ids start from the wall clock so a new session does not
    /// reuse ids from an earlier one.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64 * 1_000)
            .unwrap_or(1);
        Self::with_client_id_seed(seed)
    }

    pub fn with_client_id_seed(seed: u64) -> Self {
        Self {
            persisted: Vec::new(),
            pending: Vec::new(),
            draft: String::new(),
            next_client_id: seed,
            error: None,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Turns the draft into a placeholder and clears the input.
    pub fn stage(&mut self, author: &UserId, author_name: &str) -> Result<Outgoing, InputError> {
        let text = self.draft.trim().to_owned();
        if text.is_empty() {
            return Err(InputError::EmptyMessage);
        }

        let client_id = self.next_client_id;
        self.next_client_id += 1;

        self.pending.push(ChatEntry {
            id: None,
            client_id,
            author: author.clone(),
            author_name: author_name.to_owned(),
            text: text.clone(),
            timestamp: None,
        });
        self.draft.clear();
        self.error = None;

        Ok(Outgoing { client_id, text })
    }

    /// Swaps the placeholder for the stored record.
    pub fn confirm(&mut self, client_id: u64, message: ChatMessage) {
        self.drop_pending(&message.author, client_id);
        if !self.persisted.iter().any(|m| m.id == message.id) {
            let at = self
                .persisted
                .partition_point(|m| m.timestamp <= message.timestamp);
            self.persisted.insert(at, message);
        }
    }

    /// Removes the placeholder of a failed write.
    pub fn reject(&mut self, client_id: u64, err: &ClientError) {
        self.pending.retain(|p| p.client_id != client_id);
        self.error = Some(if err.is_expected() {
            err.user_message()
        } else {
            MSG_SEND_FAILED.to_owned()
        });
    }

    /// Replaces the stored list. Placeholders the snapshot already
    /// carries are dropped.
    pub fn apply_snapshot(&mut self, mut messages: Vec<ChatMessage>) {
        messages.sort_by_key(|m| m.timestamp);
        self.pending.retain(|p| {
            !messages
                .iter()
                .any(|m| m.client_id == p.client_id && m.author == p.author)
        });
        self.persisted = messages;
    }

    pub fn fail_load(&mut self, err: &ClientError) {
        warn!(error = %err, "chat snapshot failed");
        self.error = Some(MSG_LOAD_MESSAGES_FAILED.to_owned());
    }

    /// Stored messages oldest first, then placeholders in send order.
    pub fn entries(&self) -> Vec<ChatEntry> {
        self.persisted
            .iter()
            .map(ChatEntry::from)
            .chain(self.pending.iter().cloned())
            .collect()
    }

    /// Drops placeholders, the draft and the error. Stored messages stay,
    /// since the room is shared.
    pub fn clear_local(&mut self) {
        self.pending.clear();
        self.draft.clear();
        self.error = None;
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Stages the draft, writes it, and reconciles the outcome.
    pub fn send<B: Backend>(
        &mut self,
        backend: &B,
        author: &UserId,
        author_name: &str,
    ) -> Result<ChatMessage, ClientError> {
        let outgoing = self.stage(author, author_name)?;

        match backend.post_message(author, outgoing.client_id, &outgoing.text) {
            Ok(message) => {
                debug!(id = message.id, client_id = outgoing.client_id, "message stored");
                self.confirm(outgoing.client_id, message.clone());
                Ok(message)
            }
            Err(err) => {
                warn!(client_id = outgoing.client_id, error = %err, "message send failed");
                self.reject(outgoing.client_id, &err);
                Err(err)
            }
        }
    }

    pub fn delete<B: Backend>(&mut self, backend: &B, author: &UserId, message_id: u64) -> Result<(), ClientError> {
        if let Err(err) = backend.delete_message(author, message_id) {
            warn!(message_id, error = %err, "message delete failed");
            self.error = Some(if err.is_expected() {
                err.user_message()
            } else {
                MSG_DELETE_MESSAGE_FAILED.to_owned()
            });
            return Err(err);
        }

        self.persisted.retain(|m| m.id != message_id);
        Ok(())
    }

    fn drop_pending(&mut self, author: &UserId, client_id: u64) {
        self.pending
            .retain(|p| !(p.client_id == client_id && &p.author == author));
    }
}
