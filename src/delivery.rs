//! Chat delivery: turn an inbound message update into an outbound reply.
//!
//! Transport is left to a [`MessageSink`] implementation. [`handle_update`]
//! decides what to send: the built document for a text message, a hint for
//! anything else, and a generic failure notice if the build fails.

use crate::artifact::DocxArtifact;
use crate::builder::DocumentBuilder;
use crate::classify::LineClassifier;
use crate::common::Result;
use serde::Deserialize;

/// Reply to messages that carry no text.
pub const FALLBACK_MESSAGE: &str =
    "فقط متن بفرستید یا فایل txt (در این نسخه فقط متن پشتیبانی می‌شود).";

/// Reply when a document could not be built.
pub const FAILURE_MESSAGE: &str = "ساخت فایل با خطا مواجه شد. لطفاً دوباره تلاش کنید.";

/// Inbound update. Fields other than the message are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Update {
    pub update_id: Option<i64>,
    pub message: Option<Message>,
    pub edited_message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Decode an update from its JSON body.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The new message, or else the edited one.
    pub fn effective_message(&self) -> Option<&Message> {
        self.message.as_ref().or(self.edited_message.as_ref())
    }
}

/// Outbound side of a chat channel.
pub trait MessageSink {
    fn send_document(&mut self, chat_id: i64, artifact: &DocxArtifact) -> Result<()>;

    fn send_message(&mut self, chat_id: i64, text: &str) -> Result<()>;
}

/// What [`handle_update`] sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No message in the update; nothing was sent
    Ignored,
    DocumentSent,
    /// The message had no text; the fallback hint was sent
    FallbackSent,
    /// The build failed; the failure notice was sent instead of a document
    FailureReported { reason: String },
}

/// Answer one update through `sink`.
///
/// Build failures are reported to the chat and returned as
/// [`Outcome::FailureReported`]. Errors from the sink itself are returned
/// unchanged.
pub fn handle_update<C, S>(builder: &DocumentBuilder<C>, update: &Update, sink: &mut S) -> Result<Outcome>
where
    C: LineClassifier,
    S: MessageSink + ?Sized,
{
    let Some(message) = update.effective_message() else {
        log::debug!("update {:?} has no message, ignoring", update.update_id);
        return Ok(Outcome::Ignored);
    };
    let chat_id = message.chat.id;

    let text = match message.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            log::debug!("message in chat {} has no text", chat_id);
            sink.send_message(chat_id, FALLBACK_MESSAGE)?;
            return Ok(Outcome::FallbackSent);
        },
    };

    match builder.build_artifact(text) {
        Ok(artifact) => {
            sink.send_document(chat_id, &artifact)?;
            Ok(Outcome::DocumentSent)
        },
        Err(err) => {
            log::error!("failed to build document for chat {}: {}", chat_id, err);
            log::warn!("sending failure notice to chat {}", chat_id);
            sink.send_message(chat_id, FAILURE_MESSAGE)?;
            Ok(Outcome::FailureReported {
                reason: err.to_string(),
            })
        },
    }
}
