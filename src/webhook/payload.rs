//! Request bodies for chat-style webhooks: a JSON text message and a single-file multipart upload.

use serde::Serialize;
use ulid::Ulid;

/// Form field name the attachment is uploaded under.
pub const ATTACHMENT_FIELD: &str = "text";
/// Filename the attachment is uploaded as.
pub const ATTACHMENT_FILENAME: &str = "attachment.txt";

/// `{"content": "..."}` — the minimal body chat webhooks accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub content: String,
}

impl Notification {
    /// `mention` is prepended with a single space when present, e.g. `<@123> disk full`.
    #[must_use]
    pub fn new(message: &str, mention: Option<&str>) -> Self {
        let content = match mention {
            Some(mention) => format!("{mention} {message}"),
            None => message.to_string(),
        };
        Self { content }
    }

    /// # Errors
    /// Serialization failure from `serde_json`.
    pub fn to_json(&self) -> Result<Vec<u8>, crate::Error> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// `multipart/form-data` body carrying one file part.
#[derive(Debug, Clone)]
pub struct Multipart {
    boundary: String,
    body: Vec<u8>,
}

impl Multipart {
    /// Attachment bytes are copied through untouched — no validation, no text decoding.
    #[must_use]
    pub fn attachment(bytes: &[u8]) -> Self {
        // ULIDs are Crockford base32, so the boundary can't collide with the part headers.
        let boundary = format!("hooklog-{}", Ulid::new());

        let mut body = Vec::with_capacity(bytes.len() + 256);
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{ATTACHMENT_FIELD}\"; filename=\"{ATTACHMENT_FILENAME}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Self { boundary, body }
    }

    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Header value naming the boundary.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
