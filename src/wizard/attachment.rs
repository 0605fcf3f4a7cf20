//! In-memory file attachments for wizard media steps.
//!
//! An [`Attachment`] owns its bytes for the lifetime of the form record that
//! holds it. Previews are weak, revocable views: once the owning attachment
//! is replaced or the wizard is discarded, every outstanding preview observes
//! the release instead of keeping the payload alive.

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::{Arc, Weak};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// An uploaded file held in memory by a form record.
pub struct Attachment {
    id: Uuid,
    name: String,
    content_type: String,
    data: Arc<[u8]>,
}

impl Attachment {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            content_type: content_type.into(),
            data: bytes.into(),
        }
    }

    /// Read a file into an attachment, deriving the name and content type
    /// from the path.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let content_type = guess_content_type(&name);
        Ok(Self::new(name, content_type, data))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Original filename as supplied by the user.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Create a read-only view of this attachment's bytes.
    ///
    /// The view does not extend the payload's lifetime: dropping the
    /// attachment revokes every preview created from it.
    pub fn preview(&self) -> AttachmentPreview {
        AttachmentPreview {
            name: self.name.clone(),
            data: Arc::downgrade(&self.data),
        }
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

// Submission payloads carry attachment metadata, not the raw bytes.
impl Serialize for Attachment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Attachment", 4)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("content_type", &self.content_type)?;
        s.serialize_field("size", &self.data.len())?;
        s.end()
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// A revocable read-only view of an [`Attachment`]'s bytes.
pub struct AttachmentPreview {
    name: String,
    data: Weak<[u8]>,
}

impl AttachmentPreview {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the underlying bytes, or `None` once the attachment has been
    /// released.
    pub fn bytes(&self) -> Option<Arc<[u8]>> {
        self.data.upgrade()
    }

    /// Whether the owning attachment has been dropped.
    pub fn is_released(&self) -> bool {
        self.data.strong_count() == 0
    }
}
