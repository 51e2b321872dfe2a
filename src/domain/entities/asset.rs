use bytes::Bytes;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AssetKind, DocumentId};

/// A binary asset (sprite or audio clip) persisted inline with its filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    id: DocumentId,
    kind: AssetKind,
    filename: String,
    content: Bytes,
}

impl Asset {
    /// Create a new asset, enforcing the file-type gate for `kind`
    pub fn new(kind: AssetKind, filename: String, content: Bytes) -> Result<Self, DomainError> {
        if !kind.accepts(Some(&filename)) {
            return Err(DomainError::InvalidFileType(kind));
        }

        Ok(Self {
            id: DocumentId::new(),
            kind,
            filename,
            content,
        })
    }

    /// Rebuild an asset loaded from the store (no validation)
    pub fn reconstruct(id: DocumentId, kind: AssetKind, filename: String, content: Bytes) -> Self {
        Self {
            id,
            kind,
            filename,
            content,
        }
    }

    /// Replace filename and content in place, keeping the identifier
    pub fn replace(&mut self, filename: String, content: Bytes) -> Result<(), DomainError> {
        if !self.kind.accepts(Some(&filename)) {
            return Err(DomainError::InvalidFileType(self.kind));
        }
        self.filename = filename;
        self.content = content;
        Ok(())
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}
