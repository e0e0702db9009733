use bytes::Bytes;

/// Raw image payload handed to the vision model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub mime_type: String,
    pub data: Bytes,
}

impl ImageInput {
    pub fn new(mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}
