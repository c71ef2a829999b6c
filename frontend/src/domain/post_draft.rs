//! In-progress post form values.

use super::{PostBody, PostBodyValidationError, PostWriteRequest};

/// Body and optional photo typed into the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    /// Body input.
    pub body: String,
    /// Photo URL handed over by the image uploader.
    pub photo: Option<String>,
}

impl PostDraft {
    /// Empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the photo. A blank URL clears it.
    pub fn set_photo(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.photo = (!url.trim().is_empty()).then_some(url);
    }

    /// Drop the photo, keeping the body.
    pub fn discard_photo(&mut self) {
        self.photo = None;
    }

    /// Validate the body and build the create request.
    ///
    /// # Errors
    ///
    /// Returns the body validation failure.
    pub fn to_write_request(&self) -> Result<PostWriteRequest, PostBodyValidationError> {
        Ok(PostWriteRequest {
            body: PostBody::new(self.body.clone())?,
            photo: self.photo.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discarding_photo_keeps_body() {
        let mut draft = PostDraft {
            body: "Look at this".to_owned(),
            photo: None,
        };
        draft.set_photo("https://img.example/cat.png");
        draft.discard_photo();
        assert_eq!(draft.photo, None);
        assert_eq!(draft.body, "Look at this");
    }

    #[test]
    fn blank_photo_url_is_no_photo() {
        let mut draft = PostDraft::new();
        draft.set_photo("");
        assert_eq!(draft.photo, None);
    }
}
