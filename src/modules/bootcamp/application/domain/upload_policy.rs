use std::path::Path;

use uuid::Uuid;

use crate::shared::api::ApiError;

pub const DEFAULT_MAX_FILE_UPLOAD: usize = 1_000_000;

/// A file taken from a multipart `file` field.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    /// Bytes seen on the wire; may exceed `bytes.len()` once the limit is hit.
    pub size: usize,
}

#[derive(Debug, Clone)]
pub struct PhotoUploadPolicy {
    pub max_file_size: usize,
}

impl Default for PhotoUploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_UPLOAD,
        }
    }
}

impl PhotoUploadPolicy {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Checks in order: a file is attached, it is an image, it fits.
    pub fn check<'a>(&self, upload: Option<&'a PhotoUpload>) -> Result<&'a PhotoUpload, ApiError> {
        let upload = upload.ok_or_else(|| ApiError::bad_request("Please upload a file"))?;

        let is_image = upload
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image {
            return Err(ApiError::bad_request("Please upload an image file."));
        }

        if upload.size > self.max_file_size {
            return Err(ApiError::bad_request(format!(
                "Please upload an image less than {} bytes",
                self.max_file_size
            )));
        }

        Ok(upload)
    }

    /// `photo_<bootcamp id><original extension>`
    pub fn file_name(bootcamp_id: Uuid, original: &str) -> String {
        let ext = Path::new(original)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        format!("photo_{}{}", bootcamp_id, ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: Option<&str>, size: usize) -> PhotoUpload {
        PhotoUpload {
            file_name: "campus.jpg".to_string(),
            content_type: content_type.map(str::to_string),
            bytes: vec![0; size.min(16)],
            size,
        }
    }

    #[test]
    fn test_missing_file() {
        let err = PhotoUploadPolicy::default().check(None).unwrap_err();
        assert_eq!(err.message, "Please upload a file");
    }

    #[test]
    fn test_non_image_rejected() {
        let file = upload(Some("application/pdf"), 10);
        let err = PhotoUploadPolicy::default().check(Some(&file)).unwrap_err();
        assert_eq!(err.message, "Please upload an image file.");

        let untyped = upload(None, 10);
        assert!(PhotoUploadPolicy::default().check(Some(&untyped)).is_err());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let file = upload(Some("image/png"), 101);
        let err = PhotoUploadPolicy::new(100).check(Some(&file)).unwrap_err();
        assert_eq!(err.message, "Please upload an image less than 100 bytes");
    }

    #[test]
    fn test_image_within_limit_passes() {
        let file = upload(Some("image/jpeg"), 100);
        assert!(PhotoUploadPolicy::new(100).check(Some(&file)).is_ok());
    }

    #[test]
    fn test_file_name_keeps_extension() {
        let id = Uuid::new_v4();
        assert_eq!(
            PhotoUploadPolicy::file_name(id, "campus.JPG"),
            format!("photo_{}.JPG", id)
        );
        assert_eq!(
            PhotoUploadPolicy::file_name(id, "campus"),
            format!("photo_{}", id)
        );
    }
}
