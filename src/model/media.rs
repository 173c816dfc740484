//! Embedded media payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Broad kind of a media part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

/// A media part loaded for one conversion, keyed by `slideIndex_rId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    pub mime_type: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Base64 payload (standard alphabet)
    pub base64: String,
}

impl MediaEntry {
    pub fn from_bytes(file_name: &str, data: &[u8]) -> Self {
        let mime_type = mime_from_filename(file_name).to_string();
        let kind = kind_from_mime(&mime_type);
        Self {
            mime_type,
            kind,
            base64: STANDARD.encode(data),
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// MIME type from a part name's extension.
pub fn mime_from_filename(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "wmf" => "image/x-wmf",
        "emf" => "image/x-emf",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" | "oga" => "audio/ogg",
        "wma" => "audio/x-ms-wma",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "wmv" => "video/x-ms-wmv",
        "webm" => "video/webm",
        "mpg" | "mpeg" => "video/mpeg",
        _ => "application/octet-stream",
    }
}

fn kind_from_mime(mime: &str) -> MediaKind {
    if mime.starts_with("video/") {
        MediaKind::Video
    } else if mime.starts_with("audio/") {
        MediaKind::Audio
    } else {
        MediaKind::Image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_detection() {
        assert_eq!(mime_from_filename("ppt/media/image1.PNG"), "image/png");
        assert_eq!(mime_from_filename("media1.mp4"), "video/mp4");
        assert_eq!(mime_from_filename("noext"), "application/octet-stream");
    }

    #[test]
    fn test_data_uri() {
        let entry = MediaEntry::from_bytes("ppt/media/audio1.mp3", b"abc");
        assert_eq!(entry.kind, MediaKind::Audio);
        assert_eq!(entry.data_uri(), "data:audio/mpeg;base64,YWJj");
    }
}
