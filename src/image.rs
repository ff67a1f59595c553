//! Validation of photo responses as displayable images.

/// Image formats the client recognizes in photo responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
}

impl ImageFormat {
    /// Identify the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else if bytes.starts_with(b"BM") {
            Some(Self::Bmp)
        } else {
            None
        }
    }
}

/// A photo fetched from the API, validated as a displayable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl Image {
    /// Validate response bytes as an image. Returns `None` when the payload
    /// matches no recognized format.
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        let format = ImageFormat::sniff(&bytes)?;
        Some(Self { format, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(ImageFormat::sniff(&PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(
            ImageFormat::sniff(&[0xff, 0xd8, 0xff, 0xe0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(
            ImageFormat::sniff(b"RIFF\x00\x00\x00\x00WEBPVP8 "),
            Some(ImageFormat::Webp)
        );
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert_eq!(ImageFormat::sniff(b"<html>not an image</html>"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
        assert!(Image::from_bytes(b"{\"error\":\"nope\"}".to_vec()).is_none());
    }

    #[test]
    fn keeps_payload_bytes() {
        let mut payload = PNG_HEADER.to_vec();
        payload.extend_from_slice(&[1, 2, 3]);
        let image = Image::from_bytes(payload.clone()).unwrap();
        assert_eq!(image.format, ImageFormat::Png);
        assert_eq!(image.bytes, payload);
    }
}
