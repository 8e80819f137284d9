/// Image intake: read a picked file and encode it as a data URL.
///
/// Reads run on short-lived background threads and report through a
/// channel owned by the caller. Each read carries the sequence number it was
/// started with; the controller applies whichever read resolves last.
use crate::model::UploadedImage;
use base64::Engine;
use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Largest image accepted, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 16 * 1024 * 1024;

/// Extensions offered by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a supported image type")]
    UnsupportedType(String),

    #[error("{name} is {size} bytes; the limit is {limit} bytes")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("malformed data URL")]
    MalformedDataUrl,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result of one background read.
#[derive(Debug)]
pub struct ImageRead {
    pub seq: u64,
    pub outcome: Result<UploadedImage, IntakeError>,
}

/// MIME type for an image path, from its extension (case-insensitive).
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// `data:<mime>;base64,<payload>`
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{b64}")
}

/// Split a base64 data URL back into its MIME type and bytes.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>), IntakeError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or(IntakeError::MalformedDataUrl)?;
    let (meta, payload) = rest.split_once(',').ok_or(IntakeError::MalformedDataUrl)?;
    let mime = meta
        .strip_suffix(";base64")
        .ok_or(IntakeError::MalformedDataUrl)?;
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
    Ok((mime.to_owned(), bytes))
}

/// Display name for a path: its final component, or the whole path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Wrap already-loaded bytes as an uploaded image, applying the type and size rules.
pub fn image_from_bytes(name: &str, bytes: Vec<u8>) -> Result<UploadedImage, IntakeError> {
    let mime = mime_for_path(Path::new(name))
        .ok_or_else(|| IntakeError::UnsupportedType(name.to_owned()))?;
    let size = bytes.len() as u64;
    if size > MAX_IMAGE_BYTES {
        return Err(IntakeError::TooLarge {
            name: name.to_owned(),
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }
    Ok(UploadedImage::from_bytes(name, mime, bytes))
}

/// Read `path` and encode it, synchronously.
pub fn read_image(path: &Path) -> Result<UploadedImage, IntakeError> {
    let name = display_name(path);
    if mime_for_path(path).is_none() {
        return Err(IntakeError::UnsupportedType(name));
    }
    let read_err = |source: std::io::Error| IntakeError::Read {
        path: path.display().to_string(),
        source,
    };
    // Check the size before pulling the whole file into memory.
    let size = std::fs::metadata(path).map_err(read_err)?.len();
    if size > MAX_IMAGE_BYTES {
        return Err(IntakeError::TooLarge {
            name,
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }
    let bytes = std::fs::read(path).map_err(read_err)?;
    image_from_bytes(&name, bytes)
}

/// Read `path` on a background thread and send the outcome on `tx`.
///
/// A failure to spawn the thread is reported through `tx` like any other
/// read failure.
pub fn start_image_read(path: PathBuf, seq: u64, tx: Sender<ImageRead>) {
    let fallback_tx = tx.clone();
    let spawned = std::thread::Builder::new()
        .name("agrivision-image-read".into())
        .spawn(move || {
            debug!("Reading image #{seq} from {}", path.display());
            let outcome = read_image(&path);
            if let Err(ref e) = outcome {
                warn!("Image read #{seq} failed: {e}");
            }
            let _ = tx.send(ImageRead { seq, outcome });
        });
    if let Err(source) = spawned {
        let _ = fallback_tx.send(ImageRead {
            seq,
            outcome: Err(IntakeError::Read {
                path: String::from("<reader thread>"),
                source,
            }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a.PNG")), Some("image/png"));
        assert_eq!(mime_for_path(Path::new("leaf1.jpg")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("x.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("noext")), None);
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(encode_data_url("image/gif", b""), "data:image/gif;base64,");
    }

    #[test]
    fn test_decode_data_url() {
        let (mime, bytes) = decode_data_url("data:image/png;base64,aGk=").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, b"hi");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        for bad in ["image/png;base64,aGk=", "data:image/png,aGk=", "data:image/png;base64"] {
            assert!(matches!(decode_data_url(bad), Err(IntakeError::MalformedDataUrl)), "{bad}");
        }
        assert!(matches!(
            decode_data_url("data:image/png;base64,@@@"),
            Err(IntakeError::Base64(_))
        ));
    }

    #[test]
    fn test_read_image() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("leaf1.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();
        let img = read_image(&path).unwrap();
        assert_eq!(img.name, "leaf1.png");
        assert_eq!(img.mime, "image/png");
        assert_eq!(img.url, encode_data_url("image/png", PNG_MAGIC));
        assert_eq!(&*img.bytes, PNG_MAGIC);
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_image(&tmp.path().join("gone.jpg")).unwrap_err();
        assert!(matches!(err, IntakeError::Read { .. }));
    }

    #[test]
    fn test_read_unsupported_type() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert!(matches!(read_image(&path), Err(IntakeError::UnsupportedType(_))));
    }

    #[test]
    fn test_bytes_too_large() {
        let big = vec![0u8; (MAX_IMAGE_BYTES + 1) as usize];
        assert!(matches!(
            image_from_bytes("huge.png", big),
            Err(IntakeError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_background_read_reports_seq() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("leaf.webp");
        std::fs::write(&path, b"RIFF").unwrap();
        let (tx, rx) = crossbeam_channel::unbounded();
        start_image_read(path, 9, tx);
        let read = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(read.seq, 9);
        assert_eq!(read.outcome.unwrap().mime, "image/webp");
    }
}
