/// Decoded-image cache for history thumbnails.
///
/// History entries carry their image as a base64 data URL. Each entry is
/// decoded once and the bytes are handed to egui's image loader under a
/// stable `bytes://` URI.
use agrivision_core::intake::decode_data_url;
use agrivision_core::model::{AnalysisResult, History};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A decoded thumbnail ready for `egui::Image::from_bytes`.
#[derive(Clone)]
pub struct Thumbnail {
    pub uri: String,
    pub bytes: Arc<[u8]>,
}

#[derive(Default)]
pub struct ThumbnailCache {
    /// `None` records a data URL that failed to decode, so it is not retried.
    entries: HashMap<String, Option<Thumbnail>>,
    /// URIs of dropped entries, still registered with egui's loaders.
    evicted: Vec<String>,
}

impl ThumbnailCache {
    /// Decoded bytes for `entry`, decoding on first use.
    pub fn get(&mut self, entry: &AnalysisResult) -> Option<Thumbnail> {
        let key = cache_key(entry);
        self.entries
            .entry(key)
            .or_insert_with_key(|key| {
                decode_data_url(&entry.image).ok().map(|(mime, bytes)| Thumbnail {
                    uri: format!("bytes://history/{key}.{}", extension_for(&mime)),
                    bytes: bytes.into(),
                })
            })
            .clone()
    }

    /// Drop entries for results no longer in `history`.
    pub fn retain_for(&mut self, history: &History) {
        let live: HashSet<String> = history.iter().map(cache_key).collect();
        let evicted = &mut self.evicted;
        self.entries.retain(|key, thumb| {
            let keep = live.contains(key);
            if !keep {
                evicted.extend(thumb.take().map(|t| t.uri));
            }
            keep
        });
    }

    pub fn clear(&mut self) {
        self.evicted
            .extend(self.entries.drain().filter_map(|(_, t)| t.map(|t| t.uri)));
    }

    /// URIs evicted since the last call, for `egui::Context::forget_image`.
    pub fn take_evicted(&mut self) -> Vec<String> {
        std::mem::take(&mut self.evicted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Completion time plus payload length; unique enough for 25 entries.
fn cache_key(entry: &AnalysisResult) -> String {
    let stamp: String = entry
        .date
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!("{stamp}-{}", entry.image.len())
}

/// File extension hint so egui's loaders can pick a decoder from the URI.
fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        _ => "img",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(image: &str) -> AnalysisResult {
        AnalysisResult {
            disease: "Leaf Rust".into(),
            confidence: 0.9,
            treatment: String::new(),
            date: "2025-01-01T08:00:00.000Z".into(),
            image: image.into(),
        }
    }

    #[test]
    fn test_decodes_once_and_reuses() {
        let mut cache = ThumbnailCache::default();
        let e = entry("data:image/png;base64,aGk=");
        let a = cache.get(&e).expect("valid data URL");
        let b = cache.get(&e).expect("cached");
        assert!(Arc::ptr_eq(&a.bytes, &b.bytes));
        assert_eq!(&*a.bytes, b"hi");
        assert!(a.uri.starts_with("bytes://history/") && a.uri.ends_with(".png"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_bad_data_url_is_none() {
        let mut cache = ThumbnailCache::default();
        assert!(cache.get(&entry("not a data url")).is_none());
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.take_evicted().is_empty());
    }

    #[test]
    fn test_retain_for_drops_entries_outside_history() {
        let mut cache = ThumbnailCache::default();
        let kept = entry("data:image/png;base64,aGk=");
        let mut gone = entry("data:image/jpeg;base64,aGVsbG8=");
        gone.date = "2024-12-31T08:00:00.000Z".into();
        cache.get(&kept);
        let gone_uri = cache.get(&gone).unwrap().uri;

        let history = History::from_entries(vec![kept.clone()]);
        cache.retain_for(&history);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.take_evicted(), vec![gone_uri]);
        assert!(cache.take_evicted().is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.take_evicted().len(), 1);
    }
}
