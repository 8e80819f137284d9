/// Application state: the analysis workflow controller.
///
/// Centralises all mutable state that the UI reads and writes: the active
/// tab, the selected image, the in-flight analysis, the history ledger and
/// the profile. Background work (image reads, the simulated analysis) talks
/// back through crossbeam channels; results are applied in
/// `process_messages()`, which runs once per frame.
use crate::widgets::thumbnail::ThumbnailCache;
use agrivision_core::analysis::{start_analysis, AnalysisEnv, AnalysisHandle, AnalysisProgress};
use agrivision_core::intake::{self, ImageRead};
use agrivision_core::model::{AnalysisResult, History, Profile, UploadedImage};
use agrivision_core::store::{records, KeyValueStore, MemoryStore};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// The three mutually exclusive dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Analyze,
    History,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Analyze, Tab::History, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Analyze => "Analyze",
            Tab::History => "History",
            Tab::Profile => "Profile",
        }
    }
}

/// Time-of-day greeting band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// `hour` is the local hour of day, 0–23.
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 18 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A non-blocking message for the status bar.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created: chrono::DateTime<chrono::Local>,
}

/// Maximum notices retained; the oldest is evicted first.
pub const MAX_NOTICES: usize = 20;

/// Maximum image-read messages drained from the channel per frame.
const MAX_MESSAGES_PER_FRAME: usize = 64;

/// Capacity of the image-read channel. One reader is spawned per pick.
const IMAGE_CHANNEL_CAPACITY: usize = 64;

/// All application state.
pub struct AppState {
    // ── Navigation ─────────────────────────────────────
    pub active_tab: Tab,

    // ── Analysis ───────────────────────────────────────
    image: Option<UploadedImage>,
    /// Bumped every time a new image is applied; keys the preview texture.
    image_generation: u64,
    result: Option<AnalysisResult>,
    analysis_handle: Option<AnalysisHandle>,

    // ── Image intake ───────────────────────────────────
    image_tx: Sender<ImageRead>,
    image_rx: Receiver<ImageRead>,
    next_read_seq: u64,
    pending_reads: usize,

    // ── Records ────────────────────────────────────────
    history: History,
    /// Edited in place by the profile form; persisted by `save_profile`.
    pub profile: Profile,

    // ── UI state ───────────────────────────────────────
    pub notices: Vec<Notice>,
    pub dark_mode: bool,
    pub show_about: bool,
    pub show_library: bool,
    pub library_query: String,
    pub thumbnails: ThumbnailCache,
    /// Preview URIs of replaced images, still registered with egui's loaders.
    stale_previews: Vec<String>,

    // ── Injected services ──────────────────────────────
    store: Arc<dyn KeyValueStore>,
    env: AnalysisEnv,
}

impl AppState {
    /// Create state backed by `store`, loading the persisted history and profile.
    ///
    /// Missing or unreadable records load as empty; this never fails.
    pub fn new(store: Arc<dyn KeyValueStore>, env: AnalysisEnv) -> Self {
        let history = records::load_history(store.as_ref());
        let profile = records::load_profile(store.as_ref());
        info!(
            "Loaded {} history entries; profile {}",
            history.len(),
            if profile.is_empty() { "empty" } else { "present" }
        );

        let (image_tx, image_rx) = crossbeam_channel::bounded(IMAGE_CHANNEL_CAPACITY);

        Self {
            active_tab: Tab::Analyze,
            image: None,
            image_generation: 0,
            result: None,
            analysis_handle: None,
            image_tx,
            image_rx,
            next_read_seq: 0,
            pending_reads: 0,
            history,
            profile,
            notices: Vec::new(),
            dark_mode: true,
            show_about: false,
            show_library: false,
            library_query: String::new(),
            thumbnails: ThumbnailCache::default(),
            stale_previews: Vec::new(),
            store,
            env,
        }
    }

    /// Volatile state with instant, seeded analysis. Nothing touches disk.
    pub fn in_memory(seed: u64) -> Self {
        Self::new(Arc::new(MemoryStore::new()), AnalysisEnv::instant(seed))
    }

    // ── Accessors ──────────────────────────────────────

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn image_generation(&self) -> u64 {
        self.image_generation
    }

    /// `bytes://` URI under which the current image is handed to egui.
    pub fn preview_uri(&self) -> Option<String> {
        self.image
            .as_ref()
            .map(|img| format!("bytes://upload/{}/{}", self.image_generation, img.name))
    }

    /// Image URIs that are no longer shown, for `egui::Context::forget_image`.
    pub fn take_stale_image_uris(&mut self) -> Vec<String> {
        let mut uris = std::mem::take(&mut self.stale_previews);
        uris.extend(self.thumbnails.take_evicted());
        uris
    }

    /// The result shown on the Analyze tab, if any.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// History alongside the thumbnail cache, borrowed together for rendering.
    pub fn history_with_thumbnails(&mut self) -> (&History, &mut ThumbnailCache) {
        (&self.history, &mut self.thumbnails)
    }

    /// True while an analysis is in flight.
    pub fn is_loading(&self) -> bool {
        self.analysis_handle.is_some()
    }

    /// True while at least one image read has not resolved.
    pub fn has_pending_reads(&self) -> bool {
        self.pending_reads > 0
    }

    /// Whether `analyze()` would start a new analysis right now.
    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && !self.is_loading() && !self.has_pending_reads()
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::for_hour(self.env.clock.local_hour())
    }

    /// e.g. `"Good morning, Maria"`, or just `"Good morning"` without a name.
    pub fn greeting_line(&self) -> String {
        let g = self.greeting().text();
        if self.profile.name.is_empty() {
            g.to_owned()
        } else {
            format!("{g}, {}", self.profile.name)
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    // ── Image selection ────────────────────────────────

    /// Start reading `path` in the background.
    ///
    /// The image slot is updated when the read resolves; if several reads
    /// are outstanding, the one that resolves last wins.
    pub fn select_image(&mut self, path: PathBuf) {
        let seq = self.next_read_seq;
        self.next_read_seq += 1;
        self.pending_reads += 1;
        info!("Selecting image #{seq}: {}", path.display());
        intake::start_image_read(path, seq, self.image_tx.clone());
    }

    /// Apply an image from bytes already in memory.
    ///
    /// Returns `false` (and posts an error notice) if the bytes are rejected.
    pub fn select_image_bytes(&mut self, name: &str, bytes: Vec<u8>) -> bool {
        match intake::image_from_bytes(name, bytes) {
            Ok(img) => {
                self.apply_image(img);
                true
            }
            Err(e) => {
                self.push_notice(NoticeLevel::Error, format!("Could not load image: {e}"));
                false
            }
        }
    }

    /// The "Change" action: drop the current image and its result.
    pub fn clear_image(&mut self) {
        self.retire_preview();
        self.image = None;
        self.result = None;
    }

    fn apply_image(&mut self, img: UploadedImage) {
        info!("Image ready: {img:?}");
        self.retire_preview();
        self.image = Some(img);
        self.image_generation += 1;
        self.result = None;
    }

    fn retire_preview(&mut self) {
        if let Some(uri) = self.preview_uri() {
            self.stale_previews.push(uri);
        }
    }

    // ── Analysis ───────────────────────────────────────

    /// Begin analysing the current image.
    ///
    /// No-op (returns `false`) without an image, while an analysis is in
    /// flight, or while an image read is outstanding.
    pub fn analyze(&mut self) -> bool {
        if !self.can_analyze() {
            return false;
        }
        let Some(img) = self.image.as_ref() else {
            return false;
        };
        match start_analysis(img.url.clone(), self.env.clone()) {
            Ok(handle) => {
                info!("Analysis started for {}", img.name);
                self.analysis_handle = Some(handle);
                true
            }
            Err(e) => {
                warn!("Could not start analysis: {e}");
                self.push_notice(NoticeLevel::Error, format!("Could not start analysis: {e}"));
                false
            }
        }
    }

    /// Drain background messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint.
    pub fn process_messages(&mut self) -> bool {
        let mut repaint = false;

        let mut drained = 0usize;
        while drained < MAX_MESSAGES_PER_FRAME {
            let read = match self.image_rx.try_recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            drained += 1;
            repaint = true;
            self.pending_reads = self.pending_reads.saturating_sub(1);
            match read.outcome {
                Ok(img) => self.apply_image(img),
                Err(e) => {
                    self.push_notice(NoticeLevel::Error, format!("Could not load image: {e}"))
                }
            }
        }

        let outcome = match &self.analysis_handle {
            Some(h) => h.progress_rx.try_recv(),
            None => return repaint,
        };
        match outcome {
            Ok(AnalysisProgress::Complete(result)) => {
                self.finish_analysis(result);
                repaint = true;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("Analysis worker exited without a result");
                self.analysis_handle = None;
                self.push_notice(NoticeLevel::Error, "Analysis failed unexpectedly.");
                repaint = true;
            }
        }

        repaint
    }

    fn finish_analysis(&mut self, result: AnalysisResult) {
        info!(
            "Analysis complete: {} ({})",
            result.disease,
            result.confidence_label()
        );
        // The image may have been replaced while the analysis ran.
        let still_shown = self.image.as_ref().is_some_and(|img| img.url == result.image);
        if still_shown {
            self.result = Some(result.clone());
        }
        self.history.prepend(result);
        self.thumbnails.retain_for(&self.history);
        if let Err(e) = records::save_history(self.store.as_ref(), &self.history) {
            warn!("Could not persist history: {e}");
            self.push_notice(
                NoticeLevel::Warning,
                format!("History was not saved: {e}"),
            );
        }
        self.analysis_handle = None;
        self.active_tab = Tab::History;
    }

    // ── Profile ────────────────────────────────────────

    /// Replace the profile wholesale and persist it.
    pub fn save_profile(&mut self, profile: Profile) {
        self.profile = profile;
        match records::save_profile(self.store.as_ref(), &self.profile) {
            Ok(()) => {
                info!("Profile saved");
                self.push_notice(NoticeLevel::Info, "Profile saved.");
            }
            Err(e) => {
                warn!("Could not persist profile: {e}");
                self.push_notice(NoticeLevel::Warning, format!("Profile was not saved: {e}"));
            }
        }
    }

    /// Persist whatever the profile form currently holds.
    pub fn save_current_profile(&mut self) {
        self.save_profile(self.profile.clone());
    }

    /// Blank the profile form. Nothing is persisted until the next save.
    pub fn reset_profile_form(&mut self) {
        self.profile.reset();
    }

    // ── History ────────────────────────────────────────

    /// Empty the history and delete its persisted entry.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.thumbnails.clear();
        if let Err(e) = records::delete_history(self.store.as_ref()) {
            warn!("Could not delete stored history: {e}");
            self.push_notice(
                NoticeLevel::Warning,
                format!("Stored history could not be removed: {e}"),
            );
        }
    }

    /// Write the history to `path` as CSV. Returns `true` on success.
    pub fn export_history_csv(&mut self, path: &Path) -> bool {
        match agrivision_core::export::export_history_csv(path, self.history.entries()) {
            Ok(()) => {
                info!("Exported {} entries to {}", self.history.len(), path.display());
                self.push_notice(
                    NoticeLevel::Info,
                    format!("Exported {} analyses to {}", self.history.len(), path.display()),
                );
                true
            }
            Err(e) => {
                warn!("Export to {} failed: {e}", path.display());
                self.push_notice(NoticeLevel::Error, format!("Export failed: {e}"));
                false
            }
        }
    }

    // ── Notices ────────────────────────────────────────

    pub fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        if self.notices.len() >= MAX_NOTICES {
            self.notices.remove(0);
        }
        self.notices.push(Notice {
            level,
            message: message.into(),
            created: chrono::Local::now(),
        });
    }

    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn dismiss_notices(&mut self) {
        self.notices.clear();
    }
}
