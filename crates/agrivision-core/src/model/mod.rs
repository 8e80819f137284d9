/// Data model: the fixed findings table and the records built from it.
pub mod finding;
pub mod history;
pub mod image;
pub mod profile;
pub mod result;

pub use finding::{Finding, FINDINGS};
pub use history::{History, MAX_HISTORY_ENTRIES};
pub use image::UploadedImage;
pub use profile::Profile;
pub use result::AnalysisResult;
