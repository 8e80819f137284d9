/// Messages sent from the analysis worker thread to the UI thread.
use crate::model::AnalysisResult;

#[derive(Debug)]
pub enum AnalysisProgress {
    /// The simulated inference finished.
    Complete(AnalysisResult),
}
