//! Shared presentational components.

mod answers;
pub use answers::{AnswerList, AnswerProgress};

mod fallback;
pub use fallback::{reload_page, ReloadFallback};

mod insight;
pub use insight::InsightPanel;

mod spinner;
pub use spinner::LoadingSpinner;
