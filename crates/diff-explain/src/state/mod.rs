//! State management for the explain session.

mod selection_tracker;
mod session;

pub use selection_tracker::SelectionTracker;
pub use session::ExplainSession;
