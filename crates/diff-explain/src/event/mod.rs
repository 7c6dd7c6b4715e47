//! Events emitted by the explain session.

mod explain_event;

pub use explain_event::ExplainEvent;
