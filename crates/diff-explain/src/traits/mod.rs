//! Collaborator traits implemented by the embedding application.

mod line_source;

pub use line_source::LineSource;
