// Typed, copy-on-write profile editing for the form collaborator.

pub mod handlers;
pub mod ops;
