//! Host loop plumbing

pub mod session;

pub use session::Session;
