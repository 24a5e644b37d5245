//! Site content model for the Makebetter landing page and its admin panel.

pub mod document;
pub mod events;
pub mod lead;
pub mod page;
pub mod session;
