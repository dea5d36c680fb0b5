//! Helper functions shared with the page-assembly stage

mod html;

pub use html::*;
