//! Page templates
//!
//! Each template is a pure projection from a fetched record to a render
//! tree. Serialization happens downstream in the page-assembly stage.

mod post;

pub use post::render_post;
