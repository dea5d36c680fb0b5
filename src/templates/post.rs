//! Post page template

use crate::content::PostRecord;
use crate::render::{Element, Node};

/// Render a post page: a container wrapping the post title heading
///
/// The record is assumed validated by the calling framework; this
/// projection performs no checks of its own. The body markup in
/// `record.html` is not read here, the page-assembly stage decides
/// where it lands.
pub fn render_post(record: &PostRecord) -> Node {
    tracing::debug!("Rendering post: {}", record.frontmatter.path);

    Element::new("div")
        .child(Element::new("h1").text(record.frontmatter.title.as_str()))
        .into()
}
