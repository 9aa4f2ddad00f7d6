use html5ever::driver;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Tags the model is asked to use for the email body. They are the only
/// markup that survives into the preview, and always without attributes.
pub const ALLOWED_TAGS: [&str; 6] = ["p", "ul", "li", "strong", "h3", "br"];

// Removed together with everything inside them
const DROPPED_TAGS: [&str; 7] = [
    "head", "script", "style", "title", "iframe", "template", "noscript",
];

/// Email body HTML re-serialised down to `ALLOWED_TAGS`.
///
/// Model output is untrusted, so it goes through a real HTML parser rather
/// than string replacement. Disallowed elements are unwrapped (their text is
/// kept), comments and doctypes are discarded, and text is escaped again on
/// the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewBody(String);

// Pending work for the walk: a node to write, or the closing tag of an
// element whose children have been queued
enum Visit {
    Node(Handle),
    Close(&'static str),
}

impl PreviewBody {
    pub fn sanitize(html: &str) -> Self {
        let dom = driver::parse_document(RcDom::default(), Default::default()).one(html);

        let mut out = String::with_capacity(html.len());
        let mut stack = Vec::new();
        push_children(&dom.document, &mut stack);

        // Model output can nest arbitrarily deep, so no recursion here
        while let Some(visit) = stack.pop() {
            let node = match visit {
                Visit::Close(tag) => {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                    continue;
                }
                Visit::Node(node) => node,
            };

            match node.data {
                NodeData::Text { ref contents } => {
                    let text = contents.borrow();
                    out.push_str(&html_escape::encode_text(&**text));
                }
                NodeData::Element { ref name, .. } => {
                    let local: &str = &name.local;

                    if DROPPED_TAGS.contains(&local) {
                        continue;
                    }

                    let Some(tag) = ALLOWED_TAGS.iter().copied().find(|tag| *tag == local) else {
                        push_children(&node, &mut stack);
                        continue;
                    };

                    out.push('<');
                    out.push_str(tag);
                    out.push('>');

                    // void element
                    if tag == "br" {
                        continue;
                    }

                    stack.push(Visit::Close(tag));
                    push_children(&node, &mut stack);
                }
                NodeData::Document => push_children(&node, &mut stack),
                _ => {}
            }
        }

        Self(out)
    }
}

fn push_children(node: &Handle, stack: &mut Vec<Visit>) {
    stack.extend(
        node.children
            .borrow()
            .iter()
            .rev()
            .map(|child| Visit::Node(child.clone())),
    );
}

impl AsRef<str> for PreviewBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PreviewBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
