//! Heading anchor identifiers.

use rw_mdast::Node;

use crate::error::TransformError;
use crate::slug::slugify;
use crate::transform::Transform;
use crate::walk;

/// Attaches a slug identifier to every heading in the tree.
///
/// The slug is computed from the heading's concatenated text content and
/// written to both `data.id` and `data.hProperties.id`. Children and depth
/// are never modified. Identical headings receive identical identifiers.
///
/// # Example
///
/// ```
/// use rw_mdast::Node;
/// use rw_transforms::{HeadingIdTransform, Transform};
///
/// let mut tree = Node::root(vec![Node::heading(2, vec![Node::text("Getting Started!")])]);
/// HeadingIdTransform::new().transform(&mut tree).unwrap();
///
/// let Node::Heading(heading) = &tree.children().unwrap()[0] else { panic!() };
/// assert_eq!(heading.id(), Some("getting-started"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HeadingIdTransform {
    slugify: fn(&str) -> String,
}

impl HeadingIdTransform {
    /// Create a heading id transform using [`slugify`].
    #[must_use]
    pub fn new() -> Self {
        Self { slugify }
    }

    /// Use a different slug function.
    #[must_use]
    pub fn with_slugger(slugify: fn(&str) -> String) -> Self {
        Self { slugify }
    }
}

impl Default for HeadingIdTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for HeadingIdTransform {
    fn name(&self) -> &str {
        "heading-ids"
    }

    fn transform(&self, tree: &mut Node) -> Result<(), TransformError> {
        let mut count = 0usize;
        walk::visit_mut(tree, &mut |node| {
            if let Node::Heading(heading) = node {
                let text: String = heading.children.iter().map(Node::to_plain_text).collect();
                heading.set_id((self.slugify)(&text));
                count += 1;
            }
        });
        tracing::trace!(headings = count, "Heading ids attached");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rw_mdast::{Directive, Element, Heading, Parent, PropertyValue};

    fn ids(tree: &Node) -> Vec<Option<String>> {
        let mut out = Vec::new();
        collect_ids(tree, &mut out);
        out
    }

    fn collect_ids(node: &Node, out: &mut Vec<Option<String>>) {
        if let Node::Heading(heading) = node {
            out.push(heading.id().map(str::to_owned));
        }
        for child in node.children().unwrap_or_default() {
            collect_ids(child, out);
        }
    }

    #[test]
    fn test_sets_id_and_h_properties() {
        let mut tree = Node::root(vec![Node::heading(1, vec![Node::text("Getting Started!")])]);
        HeadingIdTransform::new().transform(&mut tree).unwrap();

        let Node::Heading(heading) = &tree.children().unwrap()[0] else {
            panic!("expected heading");
        };
        assert_eq!(heading.id(), Some("getting-started"));
        assert_eq!(
            heading.data.h_properties.get("id"),
            Some(&PropertyValue::String("getting-started".to_owned()))
        );
    }

    #[test]
    fn test_children_and_depth_untouched() {
        let children = vec![
            Node::text("Install "),
            Node::InlineCode(rw_mdast::Text {
                value: "rw".to_owned(),
            }),
            Node::Emphasis(Parent {
                children: vec![Node::text(" now")],
            }),
        ];
        let mut tree = Node::root(vec![Node::heading(3, children.clone())]);
        HeadingIdTransform::new().transform(&mut tree).unwrap();

        let Node::Heading(heading) = &tree.children().unwrap()[0] else {
            panic!("expected heading");
        };
        assert_eq!(heading.depth, 3);
        assert_eq!(heading.children, children);
        assert_eq!(heading.id(), Some("install-rw-now"));
    }

    #[test]
    fn test_duplicates_share_id() {
        let mut tree = Node::root(vec![
            Node::heading(2, vec![Node::text("Usage")]),
            Node::paragraph(vec![Node::text("body")]),
            Node::heading(2, vec![Node::text("Usage")]),
        ]);
        HeadingIdTransform::new().transform(&mut tree).unwrap();

        assert_eq!(
            ids(&tree),
            vec![Some("usage".to_owned()), Some("usage".to_owned())]
        );
    }

    #[test]
    fn test_nested_headings() {
        let mut tree = Node::root(vec![
            Element::new("div")
                .with_child(Node::heading(2, vec![Node::text("Inside Element")]))
                .into(),
            Directive::new("note")
                .with_children(vec![Node::heading(4, vec![Node::text("Inside Directive")])])
                .into_container(),
        ]);
        HeadingIdTransform::new().transform(&mut tree).unwrap();

        assert_eq!(
            ids(&tree),
            vec![
                Some("inside-element".to_owned()),
                Some("inside-directive".to_owned())
            ]
        );
    }

    #[test]
    fn test_empty_heading_gets_empty_id() {
        let mut tree = Node::root(vec![Node::heading(1, Vec::new())]);
        HeadingIdTransform::new().transform(&mut tree).unwrap();

        assert_eq!(ids(&tree), vec![Some(String::new())]);
    }

    #[test]
    fn test_second_run_is_noop() {
        let mut tree = Node::root(vec![Node::heading(1, vec![Node::text("Title")])]);
        let transform = HeadingIdTransform::new();

        transform.transform(&mut tree).unwrap();
        let once = tree.clone();
        transform.transform(&mut tree).unwrap();

        assert_eq!(tree, once);
    }

    #[test]
    fn test_custom_slugger() {
        let mut tree = Node::Heading(Heading::new(1, vec![Node::text("Title")]));
        HeadingIdTransform::with_slugger(|text| text.to_uppercase())
            .transform(&mut tree)
            .unwrap();

        assert_eq!(ids(&tree), vec![Some("TITLE".to_owned())]);
    }
}
