//! Tree traversal helpers.

use rw_mdast::Node;

use crate::directive::{DirectiveHandler, DirectiveOutput};
use crate::error::TransformError;

/// Replace directives claimed by `handler` below `node`.
///
/// Children are visited before their parent is matched, so each position is
/// processed once per pass and a freshly spliced replacement is never
/// re-entered. Returns the number of replacements.
pub(crate) fn replace_directives<H>(
    node: &mut Node,
    handler: &H,
    failures: &mut Vec<TransformError>,
) -> usize
where
    H: DirectiveHandler + ?Sized,
{
    let Some(children) = node.children_mut() else {
        return 0;
    };

    let mut replaced = 0;
    for child in children.iter_mut() {
        replaced += replace_directives(child, handler, failures);

        let output = match handler.matches(child) {
            Some(directive) => handler.process(directive),
            None => continue,
        };

        match output {
            Ok(DirectiveOutput::Replace(replacement)) => {
                *child = replacement;
                replaced += 1;
            }
            Ok(DirectiveOutput::Skip) => {}
            Err(err) => failures.push(err),
        }
    }

    replaced
}

/// Visit every node in document order (pre-order), including `node` itself.
pub(crate) fn visit_mut<F>(node: &mut Node, visitor: &mut F)
where
    F: FnMut(&mut Node),
{
    visitor(node);
    if let Some(children) = node.children_mut() {
        for child in children {
            visit_mut(child, visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rw_mdast::{Directive, DirectiveKind, Element};

    use crate::error::MetadataError;

    /// Replaces `:::box` containers with a `section` holding the same children.
    struct BoxHandler;

    impl DirectiveHandler for BoxHandler {
        fn name(&self) -> &'static str {
            "box"
        }

        fn kind(&self) -> DirectiveKind {
            DirectiveKind::Container
        }

        fn process(&self, directive: &Directive) -> Result<DirectiveOutput, TransformError> {
            if directive.attribute("fail").is_some() {
                return Err(MetadataError::Unavailable {
                    url: String::new(),
                    message: "boom".to_owned(),
                }
                .into());
            }
            if directive.attribute("skip").is_some() {
                return Ok(DirectiveOutput::Skip);
            }
            Ok(DirectiveOutput::replace(
                Element::new("section").with_children(directive.children.clone()),
            ))
        }
    }

    fn boxed(children: Vec<Node>) -> Node {
        Directive::new("box").with_children(children).into_container()
    }

    fn section(children: Vec<Node>) -> Node {
        Element::new("section").with_children(children).into()
    }

    #[test]
    fn test_replaces_in_place_preserving_siblings() {
        let mut tree = Node::root(vec![
            Node::text("before"),
            boxed(vec![Node::text("inside")]),
            Node::text("after"),
        ]);
        let mut failures = Vec::new();

        let replaced = replace_directives(&mut tree, &BoxHandler, &mut failures);

        assert_eq!(replaced, 1);
        assert!(failures.is_empty());
        assert_eq!(
            tree,
            Node::root(vec![
                Node::text("before"),
                section(vec![Node::text("inside")]),
                Node::text("after"),
            ])
        );
    }

    #[test]
    fn test_nested_directives_are_replaced_once() {
        let mut tree = Node::root(vec![boxed(vec![boxed(vec![Node::text("deep")])])]);
        let mut failures = Vec::new();

        let replaced = replace_directives(&mut tree, &BoxHandler, &mut failures);

        assert_eq!(replaced, 2);
        assert_eq!(
            tree,
            Node::root(vec![section(vec![section(vec![Node::text("deep")])])])
        );
    }

    #[test]
    fn test_other_names_and_shapes_untouched() {
        let original = Node::root(vec![
            Directive::new("note").into_container(),
            Directive::new("box").into_leaf(),
            Directive::new("box").into_node(DirectiveKind::Text),
        ]);
        let mut tree = original.clone();
        let mut failures = Vec::new();

        let replaced = replace_directives(&mut tree, &BoxHandler, &mut failures);

        assert_eq!(replaced, 0);
        assert_eq!(tree, original);
    }

    #[test]
    fn test_failure_is_isolated() {
        let failing = Directive::new("box")
            .with_attribute("fail", "")
            .into_container();
        let mut tree = Node::root(vec![failing.clone(), boxed(Vec::new())]);
        let mut failures = Vec::new();

        let replaced = replace_directives(&mut tree, &BoxHandler, &mut failures);

        assert_eq!(replaced, 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(tree, Node::root(vec![failing, section(Vec::new())]));
    }

    #[test]
    fn test_skip_leaves_node_and_descends() {
        let skipped = Directive::new("box")
            .with_attribute("skip", "")
            .with_children(vec![boxed(Vec::new())])
            .into_container();
        let mut tree = Node::root(vec![skipped]);
        let mut failures = Vec::new();

        replace_directives(&mut tree, &BoxHandler, &mut failures);

        let expected = Directive::new("box")
            .with_attribute("skip", "")
            .with_children(vec![section(Vec::new())])
            .into_container();
        assert_eq!(tree, Node::root(vec![expected]));
    }

    #[test]
    fn test_visit_mut_is_pre_order() {
        let mut tree = Node::root(vec![
            Node::paragraph(vec![Node::text("a")]),
            Node::text("b"),
        ]);
        let mut seen = Vec::new();

        visit_mut(&mut tree, &mut |node| seen.push(node.type_name()));

        assert_eq!(seen, vec!["root", "paragraph", "text", "text"]);
    }
}
