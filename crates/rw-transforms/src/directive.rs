//! Shared contract for directive transforms.
//!
//! A [`DirectiveHandler`] claims directives of one shape and name and decides,
//! per occurrence, whether to splice in a replacement node or leave the
//! directive untouched. [`apply`] drives a handler over a whole tree.

use rw_mdast::{Directive, DirectiveKind, Node};

use crate::error::TransformError;
use crate::walk;

/// Output from directive processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutput {
    /// Replace the directive with this node at the same position.
    Replace(Node),
    /// Leave the directive unchanged.
    Skip,
}

impl DirectiveOutput {
    /// Create a replacement output.
    #[must_use]
    pub fn replace(node: impl Into<Node>) -> Self {
        Self::Replace(node.into())
    }
}

/// Handler for directives of one shape and name.
///
/// # Example
///
/// ```
/// use rw_mdast::{Directive, DirectiveKind, Element, Node};
/// use rw_transforms::directive::{self, DirectiveHandler, DirectiveOutput};
/// use rw_transforms::TransformError;
///
/// struct KbdDirective;
///
/// impl DirectiveHandler for KbdDirective {
///     fn name(&self) -> &str { "kbd" }
///     fn kind(&self) -> DirectiveKind { DirectiveKind::Text }
///
///     fn process(&self, directive: &Directive) -> Result<DirectiveOutput, TransformError> {
///         Ok(DirectiveOutput::replace(
///             Element::new("kbd").with_children(directive.children.clone()),
///         ))
///     }
/// }
///
/// let mut tree = Node::root(vec![Node::paragraph(vec![
///     Node::text("Press "),
///     Directive::new("kbd")
///         .with_children(vec![Node::text("Ctrl+C")])
///         .into_node(DirectiveKind::Text),
/// ])]);
///
/// directive::apply(&mut tree, &KbdDirective).unwrap();
/// assert_eq!(tree.to_plain_text(), "Press Ctrl+C");
/// ```
pub trait DirectiveHandler {
    /// Directive name this handler claims (e.g., `callout`).
    fn name(&self) -> &str;

    /// Directive shape this handler claims.
    fn kind(&self) -> DirectiveKind;

    /// Process one matched directive.
    ///
    /// Returning an error leaves the directive unchanged; the traversal
    /// continues with the next node.
    fn process(&self, directive: &Directive) -> Result<DirectiveOutput, TransformError>;

    /// Whether `node` is a directive this handler claims.
    fn matches<'a>(&self, node: &'a Node) -> Option<&'a Directive> {
        node.directive()
            .filter(|(kind, directive)| *kind == self.kind() && directive.name == self.name())
            .map(|(_, directive)| directive)
    }
}

/// Run `handler` over every matching directive in `tree`.
///
/// Per-directive failures do not stop the pass; they are returned together as
/// [`TransformError::Partial`] once the whole tree has been visited.
pub fn apply<H>(tree: &mut Node, handler: &H) -> Result<(), TransformError>
where
    H: DirectiveHandler + ?Sized,
{
    let mut failures = Vec::new();
    let replaced = walk::replace_directives(tree, handler, &mut failures);
    tracing::trace!(
        directive = handler.name(),
        replaced,
        failed = failures.len(),
        "Directive pass finished"
    );
    TransformError::from_failures(handler.name(), failures)
}
