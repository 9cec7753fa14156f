//! Syntax tree node types.

use crate::{
    Definition, Directive, DirectiveKind, Element, FootnoteDefinition, FootnoteReference,
    Heading, Image, ImageReference, LinkReference, List, ListItem, Math, Table,
};

/// A node in the markdown syntax tree.
///
/// The enum is closed: transforms match on it exhaustively instead of probing
/// for fields. Directive variants share the [`Directive`] payload and differ
/// only in shape (see [`DirectiveKind`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum Node {
    /// Document root.
    Root(Parent),
    /// Paragraph block.
    Paragraph(Parent),
    /// ATX or setext heading.
    Heading(Heading),
    /// Block quote.
    Blockquote(Parent),
    /// Emphasized inline content.
    Emphasis(Parent),
    /// Strongly emphasized inline content.
    Strong(Parent),
    /// Hyperlink.
    Link(Link),
    /// Literal text.
    Text(Text),
    /// Inline code span.
    InlineCode(Text),
    /// Fenced or indented code block.
    Code(Code),
    /// Ordered or unordered list.
    List(List),
    /// Item of a list.
    ListItem(ListItem),
    /// GFM table.
    Table(Table),
    /// Row of a table.
    TableRow(Parent),
    /// Cell of a table row.
    TableCell(Parent),
    /// GFM strikethrough.
    Delete(Parent),
    /// Raw HTML.
    Html(Text),
    /// Image.
    Image(Image),
    /// Image through a definition.
    ImageReference(ImageReference),
    /// Link through a definition.
    LinkReference(LinkReference),
    /// Link reference definition.
    Definition(Definition),
    /// Footnote body.
    FootnoteDefinition(FootnoteDefinition),
    /// Footnote call.
    FootnoteReference(FootnoteReference),
    /// Thematic break (`***`).
    ThematicBreak,
    /// Hard line break.
    Break,
    /// YAML frontmatter.
    Yaml(Text),
    /// Display math block.
    Math(Math),
    /// Inline math.
    InlineMath(Text),
    /// Block directive wrapping arbitrary content: `:::name` ... `:::`.
    ContainerDirective(Directive),
    /// Block directive without nested blocks: `::name[label]{attrs}`.
    LeafDirective(Directive),
    /// Inline directive: `:name[label]{attrs}`.
    TextDirective(Directive),
    /// Render-hint node produced by transforms.
    Element(Element),
}

/// Payload for nodes that only hold children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parent {
    /// Ordered child nodes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

/// Literal text payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    /// The text content.
    pub value: String,
}

/// Code block payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Code {
    /// Info string language, if any.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lang: Option<String>,
    /// Rest of the info string after the language.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub meta: Option<String>,
    /// The code content.
    pub value: String,
}

/// Hyperlink payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// Link destination.
    pub url: String,
    /// Optional link title.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub title: Option<String>,
    /// Link label content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a root node.
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Self::Root(Parent { children })
    }

    /// Create a paragraph node.
    #[must_use]
    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::Paragraph(Parent { children })
    }

    /// Create a heading node without render metadata.
    #[must_use]
    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Self::Heading(Heading::new(depth, children))
    }

    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text {
            value: value.into(),
        })
    }

    /// The mdast `type` name of this node.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Root(_) => "root",
            Self::Paragraph(_) => "paragraph",
            Self::Heading(_) => "heading",
            Self::Blockquote(_) => "blockquote",
            Self::Emphasis(_) => "emphasis",
            Self::Strong(_) => "strong",
            Self::Link(_) => "link",
            Self::Text(_) => "text",
            Self::InlineCode(_) => "inlineCode",
            Self::Code(_) => "code",
            Self::List(_) => "list",
            Self::ListItem(_) => "listItem",
            Self::Table(_) => "table",
            Self::TableRow(_) => "tableRow",
            Self::TableCell(_) => "tableCell",
            Self::Delete(_) => "delete",
            Self::Html(_) => "html",
            Self::Image(_) => "image",
            Self::ImageReference(_) => "imageReference",
            Self::LinkReference(_) => "linkReference",
            Self::Definition(_) => "definition",
            Self::FootnoteDefinition(_) => "footnoteDefinition",
            Self::FootnoteReference(_) => "footnoteReference",
            Self::ThematicBreak => "thematicBreak",
            Self::Break => "break",
            Self::Yaml(_) => "yaml",
            Self::Math(_) => "math",
            Self::InlineMath(_) => "inlineMath",
            Self::ContainerDirective(_) => "containerDirective",
            Self::LeafDirective(_) => "leafDirective",
            Self::TextDirective(_) => "textDirective",
            Self::Element(_) => "element",
        }
    }

    /// Child nodes, or `None` for literal nodes.
    #[must_use]
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Root(p)
            | Self::Paragraph(p)
            | Self::Blockquote(p)
            | Self::Emphasis(p)
            | Self::Strong(p)
            | Self::TableRow(p)
            | Self::TableCell(p)
            | Self::Delete(p) => Some(&p.children),
            Self::Heading(h) => Some(&h.children),
            Self::Link(l) => Some(&l.children),
            Self::List(l) => Some(&l.children),
            Self::ListItem(i) => Some(&i.children),
            Self::Table(t) => Some(&t.children),
            Self::LinkReference(r) => Some(&r.children),
            Self::FootnoteDefinition(f) => Some(&f.children),
            Self::ContainerDirective(d) | Self::LeafDirective(d) | Self::TextDirective(d) => {
                Some(&d.children)
            }
            Self::Element(e) => Some(&e.children),
            Self::Text(_)
            | Self::InlineCode(_)
            | Self::Code(_)
            | Self::Html(_)
            | Self::Image(_)
            | Self::ImageReference(_)
            | Self::Definition(_)
            | Self::FootnoteReference(_)
            | Self::ThematicBreak
            | Self::Break
            | Self::Yaml(_)
            | Self::Math(_)
            | Self::InlineMath(_) => None,
        }
    }

    /// Mutable child list, or `None` for literal nodes.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Root(p)
            | Self::Paragraph(p)
            | Self::Blockquote(p)
            | Self::Emphasis(p)
            | Self::Strong(p)
            | Self::TableRow(p)
            | Self::TableCell(p)
            | Self::Delete(p) => Some(&mut p.children),
            Self::Heading(h) => Some(&mut h.children),
            Self::Link(l) => Some(&mut l.children),
            Self::List(l) => Some(&mut l.children),
            Self::ListItem(i) => Some(&mut i.children),
            Self::Table(t) => Some(&mut t.children),
            Self::LinkReference(r) => Some(&mut r.children),
            Self::FootnoteDefinition(f) => Some(&mut f.children),
            Self::ContainerDirective(d) | Self::LeafDirective(d) | Self::TextDirective(d) => {
                Some(&mut d.children)
            }
            Self::Element(e) => Some(&mut e.children),
            Self::Text(_)
            | Self::InlineCode(_)
            | Self::Code(_)
            | Self::Html(_)
            | Self::Image(_)
            | Self::ImageReference(_)
            | Self::Definition(_)
            | Self::FootnoteReference(_)
            | Self::ThematicBreak
            | Self::Break
            | Self::Yaml(_)
            | Self::Math(_)
            | Self::InlineMath(_) => None,
        }
    }

    /// The directive payload and its shape, if this node is a directive.
    #[must_use]
    pub fn directive(&self) -> Option<(DirectiveKind, &Directive)> {
        match self {
            Self::ContainerDirective(d) => Some((DirectiveKind::Container, d)),
            Self::LeafDirective(d) => Some((DirectiveKind::Leaf, d)),
            Self::TextDirective(d) => Some((DirectiveKind::Text, d)),
            _ => None,
        }
    }

    /// Text value if this is a plain text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(&t.value),
            _ => None,
        }
    }

    /// Concatenate all literal text below this node in document order.
    ///
    /// # Example
    ///
    /// ```
    /// use rw_mdast::{Node, Parent};
    ///
    /// let heading = Node::heading(1, vec![
    ///     Node::text("Getting "),
    ///     Node::Strong(Parent { children: vec![Node::text("Started")] }),
    ///     Node::text("!"),
    /// ]);
    /// assert_eq!(heading.to_plain_text(), "Getting Started!");
    /// ```
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) | Self::InlineCode(t) | Self::Html(t) | Self::InlineMath(t) => {
                out.push_str(&t.value);
            }
            Self::Code(code) => out.push_str(&code.value),
            Self::Math(math) => out.push_str(&math.value),
            Self::Image(Image { alt, .. }) | Self::ImageReference(ImageReference { alt, .. }) => {
                out.push_str(alt.as_deref().unwrap_or_default());
            }
            // Frontmatter is metadata, not document text.
            Self::Yaml(_) => {}
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Heading> for Node {
    fn from(heading: Heading) -> Self {
        Self::Heading(heading)
    }
}
