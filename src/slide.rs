//! Slide content and the element tree used for headless slides.

/// Content that can live in a slide list.
///
/// The ring manager only needs three operations on content: duplicate it
/// for a clone, take it out of the focus order, and rewrite headings so
/// clones do not add duplicate entries to the document outline.
pub trait SlideContent {
    /// Deep copy used for boundary clones.
    fn duplicate(&self) -> Self;

    /// Make this content and all of its descendants non-focusable.
    fn disable_focus(&mut self);

    /// Replace heading elements (h1-h6) with plain containers that keep
    /// their children. `class_for_level` returns the class to add for a
    /// heading level, if any.
    fn demote_headings(&mut self, class_for_level: &dyn Fn(u8) -> Option<String>);
}

/// A node in a headless element tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Element with tag, classes and children
    Element(Element),
    /// Text content
    Text(String),
}

/// A minimal element: tag name, classes, tab index and children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub tab_index: Option<i32>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder-style class addition.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Builder-style child addition.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Check whether the element carries a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Heading level for h1-h6 tags.
    pub fn heading_level(&self) -> Option<u8> {
        let level = self.tag.to_ascii_lowercase().strip_prefix('h')?.parse::<u8>().ok()?;
        (1..=6).contains(&level).then_some(level)
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Visit this element and every descendant element.
    pub fn walk(&self, visit: &mut dyn FnMut(&Element)) {
        visit(self);
        for child in &self.children {
            if let Node::Element(el) = child {
                el.walk(visit);
            }
        }
    }

    fn walk_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        visit(self);
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.walk_mut(visit);
            }
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl SlideContent for Element {
    fn duplicate(&self) -> Self {
        self.clone()
    }

    fn disable_focus(&mut self) {
        self.walk_mut(&mut |el: &mut Element| el.tab_index = Some(-1));
    }

    fn demote_headings(&mut self, class_for_level: &dyn Fn(u8) -> Option<String>) {
        // The slide root itself is a list item, only descendants are rewritten
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.walk_mut(&mut |el: &mut Element| {
                    if let Some(level) = el.heading_level() {
                        el.tag = "div".to_string();
                        if let Some(class) = class_for_level(level) {
                            el.classes.push(class);
                        }
                    }
                });
            }
        }
    }
}

/// One entry in the physical slide list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide<C> {
    /// Slide content
    pub content: C,
    /// `true` for clones created by the loop ring
    pub synthetic: bool,
}

impl<C> Slide<C> {
    /// Wrap content as a real slide.
    pub fn real(content: C) -> Self {
        Self {
            content,
            synthetic: false,
        }
    }
}

impl<C: SlideContent> Slide<C> {
    /// Build a non-focusable, heading-demoted clone of this slide.
    pub fn synthetic_clone(&self, class_for_level: &dyn Fn(u8) -> Option<String>) -> Self {
        let mut content = self.content.duplicate();
        content.disable_focus();
        content.demote_headings(class_for_level);
        Self {
            content,
            synthetic: true,
        }
    }
}
