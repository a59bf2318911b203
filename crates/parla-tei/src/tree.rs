//! Minimal mutable XML element tree.

/// Child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// XML element with ordered attributes and mixed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Replace all text children with `text`, keeping child elements.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.retain(|child| matches!(child, Node::Element(_)));
        self.children.insert(0, Node::Text(text.into()));
    }

    /// Concatenated text of the direct text children.
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Number of descendants (not counting `self`) named `name`.
    pub fn count_named(&self, name: &str) -> usize {
        self.child_elements()
            .map(|child| usize::from(child.name == name) + child.count_named(name))
            .sum()
    }

    /// Depth-first pre-order walk over all descendants.
    pub fn for_each_descendant(&self, visit: &mut impl FnMut(&Element)) {
        for child in self.child_elements() {
            visit(child);
            child.for_each_descendant(visit);
        }
    }

    pub fn for_each_descendant_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        for child in &mut self.children {
            if let Node::Element(element) = child {
                visit(element);
                element.for_each_descendant_mut(visit);
            }
        }
    }

    /// First descendant reached by following child names in order.
    pub fn find_path(&self, path: &[&str]) -> Option<&Element> {
        let (first, rest) = path.split_first()?;
        let child = self.child_elements().find(|child| child.name == *first)?;
        if rest.is_empty() {
            Some(child)
        } else {
            child.find_path(rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("TEI").child(
            Element::new("text").child(
                Element::new("body").child(
                    Element::new("div")
                        .child(Element::new("u").child(Element::new("seg").text("a")))
                        .child(
                            Element::new("u")
                                .child(Element::new("seg").text("b"))
                                .child(Element::new("seg").text("c")),
                        ),
                ),
            ),
        )
    }

    #[test]
    fn counts_descendants_by_name() {
        let root = sample();
        assert_eq!(root.count_named("u"), 2);
        assert_eq!(root.count_named("seg"), 3);
        assert_eq!(root.count_named("TEI"), 0);
        assert_eq!(root.count_named("note"), 0);
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut element = Element::new("measure")
            .attr("unit", "words")
            .attr("quantity", "0");
        element.set_attr("quantity", "12");
        assert_eq!(
            element.attributes(),
            &[
                ("unit".to_string(), "words".to_string()),
                ("quantity".to_string(), "12".to_string())
            ]
        );
    }

    #[test]
    fn set_text_keeps_child_elements() {
        let mut element = Element::new("change")
            .child(Element::new("name").text("Editor"))
            .text("old");
        element.set_text("new");
        assert_eq!(element.own_text(), "new");
        assert_eq!(element.child_elements().count(), 1);
    }

    #[test]
    fn mutable_walk_reaches_nested_elements() {
        let mut root = sample();
        root.for_each_descendant_mut(&mut |element| {
            if element.name() == "seg" {
                element.set_attr("seen", "yes");
            }
        });
        let mut seen = 0;
        root.for_each_descendant(&mut |element| {
            if element.get_attr("seen").is_some() {
                seen += 1;
            }
        });
        assert_eq!(seen, 3);
        assert!(root.find_path(&["text", "body", "div"]).is_some());
        assert!(root.find_path(&["text", "div"]).is_none());
    }
}
