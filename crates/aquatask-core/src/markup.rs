//! Minimal element tree for the task region.
//!
//! The projector builds [`Element`]s instead of strings so that tests can
//! inspect structure, and so that every piece of user text goes through
//! [`escape_html`] on the way out.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  tag:      &'static str,
  attrs:    Vec<(&'static str, String)>,
  children: Vec<Node>
}

impl Element {
  pub fn new(tag: &'static str) -> Self {
    Self {
      tag,
      attrs: Vec::new(),
      children: Vec::new()
    }
  }

  pub fn attr(
    mut self,
    name: &'static str,
    value: impl Into<String>
  ) -> Self {
    self.attrs.push((name, value.into()));
    self
  }

  /// Space-joined class list; empty entries are skipped.
  pub fn classes<'a>(
    self,
    names: impl IntoIterator<Item = &'a str>
  ) -> Self {
    let joined = names
      .into_iter()
      .filter(|name| !name.is_empty())
      .collect::<Vec<_>>()
      .join(" ");
    self.attr("class", joined)
  }

  pub fn child(
    mut self,
    child: Element
  ) -> Self {
    self
      .children
      .push(Node::Element(child));
    self
  }

  pub fn maybe_child(
    self,
    child: Option<Element>
  ) -> Self {
    match child {
      | Some(child) => self.child(child),
      | None => self
    }
  }

  pub fn text(
    mut self,
    text: impl Into<String>
  ) -> Self {
    self
      .children
      .push(Node::Text(text.into()));
    self
  }

  pub fn attr_value(
    &self,
    name: &str
  ) -> Option<&str> {
    self
      .attrs
      .iter()
      .find(|(n, _)| *n == name)
      .map(|(_, v)| v.as_str())
  }

  pub fn has_class(
    &self,
    name: &str
  ) -> bool {
    self
      .attr_value("class")
      .is_some_and(|classes| {
        classes
          .split_whitespace()
          .any(|c| c == name)
      })
  }

  pub fn children(&self) -> &[Node] {
    &self.children
  }

  pub fn child_elements(
    &self
  ) -> impl Iterator<Item = &Element> {
    self.children.iter().filter_map(
      |node| match node {
        | Node::Element(el) => Some(el),
        | Node::Text(_) => None
      }
    )
  }

  /// Depth-first search over this element and its descendants.
  pub fn find_all(
    &self,
    predicate: &dyn Fn(&Element) -> bool
  ) -> Vec<&Element> {
    let mut found = Vec::new();
    self.collect(predicate, &mut found);
    found
  }

  fn collect<'a>(
    &'a self,
    predicate: &dyn Fn(&Element) -> bool,
    found: &mut Vec<&'a Element>
  ) {
    if predicate(self) {
      found.push(self);
    }
    for child in self.child_elements() {
      child.collect(predicate, found);
    }
  }

  /// Concatenated raw text of all descendants.
  pub fn text_content(&self) -> String {
    let mut out = String::new();
    for node in &self.children {
      match node {
        | Node::Text(text) => {
          out.push_str(text)
        }
        | Node::Element(el) => {
          out.push_str(&el.text_content())
        }
      }
    }
    out
  }

  pub fn to_html(&self) -> String {
    let mut out = String::new();
    self.write_html(&mut out);
    out
  }

  fn write_html(
    &self,
    out: &mut String
  ) {
    out.push('<');
    out.push_str(self.tag);
    for (name, value) in &self.attrs {
      out.push(' ');
      out.push_str(name);
      out.push_str("=\"");
      out.push_str(&escape_html(value));
      out.push('"');
    }
    out.push('>');
    for node in &self.children {
      match node {
        | Node::Text(text) => {
          out.push_str(&escape_html(text))
        }
        | Node::Element(el) => {
          el.write_html(out)
        }
      }
    }
    out.push_str("</");
    out.push_str(self.tag);
    out.push('>');
  }
}

pub fn escape_html(text: &str) -> String {
  let mut out =
    String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      | '&' => out.push_str("&amp;"),
      | '<' => out.push_str("&lt;"),
      | '>' => out.push_str("&gt;"),
      | '"' => out.push_str("&quot;"),
      | '\'' => out.push_str("&#39;"),
      | _ => out.push(ch)
    }
  }
  out
}
