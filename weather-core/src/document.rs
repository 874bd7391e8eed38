//! Parsed markup documents and lookup of named sections and fields.
//!
//! The rest of the crate only talks to [`Fragment`]; [`Document`] and
//! [`Element`] are the single `quick-xml`-backed implementation.

use quick_xml::{Reader, events::BytesStart, events::Event};

use crate::error::WeatherError;

/// Attribute that carries a field's value, e.g. `<temp_f data="57"/>`.
pub const DATA_ATTRIBUTE: &str = "data";

/// Deepest element nesting accepted from a feed. Lookups recurse per level.
pub const MAX_DEPTH: usize = 256;

/// Lookup by name over a structured document or a sub-tree of one.
pub trait Fragment {
    type Section: Fragment;

    /// First matching descendant in document order.
    fn section(&self, name: &str) -> Option<&Self::Section>;

    /// All matching descendants in document order.
    fn sections(&self, name: &str) -> Vec<&Self::Section>;

    /// Data attribute of the first descendant named `name`.
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, WeatherError> {
        let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    fn first_descendant(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| child.first_inclusive(name))
    }

    fn first_inclusive(&self, name: &str) -> Option<&Element> {
        if self.name == name { Some(self) } else { self.first_descendant(name) }
    }

    fn collect_descendants<'a>(&'a self, name: &str, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            child.collect_inclusive(name, out);
        }
    }

    fn collect_inclusive<'a>(&'a self, name: &str, out: &mut Vec<&'a Element>) {
        if self.name == name {
            out.push(self);
        }
        self.collect_descendants(name, out);
    }
}

impl Fragment for Element {
    type Section = Element;

    fn section(&self, name: &str) -> Option<&Element> {
        self.first_descendant(name)
    }

    fn sections(&self, name: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_descendants(name, &mut out);
        out
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.first_descendant(name)?.attribute(DATA_ATTRIBUTE)
    }
}

/// A whole parsed document. Lookups include the root element itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn parse(xml: &str) -> Result<Self, WeatherError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                WeatherError::Parse(format!("at byte {}: {e}", reader.buffer_position()))
            })?;

            match event {
                Event::Start(start) => {
                    if open.len() >= MAX_DEPTH {
                        return Err(WeatherError::Parse(format!(
                            "document nested too deeply (more than {MAX_DEPTH} levels)"
                        )));
                    }
                    open.push(Element::from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = Element::from_start(&start)?;
                    attach(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| WeatherError::Parse("unexpected closing tag".into()))?;
                    attach(&mut open, &mut root, element)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(WeatherError::Parse(format!("unclosed element <{}>", unclosed.name)));
        }

        let root = root.ok_or_else(|| WeatherError::Parse("document has no root element".into()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), WeatherError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(WeatherError::Parse(format!(
            "second root element <{}> after document end",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

impl Fragment for Document {
    type Section = Element;

    fn section(&self, name: &str) -> Option<&Element> {
        self.root.first_inclusive(name)
    }

    fn sections(&self, name: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.root.collect_inclusive(name, &mut out);
        out
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.root.first_inclusive(name)?.attribute(DATA_ATTRIBUTE)
    }
}
