//! The slice of the DOM an application needs: find the anchor element, then
//! read and replace its content.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// An element an application can be mounted onto.
pub trait Anchor {
    /// Replace the element's content.
    fn set_inner_html(&self, markup: &str);

    /// Current content of the element.
    fn inner_html(&self) -> String;
}

/// Source of anchor elements.
pub trait Document {
    /// Element handle type.
    type Anchor: Anchor;

    /// First element matching `selector`, if any.
    fn query_selector(&self, selector: &str) -> Option<Self::Anchor>;
}

/// Element of a [`MemoryDocument`]. Clones share the same content.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    content: Rc<RefCell<String>>,
}

impl Anchor for MemoryElement {
    fn set_inner_html(&self, markup: &str) {
        *self.content.borrow_mut() = markup.to_owned();
    }

    fn inner_html(&self) -> String {
        self.content.borrow().clone()
    }
}

/// Document made of elements addressed by id.
///
/// Supports `#id` selectors only. Used for server-side rendering and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element with the given id.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), MemoryElement::default());
        self
    }

    /// Element with the given id.
    pub fn element(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).cloned()
    }
}

impl Document for MemoryDocument {
    type Anchor = MemoryElement;

    fn query_selector(&self, selector: &str) -> Option<Self::Anchor> {
        let id = selector.trim().strip_prefix('#')?;
        self.element(id)
    }
}

/// The page's `window.document`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl BrowserDocument {
    /// Bind to the global document.
    pub fn current() -> Result<Self, crate::MountError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(crate::MountError::NoDocument)?;

        Ok(Self { document })
    }
}

#[cfg(target_arch = "wasm32")]
impl Document for BrowserDocument {
    type Anchor = web_sys::Element;

    fn query_selector(&self, selector: &str) -> Option<Self::Anchor> {
        self.document.query_selector(selector).ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl Anchor for web_sys::Element {
    fn set_inner_html(&self, markup: &str) {
        web_sys::Element::set_inner_html(self, markup);
    }

    fn inner_html(&self) -> String {
        web_sys::Element::inner_html(self)
    }
}
