use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::alert::error::AlertError;
use crate::ports::{DocumentPort, ElementPort};

/// In-memory document tree for headless runs and unit tests.
///
/// Elements are registered under a literal selector string and `find`
/// matches by string equality, which is all the fixture trees need. The
/// empty selector is rejected the way a real document rejects it.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    roots: RefCell<Vec<MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a root element answering to `selector`.
    pub fn insert(&self, selector: &str) -> MemoryElement {
        let element = MemoryElement::new(selector);
        self.roots.borrow_mut().push(element.clone());
        element
    }
}

impl DocumentPort for MemoryDocument {
    type Element = MemoryElement;

    fn find(&self, selector: &str) -> Result<Option<MemoryElement>, AlertError> {
        if selector.trim().is_empty() {
            return Err(AlertError::invalid_selector(selector));
        }
        for root in self.roots.borrow().iter() {
            if root.matches(selector) {
                return Ok(Some(root.clone()));
            }
            if let Some(found) = root.find_descendant(selector) {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

#[derive(Debug)]
struct NodeData {
    selector: String,
    text: String,
    children: Vec<MemoryElement>,
}

/// Shared handle to one node of a `MemoryDocument`; clones observe the
/// same node.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    node: Rc<RefCell<NodeData>>,
}

impl MemoryElement {
    fn new(selector: &str) -> Self {
        Self {
            node: Rc::new(RefCell::new(NodeData {
                selector: selector.to_string(),
                text: String::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Appends a child element answering to `selector`.
    pub fn append(&self, selector: &str) -> MemoryElement {
        let child = MemoryElement::new(selector);
        self.node.borrow_mut().children.push(child.clone());
        child
    }

    fn matches(&self, selector: &str) -> bool {
        self.node.borrow().selector == selector
    }

    // Descendants only, like Element.querySelector.
    fn find_descendant(&self, selector: &str) -> Option<MemoryElement> {
        for child in self.node.borrow().children.iter() {
            if child.matches(selector) {
                return Some(child.clone());
            }
            if let Some(found) = child.find_descendant(selector) {
                return Some(found);
            }
        }
        None
    }
}

impl ElementPort for MemoryElement {
    fn find(&self, selector: &str) -> Result<Option<Self>, AlertError> {
        if selector.trim().is_empty() {
            return Err(AlertError::invalid_selector(selector));
        }
        Ok(self.find_descendant(selector))
    }

    fn set_text(&self, text: &str) {
        self.node.borrow_mut().text = text.to_string();
    }

    fn text(&self) -> Option<String> {
        Some(self.node.borrow().text.clone())
    }
}
