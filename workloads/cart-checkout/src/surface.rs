//! Where rendered markup ends up.

/// A page the renderer can paint into, addressed by element id.
pub trait RenderSurface {
    /// Path of the current page (e.g. `/checkout.html`).
    fn path(&self) -> &str;

    /// Set the text of every element carrying `id`. Returns how many matched.
    fn set_text_all(&mut self, id: &str, text: &str) -> usize;

    /// Replace the inner HTML of the first element with `id`.
    /// Returns `false` if the page has no such element.
    fn set_html(&mut self, id: &str, html: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    id: String,
    content: String,
}

/// In-memory page: a path plus a flat list of addressable elements.
///
/// Duplicate ids are allowed, as real storefront templates repeat the
/// cart badge in the header and the mobile menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    path: String,
    elements: Vec<Element>,
}

impl Document {
    /// Create an empty page at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            elements: Vec::new(),
        }
    }

    /// Add an empty element.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.push(Element {
            id: id.into(),
            content: String::new(),
        });
        self
    }

    /// Content of the first element with `id`.
    pub fn content(&self, id: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.content.as_str())
    }

    /// Content of every element with `id`, in page order.
    pub fn contents(&self, id: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.id == id)
            .map(|e| e.content.as_str())
            .collect()
    }
}

impl RenderSurface for Document {
    fn path(&self) -> &str {
        &self.path
    }

    fn set_text_all(&mut self, id: &str, text: &str) -> usize {
        let mut matched = 0;
        for element in self.elements.iter_mut().filter(|e| e.id == id) {
            element.content = text.to_string();
            matched += 1;
        }
        matched
    }

    fn set_html(&mut self, id: &str, html: &str) -> bool {
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(element) => {
                element.content = html.to_string();
                true
            }
            None => false,
        }
    }
}
