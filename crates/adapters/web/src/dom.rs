//! DOM-backed implementation of the view port.

use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use tunerdash_app::ports::{ViewTarget, VisualNode};
use tunerdash_domain::catalog::NodeKey;

use crate::locator::{Locator, locate};

/// The live dashboard document.
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current browser window, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn element(&self, locator: Locator) -> Option<Element> {
        match locator {
            Locator::Id(id) => self.document.get_element_by_id(id),
            Locator::Selector(selector) | Locator::All(selector) => {
                self.document.query_selector(selector).ok().flatten()
            }
            Locator::ParentOf(id) => self
                .document
                .get_element_by_id(id)
                .and_then(|child| child.parent_element()),
        }
    }
}

impl ViewTarget for DomPage {
    type Node = DomNode;

    fn resolve(&self, key: NodeKey) -> Option<DomNode> {
        self.element(locate(key))
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(DomNode)
    }

    fn resolve_all(&self, key: NodeKey) -> Vec<DomNode> {
        let Locator::All(selector) = locate(key) else {
            return self.resolve(key).into_iter().collect();
        };
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomNode)
            .collect()
    }
}

/// Handle onto one HTML element.
#[derive(Debug, Clone)]
pub struct DomNode(HtmlElement);

impl DomNode {
    fn input(&self) -> Option<&HtmlInputElement> {
        self.0.dyn_ref::<HtmlInputElement>()
    }
}

fn ignore_dom_error(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        debug!(what, ?err, "DOM write rejected");
    }
}

impl VisualNode for DomNode {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_class(&self, class: &str) {
        self.0.set_class_name(class);
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let result = self.0.class_list().toggle_with_force(class, on).map(drop);
        ignore_dom_error("class toggle", result);
    }

    fn set_visible(&self, visible: bool) {
        let style = self.0.style();
        let result = if visible {
            style.remove_property("display").map(drop)
        } else {
            style.set_property("display", "none")
        };
        ignore_dom_error("display", result);
    }

    fn set_color(&self, color: &str) {
        ignore_dom_error("color", self.0.style().set_property("color", color));
    }

    fn value(&self) -> Option<String> {
        self.input().map(HtmlInputElement::value)
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.input() {
            input.set_value(value);
        }
    }

    fn set_checked(&self, checked: bool) {
        if let Some(input) = self.input() {
            input.set_checked(checked);
        }
    }
}
