use std::collections::{HashMap, HashSet};

use log::warn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, NodeList, Window};

use crate::motion::style::Transform;
use crate::motion::{Style, StyleSink, Target};
use crate::sections::spotlight::TitleLayout;
use crate::sections::Viewport;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("element not found: {0}")]
    Missing(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// First match as an `HtmlElement`.
pub fn query(selector: &str) -> Result<HtmlElement, DomError> {
    document()?
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::Missing(selector.to_string()))
}

fn html_elements(list: Result<NodeList, JsValue>) -> Vec<HtmlElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    match document() {
        Ok(doc) => html_elements(doc.query_selector_all(selector)),
        Err(_) => Vec::new(),
    }
}

pub fn query_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    html_elements(root.query_selector_all(selector))
}

pub fn viewport() -> Result<Viewport, DomError> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height))
}

pub fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Seconds on the page clock.
pub fn now_seconds() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Top of the element in document coordinates.
pub fn page_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

/// Pinning without a scroll library: the spacer is as tall as the viewport
/// plus the pin length, and its first child is `position: sticky`.
pub fn set_pin_length(spacer: &HtmlElement, length: f64) {
    let height = format!("calc(100vh + {}px)", length.max(0.0));
    if let Err(e) = spacer.style().set_property("height", &height) {
        warn!("Could not size pin spacer: {:?}", e);
    }
}

/// A plain gap of `length` px, for a pin whose sticky element sits above
/// the spacer rather than inside it.
pub fn set_spacer_height(spacer: &HtmlElement, length: f64) {
    let height = format!("{}px", length.max(0.0));
    if let Err(e) = spacer.style().set_property("height", &height) {
        warn!("Could not size pin spacer: {:?}", e);
    }
}

pub fn release_pin(spacer: &HtmlElement) {
    let _ = spacer.style().remove_property("height");
}

/// Which DOM nodes play each animated role on the current page.
#[derive(Default)]
pub struct ElementRegistry {
    map: HashMap<Target, Vec<HtmlElement>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, target: Target, element: HtmlElement) {
        self.map.entry(target).or_default().push(element);
    }

    pub fn bind_all(&mut self, target: Target, elements: Vec<HtmlElement>) {
        if !elements.is_empty() {
            self.map.entry(target).or_default().extend(elements);
        }
    }

    /// Binds every match of `selector` or logs that the role will be
    /// skipped.
    pub fn bind_selector(&mut self, target: Target, selector: &str) -> bool {
        self.bind_found(target, query_all(selector), selector)
    }

    pub fn bind_within(&mut self, target: Target, root: &Element, selector: &str) -> bool {
        self.bind_found(target, query_within(root, selector), selector)
    }

    /// Binds the n-th match of `selector` to `target(n)`.
    pub fn bind_indexed(&mut self, target: fn(usize) -> Target, selector: &str) -> usize {
        let found = query_all(selector);
        let count = found.len();
        for (i, el) in found.into_iter().enumerate() {
            self.bind(target(i), el);
        }
        if count == 0 {
            warn!("No elements for {}", selector);
        }
        count
    }

    fn bind_found(&mut self, target: Target, found: Vec<HtmlElement>, selector: &str) -> bool {
        if found.is_empty() {
            warn!("No element for {:?} ({})", target, selector);
            return false;
        }
        self.bind_all(target, found);
        true
    }

    pub fn get(&self, target: Target) -> &[HtmlElement] {
        self.map.get(&target).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Writes styles straight to inline `style` properties. Transform parts
/// are composed per role so translate, rotate and scale writes don't
/// clobber each other.
pub struct DomSink {
    registry: ElementRegistry,
    transforms: HashMap<Target, Transform>,
    warned: HashSet<Target>,
}

impl DomSink {
    pub fn new(registry: ElementRegistry) -> Self {
        Self {
            registry,
            transforms: HashMap::new(),
            warned: HashSet::new(),
        }
    }

    fn set_property(elements: &[HtmlElement], name: &str, value: &str) {
        for el in elements {
            if let Err(e) = el.style().set_property(name, value) {
                warn!("Failed to set {}: {:?}", name, e);
            }
        }
    }
}

impl StyleSink for DomSink {
    fn apply(&mut self, target: Target, style: Style) {
        let elements = self.registry.get(target);
        if elements.is_empty() {
            if self.warned.insert(target) {
                warn!("Skipping styles for unbound {:?}", target);
            }
            return;
        }

        let transform = self.transforms.entry(target).or_default();
        if transform.absorb(&style) {
            Self::set_property(elements, "transform", &transform.to_css());
            return;
        }

        match style {
            Style::Opacity(v) => Self::set_property(elements, "opacity", &v.to_string()),
            Style::WidthPercent(v) => Self::set_property(elements, "width", &format!("{}%", v)),
            Style::GapPx(v) => Self::set_property(elements, "gap", &format!("{}px", v)),
            Style::Radius(corners) => {
                Self::set_property(elements, "border-radius", &corners.to_string())
            }
            Style::Var(name, v) => Self::set_property(elements, name, &v.to_string()),
            Style::ImageSrc(src) => {
                for el in elements {
                    match el.dyn_ref::<HtmlImageElement>() {
                        Some(img) => img.set_src(&src),
                        None => {
                            let _ = el.set_attribute("src", &src);
                        }
                    }
                }
            }
            Style::ClearInline => {
                for el in elements {
                    let _ = el.remove_attribute("style");
                }
                self.transforms.remove(&target);
            }
            Style::TranslateX(_)
            | Style::TranslateY(_)
            | Style::Scale(_)
            | Style::RotateY(_)
            | Style::RotateZ(_) => {}
        }
    }
}

/// Measures the spotlight titles column on every frame.
pub struct DomTitleLayout {
    titles: Vec<HtmlElement>,
    column: HtmlElement,
}

impl DomTitleLayout {
    pub fn new(column: HtmlElement, titles: Vec<HtmlElement>) -> Self {
        Self { titles, column }
    }
}

impl TitleLayout for DomTitleLayout {
    fn title_centers(&self) -> Vec<f64> {
        self.titles
            .iter()
            .map(|t| {
                let rect = t.get_bounding_client_rect();
                rect.top() + rect.height() / 2.0
            })
            .collect()
    }

    fn titles_height(&self) -> f64 {
        self.column.offset_height() as f64
    }
}
