//! Web-specific adapter over a DOM slide list.
//!
//! The host element is the scrolling list container and its element
//! children are the slides. Event wiring (scroll, resize, pointer and click
//! listeners, timers) stays with the embedding component, which forwards
//! them to [`Carousel`](crate::Carousel) using [`now_ms`] as the clock.

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollToOptions};

use crate::geometry::{ScrollBehavior, SlideBox, Viewport};
use crate::slide::{Slide, SlideContent};
use crate::ScrollHost;

/// Current time in milliseconds, for the `now_ms` arguments of the core.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Parse a computed CSS length such as `"12px"`, defaulting to zero.
fn parse_px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").parse::<f64>().unwrap_or(0.0)
}

/// A slide backed by a DOM element.
#[derive(Clone, Debug)]
pub struct DomSlide(pub Element);

impl DomSlide {
    fn for_each_descendant(&self, selector: &str, mut visit: impl FnMut(Element)) {
        let Ok(nodes) = self.0.query_selector_all(selector) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                visit(el);
            }
        }
    }
}

impl SlideContent for DomSlide {
    fn duplicate(&self) -> Self {
        match self
            .0
            .clone_node_with_deep(true)
            .ok()
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            Some(el) => DomSlide(el),
            None => {
                warn!("failed to clone slide element");
                self.clone()
            }
        }
    }

    fn disable_focus(&mut self) {
        if self.0.set_attribute("tabindex", "-1").is_err() {
            warn!("failed to remove slide clone from focus order");
        }
        self.for_each_descendant("*", |el| {
            if el.set_attribute("tabindex", "-1").is_err() {
                warn!(tag = %el.tag_name(), "failed to remove element from focus order");
            }
        });
    }

    fn demote_headings(&mut self, class_for_level: &dyn Fn(u8) -> Option<String>) {
        let Some(document) = self.0.owner_document() else {
            return;
        };
        self.for_each_descendant("h1, h2, h3, h4, h5, h6", |heading| {
            let level = heading
                .tag_name()
                .to_ascii_lowercase()
                .strip_prefix('h')
                .and_then(|n| n.parse::<u8>().ok());
            let Ok(container) = document.create_element("div") else {
                return;
            };
            while let Some(child) = heading.first_child() {
                if container.append_child(&child).is_err() {
                    return;
                }
            }
            if let Some(class) = level.and_then(class_for_level) {
                if container.class_list().add_1(&class).is_err() {
                    warn!(%class, "failed to add demotion class");
                }
            }
            if heading.replace_with_with_node_1(&container).is_err() {
                warn!(?level, "failed to replace heading in slide clone");
            }
        });
    }
}

/// [`ScrollHost`] over a scrolling list element.
#[derive(Clone, Debug)]
pub struct DomScrollHost {
    list: HtmlElement,
}

impl DomScrollHost {
    /// Wrap the list container.
    pub fn new(list: HtmlElement) -> Self {
        Self { list }
    }

    /// The list container element.
    pub fn list(&self) -> &HtmlElement {
        &self.list
    }

    /// Current element children of the list, as real slides.
    pub fn slides(&self) -> Vec<DomSlide> {
        let children = self.list.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .map(DomSlide)
            .collect()
    }

    fn computed(&self, element: &Element, pseudo: Option<&str>, property: &str) -> f64 {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let style = match pseudo {
            Some(pseudo) => window.get_computed_style_with_pseudo_elt(element, pseudo),
            None => window.get_computed_style(element),
        };
        style
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
            .map(|value| parse_px(&value))
            .unwrap_or(0.0)
    }
}

impl ScrollHost for DomScrollHost {
    type Content = DomSlide;

    fn slide_boxes(&self) -> Vec<SlideBox> {
        let list_rect = self.list.get_bounding_client_rect();
        let scroll = f64::from(self.list.scroll_left());
        let children = self.list.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .map(|slide| {
                let rect = slide.get_bounding_client_rect();
                SlideBox::new(rect.left() - list_rect.left() + scroll, rect.width())
            })
            .collect()
    }

    fn viewport(&self) -> Viewport {
        let first_slide_margin = self
            .list
            .first_element_child()
            .map(|first| self.computed(&first, None, "margin-left"))
            .unwrap_or(0.0);
        Viewport {
            scroll_offset: f64::from(self.list.scroll_left()),
            visible_extent: f64::from(self.list.offset_width()),
            content_extent: f64::from(self.list.scroll_width()),
            leading_decoration: self.computed(&self.list, Some(":before"), "width"),
            trailing_decoration: self.computed(&self.list, Some(":after"), "width"),
            first_slide_margin,
        }
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_left(offset);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.list.scroll_to_with_scroll_to_options(&options);
    }

    fn sync_slides(&mut self, slides: &[Slide<DomSlide>]) {
        // Appending moves existing nodes, so real slides keep their identity
        for slide in slides {
            if self.list.append_child(&slide.content.0).is_err() {
                warn!("failed to insert slide into list");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_px_values() {
        assert_eq!(parse_px("12px"), 12.0);
        assert_eq!(parse_px(" 7.5px "), 7.5);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }
}
