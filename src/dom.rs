use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create an element with the given class list.
pub fn create(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("<{}> is not an HtmlElement", tag))
}

/// Create an element, append it to `parent` and return it.
pub fn append(
    document: &web::Document,
    parent: &web::Node,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = create(document, tag, class)?;
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append <{}>: {:?}", tag, e))?;
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    _ = el.set_attribute("style", style);
}

/// Non-empty attribute value, if present.
#[inline]
pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name).filter(|v| !v.trim().is_empty())
}

/// A registered DOM listener. Dropping it removes the listener, so no
/// callback can fire against a torn-down component.
pub struct EventSubscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventSubscription {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("listen {}: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
