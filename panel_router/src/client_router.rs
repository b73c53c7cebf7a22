//! Browser event wiring for push-state navigation.
//!
//! Three sources feed the router once the application is mounted:
//! - clicks on `a[data-panel-link]` anchors, intercepted instead of reloading
//! - `panel:navigate` custom events dispatched by application code
//! - `popstate` events fired by the browser's back/forward buttons

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::{HistoryError, LINK_ATTRIBUTE, Location, NAVIGATE_EVENT};

type NavigateCallback = Rc<dyn Fn(Location)>;
type PopStateCallback = Rc<dyn Fn()>;

/// Listens to browser navigation events and forwards them to callbacks.
pub struct ClientRouter {
    on_navigate: NavigateCallback,
    on_popstate: PopStateCallback,
}

impl ClientRouter {
    /// Create the listener set. Nothing is registered until [`ClientRouter::install`].
    pub fn new<N, P>(on_navigate: N, on_popstate: P) -> Self
    where
        N: Fn(Location) + 'static,
        P: Fn() + 'static,
    {
        Self {
            on_navigate: Rc::new(on_navigate),
            on_popstate: Rc::new(on_popstate),
        }
    }

    /// Register the listeners on the global window and document.
    ///
    /// The listeners live for the rest of the page's lifetime.
    pub fn install(self) -> Result<(), HistoryError> {
        let window = web_sys::window().ok_or_else(|| HistoryError::new("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| HistoryError::new("no document"))?;

        let click_callback = {
            let on_navigate = self.on_navigate.clone();

            Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                if event.default_prevented()
                    || event.button() != 0
                    || event.meta_key()
                    || event.ctrl_key()
                    || event.shift_key()
                    || event.alt_key()
                {
                    return;
                }

                let Some(target) = event.target() else {
                    return;
                };

                let Some(element) = target.dyn_ref::<web_sys::Element>() else {
                    return;
                };

                let Ok(Some(link)) = element.closest(&format!("a[{LINK_ATTRIBUTE}]")) else {
                    return;
                };

                let Some(href) = link.get_attribute("href") else {
                    return;
                };

                event.prevent_default();
                on_navigate(Location::Path(href));
            }) as Box<dyn FnMut(_)>)
        };

        document
            .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        click_callback.forget();

        let navigate_callback = {
            let on_navigate = self.on_navigate.clone();

            Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
                match location_from_detail(&event.detail()) {
                    Some(location) => on_navigate(location),
                    None => tracing::warn!("ignoring {NAVIGATE_EVENT} event without a usable detail"),
                }
            }) as Box<dyn FnMut(_)>)
        };

        document
            .add_event_listener_with_callback(
                NAVIGATE_EVENT,
                navigate_callback.as_ref().unchecked_ref(),
            )
            .map_err(js_error)?;
        navigate_callback.forget();

        let popstate_callback = {
            let on_popstate = self.on_popstate.clone();

            Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
                on_popstate();
            }) as Box<dyn FnMut(_)>)
        };

        window
            .add_event_listener_with_callback("popstate", popstate_callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        popstate_callback.forget();

        tracing::debug!("client router listeners installed");

        Ok(())
    }
}

impl std::fmt::Debug for ClientRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRouter")
            .field("on_navigate", &"<callback>")
            .field("on_popstate", &"<callback>")
            .finish()
    }
}

/// Ask the mounted application to navigate by dispatching [`NAVIGATE_EVENT`].
pub fn dispatch_navigate(location: &Location) -> Result<(), HistoryError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| HistoryError::new("no document"))?;

    let detail = match location {
        Location::Path(path) => wasm_bindgen::JsValue::from_str(path),
        Location::Named { .. } => {
            let json = serde_json::to_string(location)
                .map_err(|err| HistoryError::new(err.to_string()))?;
            js_sys::JSON::parse(&json).map_err(js_error)?
        }
    };

    let event_init = web_sys::CustomEventInit::new();
    event_init.set_detail(&detail);

    let event = web_sys::CustomEvent::new_with_event_init_dict(NAVIGATE_EVENT, &event_init)
        .map_err(js_error)?;

    document.dispatch_event(&event).map_err(js_error)?;

    Ok(())
}

fn location_from_detail(detail: &wasm_bindgen::JsValue) -> Option<Location> {
    if let Some(path) = detail.as_string() {
        return Some(Location::Path(path));
    }

    let json = js_sys::JSON::stringify(detail).ok()?.as_string()?;
    serde_json::from_str(&json).ok()
}

fn js_error(value: wasm_bindgen::JsValue) -> HistoryError {
    HistoryError::new(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
