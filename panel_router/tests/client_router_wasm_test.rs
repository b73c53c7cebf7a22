#![allow(missing_docs)]
#![cfg(target_arch = "wasm32")]

use std::{cell::RefCell, rc::Rc};

use panel_router::{ClientRouter, LINK_ATTRIBUTE, Location, NAVIGATE_EVENT, dispatch_navigate};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Seen {
    Navigate(Location),
    PopState,
}

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("no global `window` exists")
        .document()
        .expect("no global `document` exists")
}

fn append_anchor(href: &str, link: bool) -> web_sys::Element {
    let document = document();
    let anchor = document.create_element("a").unwrap();
    anchor.set_attribute("href", href).unwrap();
    if link {
        anchor.set_attribute(LINK_ATTRIBUTE, "").unwrap();
    }
    anchor.set_inner_html("<span>go</span>");
    document.body().unwrap().append_child(&anchor).unwrap();
    anchor
}

fn click(target: &web_sys::Element, button: i16, ctrl: bool) -> bool {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_button(button);
    init.set_ctrl_key(ctrl);

    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn dispatch_detail(detail: &wasm_bindgen::JsValue) {
    let init = web_sys::CustomEventInit::new();
    init.set_detail(detail);
    let event = web_sys::CustomEvent::new_with_event_init_dict(NAVIGATE_EVENT, &init).unwrap();
    document().dispatch_event(&event).unwrap();
}

// Listeners stay installed for the life of the page, so every event source
// is exercised against a single installation.
#[wasm_bindgen_test]
fn test_client_router_forwards_browser_events() {
    let seen: Rc<RefCell<Vec<Seen>>> = Rc::default();

    let on_navigate = {
        let seen = Rc::clone(&seen);
        move |location| seen.borrow_mut().push(Seen::Navigate(location))
    };
    let on_popstate = {
        let seen = Rc::clone(&seen);
        move || seen.borrow_mut().push(Seen::PopState)
    };

    ClientRouter::new(on_navigate, on_popstate).install().unwrap();

    let take = || std::mem::take(&mut *seen.borrow_mut());

    // primary click on a router link, also when it lands on a child element
    let link = append_anchor("/admin/users", true);
    assert!(click(&link, 0, false));
    let child = link.first_element_child().unwrap();
    assert!(click(&child, 0, false));
    assert_eq!(
        take(),
        [
            Seen::Navigate(Location::from("/admin/users")),
            Seen::Navigate(Location::from("/admin/users")),
        ]
    );

    // modified and non-primary clicks are left to the browser
    let fragment_link = append_anchor("#settings", true);
    assert!(!click(&fragment_link, 0, true));
    assert!(!click(&fragment_link, 1, false));
    let plain = append_anchor("#plain", false);
    assert!(!click(&plain, 0, false));
    assert!(take().is_empty());

    // navigate events carry either a path or a named location
    dispatch_navigate(&Location::from("/admin/settings")).unwrap();
    dispatch_navigate(&Location::named("admin.users.show").param("id", "7")).unwrap();
    dispatch_detail(&js_sys::JSON::parse(r#"{"name":"admin.profile"}"#).unwrap());
    dispatch_detail(&wasm_bindgen::JsValue::from_f64(42.0));
    assert_eq!(
        take(),
        [
            Seen::Navigate(Location::from("/admin/settings")),
            Seen::Navigate(Location::named("admin.users.show").param("id", "7")),
            Seen::Navigate(Location::named("admin.profile")),
        ]
    );

    // back/forward
    let popstate = web_sys::PopStateEvent::new("popstate").unwrap();
    web_sys::window()
        .unwrap()
        .dispatch_event(&popstate)
        .unwrap();
    assert_eq!(take(), [Seen::PopState]);
}
