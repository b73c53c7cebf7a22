#![allow(missing_docs)]

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::{cell::RefCell, rc::Rc};

        use admin::{AdminConfig, bootstrap};
        use panel::{BrowserDocument, BrowserHistory, ClientRouter};

        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(log::Level::Debug);

        let config = AdminConfig::default();

        let started = BrowserDocument::current()
            .map_err(admin::AdminError::from)
            .and_then(|document| {
                let history = BrowserHistory::new()?;

                bootstrap(&document, history, &config.app)
            });

        let app = match started {
            Ok(app) => Rc::new(RefCell::new(app)),
            Err(error) => {
                tracing::error!(%error, "failed to start admin application");
                return;
            }
        };

        let navigate_app = Rc::clone(&app);
        let popstate_app = Rc::clone(&app);

        let client_router = ClientRouter::new(
            move |location| {
                if let Err(error) = navigate_app.borrow_mut().navigate(location) {
                    tracing::warn!(%error, "navigation failed");
                }
            },
            move || {
                popstate_app.borrow_mut().sync();
            },
        );

        if let Err(error) = client_router.install() {
            tracing::error!(%error, "failed to install client router");
        }
    }
}
