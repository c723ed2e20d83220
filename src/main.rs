//! Persistent To-Do entry point
//!
//! Handles platform-specific initialization and wires page events.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent};

    use persistent_todo::platform::dom::{DomSurface, removal_index};
    use persistent_todo::platform::LocalStorage;
    use persistent_todo::{Config, Error, TodoApp};

    type App = TodoApp<LocalStorage, DomSurface>;

    /// Surface a failed operation to the user
    fn report(err: Error) {
        match err {
            Error::EmptyItem => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&err.to_string());
                }
            }
            other => log::error!("{}", other),
        }
    }

    /// Add whatever is in the input field
    fn submit(app: &Rc<RefCell<App>>) {
        let mut app = app.borrow_mut();
        let text = app.surface().input_value();
        match app.add(&text) {
            Ok(()) => log::info!("Added item ({} total)", app.items().len()),
            Err(e) => report(e),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let storage = LocalStorage::open().map_err(to_js)?;
        let config = Config::load(&storage);
        // Ignored if a logger is already installed
        let _ = console_log::init_with_level(config.log_level());

        log::info!("Persistent To-Do starting...");

        let surface = DomSurface::attach(&config).map_err(to_js)?;
        let app = Rc::new(RefCell::new(
            TodoApp::hydrate(config, storage, surface).map_err(to_js)?,
        ));

        setup_add_button(app.clone())?;
        setup_enter_key(app.clone());
        setup_remove_buttons(app);

        log::info!("Persistent To-Do running!");
        Ok(())
    }

    fn to_js(err: Error) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    fn setup_add_button(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let id = app.borrow().config().add_button_id.clone();
        let Some(btn) = document.get_element_by_id(&id) else {
            log::warn!("No #{} button, adding only via Enter", id);
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            submit(&app);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_enter_key(app: Rc<RefCell<App>>) {
        let input = app.borrow().surface().input().clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                submit(&app);
            }
        });
        let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One listener on the list container; buttons are rebuilt on every render
    fn setup_remove_buttons(app: Rc<RefCell<App>>) {
        let list = app.borrow().surface().list().clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(index) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| removal_index(&el))
            else {
                return;
            };
            match app.borrow_mut().remove_at(index) {
                Ok(Some(item)) => log::info!("Removed {:?}", item),
                Ok(None) => {}
                Err(e) => report(e),
            }
        });
        let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use persistent_todo::platform::MemoryStorage;
    use persistent_todo::view::LogSurface;
    use persistent_todo::{Config, TodoApp};

    let storage = MemoryStorage::new();
    let config = Config::load(&storage);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    log::info!("Persistent To-Do (native) starting...");
    log::info!("The list UI runs in the browser - use `trunk serve` for the web version");

    if let Err(e) = demo(config, storage) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    fn demo(config: Config, storage: MemoryStorage) -> persistent_todo::Result<()> {
        let mut app = TodoApp::hydrate(config.clone(), storage, LogSurface)?;
        app.add("Buy milk")?;
        app.add("Walk dog")?;
        if let Err(e) = app.add("") {
            log::warn!("{}", e);
        }
        app.remove_at(0)?;

        log::info!("Reloading from storage");
        let (storage, surface) = app.into_parts();
        let app = TodoApp::hydrate(config, storage, surface)?;
        println!("{}", persistent_todo::persistence::encode(app.items())?);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
