use std::rc::Rc;

use askpane_core::InteractionController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::dom;
use crate::http::HttpQueryService;
use crate::view::{DomView, ElementIds};

/// Wires the page's controls to the controller
///
/// Handlers are fire-and-forget: each click or Enter press spawns its own
/// future on the event loop, nothing waits for an earlier call to settle.
pub struct AskpaneApp {
    document: Document,
    ids: ElementIds,
    controller: Rc<InteractionController<HttpQueryService, DomView>>,
}

impl AskpaneApp {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let ids = ElementIds::default();
        let view = DomView::with_ids(document.clone(), ids);
        let controller = Rc::new(InteractionController::new(HttpQueryService::new(), view));

        Ok(Self {
            document,
            ids,
            controller,
        })
    }

    pub fn start(self) -> Result<(), JsValue> {
        self.bind_search_controls()?;
        self.bind_panel_toggle()?;
        self.bind_chat_controls()?;

        log::info!("askpane handlers bound");
        Ok(())
    }

    fn bind_search_controls(&self) -> Result<(), JsValue> {
        let button = dom::get_element_by_id(&self.document, self.ids.search_button)?;
        let controller = self.controller.clone();
        dom::add_click_listener(&button, move || {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.submit_search().await;
            });
        })?;

        // Enter in the search field submits like a click
        let input = dom::get_input_by_id(&self.document, self.ids.search_input)?;
        let controller = self.controller.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                let controller = controller.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    controller.submit_search().await;
                });
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();

        let reset = dom::get_element_by_id(&self.document, self.ids.reset_button)?;
        let controller = self.controller.clone();
        dom::add_click_listener(&reset, move || {
            controller.reset_inputs();
        })?;

        Ok(())
    }

    fn bind_panel_toggle(&self) -> Result<(), JsValue> {
        let toggle = dom::get_element_by_id(&self.document, self.ids.panel_toggle)?;
        let controller = self.controller.clone();
        dom::add_click_listener(&toggle, move || {
            controller.toggle_panel();
        })?;

        Ok(())
    }

    fn bind_chat_controls(&self) -> Result<(), JsValue> {
        let button = dom::get_element_by_id(&self.document, self.ids.send_button)?;
        let controller = self.controller.clone();
        dom::add_click_listener(&button, move || {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.submit_chat_message().await;
            });
        })?;

        let input = dom::get_input_by_id(&self.document, self.ids.message_input)?;
        let controller = self.controller.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                let controller = controller.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    controller.submit_chat_message().await;
                });
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }
}
