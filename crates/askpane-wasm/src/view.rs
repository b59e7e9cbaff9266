use askpane_core::{TranscriptEntry, View};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::dom;
use crate::utils;

/// Display mode the panel gets when shown; hiding always sets "none"
const PANEL_VISIBLE_DISPLAY: &str = "flex";

/// IDs of the elements the controller is bound to
#[derive(Debug, Clone, Copy)]
pub struct ElementIds {
    pub search_input: &'static str,
    pub search_button: &'static str,
    pub reset_button: &'static str,
    pub search_result: &'static str,
    pub panel: &'static str,
    pub panel_toggle: &'static str,
    pub message_input: &'static str,
    pub send_button: &'static str,
    pub transcript: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            search_input: "searchInput",
            search_button: "searchButton",
            reset_button: "resetButton",
            search_result: "searchResult",
            panel: "chatPanel",
            panel_toggle: "chatToggle",
            message_input: "messageInput",
            send_button: "sendButton",
            transcript: "messagesContainer",
        }
    }
}

/// View binding backed by the live document
///
/// Elements are looked up by ID at each operation, like the rest of the UI
/// does. A missing element is logged and the operation becomes a no-op, so
/// one broken binding never takes the page down.
pub struct DomView {
    document: Document,
    ids: ElementIds,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self::with_ids(document, ElementIds::default())
    }

    pub fn with_ids(document: Document, ids: ElementIds) -> Self {
        Self { document, ids }
    }

    fn element(&self, id: &str) -> Option<Element> {
        match dom::get_element_by_id(&self.document, id) {
            Ok(element) => Some(element),
            Err(e) => {
                log::error!("element lookup failed: {:?}", e);
                None
            }
        }
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        match dom::get_html_element_by_id(&self.document, id) {
            Ok(element) => Some(element),
            Err(e) => {
                log::error!("element lookup failed: {:?}", e);
                None
            }
        }
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        match dom::get_input_by_id(&self.document, id) {
            Ok(input) => Some(input),
            Err(e) => {
                log::error!("input lookup failed: {:?}", e);
                None
            }
        }
    }
}

impl View for DomView {
    fn query_input(&self) -> String {
        self.input(self.ids.search_input)
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_query_input(&self, value: &str) {
        if let Some(input) = self.input(self.ids.search_input) {
            input.set_value(value);
        }
    }

    fn set_result_text(&self, text: &str) {
        if let Some(element) = self.element(self.ids.search_result) {
            dom::set_text_content(&element, text);
        }
    }

    fn message_input(&self) -> String {
        self.input(self.ids.message_input)
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn clear_message_input(&self) {
        if let Some(input) = self.input(self.ids.message_input) {
            input.set_value("");
        }
    }

    fn append_transcript(&self, entry: TranscriptEntry) {
        let Some(container) = self.element(self.ids.transcript) else {
            return;
        };
        let class = format!("message {}", entry.class_name());
        let Ok(line) = dom::create_element_with_class(&self.document, "div", &class) else {
            log::error!("failed to create transcript line");
            return;
        };
        line.set_inner_html(&transcript_line_html(&entry));
        if let Err(e) = container.append_child(&line) {
            log::error!("failed to append transcript line: {:?}", e);
        }
    }

    fn scroll_transcript_to_end(&self) {
        if let Some(container) = self.element(self.ids.transcript) {
            dom::scroll_to_bottom(&container);
        }
    }

    fn panel_hidden(&self) -> bool {
        self.html_element(self.ids.panel)
            .map(|panel| dom::inline_display(&panel) == "none")
            .unwrap_or(false)
    }

    fn set_panel_hidden(&self, hidden: bool) {
        if let Some(panel) = self.html_element(self.ids.panel) {
            if hidden {
                dom::set_display(&panel, "none");
            } else {
                dom::set_display(&panel, PANEL_VISIBLE_DISPLAY);
            }
        }
    }
}

/// Render one transcript line; text is escaped before interpolation
fn transcript_line_html(entry: &TranscriptEntry) -> String {
    let content = utils::escape_html(entry.text()).replace('\n', "<br>");
    format!("{}: {}", entry.label(), content)
}
