//! DOM-backed display surface
//!
//! Each entry renders as:
//! `<div class="todo-item"><p>text</p><button class="btn-remove" data-index="i">Remove</button></div>`
//! Removal clicks are handled by one listener on the container, which reads
//! `data-index` back via [`removal_index`].

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::view::{Surface, parse_index};

/// Attribute carrying an entry's position on its removal button
pub const INDEX_ATTR: &str = "data-index";
pub const ITEM_CLASS: &str = "todo-item";
pub const REMOVE_CLASS: &str = "btn-remove";

pub struct DomSurface {
    document: Document,
    list: Element,
    input: HtmlInputElement,
}

impl DomSurface {
    /// Look up the list container and input field named in `config`
    pub fn attach(config: &Config) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::Dom("no document".into()))?;
        let list = document
            .get_element_by_id(&config.list_id)
            .ok_or_else(|| Error::Dom(format!("missing #{}", config.list_id)))?;
        let input = document
            .get_element_by_id(&config.input_id)
            .ok_or_else(|| Error::Dom(format!("missing #{}", config.input_id)))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| Error::Dom(format!("#{} is not an input", config.input_id)))?;
        Ok(Self {
            document,
            list,
            input,
        })
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    /// Current text of the input field
    pub fn input_value(&self) -> String {
        self.input.value()
    }

    fn build_entry(&self, index: usize, text: &str) -> std::result::Result<(), wasm_bindgen::JsValue> {
        let container = self.document.create_element("div")?;
        container.set_class_name(ITEM_CLASS);

        let label = self.document.create_element("p")?;
        label.set_text_content(Some(text));

        let remove = self.document.create_element("button")?;
        remove.set_text_content(Some("Remove"));
        remove.set_class_name(REMOVE_CLASS);
        remove.set_attribute(INDEX_ATTR, &index.to_string())?;

        container.append_child(&label)?;
        container.append_child(&remove)?;
        self.list.append_child(&container)?;
        Ok(())
    }
}

impl Surface for DomSurface {
    fn clear_entries(&mut self) {
        self.list.set_text_content(None);
    }

    fn show_entry(&mut self, index: usize, text: &str) {
        if let Err(e) = self.build_entry(index, text) {
            log::error!("Failed to render entry {}: {:?}", index, e);
        }
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }
}

/// Position bound to the removal button at or around `target`, if any
pub fn removal_index(target: &Element) -> Option<usize> {
    let button = target.closest(&format!(".{REMOVE_CLASS}")).ok()??;
    parse_index(&button.get_attribute(INDEX_ATTR)?)
}
