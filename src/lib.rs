#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod audio;
mod constants;
mod core;
mod dom;
mod input;
mod page;
mod player;
mod render;
mod theme;

thread_local! {
    // One page per document; `None` while unmounted.
    static PAGE: RefCell<Option<page::Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dream-page starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page = page::Page::mount(&document)?;
    log::info!(
        "[page] field ready: {} particles, {} fog layers",
        page.field().particles().len(),
        page.field().fog_layers().len()
    );
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

/// Tear the page down, removing every listener and node it created.
#[wasm_bindgen]
pub fn unmount() {
    // Take first so `Drop` runs outside the borrow.
    let page = PAGE.with(|p| p.borrow_mut().take());
    drop(page);
}

/// Tear down and mount again with a freshly generated particle field.
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    unmount();
    init().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}
