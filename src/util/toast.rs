//! Transient toast overlay.
//!
//! Renders a centered dark box over the page and removes it after a short
//! delay. Mirrors the DOM-level helper the pages use after form submits.
//! Requires a browser environment.

/// Default display duration in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 1500;

#[cfg(feature = "hydrate")]
const TOAST_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); background: rgba(0, 0, 0, 0.8); \
    color: white; padding: 20px 30px; border-radius: 10px; z-index: 9999; \
    font-size: 16px;";

/// Show `message` for [`DEFAULT_DELAY_MS`].
pub fn show(message: &str) {
    show_for(message, DEFAULT_DELAY_MS);
}

/// Show `message`, removing the overlay after `delay_ms`.
pub fn show_for(message: &str, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(toast) = document.create_element("div") else {
            return;
        };
        let _ = toast.set_attribute("style", TOAST_STYLE);
        toast.set_text_content(Some(message));
        if body.append_child(&toast).is_err() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            toast.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, delay_ms);
    }
}
