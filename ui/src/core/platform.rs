//! Platform glue for browser-only callbacks.
//!
//! On wasm the listener is attached to `window`; elsewhere subscribing is a
//! no-op, since desktop and server renders have no page scroll to observe.

/// Keeps a `scroll` listener attached until dropped.
pub struct ScrollListener {
    #[cfg(target_arch = "wasm32")]
    inner: Option<(
        web_sys::Window,
        wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    )>,
}

#[cfg(target_arch = "wasm32")]
pub fn on_window_scroll(mut callback: impl FnMut(f64) + 'static) -> ScrollListener {
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        return ScrollListener { inner: None };
    };

    let source = window.clone();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
        callback(source.scroll_y().unwrap_or(0.0));
    });

    if window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .is_err()
    {
        dioxus::logger::tracing::warn!("failed to attach window scroll listener");
        return ScrollListener { inner: None };
    }

    ScrollListener {
        inner: Some((window, closure)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_window_scroll(_callback: impl FnMut(f64) + 'static) -> ScrollListener {
    ScrollListener {}
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some((window, closure)) = self.inner.take() {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }
}
