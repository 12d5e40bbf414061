//! Target-specific glue for running export futures from event handlers.

use std::future::Future;

/// Drive `future` to completion off the event handler.
///
/// The browser queues it on the microtask loop. Native builds block the handler
/// instead: rasterizing one chart takes a few milliseconds and the file write
/// is synchronous anyway.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    futures::executor::block_on(future);
}
