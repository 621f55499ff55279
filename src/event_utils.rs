use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

/// Flags for `addEventListener`
#[derive(Clone, Copy, Debug, Default)]
pub struct ListenerFlags {
    pub passive: bool,
    pub capture: bool,
}

impl ListenerFlags {
    /// Scroll and touch handlers never call `preventDefault`
    pub fn passive() -> Self {
        Self { passive: true, capture: false }
    }
}

/// Owns the JS closure of a window listener
pub struct WindowListener {
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// Keep the listener registered for the rest of the page's life
    pub fn forget(self) {
        self.callback.forget();
    }
}

/// Typed `window.addEventListener` for a leptos event descriptor
pub fn listen_on_window<E>(
    event: E,
    flags: ListenerFlags,
    mut handler: impl FnMut(E::EventType) + 'static,
) -> Option<WindowListener>
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let window = web_sys::window()?;
    let opts = AddEventListenerOptions::new();
    opts.set_passive(flags.passive);
    opts.set_capture(flags.capture);

    let callback = Closure::wrap(Box::new(move |ev: Event| {
        handler(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            &event.name(),
            callback.as_ref().unchecked_ref(),
            &opts,
        )
        .ok()?;

    Some(WindowListener { callback })
}
