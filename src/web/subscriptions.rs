use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use super::dom::DomError;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Every DOM listener a controller registered, removed together on teardown.
#[derive(Default)]
pub struct Subscriptions {
    listeners: Vec<Listener>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    pub fn unsubscribe_all(&mut self) {
        for l in self.listeners.drain(..) {
            if let Err(e) = l
                .target
                .remove_event_listener_with_callback(l.event, l.callback.as_ref().unchecked_ref())
            {
                warn!("Failed to remove {} listener: {:?}", l.event, e);
            }
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.unsubscribe_all();
    }
}

/// Runs the latest scheduled action once things have been quiet for `ms`.
#[derive(Clone)]
pub struct Debounce {
    ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn new(ms: u32) -> Self {
        Self {
            ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, action: impl FnOnce() + 'static) {
        // Replacing the handle drops, and so cancels, the previous timeout.
        let pending = self.pending.clone();
        *self.pending.borrow_mut() = Some(Timeout::new(self.ms, move || {
            pending.borrow_mut().take();
            action();
        }));
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
