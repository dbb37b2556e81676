use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::{window, DomError};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop. The callback gets the frame time in
/// seconds. Stops on `stop()` or when dropped.
pub struct FrameLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, DomError> {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let next = callback.clone();
        let next_handle = handle.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            on_frame(timestamp / 1000.0);
            if let (Ok(window), Some(cb)) = (window(), next.borrow().as_ref()) {
                next_handle.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = callback.borrow().as_ref() {
            handle.set(Some(window()?.request_animation_frame(cb.as_ref().unchecked_ref())?));
        }
        Ok(Self { callback, handle })
    }

    pub fn stop(&self) {
        if let (Some(id), Ok(window)) = (self.handle.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
        // Dropping the closure breaks its reference cycle with itself.
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
