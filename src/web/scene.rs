use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::HtmlElement;

use crate::motion::TweenEngine;
use crate::scroll::{Scrub, TriggerBounds, TriggerId, TriggerSet, TriggerUpdate};
use crate::sections::Viewport;

use super::dom::{self, DomError, DomSink};
use super::frame::FrameLoop;

/// What a trigger handler gets to work with on one frame.
pub struct FrameCtx<'a> {
    pub now: f64,
    pub viewport: Viewport,
    pub sink: &'a mut DomSink,
    pub tweens: &'a mut TweenEngine,
}

type Handler = Box<dyn FnMut(&TriggerUpdate, &mut FrameCtx)>;

/// Triggers, tweens and the sink of one page, advanced once per frame.
/// Handlers run in trigger registration order.
pub struct Scene {
    triggers: TriggerSet,
    handlers: HashMap<TriggerId, Handler>,
    tweens: TweenEngine,
    sink: DomSink,
    viewport: Viewport,
    last_frame: Option<f64>,
}

impl Scene {
    pub fn new(sink: DomSink, viewport: Viewport) -> Self {
        Self {
            triggers: TriggerSet::new(),
            handlers: HashMap::new(),
            tweens: TweenEngine::new(),
            sink,
            viewport,
            last_frame: None,
        }
    }

    pub fn add_trigger(
        &mut self,
        bounds: TriggerBounds,
        scrub: Scrub,
        handler: impl FnMut(&TriggerUpdate, &mut FrameCtx) + 'static,
    ) -> TriggerId {
        let id = self.triggers.create(bounds, scrub);
        self.handlers.insert(id, Box::new(handler));
        id
    }

    /// A trigger whose section stays stuck for the whole range: `spacer` is
    /// sized so its sticky child holds for `bounds.length()` pixels.
    pub fn add_pinned_trigger(
        &mut self,
        spacer: &HtmlElement,
        bounds: TriggerBounds,
        scrub: Scrub,
        handler: impl FnMut(&TriggerUpdate, &mut FrameCtx) + 'static,
    ) -> TriggerId {
        dom::set_pin_length(spacer, bounds.length());
        self.add_trigger(bounds, scrub, handler)
    }

    pub fn kill_all(&mut self) {
        self.triggers.kill_all();
        self.handlers.clear();
        self.tweens.kill_all();
    }

    /// Sink and tweens for one-off setup writes outside a frame.
    pub fn parts(&mut self) -> (&mut DomSink, &mut TweenEngine) {
        (&mut self.sink, &mut self.tweens)
    }

    pub fn frame(&mut self, now: f64, scroll_y: f64) {
        let dt = self.last_frame.map_or(0.0, |t| (now - t).max(0.0));
        self.last_frame = Some(now);

        let updates = self.triggers.update(scroll_y, dt);
        let mut ctx = FrameCtx {
            now,
            viewport: self.viewport,
            sink: &mut self.sink,
            tweens: &mut self.tweens,
        };
        for update in &updates {
            if !update.changed && update.events.is_empty() {
                continue;
            }
            if let Some(handler) = self.handlers.get_mut(&update.id) {
                handler(update, &mut ctx);
            }
        }
        self.tweens.tick(now, &mut self.sink);
    }
}

/// A scene with its frame loop running. Dropping it stops the loop and
/// kills every trigger.
pub struct RunningScene {
    scene: Rc<RefCell<Scene>>,
    _frames: FrameLoop,
}

impl RunningScene {
    pub fn start(scene: Scene) -> Result<Self, DomError> {
        let scene = Rc::new(RefCell::new(scene));
        let driven = scene.clone();
        let frames = FrameLoop::start(move |now| {
            if let Ok(mut scene) = driven.try_borrow_mut() {
                scene.frame(now, dom::scroll_y());
            }
        })?;
        Ok(Self {
            scene,
            _frames: frames,
        })
    }

    pub fn scene(&self) -> &Rc<RefCell<Scene>> {
        &self.scene
    }
}

impl Drop for RunningScene {
    fn drop(&mut self) {
        if let Ok(mut scene) = self.scene.try_borrow_mut() {
            scene.kill_all();
        }
    }
}
