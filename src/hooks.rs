use log::warn;
use yew::prelude::*;

use crate::sections::Viewport;
use crate::web::dom;
use crate::web::{Debounce, Subscriptions};

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1440.0,
    height: 900.0,
};

/// Viewport size that only updates once resizing has been quiet for
/// `debounce_ms`. Pages use it as the dependency that tears down and
/// rebuilds their scroll scene.
#[hook]
pub fn use_settled_viewport(debounce_ms: u32) -> Viewport {
    let settled = use_state_eq(|| dom::viewport().unwrap_or(FALLBACK_VIEWPORT));

    {
        let settled = settled.clone();
        use_effect_with_deps(
            move |ms| {
                let debounce = Debounce::new(*ms);
                let mut subs = Subscriptions::new();
                let on_resize = {
                    let debounce = debounce.clone();
                    move |_: web_sys::Event| {
                        let settled = settled.clone();
                        debounce.call(move || match dom::viewport() {
                            Ok(v) => settled.set(v),
                            Err(e) => warn!("Could not read viewport: {}", e),
                        });
                    }
                };
                let listening = dom::window().and_then(|w| subs.listen(&w, "resize", on_resize));
                if let Err(e) = listening {
                    warn!("Resize tracking disabled: {}", e);
                }
                move || {
                    debounce.cancel();
                    drop(subs);
                }
            },
            debounce_ms,
        );
    }

    *settled
}
