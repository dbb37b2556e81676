use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::sections::slider::Slider;
use crate::sections::spotlight::SPOTLIGHT_ITEMS;

/// Spotlight projects as a paged slider for tablets and phones.
#[function_component(SpotlightSlider)]
pub fn spotlight_slider() -> Html {
    let slider = use_state(|| Slider::new(SPOTLIGHT_ITEMS.len()));
    let touch_start = use_mut_ref(|| None::<f64>);

    let step = |apply: fn(&mut Slider) -> bool| {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *slider;
            if apply(&mut next) {
                slider.set(next);
            }
        })
    };
    let on_prev = step(Slider::prev);
    let on_next = step(Slider::next);

    {
        let slider = slider.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let mut next = *slider;
            if next.key(&e.key()) {
                slider.set(next);
            }
        });
    }

    let on_progress = {
        let slider = slider.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(bar) = e.current_target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let fraction = (e.client_x() as f64 - rect.left()) / rect.width();
            let mut next = *slider;
            if next.go_to_fraction(fraction) {
                slider.set(next);
            }
        })
    };

    let on_touch_start = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t) = e.changed_touches().get(0) {
                *touch_start.borrow_mut() = Some(t.screen_x() as f64);
            }
        })
    };

    let on_touch_end = {
        let slider = slider.clone();
        Callback::from(move |e: TouchEvent| {
            let start = touch_start.borrow_mut().take();
            if let (Some(start), Some(t)) = (start, e.changed_touches().get(0)) {
                let mut next = *slider;
                if next.swipe(start, t.screen_x() as f64) {
                    slider.set(next);
                }
            }
        })
    };

    let view = slider.view();

    html! {
        <section class="spotlight-slider">
            <div class="spotlight-slider-container" ontouchstart={on_touch_start} ontouchend={on_touch_end}>
                <div class="spotlight-slider-track" style={format!("transform: translateX({}%);", view.track_offset_percent)}>
                    { for SPOTLIGHT_ITEMS.iter().map(|item| html! {
                        <div class="spotlight-slide">
                            <img class="spotlight-slide-image" src={item.img} alt={item.name} />
                            <div class="spotlight-slide-content">
                                <h2 class="spotlight-slide-title">{item.name}</h2>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <div class="spotlight-slider-controls">
                <button class="spotlight-slider-prev" disabled={view.prev_disabled} onclick={on_prev}>{"←"}</button>
                <div class="spotlight-slider-progress" onclick={on_progress}>
                    <div class="spotlight-slider-progress-bar" style={format!("width: {}%;", view.progress_percent)}></div>
                </div>
                <button class="spotlight-slider-next" disabled={view.next_disabled} onclick={on_next}>{"→"}</button>
            </div>
        </section>
    }
}
