use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn, Level};
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod hooks;
mod modal;
mod motion;
mod scroll;
mod sections;
mod web;
mod components {
    pub mod modal;
    pub mod spotlight_slider;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod work;
}

use pages::{contact::Contact, home::Home, work::Work};
use scroll::smooth::{native_offset_top, DEFAULT_NAV_HEIGHT, NAV_SCROLL_SECONDS};
use scroll::{NavHref, Scrub, SmoothScroller, TriggerBounds, TriggerEvent, TriggerSet};
use web::dom;
use web::{FrameLoop, Subscriptions};

/// Scroll offset past which the nav bar casts its shadow.
const NAV_SHADOW_AT: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page drifted off the grid."}</p>
                    <Link<Route> to={Route::Home} classes="nav-link">{"Back home"}</Link<Route>>
                </div>
            }
        }
    }
}

const NAV_LINKS: [(&str, &str); 3] = [("Studio", "#page2"), ("Work", "/work"), ("Contact", "/contact")];

fn nav_height() -> f64 {
    dom::query("#main-nav")
        .map(|nav| nav.offset_height() as f64)
        .ok()
        .filter(|h| *h > 0.0)
        .unwrap_or(DEFAULT_NAV_HEIGHT)
}

/// Smooth-scrolls to `#id`, clearing the fixed nav. Returns false when the
/// element isn't on this page.
fn scroll_to_anchor(id: &str, scroller: &RefCell<SmoothScroller>, animated: bool) -> bool {
    let Ok(target) = dom::query(&format!("#{}", id)) else {
        return false;
    };
    let nav = nav_height();
    if animated {
        scroller
            .borrow_mut()
            .scroll_to(dom::scroll_y(), dom::page_top(&target), -nav, NAV_SCROLL_SECONDS, dom::now_seconds());
    } else if let Ok(window) = dom::window() {
        let top = native_offset_top(target.get_bounding_client_rect().top(), dom::scroll_y(), nav);
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    true
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let scroller = use_mut_ref(SmoothScroller::new);
    let animated = use_mut_ref(|| false);
    let navigator = use_navigator();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let triggers = Rc::new(RefCell::new(TriggerSet::new()));
                triggers
                    .borrow_mut()
                    .create(TriggerBounds::open_ended(NAV_SHADOW_AT), Scrub::immediate());

                let on_scroll = {
                    let triggers = triggers.clone();
                    move || {
                        for update in triggers.borrow_mut().update(dom::scroll_y(), 0.0) {
                            for event in update.events {
                                match event {
                                    TriggerEvent::Enter => is_scrolled.set(true),
                                    TriggerEvent::LeaveBack => is_scrolled.set(false),
                                    TriggerEvent::Leave | TriggerEvent::EnterBack => {}
                                }
                            }
                        }
                    }
                };
                on_scroll();

                let mut subs = Subscriptions::new();
                let listening = dom::window().and_then(|w| subs.listen(&w, "scroll", move |_: web_sys::Event| on_scroll()));
                if let Err(e) = listening {
                    warn!("Nav shadow disabled: {}", e);
                }
                move || drop(subs)
            },
            (),
        );
    }

    {
        let scroller = scroller.clone();
        let animated = animated.clone();
        use_effect_with_deps(
            move |_| {
                let cancel = scroller.clone();
                let frames = FrameLoop::start(move |now| {
                    if let Some(y) = scroller.borrow_mut().tick(now) {
                        if let Ok(window) = dom::window() {
                            window.scroll_to_with_x_and_y(0.0, y);
                        }
                    }
                });
                match &frames {
                    Ok(_) => *animated.borrow_mut() = true,
                    Err(e) => warn!("Smooth scrolling unavailable, using native scrolling: {}", e),
                }

                // Manual scrolling takes over from a running nav scroll
                let mut subs = Subscriptions::new();
                if let Ok(window) = dom::window() {
                    for event in ["wheel", "touchstart"] {
                        let scroller = cancel.clone();
                        if let Err(e) = subs.listen(&window, event, move |_: web_sys::Event| scroller.borrow_mut().cancel()) {
                            warn!("Could not listen for {}: {}", event, e);
                        }
                    }
                }
                move || {
                    drop(subs);
                    drop(frames);
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let follow = |href: &'static str| {
        let menu_open = menu_open.clone();
        let scroller = scroller.clone();
        let animated = animated.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            match NavHref::classify(href) {
                NavHref::Anchor(id) => {
                    if !scroll_to_anchor(&id, &scroller, *animated.borrow()) {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                }
                NavHref::External(path) => {
                    let route = Route::recognize(&path).unwrap_or(Route::NotFound);
                    if let Some(navigator) = &navigator {
                        navigator.push(&route);
                    }
                }
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav id="main-nav" class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"iconiqa"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a class="nav-link" href={*href} onclick={follow(*href)}>{*label}</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
