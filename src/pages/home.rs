use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::components::spotlight_slider::SpotlightSlider;
use crate::config::{
    MarqueeConfig, SpotlightConfig, RESIZE_DEBOUNCE_MS, SPOTLIGHT_SLIDER_MAX_WIDTH, STICKY_CARDS_MIN_WIDTH,
};
use crate::hooks::use_settled_viewport;
use crate::motion::Target;
use crate::scroll::{Scrub, TriggerBounds};
use crate::sections::card_stack::{split_chars, CardStack};
use crate::sections::cursor::{CursorFollower, PointerEvent};
use crate::sections::hero::HeroRise;
use crate::sections::marquee::{self, MarqueeLoop};
use crate::sections::spotlight::{Spotlight, SPOTLIGHT_ITEMS};
use crate::sections::sticky_cards::StickyCards;
use crate::sections::{LayoutClass, Viewport};
use crate::web::dom::{self, DomError, DomTitleLayout};
use crate::web::{DomSink, ElementRegistry, RunningScene, Scene, Subscriptions};

const HERO_LINES: [&str; 3] = ["We shape quiet", "brands into", "lasting icons"];

struct FlipCard {
    number: &'static str,
    title: &'static str,
    text: &'static str,
    img: &'static str,
}

const FLIP_CARDS: [FlipCard; 3] = [
    FlipCard {
        number: "01",
        title: "Strategy",
        text: "We listen first, then map where the brand should stand and who it speaks to.",
        img: "/assets/iconiqa-5.webp",
    },
    FlipCard {
        number: "02",
        title: "Identity",
        text: "Marks, type and colour built as one system that holds up at every size.",
        img: "/assets/iconiqa-10.jpg",
    },
    FlipCard {
        number: "03",
        title: "Motion",
        text: "Interfaces and campaigns that move with intent instead of decoration.",
        img: "/assets/iconiqa-20.webp",
    },
];

struct StackCard {
    title: &'static str,
    description: &'static str,
    img: &'static str,
}

const STACK_CARDS: [StackCard; 4] = [
    StackCard {
        title: "Silent Arc",
        description: "A rebrand for a gallery that wanted to be felt before it was read.",
        img: "/assets/iconiqa-16.webp",
    },
    StackCard {
        title: "Bloom24",
        description: "Packaging and launch film for a florist that never closes.",
        img: "/assets/iconiqa-3.jpg",
    },
    StackCard {
        title: "Glass Fade",
        description: "A product site where every section dissolves into the next.",
        img: "/assets/iconiqa-4.jpg",
    },
    StackCard {
        title: "Velvet Loop",
        description: "Sound identity and visuals for a late night radio show.",
        img: "/assets/iconiqa-26.jpg",
    },
];

const MARQUEE_WORDS: [&str; 5] = ["Brand", "Motion", "Identity", "Web", "Campaigns"];

/// Everything the home page runs while mounted. Listeners go first so they
/// release their handle on the scene before it is torn down.
struct HomeScene {
    _subs: Subscriptions,
    _running: RunningScene,
}

fn bind_targets() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    registry.bind_indexed(Target::HeroHeading, "#text-content h1");
    registry.bind_selector(Target::Cursor, "#cursor");

    registry.bind_selector(Target::StickyHeader, ".sticky-header h1");
    registry.bind_selector(Target::CardContainer, ".card-container");
    registry.bind_indexed(Target::Card, ".card-container .card");

    for (i, card) in dom::query_all(".m-cards .m-card").iter().enumerate() {
        registry.bind_within(Target::StackImageWrapper(i), card, ".m-card-img");
        registry.bind_within(Target::StackImage(i), card, ".m-card-img img");
        registry.bind_within(Target::StackTitleChars(i), card, ".char span");
        registry.bind_within(Target::StackDescription(i), card, ".m-card-description");
    }
    registry.bind_selector(Target::MarqueeTrack, ".card-marquee .marquee");

    if dom::query(".spotlight").is_ok() {
        registry.bind_selector(Target::SpotlightTitles, ".spotlight-titles");
        registry.bind_indexed(Target::SpotlightTitle, ".spotlight-titles h1");
        registry.bind_indexed(Target::SpotlightImage, ".spotlight-images .spotlight-img");
        registry.bind_selector(Target::SpotlightHeader, ".spotlight-header");
        registry.bind_selector(Target::SpotlightTitlesFrame, ".spotlight-titles-container");
        registry.bind_indexed(Target::IntroText, ".spotlight-intro-text");
        registry.bind_selector(Target::SpotlightBg, ".spotlight-bg-img");
        registry.bind_selector(Target::SpotlightBgImage, ".spotlight-bg-img img");
    }

    registry
}

/// Builds every section in document order, so each pin spacer is sized
/// before the sections below it are measured. A section that can't find its
/// elements is skipped on its own.
fn mount(viewport: Viewport) -> Result<HomeScene, DomError> {
    let running = RunningScene::start(Scene::new(DomSink::new(bind_targets()), viewport))?;
    let mut subs = Subscriptions::new();

    if let Err(e) = setup_cursor(&running, &mut subs) {
        warn!("Cursor effect disabled: {}", e);
    }
    if let Err(e) = setup_hero(&running, viewport) {
        warn!("Hero animation disabled: {}", e);
    }
    if let Err(e) = setup_sticky_cards(&running, viewport) {
        warn!("Sticky cards disabled: {}", e);
    }
    if let Err(e) = setup_card_stack(&running, viewport) {
        warn!("Card stack disabled: {}", e);
    }
    if let Err(e) = setup_marquee(&running) {
        warn!("Marquee disabled: {}", e);
    }
    if LayoutClass::at_most(viewport.width, SPOTLIGHT_SLIDER_MAX_WIDTH) == LayoutClass::Wide {
        if let Err(e) = setup_spotlight(&running, viewport) {
            warn!("Spotlight disabled: {}", e);
        }
    }

    info!("Home scene mounted at {}x{}", viewport.width, viewport.height);
    Ok(HomeScene {
        _subs: subs,
        _running: running,
    })
}

fn setup_cursor(running: &RunningScene, subs: &mut Subscriptions) -> Result<(), DomError> {
    let area = dom::query("#page1-content")?;
    dom::query("#cursor")?;

    let cursor = CursorFollower;
    {
        let mut scene = running.scene().borrow_mut();
        let (sink, tweens) = scene.parts();
        cursor.prime(sink, tweens);
    }

    for event in ["mousemove", "mouseenter", "mouseleave"] {
        let scene = running.scene().clone();
        subs.listen(&area, event, move |e: Event| {
            let pointer = match event {
                "mousemove" => match e.dyn_ref::<MouseEvent>() {
                    Some(m) => PointerEvent::Move(Point::new(m.client_x() as f64, m.client_y() as f64)),
                    None => return,
                },
                "mouseenter" => PointerEvent::Enter,
                _ => PointerEvent::Leave,
            };
            if let Ok(mut scene) = scene.try_borrow_mut() {
                let (_, tweens) = scene.parts();
                cursor.handle(pointer, dom::now_seconds(), tweens);
            }
        })?;
    }
    Ok(())
}

fn setup_hero(running: &RunningScene, viewport: Viewport) -> Result<(), DomError> {
    let block = dom::query("#page2")?;
    let count = dom::query_all("#text-content h1").len();
    if count == 0 {
        return Err(DomError::Missing("#text-content h1".to_string()));
    }

    let hero = HeroRise::new(count);
    let bounds = HeroRise::trigger_bounds(dom::page_top(&block), viewport.height);

    let mut scene = running.scene().borrow_mut();
    let (sink, _) = scene.parts();
    hero.update(0.0, sink);
    scene.add_trigger(bounds, Scrub::new(2.0), move |update, ctx| {
        hero.update(update.progress, ctx.sink);
    });
    Ok(())
}

fn setup_sticky_cards(running: &RunningScene, viewport: Viewport) -> Result<(), DomError> {
    let section = dom::query(".sticky")?;
    let mut scene = running.scene().borrow_mut();

    if LayoutClass::at_least(viewport.width, STICKY_CARDS_MIN_WIDTH) == LayoutClass::Narrow {
        dom::release_pin(&section);
        let (sink, tweens) = scene.parts();
        StickyCards::clear_inline(sink, tweens);
        return Ok(());
    }

    let bounds = StickyCards::trigger_bounds(dom::page_top(&section), viewport.height);

    let (sink, tweens) = scene.parts();
    let mut cards = StickyCards::mount(sink, tweens);
    scene.add_pinned_trigger(&section, bounds, Scrub::new(1.0), move |update, ctx| {
        cards.update(update.progress, ctx.now, ctx.sink, ctx.tweens);
    });
    Ok(())
}

/// Cards are sticky inside `.m-cards`, each one viewport tall, with a spacer
/// after the first one for the intro. Card tops are derived from that layout
/// because a stuck card reports its stuck position.
fn setup_card_stack(running: &RunningScene, viewport: Viewport) -> Result<(), DomError> {
    let container = dom::query(".m-cards")?;
    let count = dom::query_within(&container, ".m-card").len();
    if count == 0 {
        return Err(DomError::Missing(".m-card".to_string()));
    }
    let vh = viewport.height;

    let intro = CardStack::intro_bounds(dom::page_top(&container), vh);
    dom::set_spacer_height(&dom::query(".m-card-pin")?, intro.length());
    let card_top = |i: usize| intro.end + i as f64 * vh;

    let stack = Rc::new(RefCell::new(CardStack::new(count)));
    let mut scene = running.scene().borrow_mut();
    {
        let (sink, tweens) = scene.parts();
        stack.borrow().prime(sink, tweens);
    }

    let intro_stack = stack.clone();
    scene.add_trigger(intro, Scrub::immediate(), move |update, ctx| {
        let reveal = intro_stack
            .borrow_mut()
            .update_intro(update.progress, ctx.now, ctx.sink, ctx.tweens);
        if let Some(reveal) = reveal {
            debug!("card stack: {:?}", reveal);
        }
    });

    for i in 1..count {
        let top = card_top(i);

        let covering = stack.clone();
        scene.add_trigger(CardStack::approach_bounds(top, vh), Scrub::immediate(), move |update, ctx| {
            let stack = covering.borrow();
            stack.update_outgoing(i - 1, update.progress, ctx.sink);
            stack.update_incoming(i, update.progress, ctx.sink);
        });

        let revealing = stack.clone();
        scene.add_trigger(TriggerBounds::open_ended(top), Scrub::immediate(), move |update, ctx| {
            let mut stack = revealing.borrow_mut();
            for event in &update.events {
                if let Some(reveal) = stack.on_event(i, *event, ctx.now, ctx.tweens) {
                    debug!("card stack: {:?}", reveal);
                }
            }
        });
    }
    Ok(())
}

/// Duplicates the marquee items once, then loops the track by one copy's
/// width.
fn setup_marquee(running: &RunningScene) -> Result<(), DomError> {
    let track = dom::query(".card-marquee .marquee")?;
    let items = dom::query_within(&track, "h1");
    let originals = marquee::original_count(items.len(), track.has_attribute("data-cloned"));

    let clones = marquee::clones_needed(items.len(), originals);
    for item in items.iter().take(clones) {
        let copy = item.clone_node_with_deep(true)?;
        track.append_child(&copy)?;
    }
    if clones > 0 {
        track.set_attribute("data-cloned", "true")?;
    }

    let widths: Vec<f64> = items.iter().take(originals).map(|el| el.offset_width() as f64).collect();
    let Some(marquee) = MarqueeLoop::measure(&widths, MarqueeConfig::default()) else {
        return Ok(());
    };

    let mut scene = running.scene().borrow_mut();
    let (sink, tweens) = scene.parts();
    marquee.start(dom::now_seconds(), tweens, sink);
    Ok(())
}

fn setup_spotlight(running: &RunningScene, viewport: Viewport) -> Result<(), DomError> {
    let section = dom::query(".spotlight")?;
    let bounds = Spotlight::trigger_bounds(dom::page_top(&section), viewport.height);

    let column = dom::query(".spotlight-titles")?;
    let titles = dom::query_within(&column, "h1");
    let layout = DomTitleLayout::new(column, titles);

    let mut spotlight = Spotlight::new(SpotlightConfig::default(), SPOTLIGHT_ITEMS.to_vec(), viewport);
    let mut scene = running.scene().borrow_mut();
    let (sink, _) = scene.parts();
    spotlight.prime(sink);

    scene.add_pinned_trigger(&section, bounds, Scrub::new(1.0), move |update, ctx| {
        let live = dom::viewport().unwrap_or(ctx.viewport);
        spotlight.update(update.progress, live, &layout, ctx.sink);
    });
    Ok(())
}

fn char_cells(text: &str) -> Html {
    split_chars(text)
        .into_iter()
        .map(|c| html! { <div class="char"><span>{c}</span></div> })
        .collect()
}

fn spotlight_section() -> Html {
    html! {
        <section class="spotlight">
            <div class="spotlight-inner">
                <div class="spotlight-intro-text-wrapper">
                    <div class="spotlight-intro-text"><p>{"Selected"}</p></div>
                    <div class="spotlight-intro-text"><p>{"Work"}</p></div>
                </div>
                <div class="spotlight-bg-img">
                    <img src={SPOTLIGHT_ITEMS[0].img} alt="" />
                </div>
                <div class="spotlight-titles-container">
                    <div class="spotlight-titles">
                        { for SPOTLIGHT_ITEMS.iter().map(|item| html! { <h1>{item.name}</h1> }) }
                    </div>
                </div>
                <div class="spotlight-images">
                    { for SPOTLIGHT_ITEMS.iter().map(|item| html! {
                        <div class="spotlight-img"><img src={item.img} alt="" /></div>
                    }) }
                </div>
                <div class="spotlight-header">
                    <p>{"Discover"}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let viewport = use_settled_viewport(RESIZE_DEBOUNCE_MS);
    let spotlight_layout = LayoutClass::at_most(viewport.width, SPOTLIGHT_SLIDER_MAX_WIDTH);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    use_effect_with_deps(
        move |viewport| {
            let mounted = match mount(*viewport) {
                Ok(scene) => Some(scene),
                Err(e) => {
                    warn!("Home animations disabled: {}", e);
                    None
                }
            };
            move || drop(mounted)
        },
        viewport,
    );

    html! {
        <div class="home">
            <section id="page1">
                <div id="page1-content">
                    <div id="cursor"></div>
                    <h1 class="hero-title">{"iconiqa"}</h1>
                    <p class="hero-subtitle">{"Design studio for brands that want to be remembered"}</p>
                </div>
            </section>

            <section id="page2">
                <div id="text-content">
                    { for HERO_LINES.iter().map(|line| html! { <h1>{*line}</h1> }) }
                </div>
            </section>

            <section class="sticky">
                <div class="sticky-inner">
                    <div class="sticky-header">
                        <h1>{"Three steps to an icon"}</h1>
                    </div>
                    <div class="card-container">
                        { for FLIP_CARDS.iter().map(|card| html! {
                            <div class="card">
                                <div class="card-front">
                                    <img src={card.img} alt={card.title} />
                                </div>
                                <div class="card-back">
                                    <span>{card.number}</span>
                                    <h3>{card.title}</h3>
                                    <p>{card.text}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="m-cards">
                { for STACK_CARDS.iter().enumerate().map(|(i, card)| html! {
                    <>
                        <div class="m-card">
                            if i == 0 {
                                <div class="card-marquee">
                                    <div class="marquee">
                                        { for MARQUEE_WORDS.iter().map(|word| html! { <h1>{*word}</h1> }) }
                                    </div>
                                </div>
                            }
                            <div class="m-card-wrapper">
                                <div class="m-card-content">
                                    <div class="m-card-title">
                                        <h1>{ char_cells(card.title) }</h1>
                                    </div>
                                    <div class="m-card-description">
                                        <p>{card.description}</p>
                                    </div>
                                </div>
                                <div class="m-card-img">
                                    <img src={card.img} alt={card.title} />
                                </div>
                            </div>
                        </div>
                        if i == 0 {
                            <div class="m-card-pin"></div>
                        }
                    </>
                }) }
            </section>

            if spotlight_layout == LayoutClass::Wide {
                { spotlight_section() }
            } else {
                <SpotlightSlider />
            }
        </div>
    }
}
