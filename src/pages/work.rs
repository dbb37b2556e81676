use log::{info, warn};
use yew::prelude::*;

use crate::components::modal::ProjectModal;
use crate::config::GALLERY_RESIZE_DEBOUNCE_MS;
use crate::hooks::use_settled_viewport;
use crate::modal::{CtaLink, Modal, ModalContent};
use crate::motion::{Style, StyleSink, Target};
use crate::scroll::Scrub;
use crate::sections::gallery::Gallery;
use crate::sections::Viewport;
use crate::web::dom::{self, DomError};
use crate::web::{DomSink, ElementRegistry, RunningScene, Scene};

struct Project {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    details_html: &'static str,
    img: &'static str,
    gallery: &'static [&'static str],
    link: Option<(&'static str, &'static str)>,
}

impl Project {
    fn modal_content(&self) -> ModalContent {
        ModalContent {
            image_src: self.img.to_string(),
            image_alt: self.title.to_string(),
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            description: self.description.to_string(),
            details_html: self.details_html.to_string(),
            cta: self.link.map(|(href, label)| CtaLink {
                href: href.to_string(),
                label: label.to_string(),
            }),
            gallery: self.gallery.iter().map(|s| s.to_string()).collect(),
        }
    }
}

static PROJECTS: [Project; 6] = [
    Project {
        title: "Silent Arc",
        subtitle: "Gallery identity",
        description: "An identity for a contemporary gallery built around a single curved stroke.",
        details_html: "<ul><li>Identity system</li><li>Signage</li><li>Exhibition print</li></ul>",
        img: "/assets/iconiqa-16.webp",
        gallery: &["/assets/iconiqa-16.webp", "/assets/iconiqa-23.jpg", "/assets/iconiqa-26.jpg"],
        link: Some(("https://example.com/silent-arc", "Visit site")),
    },
    Project {
        title: "Bloom24",
        subtitle: "Packaging",
        description: "Round the clock florist packaging that changes colour with the hour.",
        details_html: "<ul><li>Packaging</li><li>Launch film</li></ul>",
        img: "/assets/iconiqa-3.jpg",
        gallery: &["/assets/iconiqa-3.jpg", "/assets/iconiqa-4.jpg"],
        link: None,
    },
    Project {
        title: "Glass Fade",
        subtitle: "Product website",
        description: "A scrolling product story where each chapter dissolves into the next.",
        details_html: "<p>Design and build of a motion led product site.</p>",
        img: "/assets/iconiqa-4.jpg",
        gallery: &[],
        link: Some(("https://example.com/glass-fade", "See it live")),
    },
    Project {
        title: "Echo 9",
        subtitle: "Sound brand",
        description: "Audio logo and visual language for a podcast network.",
        details_html: "<ul><li>Sonic identity</li><li>Cover system</li></ul>",
        img: "/assets/iconiqa-5.webp",
        gallery: &["/assets/iconiqa-5.webp", "/assets/iconiqa-10.jpg"],
        link: None,
    },
    Project {
        title: "Velvet Loop",
        subtitle: "Campaign",
        description: "Late night radio campaign across posters, film and social.",
        details_html: "<p>Art direction and motion for a six week campaign.</p>",
        img: "/assets/iconiqa-10.jpg",
        gallery: &[],
        link: None,
    },
    Project {
        title: "Field Two",
        subtitle: "Editorial",
        description: "A yearly printed journal for an agricultural cooperative.",
        details_html: "<ul><li>Editorial design</li><li>Photography direction</li></ul>",
        img: "/assets/iconiqa-20.webp",
        gallery: &["/assets/iconiqa-20.webp", "/assets/iconiqa-23.jpg"],
        link: Some(("https://example.com/field-two", "Read the journal")),
    },
];

/// Pins `#portfolio` and slides its strip left over the overflow distance.
/// When the strip fits the viewport any earlier pin and offset are dropped.
fn mount_gallery(viewport: Viewport) -> Result<Option<RunningScene>, DomError> {
    let section = dom::query("#portfolio")?;
    let strip = dom::query("#portfolio .horiz-gallery-strip")?;

    let mut registry = ElementRegistry::new();
    registry.bind(Target::GalleryStrip, strip.clone());
    let mut sink = DomSink::new(registry);

    let Some(gallery) = Gallery::plan(strip.scroll_width() as f64, viewport.width) else {
        dom::release_pin(&section);
        sink.apply(Target::GalleryStrip, Style::ClearInline);
        return Ok(None);
    };

    let bounds = gallery.trigger_bounds(dom::page_top(&section));
    gallery.update(0.0, &mut sink);

    let mut scene = Scene::new(sink, viewport);
    scene.add_pinned_trigger(&section, bounds, Scrub::new(1.0), move |update, ctx| {
        gallery.update(update.progress, ctx.sink);
    });
    info!("Gallery pinned over {}px", gallery.scroll_distance);
    RunningScene::start(scene).map(Some)
}

#[function_component(Work)]
pub fn work() -> Html {
    let viewport = use_settled_viewport(GALLERY_RESIZE_DEBOUNCE_MS);
    let modal = use_state(Modal::new);

    use_effect_with_deps(
        move |viewport| {
            let running = match mount_gallery(*viewport) {
                Ok(running) => running,
                Err(e) => {
                    warn!("Gallery disabled: {}", e);
                    None
                }
            };
            move || drop(running)
        },
        viewport,
    );

    // Lock page scrolling behind the open modal
    {
        let open = modal.is_open();
        use_effect_with_deps(
            move |open| {
                let body = dom::document().ok().and_then(|d| d.body());
                if let Some(body) = &body {
                    let overflow = if *open { "hidden" } else { "" };
                    let _ = body.style().set_property("overflow", overflow);
                }
                move || {
                    if let Some(body) = body {
                        let _ = body.style().remove_property("overflow");
                    }
                }
            },
            open,
        );
    }

    let on_modal_change = {
        let modal = modal.clone();
        Callback::from(move |next: Modal| modal.set(next))
    };

    let open_project = |project: &'static Project| {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = Modal::new();
            next.open(project.modal_content());
            modal.set(next);
        })
    };

    html! {
        <div class="work">
            <section class="work-hero">
                <h1>{"Work"}</h1>
                <p>{"A few of the brands we helped find their shape."}</p>
            </section>

            <section id="portfolio">
                <div class="portfolio-inner">
                    <div class="horiz-gallery-strip">
                        { for PROJECTS.iter().map(|project| html! {
                            <div class="project-card" onclick={open_project(project)}>
                                <img src={project.img} alt={project.title} />
                                <div class="project-card-info">
                                    <h2>{project.title}</h2>
                                    <p>{project.subtitle}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <ProjectModal modal={(*modal).clone()} on_change={on_modal_change} />
        </div>
    }
}
