use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::modal::Modal;

#[derive(Properties, PartialEq)]
struct RichTextProps {
    html: String,
}

/// Trusted markup from the page's own project data.
#[function_component(RichText)]
fn rich_text(props: &RichTextProps) -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |html| {
                if let Some(el) = node.cast::<Element>() {
                    el.set_inner_html(html);
                }
                || ()
            },
            props.html.clone(),
        );
    }
    html! { <div class="project-modal-details" ref={node}></div> }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub modal: Modal,
    pub on_change: Callback<Modal>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    {
        let modal = props.modal.clone();
        let on_change = props.on_change.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let mut next = modal.clone();
            if next.key(&e.key()) {
                on_change.emit(next);
            }
        });
    }

    let Some(content) = props.modal.content() else {
        return html! {};
    };

    let update = |apply: fn(&mut Modal)| {
        let modal = props.modal.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = modal.clone();
            apply(&mut next);
            on_change.emit(next);
        })
    };

    let on_backdrop = {
        let modal = props.modal.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            let mut next = modal.clone();
            if next.backdrop_click(e.target() == e.current_target()) {
                on_change.emit(next);
            }
        })
    };

    let gallery = props.modal.gallery().map(|g| {
        let dots = (0..g.len()).map(|i| {
            let modal = props.modal.clone();
            let on_change = props.on_change.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                let mut next = modal.clone();
                if next.gallery_mut().map_or(false, |g| g.go_to(i)) {
                    on_change.emit(next);
                }
            });
            html! {
                <button class={classes!("modal-gallery-dot", (i == g.index()).then(|| "active"))} {onclick}></button>
            }
        });
        html! {
            <div class="modal-gallery">
                <img class="modal-gallery-image" src={g.current().to_string()} alt={content.title.clone()} />
                <button class="modal-gallery-prev" onclick={update(|m| {
                    if let Some(g) = m.gallery_mut() {
                        g.prev();
                    }
                })}>{"‹"}</button>
                <button class="modal-gallery-next" onclick={update(|m| {
                    if let Some(g) = m.gallery_mut() {
                        g.next();
                    }
                })}>{"›"}</button>
                <div class="modal-gallery-dots">{ for dots }</div>
            </div>
        }
    });

    html! {
        <div class="project-modal active" onclick={on_backdrop}>
            <div class="project-modal-content">
                <button class="project-modal-close" onclick={update(Modal::close)}>{"×"}</button>
                <div class="project-modal-media">
                    <img src={content.image_src.clone()} alt={content.image_alt.clone()} />
                </div>
                <div class="project-modal-body">
                    <h2>{content.title.clone()}</h2>
                    <h3>{content.subtitle.clone()}</h3>
                    <p>{content.description.clone()}</p>
                    <RichText html={content.details_html.clone()} />
                    if let Some(cta) = &content.cta {
                        <a class="project-modal-cta" href={cta.href.clone()} target="_blank" rel="noopener noreferrer">{cta.label.clone()}</a>
                    }
                </div>
                { gallery.unwrap_or_default() }
            </div>
        </div>
    }
}
