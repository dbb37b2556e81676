use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{get_relay_url, RelayConfig, CONFIRMATION_MS, CONTACT_EMAIL};
use crate::contact::{send, ContactForm, Field, FormStatus, SubmitError};
use crate::web::relay::GlooRelay;

pub enum FormAction {
    Set(Field, String),
    Check(Field),
    /// A locally advanced copy, used when submitting starts.
    Replace(ContactForm),
    Finish(Result<(), SubmitError>),
    Dismiss,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            FormAction::Set(field, value) => form.set(field, value),
            FormAction::Check(field) => {
                form.check(field);
            }
            FormAction::Replace(next) => form = next,
            FormAction::Finish(result) => form.finish(result),
            FormAction::Dismiss => form.dismiss_confirmation(),
        }
        form.into()
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Phone => "Phone (optional)",
        Field::Subject => "Subject",
        Field::Message => "Message",
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::new);
    let confirmation = use_mut_ref(|| None::<Timeout>);

    {
        let confirmation = confirmation.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    confirmation.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut working = (*form).clone();
            let request = working.begin_submit(&RelayConfig::default());
            form.dispatch(FormAction::Replace(working));
            let Some(request) = request else {
                return;
            };

            let form = form.clone();
            let confirmation = confirmation.clone();
            spawn_local(async move {
                let result = send(&GlooRelay::new(get_relay_url()), &request).await;
                let succeeded = result.is_ok();
                form.dispatch(FormAction::Finish(result));
                if succeeded {
                    info!("Contact form sent");
                    let form = form.clone();
                    *confirmation.borrow_mut() = Some(Timeout::new(CONFIRMATION_MS, move || {
                        form.dispatch(FormAction::Dismiss);
                    }));
                }
            });
        })
    };

    let disabled = form.is_disabled();
    let field_view = |field: Field| {
        let onblur = {
            let form = form.clone();
            Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Check(field)))
        };
        let input = if field == Field::Message {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Set(field, area.value()));
                })
            };
            html! {
                <textarea id={field.key()} name={field.key()} rows="6"
                    value={form.value(field).to_string()} {oninput} {onblur} {disabled} />
            }
        } else {
            let kind = match field {
                Field::Email => "email",
                Field::Phone => "tel",
                _ => "text",
            };
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    form.dispatch(FormAction::Set(field, input.value()));
                })
            };
            html! {
                <input id={field.key()} name={field.key()} type={kind}
                    value={form.value(field).to_string()} {oninput} {onblur} {disabled} />
            }
        };
        let error = form.error(field);
        html! {
            <div class={classes!("form-group", error.is_some().then(|| "has-error"))}>
                <label for={field.key()}>{label(field)}</label>
                { input }
                if let Some(error) = error {
                    <span class="field-error">{error.to_string()}</span>
                }
            </div>
        }
    };

    let banner = match form.status() {
        FormStatus::Succeeded => html! {
            <div class="form-status success">{"Thank you! Your message has been sent. We'll get back to you soon."}</div>
        },
        FormStatus::Failed(message) => html! {
            <div class="form-status error">{message.clone()}</div>
        },
        FormStatus::Idle | FormStatus::Submitting => html! {},
    };

    html! {
        <div class="contact">
            <section class="contact-hero">
                <h1>{"Let's talk"}</h1>
                <p>
                    {"Tell us about your brand, or write to "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                </p>
            </section>

            <form class="contact-form" {onsubmit} novalidate={true}>
                { for Field::ALL.into_iter().map(field_view) }
                { banner }
                <button type="submit" class="contact-submit" {disabled}>
                    { if disabled { "Sending..." } else { "Send message" } }
                </button>
            </form>
        </div>
    }
}
