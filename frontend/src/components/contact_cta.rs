use log::{debug, error, info};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::contact::{ContactForm, FormField, MailtoIntent};
use crate::hotkey::{focus_context, FocusContext, Hotkey, KeyPress, WindowListener};

pub const CONTACT_TRIGGER_ID: &str = "contact-trigger";

/// Opens the modal from anywhere on the page by clicking the contact trigger.
pub fn open_contact_modal() {
    let trigger = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONTACT_TRIGGER_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match trigger {
        Some(el) => el.click(),
        None => error!("Contact trigger #{} not found", CONTACT_TRIGGER_ID),
    }
}

fn launch_mail_client(intent: &MailtoIntent) {
    info!("Handing consultation request to the mail client");
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(&intent.to_uri()) {
            error!("Failed to open mail client: {:?}", e);
        }
    }
}

fn notify(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactCtaProps {
    pub config: SiteConfig,
}

pub enum ContactMsg {
    Open,
    Close,
    SetField(FormField, String),
    Submit,
    Key(KeyPress, FocusContext),
}

pub struct ContactCta {
    form: ContactForm,
    hotkey: Hotkey,
    _keydown: Option<WindowListener>,
}

impl Component for ContactCta {
    type Message = ContactMsg;
    type Properties = ContactCtaProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        let link = ctx.link().clone();
        let keydown = WindowListener::keydown(move |e: KeyboardEvent| {
            link.send_message(ContactMsg::Key(KeyPress::from_event(&e), focus_context()));
        });

        Self {
            form: config.contact_form(),
            hotkey: config.hotkey(),
            _keydown: keydown,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Open => {
                if self.form.is_visible() {
                    return false;
                }
                self.form.open();
                true
            }
            ContactMsg::Close => {
                self.form.close();
                true
            }
            ContactMsg::SetField(field, value) => {
                self.form.set_field(field, value);
                true
            }
            ContactMsg::Submit => match self.form.submit() {
                Ok(intent) => {
                    launch_mail_client(&intent);
                    true
                }
                Err(e) => {
                    notify(&e.to_string());
                    false
                }
            },
            ContactMsg::Key(press, focus) => {
                if press.is_escape() && self.form.is_visible() {
                    self.form.close();
                    return true;
                }
                if self.hotkey.matches(&press, focus) && !self.form.is_visible() {
                    debug!("Contact form opened from keyboard shortcut");
                    self.form.open();
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = ctx.link().callback(|_: MouseEvent| ContactMsg::Open);
        let recipient = self.form.recipient();

        html! {
            <section id="contact" class="contact-cta">
                <h2>{"Let’s talk"}</h2>
                <p class="contact-lead">
                    {"Tell us about your environment and priorities. We’ll reply with a short plan and fixed-price options."}
                </p>
                <div class="contact-actions">
                    <a href={format!("mailto:{}", recipient)} class="contact-email-link">
                        {"Email us"}
                    </a>
                    <button id={CONTACT_TRIGGER_ID} class="contact-consult-button" onclick={open}>
                        {"Book a consult"}
                    </button>
                </div>
                if self.form.is_visible() {
                    { self.render_modal(ctx) }
                }
                <style>
                    {r#"
                    .contact-cta {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 6rem 1.5rem;
                        text-align: center;
                    }
                    .contact-cta h2 {
                        font-size: 2.25rem;
                        margin: 0;
                    }
                    .contact-lead {
                        color: #cbd5e1;
                        margin-top: 0.75rem;
                    }
                    .contact-actions {
                        margin-top: 2rem;
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .contact-email-link {
                        background: #67e8f9;
                        color: #0f172a;
                        padding: 0.75rem 1.25rem;
                        border-radius: 1rem;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .contact-consult-button {
                        border: 1px solid #334155;
                        background: none;
                        color: inherit;
                        padding: 0.75rem 1.25rem;
                        border-radius: 1rem;
                        cursor: pointer;
                    }
                    .contact-modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                    }
                    .contact-modal {
                        position: relative;
                        width: 100%;
                        max-width: 28rem;
                        background: #0f172a;
                        border: 1px solid #334155;
                        border-radius: 1rem;
                        padding: 2rem;
                        text-align: left;
                    }
                    .contact-modal h3 {
                        color: #67e8f9;
                        font-size: 1.5rem;
                        margin: 0 0 1rem;
                    }
                    .contact-modal-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: #94a3b8;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .contact-field {
                        margin-bottom: 1rem;
                    }
                    .contact-field label {
                        font-size: 0.875rem;
                        color: #94a3b8;
                    }
                    .contact-field input,
                    .contact-field select,
                    .contact-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: #1e293b;
                        border: 1px solid #334155;
                        border-radius: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        margin-top: 0.25rem;
                        color: #e2e8f0;
                    }
                    .contact-form-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .contact-hint {
                        font-size: 0.75rem;
                        color: #64748b;
                    }
                    .contact-hint kbd {
                        padding: 0 0.25rem;
                        border-radius: 0.25rem;
                        background: #1e293b;
                        border: 1px solid #334155;
                    }
                    .contact-send {
                        background: #67e8f9;
                        color: #0f172a;
                        border: none;
                        padding: 0.5rem 1.25rem;
                        border-radius: 0.75rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    "#}
                </style>
            </section>
        }
    }
}

impl ContactCta {
    fn render_modal(&self, ctx: &Context<Self>) -> Html {
        let close = ctx.link().callback(|_: MouseEvent| ContactMsg::Close);
        let send = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());
        let hint_key = self.hotkey.key().to_uppercase().to_string();

        html! {
            <div class="contact-modal-backdrop">
                <div class="contact-modal" role="dialog" aria-modal="true">
                    <button class="contact-modal-close" aria-label="Close" onclick={close}>
                        {"×"}
                    </button>
                    <h3>{"Book a Consultation"}</h3>
                    <form {onsubmit}>
                        { self.labeled_input(ctx, FormField::Name, "text", true) }
                        { self.labeled_input(ctx, FormField::Email, "email", true) }
                        { self.labeled_input(ctx, FormField::Company, "text", false) }
                        if self.form.has_service_field() {
                            { self.labeled_select(ctx) }
                        }
                        { self.labeled_textarea(ctx) }
                        <div class="contact-form-footer">
                            <span class="contact-hint">
                                {"Press "}<kbd>{hint_key}</kbd>{" to open this form."}
                            </span>
                            <button type="button" class="contact-send" onclick={send}>
                                {"Send"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }

    fn labeled_input(&self, ctx: &Context<Self>, field: FormField, kind: &'static str, required: bool) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::SetField(field, input.value())
        });

        html! {
            <div class="contact-field">
                <label for={field.as_str()}>{field.label()}</label>
                <input
                    id={field.as_str()}
                    type={kind}
                    {required}
                    value={self.form.field(field).to_string()}
                    {oninput}
                />
            </div>
        }
    }

    fn labeled_select(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactMsg::SetField(FormField::Service, select.value())
        });
        let current = self.form.field(FormField::Service);

        html! {
            <div class="contact-field">
                <label for="service">{FormField::Service.label()}</label>
                <select id="service" required=true {onchange}>
                    <option value="" disabled=true selected={current.is_empty()}>
                        {"Select a service…"}
                    </option>
                    { for self.form.service_options().iter().map(|option| html! {
                        <option value={option.clone()} selected={option == current}>
                            {option}
                        </option>
                    }) }
                </select>
            </div>
        }
    }

    fn labeled_textarea(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::SetField(FormField::Message, area.value())
        });

        html! {
            <div class="contact-field">
                <label for="message">{FormField::Message.label()}</label>
                <textarea
                    id="message"
                    rows="4"
                    value={self.form.field(FormField::Message).to_string()}
                    {oninput}
                />
            </div>
        }
    }
}
