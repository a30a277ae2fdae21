use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use log::debug;

use crate::components::animated_in_view::AnimatedInView;
use crate::contact::{log_submission, ContactError, ContactSubmission};
use crate::content::CONTACT_CHANNELS;
use crate::motion::reveal::Reveal;

#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    Sent,
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_submit: Callback<ContactSubmission, Result<(), ContactError>>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = ContactSubmission::validate(&name, &email, &message)
                .and_then(|submission| on_submit.emit(submission));
            match result {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    status.set(FormStatus::Sent);
                }
                Err(err) => {
                    debug!("Contact form rejected: {:?}", err);
                    status.set(FormStatus::Failed(err.to_string()));
                }
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit} novalidate=true>
            <div class="contact-form-row">
                <input
                    type="text"
                    placeholder="Your Name"
                    value={(*name).clone()}
                    oninput={let name = name.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
                <input
                    type="email"
                    placeholder="Your Email"
                    value={(*email).clone()}
                    oninput={let email = email.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
            </div>
            <textarea
                placeholder="Tell us about your project..."
                rows="5"
                value={(*message).clone()}
                oninput={let message = message.clone(); move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(input.value());
                }}
            />
            {
                match &*status {
                    FormStatus::Idle => html! {},
                    FormStatus::Sent => html! {
                        <div class="form-notice form-notice--success">
                            {"Thanks! We'll get back to you shortly."}
                        </div>
                    },
                    FormStatus::Failed(reason) => html! {
                        <div class="form-notice form-notice--error">{ reason }</div>
                    },
                }
            }
            <button type="submit" class="btn btn-primary btn-large btn-block">{"Send Message"}</button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let on_submit = Callback::from(log_submission);

    html! {
        <section id="contact" class="section section--light">
            <div class="section-glow section-glow--top-left"></div>
            <div class="section-glow section-glow--bottom-right"></div>
            <div class="container contact-container">
                <AnimatedInView class="section-heading">
                    <span class="badge badge--orange">{"Get In Touch"}</span>
                    <h2 class="section-title">{"Let's Build Together"}</h2>
                    <p class="section-lead">
                        {"Have a project in mind? We'd love to hear about it. Reach out to us for a consultation."}
                    </p>
                </AnimatedInView>

                <div class="contact-layout">
                    <AnimatedInView>
                        <p class="contact-intro">
                            {"We're open for any suggestions or just to have a chat. Feel free to reach out directly or use the contact form."}
                        </p>
                        <div class="contact-channels">
                            {
                                for CONTACT_CHANNELS.iter().map(|channel| html! {
                                    <div class="contact-channel">
                                        <div class="contact-channel-icon">{ channel.icon }</div>
                                        <div>
                                            <p class="contact-channel-title">{ channel.title }</p>
                                            {
                                                match channel.href {
                                                    Some(href) => html! { <a href={href}>{ channel.value }</a> },
                                                    None => html! { <p class="contact-channel-value">{ channel.value }</p> },
                                                }
                                            }
                                        </div>
                                    </div>
                                })
                            }
                        </div>
                    </AnimatedInView>
                    <AnimatedInView reveal={Reveal::FadeInUp} class="contact-card">
                        <ContactForm {on_submit} />
                    </AnimatedInView>
                </div>
            </div>

            <style>
                {r#"
                .contact-container {
                    position: relative;
                    z-index: 10;
                }
                .contact-layout {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 3rem;
                    align-items: start;
                }
                .contact-intro {
                    color: #d1d5db;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .contact-channel {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1.5rem;
                    color: #fff;
                }
                .contact-channel-icon {
                    flex-shrink: 0;
                    padding: 0.75rem;
                    margin-right: 1rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(90deg, #3b82f6, #a855f7);
                }
                .contact-channel-title {
                    margin: 0;
                    font-weight: 600;
                    font-size: 1.125rem;
                }
                .contact-channel a,
                .contact-channel-value {
                    margin: 0;
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .contact-channel a:hover {
                    color: #60a5fa;
                }
                .contact-card {
                    padding: clamp(2rem, 5vw, 3rem);
                    border-radius: 1.5rem;
                    border: 1px solid #4b5563;
                    background: rgba(31, 41, 55, 0.8);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .contact-form-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid #4b5563;
                    background: rgba(55, 65, 81, 0.8);
                    color: #fff;
                    font: inherit;
                    transition: border-color 0.2s, box-shadow 0.2s;
                }
                .contact-form textarea {
                    margin-bottom: 1.5rem;
                    resize: vertical;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #3b82f6;
                    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.6);
                }
                .form-notice {
                    margin-bottom: 1.5rem;
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                }
                .form-notice--success {
                    color: #86efac;
                    background: rgba(34, 197, 94, 0.1);
                    border: 1px solid rgba(34, 197, 94, 0.3);
                }
                .form-notice--error {
                    color: #fca5a5;
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.3);
                }
                "#}
            </style>
        </section>
    }
}
