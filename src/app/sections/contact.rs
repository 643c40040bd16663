use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::contact::{
    ContactMessage, SubmissionEvent, SubmissionState, MAX_EMAIL_LEN, MAX_MESSAGE_LEN,
    MAX_NAME_LEN, SENT_CONFIRMATION,
};
use crate::content::SOCIAL_LINKS;
use crate::reveal::RevealConfig;
use crate::sections::Section;

use super::super::reveal::{reveal_class, use_reveal};
use super::SectionHeading;

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<u64, ServerFnError> {
    let message = crate::contact::ContactMessage::new(name, email, message)
        .validate()
        .map_err(|e| {
            tracing::warn!("rejected contact message: {e}");
            ServerFnError::new(e.to_string())
        })?;
    Ok(crate::contact::record(message))
}

/// Text to show for a failed submission.
fn failure_reason(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg.clone(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section
            id=Section::Contact.id()
            class="section-padding min-h-screen bg-muted/30 dark:bg-muted/10"
        >
            <div class="container">
                <SectionHeading
                    title="Get In Touch"
                    intro="Have a data project in mind or want to discuss collaboration opportunities? Feel free to reach out and I'll get back to you as soon as possible."
                />
                <div class="grid md:grid-cols-5 gap-8 lg:gap-12 max-w-6xl mx-auto">
                    <ContactInfo />
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="md:col-span-2 space-y-6">
            <div class="card-data">
                <h3 class="text-xl font-semibold mb-4">"Connect With Me"</h3>
                <p class="text-foreground/70 mb-6">
                    "Find me on these platforms or send me a message directly through the form."
                </p>
                <div class="space-y-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=format!(
                                        "flex items-center gap-3 p-3 rounded-lg border border-border transition-colors {}",
                                        link.hover_class,
                                    )
                                >
                                    <i class=link.icon />
                                    <span>{link.name}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="card-data">
                <h3 class="text-xl font-semibold mb-4">"Office Hours"</h3>
                <p class="text-foreground/70">"Monday - Friday: 9:00 AM - 5:00 PM"</p>
                <p class="text-foreground/70">"Weekend: By appointment"</p>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(form_ref, 1, RevealConfig::CONTACT);

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (state, set_state) = signal(SubmissionState::Idle);
    let advance = move |event: SubmissionEvent| {
        set_state.update(|s| *s = std::mem::take(s).transition(event));
    };

    let submit = ServerAction::<SubmitContact>::new();
    let reset_timer = StoredValue::new(None::<TimeoutHandle>);

    Effect::watch(
        move || submit.value().get(),
        move |result, _, _| match result {
            Some(Ok(id)) => {
                log::debug!("contact message accepted as #{id}");
                advance(SubmissionEvent::Succeeded);
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
                let handle =
                    set_timeout_with_handle(move || advance(SubmissionEvent::Reset), SENT_CONFIRMATION)
                        .ok();
                reset_timer.set_value(handle);
            }
            Some(Err(e)) => {
                log::warn!("contact submission failed: {e}");
                advance(SubmissionEvent::Failed(failure_reason(e)));
            }
            None => {}
        },
        false,
    );

    on_cleanup(move || {
        if let Some(Some(handle)) = reset_timer.try_update_value(Option::take) {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !state.get_untracked().can_submit() {
            return;
        }
        let draft = ContactMessage::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        match draft.validate() {
            Ok(valid) => {
                advance(SubmissionEvent::Submit);
                submit.dispatch(SubmitContact {
                    name: valid.name,
                    email: valid.email,
                    message: valid.message,
                });
            }
            Err(e) => advance(SubmissionEvent::Failed(e.to_string())),
        }
    };

    let input_class = "w-full p-3 rounded-md border border-border bg-background focus:ring-2 focus:ring-primary/50 outline-none transition-all";

    view! {
        <div
            node_ref=form_ref
            class=move || {
                reveal_class(
                    "md:col-span-3 card-data",
                    reveal.get().is_item_visible(0),
                    "animate-fade-in",
                )
            }
        >
            <h3 class="text-xl font-semibold mb-6">"Send Me a Message"</h3>
            <form on:submit=on_submit class="space-y-6">
                <div class="grid sm:grid-cols-2 gap-6">
                    <div class="space-y-2">
                        <label for="name" class="text-sm font-medium">"Your Name"</label>
                        <input
                            id="name"
                            name="name"
                            type="text"
                            required
                            maxlength=MAX_NAME_LEN
                            placeholder="John Doe"
                            class=input_class
                            prop:value=name
                            on:input:target=move |ev| set_name.set(ev.target().value())
                        />
                    </div>
                    <div class="space-y-2">
                        <label for="email" class="text-sm font-medium">"Your Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            maxlength=MAX_EMAIL_LEN
                            placeholder="john@example.com"
                            class=input_class
                            prop:value=email
                            on:input:target=move |ev| set_email.set(ev.target().value())
                        />
                    </div>
                </div>
                <div class="space-y-2">
                    <label for="message" class="text-sm font-medium">"Your Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        required
                        rows=5
                        maxlength=MAX_MESSAGE_LEN
                        placeholder="Hello, I'd like to discuss a data project..."
                        class=format!("{input_class} resize-none")
                        prop:value=message
                        on:input:target=move |ev| set_message.set(ev.target().value())
                    ></textarea>
                </div>

                {move || {
                    state
                        .get()
                        .error()
                        .map(|reason| {
                            view! {
                                <p role="alert" class="text-sm text-red-500">
                                    {reason.to_string()}
                                </p>
                            }
                        })
                }}

                <button
                    type="submit"
                    disabled=move || !state.get().can_submit()
                    class=move || {
                        let base = "w-full py-3 px-6 rounded-md font-medium transition-all";
                        match state.get() {
                            SubmissionState::Sent => format!("{base} bg-green-500 text-white"),
                            SubmissionState::Submitting => {
                                format!("{base} bg-primary/70 text-primary-foreground cursor-wait")
                            }
                            _ => {
                                format!("{base} bg-primary text-primary-foreground hover:opacity-90")
                            }
                        }
                    }
                >
                    {move || state.get().button_label()}
                </button>
            </form>
        </div>
    }
}
