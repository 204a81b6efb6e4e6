use std::{
    cell::RefCell,
    future::{poll_fn, Future},
    rc::Rc,
    task::{Poll, Waker},
    time::Duration,
};

use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use leptos_meta::Title;

use crate::contact::{
    run_submission, ContactForm, ContactSubmission, Field, FormSlot, SubmissionStatus,
    SubmitBlocked, SubmitError, Submitter, PROJECT_TYPES,
};

static INPUT_CLASS: &str = "w-full px-4 py-3 border rounded-lg bg-white dark:bg-gray-900 focus:ring-2 focus:ring-blue-500 focus:border-blue-500 disabled:opacity-60";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{INPUT_CLASS} border-red-500")
    } else {
        format!("{INPUT_CLASS} border-gray-300 dark:border-gray-700")
    }
}

#[server]
pub async fn send_contact(submission: ContactSubmission) -> Result<(), ServerFnError> {
    use std::sync::Arc;

    use crate::contact::{relay::FormRelay, FALLBACK_FAILURE};

    // the browser validated already, but the endpoint is public
    if let Some((field, error)) = submission.first_error() {
        tracing::warn!(%field, "contact submission failed validation");
        return Err(ServerFnError::new(error));
    }
    let relay = use_context::<Arc<FormRelay>>().ok_or_else(|| {
        tracing::error!("contact relay missing from context");
        ServerFnError::new(FALLBACK_FAILURE)
    })?;
    relay.forward(&submission).await.map_err(|e| {
        tracing::warn!(error = %e, "contact relay failed");
        ServerFnError::new(e.user_reason())
    })
}

/// Sends submissions through [`send_contact`].
struct ServerSubmitter;

impl Submitter for ServerSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        match send_contact(submission.clone()).await {
            Ok(()) => Ok(()),
            Err(ServerFnError::ServerError(reason)) => Err(SubmitError::Rejected(reason)),
            Err(e) => Err(SubmitError::Transport(e.to_string())),
        }
    }
}

impl FormSlot for RwSignal<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        // None once the page owning the signal has been left
        Update::try_update(self, f)
    }
}

#[derive(Default)]
struct Alarm {
    rang: bool,
    waker: Option<Waker>,
}

/// Resolves after `duration`, driven by the browser's timer.
fn sleep(duration: Duration) -> impl Future<Output = ()> {
    let alarm = Rc::new(RefCell::new(Alarm::default()));
    let ring = alarm.clone();
    set_timeout(
        move || {
            let waker = {
                let mut alarm = ring.borrow_mut();
                alarm.rang = true;
                alarm.waker.take()
            };
            if let Some(waker) = waker {
                waker.wake();
            }
        },
        duration,
    );
    poll_fn(move |cx| {
        let mut alarm = alarm.borrow_mut();
        if alarm.rang {
            Poll::Ready(())
        } else {
            alarm.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 py-20">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        "Get In " <span class="text-blue-600 dark:text-blue-400">"Touch"</span>
                    </h1>
                    <p class="text-gray-600 dark:text-gray-300 text-lg max-w-2xl mx-auto">
                        "Have a project in mind? Let's discuss how we can work together to bring your ideas to life."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactInfo />
                    <ContactFormPanel />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let details = [
        ("📧", "Email", "benshomwiti@gmail.com"),
        ("📱", "Phone", "+254746562072"),
        ("📍", "Location", "Nairobi, Kenya"),
    ];
    let availability = [
        "Currently accepting new projects",
        "Remote work available worldwide",
        "Typical response time: 2-4 hours",
    ];
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-8">"Contact Information"</h2>
            <div class="space-y-6 mb-8">
                {details
                    .into_iter()
                    .map(|(icon, title, value)| {
                        view! {
                            <div class="flex items-center gap-4 p-4 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700">
                                <div class="p-3 bg-blue-100 dark:bg-blue-900/30 rounded-lg">{icon}</div>
                                <div>
                                    <h3 class="font-bold">{title}</h3>
                                    <p class="text-gray-600 dark:text-gray-300">{value}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl p-8 text-white">
                <h3 class="text-xl font-bold mb-4">"Availability"</h3>
                <div class="space-y-3">
                    {availability
                        .into_iter()
                        .map(|line| {
                            view! {
                                <div class="flex items-center gap-2">
                                    <span>"✅"</span>
                                    <span>{line}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.visible_error(field)).map(|e| {
            view! {
                <p id=format!("{}-error", field.as_str()) class="mt-1 text-sm text-red-600" role="alert">
                    {e}
                </p>
            }
        })
    }
}

#[component]
fn ContactFormPanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let busy = move || form.with(ContactForm::is_submitting);
    let locked = move || !form.with(ContactForm::accepts_input);
    let has_error = move |field: Field| form.with(|f| f.visible_error(field).is_some());

    let focus_field = move |field: Field| match field {
        Field::Name => {
            if let Some(el) = name_ref.get_untracked() {
                _ = el.focus();
                el.scroll_into_view();
            }
        }
        Field::Email => {
            if let Some(el) = email_ref.get_untracked() {
                _ = el.focus();
                el.scroll_into_view();
            }
        }
        Field::Message => {
            if let Some(el) = message_ref.get_untracked() {
                _ = el.focus();
                el.scroll_into_view();
            }
        }
        Field::ProjectType => {}
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            match run_submission(&form, &ServerSubmitter, sleep).await {
                Ok(()) => {}
                Err(SubmitBlocked::Invalid(field)) => focus_field(field),
                Err(e) => log::debug!("submit ignored: {e}"),
            }
        });
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-2xl p-8 shadow-lg">
            <h2 class="text-2xl font-bold mb-6">"Send a Message"</h2>
            <Show
                when=move || form.with(|f| *f.status() == SubmissionStatus::Succeeded)
                fallback=move || {
                    view! {
                        {move || match form.with(|f| f.status().clone()) {
                            SubmissionStatus::Failed(reason) => {
                                Some(
                                    view! {
                                        <div
                                            class="mb-6 p-4 rounded-lg bg-red-50 text-red-700 dark:bg-red-900/30 dark:text-red-300"
                                            role="alert"
                                        >
                                            {reason}
                                        </div>
                                    },
                                )
                            }
                            _ => None,
                        }}
                        <form on:submit=on_submit novalidate class="space-y-6">
                            <div>
                                <label
                                    for="contact-name"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    "Your Name"
                                </label>
                                <input
                                    id="contact-name"
                                    node_ref=name_ref
                                    type="text"
                                    placeholder="Your Name"
                                    class=move || input_class(has_error(Field::Name))
                                    aria-invalid=move || has_error(Field::Name).to_string()
                                    prop:value=move || form.with(|f| f.value(Field::Name).to_string())
                                    prop:disabled=locked
                                    on:input=move |ev| {
                                        form.update(|f| f.change(Field::Name, event_target_value(&ev)))
                                    }
                                    on:blur=move |_| form.update(|f| f.blur(Field::Name))
                                />
                                <FieldError form field=Field::Name />
                            </div>
                            <div>
                                <label
                                    for="contact-email"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    "Email Address"
                                </label>
                                <input
                                    id="contact-email"
                                    node_ref=email_ref
                                    type="email"
                                    placeholder="youremail@gmail.com"
                                    class=move || input_class(has_error(Field::Email))
                                    aria-invalid=move || has_error(Field::Email).to_string()
                                    prop:value=move || form.with(|f| f.value(Field::Email).to_string())
                                    prop:disabled=locked
                                    on:input=move |ev| {
                                        form.update(|f| f.change(Field::Email, event_target_value(&ev)))
                                    }
                                    on:blur=move |_| form.update(|f| f.blur(Field::Email))
                                />
                                <FieldError form field=Field::Email />
                            </div>
                            <div>
                                <label
                                    for="contact-project-type"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    "Project Type (optional)"
                                </label>
                                <select
                                    id="contact-project-type"
                                    class=input_class(false)
                                    prop:value=move || {
                                        form.with(|f| f.value(Field::ProjectType).to_string())
                                    }
                                    prop:disabled=locked
                                    on:change=move |ev| {
                                        form.update(|f| {
                                            f.change(Field::ProjectType, event_target_value(&ev))
                                        })
                                    }
                                >
                                    <option value="">"Select a project type"</option>
                                    {PROJECT_TYPES
                                        .iter()
                                        .map(|t| view! { <option value=*t>{*t}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div>
                                <label
                                    for="contact-message"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2"
                                >
                                    "Your Message"
                                </label>
                                <textarea
                                    id="contact-message"
                                    node_ref=message_ref
                                    rows=5
                                    placeholder="Tell me about your project..."
                                    class=move || input_class(has_error(Field::Message))
                                    aria-invalid=move || has_error(Field::Message).to_string()
                                    prop:value=move || {
                                        form.with(|f| f.value(Field::Message).to_string())
                                    }
                                    prop:disabled=locked
                                    on:input=move |ev| {
                                        form.update(|f| f.change(Field::Message, event_target_value(&ev)))
                                    }
                                    on:blur=move |_| form.update(|f| f.blur(Field::Message))
                                ></textarea>
                                <div class="flex justify-between">
                                    <FieldError form field=Field::Message />
                                    <span class="mt-1 ml-auto text-xs text-gray-500 dark:text-gray-400">
                                        {move || form.with(ContactForm::message_counter)}
                                    </span>
                                </div>
                            </div>
                            <button
                                type="submit"
                                prop:disabled=busy
                                class="w-full py-3 px-6 bg-blue-600 text-white font-medium rounded-lg hover:bg-blue-700 transition disabled:opacity-70 disabled:cursor-not-allowed"
                            >
                                {move || if busy() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    }
                }
            >
                <div class="p-8 rounded-xl bg-green-50 text-green-800 dark:bg-green-900/30 dark:text-green-200 text-center" role="status">
                    <div class="text-4xl mb-4">"✅"</div>
                    <h3 class="text-xl font-bold mb-2">"Message sent!"</h3>
                    <p>"Thank you! I'll get back to you soon."</p>
                </div>
            </Show>
        </div>
    }
}
