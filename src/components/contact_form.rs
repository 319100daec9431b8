//! Contact form with inline blur validation and notification feedback.
//!
//! DESIGN
//! ======
//! Field values are keyed by their normalized placeholder text, and the
//! required set lives in `util::validate` next to the rules themselves.
//! Blur re-checks a field and shows its inline error; typing clears it.
//! Submission validates the whole form: success clears everything and shows
//! a success banner, failure leaves the fields alone and shows an error
//! banner. The form is `novalidate` so these paths, not the browser's
//! built-in tooltips, handle bad input.
//!
//! Service cards hand off here through `UiState`: a bumped booking sequence
//! prefills the message box (after a short delay so the scroll settles) and
//! focuses it.

use leptos::prelude::*;

use crate::components::notification::notify;
use crate::state::notices::{NoticeKind, NoticeState};
use crate::state::ui::UiState;
use crate::util::validate::{
    FieldError, FieldRules, check_field, normalize_field_key, validate_submission,
};

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

const FIRST_NAME_PLACEHOLDER: &str = "First Name";
const LAST_NAME_PLACEHOLDER: &str = "Last Name";
const EMAIL_PLACEHOLDER: &str = "Email Address";
const PHONE_PLACEHOLDER: &str = "Phone Number";
const MESSAGE_PLACEHOLDER: &str = "Tell us about your hair journey";

const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
const ERROR_MESSAGE: &str = "Please fill in all required fields.";

/// Delay between a booking request landing and the message prefill, so the
/// scroll to the form settles first.
#[cfg(feature = "csr")]
const BOOKING_PREFILL_DELAY_MS: u64 = 500;

/// Contact form for the home page's contact section.
#[component]
pub fn ContactForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let first_name_error = RwSignal::new(None::<FieldError>);
    let last_name_error = RwSignal::new(None::<FieldError>);
    let email_error = RwSignal::new(None::<FieldError>);

    let message_ref = NodeRef::<leptos::html::Textarea>::new();

    // Booking handoff from the service cards. The guard starts at the live
    // sequence; only requests made while this form is mounted prefill it.
    let seen_booking = RwSignal::new(ui.get_untracked().booking_seq);
    Effect::new(move || {
        let state = ui.get();
        let Some(service) = pending_booking(seen_booking.get_untracked(), &state) else {
            return;
        };
        seen_booking.set(state.booking_seq);
        #[cfg(feature = "csr")]
        {
            let service = service.to_owned();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    BOOKING_PREFILL_DELAY_MS,
                ))
                .await;
                message.set(booking_message(&service));
                if let Some(area) = message_ref.get_untracked() {
                    let _ = area.focus();
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        message.set(booking_message(service));
    });

    let required = FieldRules { required: true, email: false };
    let required_email = FieldRules { required: true, email: true };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = [
            (normalize_field_key(FIRST_NAME_PLACEHOLDER), first_name.get()),
            (normalize_field_key(LAST_NAME_PLACEHOLDER), last_name.get()),
            (normalize_field_key(EMAIL_PLACEHOLDER), email.get()),
            (normalize_field_key(PHONE_PLACEHOLDER), phone.get()),
            (normalize_field_key(MESSAGE_PLACEHOLDER), message.get()),
        ];
        let valid = validate_submission(
            fields.iter().map(|(key, value)| (key.as_str(), value.as_str())),
        );
        if valid {
            first_name.set(String::new());
            last_name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            message.set(String::new());
            first_name_error.set(None);
            last_name_error.set(None);
            email_error.set(None);
            notify(notices, SUCCESS_MESSAGE, NoticeKind::Success);
        } else {
            notify(notices, ERROR_MESSAGE, NoticeKind::Error);
        }
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <div class="contact-form__row">
                <div class="form-field">
                    <input
                        class="form-input"
                        class:error=move || first_name_error.get().is_some()
                        type="text"
                        placeholder=FIRST_NAME_PLACEHOLDER
                        prop:value=move || first_name.get()
                        on:input=move |ev| {
                            first_name.set(event_target_value(&ev));
                            first_name_error.set(None);
                        }
                        on:blur=move |_| {
                            first_name_error.set(check_field(&first_name.get(), required).err());
                        }
                    />
                    <Show when=move || first_name_error.get().is_some()>
                        <p class="field-error">{move || error_text(first_name_error.get())}</p>
                    </Show>
                </div>
                <div class="form-field">
                    <input
                        class="form-input"
                        class:error=move || last_name_error.get().is_some()
                        type="text"
                        placeholder=LAST_NAME_PLACEHOLDER
                        prop:value=move || last_name.get()
                        on:input=move |ev| {
                            last_name.set(event_target_value(&ev));
                            last_name_error.set(None);
                        }
                        on:blur=move |_| {
                            last_name_error.set(check_field(&last_name.get(), required).err());
                        }
                    />
                    <Show when=move || last_name_error.get().is_some()>
                        <p class="field-error">{move || error_text(last_name_error.get())}</p>
                    </Show>
                </div>
            </div>
            <div class="form-field">
                <input
                    class="form-input"
                    class:error=move || email_error.get().is_some()
                    type="email"
                    placeholder=EMAIL_PLACEHOLDER
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                    on:blur=move |_| {
                        email_error.set(check_field(&email.get(), required_email).err());
                    }
                />
                <Show when=move || email_error.get().is_some()>
                    <p class="field-error">{move || error_text(email_error.get())}</p>
                </Show>
            </div>
            <div class="form-field">
                <input
                    class="form-input"
                    type="tel"
                    placeholder=PHONE_PLACEHOLDER
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <textarea
                    class="form-input contact-form__message"
                    node_ref=message_ref
                    rows="6"
                    placeholder=MESSAGE_PLACEHOLDER
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button class="btn btn--primary contact-form__submit" type="submit">
                "Send Message"
            </button>
        </form>
    }
}

/// The service requested since this form last handled a booking, if any. A
/// form that mounts after a request starts its guard at the live sequence,
/// so older requests never replay into a fresh form.
fn pending_booking(seen: u64, state: &UiState) -> Option<&str> {
    if state.booking_seq == seen {
        return None;
    }
    state.booking_service.as_deref()
}

fn booking_message(service: &str) -> String {
    format!(
        "I'm interested in booking: {service}\n\nPlease provide more details about your hair journey and any specific requirements."
    )
}

fn error_text(error: Option<FieldError>) -> String {
    error.map_or_else(String::new, |err| err.to_string())
}
