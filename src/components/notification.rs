//! Transient notification banner.
//!
//! `notify` is the one entry point: it puts a banner in the shared slot and
//! schedules the timed dismissal (visible phase, then a short slide-out).
//! Timers carry the banner's sequence number, so a timer that outlives its
//! banner fizzles instead of dismissing a newer one.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticeState};

#[cfg(feature = "csr")]
use crate::state::notices::{NOTICE_EXIT_MS, NOTICE_VISIBLE_MS};

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Show a banner and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, text: impl Into<String>, kind: NoticeKind) {
    let mut seq = 0;
    notices.update(|state| seq = state.show(text, kind));
    schedule_dismiss(notices, seq);
}

#[cfg(feature = "csr")]
fn schedule_dismiss(notices: RwSignal<NoticeState>, seq: u64) {
    use std::time::Duration;

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(NOTICE_VISIBLE_MS)).await;
        let mut entered_exit = false;
        notices.update(|state| entered_exit = state.begin_exit(seq));
        if !entered_exit {
            return;
        }
        gloo_timers::future::sleep(Duration::from_millis(NOTICE_EXIT_MS)).await;
        notices.update(|state| {
            state.dismiss(seq);
        });
    });
}

#[cfg(not(feature = "csr"))]
fn schedule_dismiss(notices: RwSignal<NoticeState>, seq: u64) {
    let _ = (notices, seq);
}

/// Renders whatever banner currently occupies the notification slot.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        {move || {
            notices.get().current.map(|notice| {
                view! { <div class=notice_class(notice.kind, notice.leaving)>{notice.text}</div> }
            })
        }}
    }
}

fn notice_class(kind: NoticeKind, leaving: bool) -> String {
    let kind_class = match kind {
        NoticeKind::Success => "notification--success",
        NoticeKind::Error => "notification--error",
        NoticeKind::Info => "notification--info",
    };
    if leaving {
        format!("notification {kind_class} notification--leaving")
    } else {
        format!("notification {kind_class}")
    }
}
