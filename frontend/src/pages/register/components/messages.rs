use crate::pages::register::utils::Notice;
use leptos::*;

/// How long a verify-OTP notice stays on screen.
#[cfg(target_arch = "wasm32")]
const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[component]
pub fn OtpNotice(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    schedule_dismissal(notice);
    view! {
        <Show when=move || notice.get().is_some() fallback=|| ()>
            <div
                role="status"
                class="bg-status-info-bg border border-status-info-border text-status-info-text px-4 py-3 rounded flex items-start justify-between gap-2"
            >
                <span>{move || notice.get().map(|shown| shown.message).unwrap_or_default()}</span>
                <button
                    type="button"
                    class="text-sm font-medium opacity-75 hover:opacity-100"
                    on:click=move |_| notice.set(None)
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismissal(notice: RwSignal<Option<Notice>>) {
    create_effect(move |_| {
        let Some(shown) = notice.get().map(|shown| shown.id) else {
            return;
        };
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            // A newer notice owns its own timer.
            if notice.get_untracked().map(|current| current.id) == Some(shown) {
                notice.set(None);
            }
        });
    });
}

// Effects never run during SSR rendering.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismissal(_notice: RwSignal<Option<Notice>>) {}
