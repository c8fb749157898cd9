use crate::{
    components::error::InlineErrorMessage,
    router::SIGN_IN_PATH,
    utils::{
        navigation::{use_navigator, Navigator},
        storage::{use_token_store, StorageError, TokenStore},
    },
};
use leptos::*;

/// Drops the stored admin token and leaves for the sign-in page.
pub fn sign_out(tokens: &TokenStore, navigator: &Navigator) -> Result<(), StorageError> {
    tokens.clear()?;
    navigator.go(SIGN_IN_PATH);
    Ok(())
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let tokens = use_token_store();
    let navigator = use_navigator();
    let error = create_rw_signal(None::<String>);

    let handle_sign_out = move |_: ev::MouseEvent| {
        if let Err(err) = sign_out(&tokens, &navigator) {
            log::error!("Sign out failed: {}", err);
            error.set(Some("Could not sign out. Please try again.".to_string()));
        }
    };

    view! {
        <div class="min-h-screen bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-extrabold text-fg">"Admin dashboard"</h1>
                    <button
                        type="button"
                        class="py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                        on:click=handle_sign_out
                    >
                        "Sign out"
                    </button>
                </div>
                <InlineErrorMessage error=error />
                <p class="text-fg-muted">"Your administrator account is ready."</p>
            </div>
        </div>
    }
}
