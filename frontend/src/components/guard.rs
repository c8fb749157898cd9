use crate::{
    router::SIGN_IN_PATH,
    utils::{navigation::use_navigator, storage::use_token_store},
};
use leptos::*;

/// Renders `children` only when an admin token is stored; otherwise sends the
/// browser to the sign-in page.
#[component]
pub fn RequireToken(children: ChildrenFn) -> impl IntoView {
    let tokens = use_token_store();
    let navigator = use_navigator();
    let has_session = tokens.has_session();
    create_effect(move |_| {
        if !has_session {
            navigator.go(SIGN_IN_PATH);
        }
    });
    view! {
        <Show when=move || has_session fallback=|| ()>
            {children()}
        </Show>
    }
}
