use leptos::*;
use leptos_meta::Title;

mod panel;

pub use panel::DashboardPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Admin dashboard"/>
        <DashboardPanel />
    }
}
