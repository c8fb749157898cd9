use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::RequireToken,
    pages::{dashboard::DashboardPage, register::RegisterPage},
    utils::{navigation::Navigator, storage::TokenStore},
};

pub const REGISTER_PATH: &str = "/adminsignup";
pub const DASHBOARD_PATH: &str = "/admindashboard";
/// Sign-in lives outside this app; it is only ever linked to.
pub const SIGN_IN_PATH: &str = "/adminsignin";

pub const ROUTE_PATHS: &[&str] = &["/", REGISTER_PATH, DASHBOARD_PATH];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[DASHBOARD_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", REGISTER_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(TokenStore::browser());
    provide_context(Navigator::browser());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path=REGISTER_PATH/> }/>
                <Route path=REGISTER_PATH view=RegisterPage/>
                <Route path=DASHBOARD_PATH view=ProtectedDashboard/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireToken><DashboardPage/></RequireToken> }
}
