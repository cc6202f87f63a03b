use crate::auth::use_auth;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// `/` sends a signed-in user to their dashboard; rendered behind the guard
#[function_component(HomeRedirect)]
pub fn home_redirect() -> Html {
    let auth = use_auth();
    match auth.role() {
        Some(role) => html! { <Redirect<Route> to={Route::dashboard(role)} /> },
        None => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
