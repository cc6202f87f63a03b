//! Guard component for protected routes

use super::{LoadingSpinner, use_notice};
use crate::auth::use_auth;
use crate::routes::Route;
use talenthub_core::GuardDecision;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub route: Route,
    pub children: Children,
}

/// Renders its children only when the session may open `route`
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth();
    let notice = use_notice();
    let path = props.route.to_path();
    // repeated calls for the same state decide the same way
    let decision = auth.context().guard(&path);

    {
        let auth = auth.clone();
        use_effect_with(decision.clone(), move |decision| match decision {
            GuardDecision::Restoring => auth.restore(),
            GuardDecision::RedirectToDashboard { notice: message, .. } => {
                notice.set(Some(message.clone()));
            }
            GuardDecision::Render | GuardDecision::RedirectToLogin { .. } => {}
        });
    }

    match decision {
        GuardDecision::Render => html! { <>{ props.children.clone() }</> },
        GuardDecision::Restoring => html! {
            <LoadingSpinner text={Some("Restoring your session...".to_string())} />
        },
        GuardDecision::RedirectToLogin { .. } => html! { <Redirect<Route> to={Route::Login} /> },
        GuardDecision::RedirectToDashboard { target, .. } => html! {
            <Redirect<Route> to={Route::from_path(target)} />
        },
    }
}
