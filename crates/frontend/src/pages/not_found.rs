use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{"Page not found"}</h1>
            <p class="text-gray-600 mb-6">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("text-blue-600", "hover:underline")}>
                {"Go home"}
            </Link<Route>>
        </div>
    }
}
