use super::NotFound;
use crate::auth::use_auth;
use crate::routes::{DashboardPage, Route};
use talenthub_core::Role;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AreaPageProps {
    pub area: Role,
    pub page: DashboardPage,
}

/// A page inside a role area: shared navigation plus placeholder content
#[function_component(AreaPage)]
pub fn area_page(props: &AreaPageProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    if !props.page.exists_in(props.area) {
        return html! { <NotFound /> };
    }

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            // leave before the guard sees the signed-out state and remembers this page
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
            auth.logout();
        })
    };

    let user_name = auth
        .user
        .as_ref()
        .map(talenthub_core::UserRecord::display_name)
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow">
                <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
                    <span class="font-bold text-gray-900">
                        {format!("TalentHub · {}", props.area.display_name())}
                    </span>
                    <nav class="flex gap-4">
                        { for DashboardPage::for_area(props.area).map(|page| {
                            let active = page == props.page;
                            html! {
                                <Link<Route>
                                    to={Route::in_area(props.area, page)}
                                    classes={classes!("text-sm", if active { "text-blue-600 font-semibold" } else { "text-gray-600" })}
                                >
                                    {page.title()}
                                </Link<Route>>
                            }
                        }) }
                    </nav>
                    <div class="flex items-center gap-3">
                        <span class="text-sm text-gray-600">{user_name}</span>
                        <button onclick={on_logout} class="text-sm text-red-600 hover:underline">
                            {"Sign out"}
                        </button>
                    </div>
                </div>
            </header>
            <main class="max-w-6xl mx-auto px-4 py-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-4">{props.page.title()}</h1>
                <p class="text-gray-600">{"Nothing here yet."}</p>
            </main>
        </div>
    }
}
