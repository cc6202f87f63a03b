use crate::auth::{AuthProvider, FrontendAuth};
use crate::components::{NoticeBanner, NoticeProvider, RouteGuard, SessionExpiryWarning};
use crate::pages::{
    AreaPage, ForgotPasswordPage, HomeRedirect, LoginPage, NotFound, RegisterPage,
    ResetPasswordPage, VerifyEmailPage,
};
use crate::routes::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties)]
pub struct AppProps {
    pub auth: Rc<FrontendAuth>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth)
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <NoticeProvider>
                <AuthProvider auth={props.auth.clone()}>
                    <NoticeBanner />
                    <SessionExpiryWarning />
                    <Switch<Route> render={switch} />
                </AuthProvider>
            </NoticeProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route.area() {
        Some((area, page)) => html! {
            <RouteGuard route={route}>
                <AreaPage {area} {page} />
            </RouteGuard>
        },
        None => match route {
            Route::Home => html! {
                <RouteGuard route={Route::Home}>
                    <HomeRedirect />
                </RouteGuard>
            },
            Route::Login => html! { <LoginPage /> },
            Route::Register => html! { <RegisterPage /> },
            Route::ForgotPassword => html! { <ForgotPasswordPage /> },
            Route::ResetPassword => html! { <ResetPasswordPage /> },
            Route::VerifyEmail => html! { <VerifyEmailPage /> },
            Route::Admin { .. } | Route::Hr { .. } | Route::Candidate { .. } | Route::NotFound => {
                html! { <NotFound /> }
            }
        },
    }
}
