use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use crate::config::{AppState, AuthSettings};
use crate::error::PortalResult;
use crate::models::auth_model::{LoginForm, RegisterForm, Viewer};
use crate::services::auth_service::AuthService;
use crate::utils::validated_wrapper::ValidatedForm;
use crate::utils::view_response::ViewBuilder;

fn session_cookie(settings: &AuthSettings, token: String) -> Cookie<'static> {
    Cookie::build((settings.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

// Form pages are for anonymous visitors only.
fn anonymous_page(viewer: &Viewer, view: &str) -> Response {
    if viewer.user().is_some() {
        Redirect::to("/").into_response()
    } else {
        ViewBuilder::page(view).into_response()
    }
}

pub async fn login_page_handler(Extension(viewer): Extension<Viewer>) -> Response {
    anonymous_page(&viewer, "login")
}

pub async fn register_page_handler(Extension(viewer): Extension<Viewer>) -> Response {
    anonymous_page(&viewer, "register")
}

pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(payload): ValidatedForm<LoginForm>,
) -> PortalResult<(CookieJar, Redirect)> {
    let (_, token) = AuthService::login_user(
        &state.storage,
        &state.auth,
        &payload.login_id,
        &payload.password,
    ).await?;

    Ok((jar.add(session_cookie(&state.auth, token)), Redirect::to("/")))
}

pub async fn register_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(payload): ValidatedForm<RegisterForm>,
) -> PortalResult<(CookieJar, Redirect)> {
    let (_, token) = AuthService::register_user(
        &state.storage,
        &state.auth,
        payload.username,
        payload.email,
        payload.password,
    ).await?;

    Ok((jar.add(session_cookie(&state.auth, token)), Redirect::to("/")))
}

/// `GET /deslogar`: drop the session cookie and go home.
pub async fn logout_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build((state.auth.cookie_name.clone(), "")).path("/"));
    (StatusCode::MOVED_PERMANENTLY, jar, [(header::LOCATION, "/")])
}
