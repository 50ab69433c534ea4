use crate::config::AppState;
use crate::error::PortalError;
use crate::models::auth_model::Viewer;
use crate::services::identity_service::IdentityResolver;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
    Extension,
};
use axum_extra::extract::cookie::CookieJar;

/// Resolve the session cookie into a [`Viewer`] and attach it to the request.
/// Runs on every route; anonymous visitors get `Viewer(None)`.
pub async fn identity_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, PortalError> {
    let token = jar.get(&state.auth.cookie_name).map(|c| c.value().to_owned());
    let user = IdentityResolver::resolve(&state.storage, &state.auth, token.as_deref()).await?;

    req.extensions_mut().insert(Viewer(user));
    Ok(next.run(req).await)
}

/// Gate for publish routes. Anonymous visitors go to the login page,
/// signed-in non-admins back home. On success the `CurrentUser` is exposed
/// as its own extension for the handler.
pub async fn require_admin(
    Extension(viewer): Extension<Viewer>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, PortalError> {
    match viewer.0 {
        None => Err(PortalError::Unauthorized { redirect_to: "/login" }),
        Some(user) if !user.is_admin() => {
            tracing::warn!("publish denied for user {} at {} {}", user.public_id, req.method(), req.uri().path());
            Err(PortalError::Unauthorized { redirect_to: "/" })
        }
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
    }
}

/// Gate for routes any signed-in user may call.
pub async fn require_user(
    Extension(viewer): Extension<Viewer>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, PortalError> {
    let Some(user) = viewer.0 else {
        return Err(PortalError::Unauthorized { redirect_to: "/login" });
    };

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
