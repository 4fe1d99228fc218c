use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    abstract_trait::DynJwtService, domain::requests::AuthContext, errors::ErrorResponse,
};

/// Decodes the caller's identity from a `token` cookie or a bearer header
/// and stores it as `Option<AuthContext>`.
///
/// A missing token is not an error here: public endpoints accept anonymous
/// callers, and the services decide what each operation requires. Only a
/// token that is present but fails verification is rejected outright.
pub async fn identity_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let identity = match token {
        None => None,
        Some(token) => match jwt.verify_token(&token, "access") {
            Ok(claims) => Some(AuthContext {
                user_id: claims.user_id as i32,
                is_admin: claims.is_admin,
            }),
            Err(_) => {
                return Err((
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse {
                        status: "fail".to_string(),
                        message: "Invalid token".to_string(),
                    }),
                ));
            }
        },
    };

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
