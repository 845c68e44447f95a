//! HTTP controllers for the auth and user groups.
//!
//! Controllers parse the typed body out of the raw request context, call a
//! use case, and wrap the result in the success envelope. They never build
//! error responses: domain failures convert to [`ApiException`] and bubble
//! to the boundary with `?`.

use std::future::Future;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    BoxError,
};
use serde::Deserialize;
use uuid::Uuid;

use userhub_lib::{LoginRequest, RegisterRequest, UserDto};
use userhub_service_shared::{
    handler, ApiException, AppState, Handler, RequestContext, SuccessResponse,
};

/// Bind one controller method into a route table [`Handler`].
///
/// Produces an independent callable per method: the controller is captured
/// by `Arc` at composition time, so the table owns everything it needs.
pub fn bind<C, F, Fut>(controller: Arc<C>, method: F) -> Handler
where
    C: Send + Sync + 'static,
    F: Fn(Arc<C>, RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
{
    handler(move |ctx| method(controller.clone(), ctx))
}

#[derive(Debug, Deserialize)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

/// Registration and login.
pub struct AuthController {
    state: AppState,
}

impl AuthController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// `POST /api/auth.register`
    pub async fn register(self: Arc<Self>, ctx: RequestContext) -> Result<Response, BoxError> {
        let body: RegisterBody = ctx.body_as()?;

        let user = self
            .state
            .register_user()
            .execute(RegisterRequest {
                name: body.name,
                email: body.email,
                password: body.password,
            })
            .await
            .map_err(ApiException::from)?;

        Ok(SuccessResponse::ok(UserDto::from(&user)).into_response())
    }

    /// `POST /api/auth.login`
    pub async fn login(self: Arc<Self>, ctx: RequestContext) -> Result<Response, BoxError> {
        let body: LoginBody = ctx.body_as()?;

        let user = self
            .state
            .login_user()
            .execute(LoginRequest {
                email: body.email,
                password: body.password,
            })
            .await
            .map_err(ApiException::from)?;

        Ok(SuccessResponse::ok(UserDto::from(&user)).into_response())
    }
}

/// Profile lookups.
pub struct UserController {
    state: AppState,
}

impl UserController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// `GET /api/user.getProfile/:id`
    ///
    /// A missing user is not an error: the reply is a success envelope with
    /// `data: null`.
    pub async fn get_profile(self: Arc<Self>, ctx: RequestContext) -> Result<Response, BoxError> {
        let id = ctx.param("id").unwrap_or_default();
        let user_id =
            Uuid::parse_str(id).map_err(|_| ApiException::bad_request("Invalid user id"))?;

        let user = self
            .state
            .get_profile()
            .execute(user_id)
            .await
            .map_err(ApiException::from)?;

        let data = user.as_ref().map(UserDto::from);
        Ok(SuccessResponse::ok(data).into_response())
    }
}
