//! The application's declarative route table.

use std::sync::Arc;

use userhub_service_shared::{AppState, Endpoint, Method, RouteGroup, RouteTable};

use crate::controllers::{bind, AuthController, UserController};
use crate::schemas::{login_user_schema, register_user_schema};

/// Build the route table for the whole API surface.
///
/// Declaration order here is registration order, and the group/endpoint
/// names become the paths: `/api/auth.register`, `/api/auth.login`,
/// `/api/user.getProfile/:id`.
pub fn app_routes(state: &AppState) -> RouteTable {
    let auth = Arc::new(AuthController::new(state.clone()));
    let user = Arc::new(UserController::new(state.clone()));

    RouteTable::new()
        .group(
            RouteGroup::new("auth")
                .endpoint(
                    "register",
                    Endpoint::new(Method::Post, bind(auth.clone(), |c, ctx| c.register(ctx)))
                        .with_validator(register_user_schema()),
                )
                .endpoint(
                    "login",
                    Endpoint::new(Method::Post, bind(auth, |c, ctx| c.login(ctx)))
                        .with_validator(login_user_schema()),
                ),
        )
        .group(RouteGroup::new("user").endpoint(
            "getProfile",
            Endpoint::new(Method::Get, bind(user, |c, ctx| c.get_profile(ctx))).with_params(["id"]),
        ))
}
