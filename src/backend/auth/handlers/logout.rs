/**
 * Logout Handler
 *
 * POST /logout clears the session cookie. It always succeeds and always
 * sends a removal cookie, whether or not the request carried a session.
 * Tokens are stateless, so a copied token stays valid until it expires.
 */

use axum::response::Json;
use tower_cookies::{Cookie, Cookies};

use crate::backend::auth::sessions::TOKEN_COOKIE;
use crate::shared::MessageResponse;

/// Logout handler
pub async fn logout(cookies: Cookies) -> Json<MessageResponse> {
    let mut removal = Cookie::new(TOKEN_COOKIE, "");
    removal.set_path("/");
    removal.set_http_only(true);
    removal.make_removal();
    cookies.add(removal);

    Json(MessageResponse::new("User logged out successfully"))
}
