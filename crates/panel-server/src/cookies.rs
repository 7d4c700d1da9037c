//! Session persistence in signed cookies.

use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use panel_core::session::{ADMIN_KEY, Session, TOKEN_KEY};

/// Reads the session; cookies with a bad signature are ignored.
pub fn read_session(jar: &SignedCookieJar) -> Session {
    let token = jar
        .get(TOKEN_KEY)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty());
    let is_admin = jar
        .get(ADMIN_KEY)
        .is_some_and(|cookie| cookie.value() == "true");
    Session::new(token, is_admin)
}

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .build()
}

/// Replaces the session cookies; a session without a token clears them.
pub fn write_session(jar: SignedCookieJar, session: &Session) -> SignedCookieJar {
    match &session.token {
        Some(token) => jar
            .add(session_cookie(TOKEN_KEY, token.clone()))
            .add(session_cookie(ADMIN_KEY, session.is_admin.to_string())),
        None => jar
            .remove(Cookie::build(TOKEN_KEY).path("/"))
            .remove(Cookie::build(ADMIN_KEY).path("/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    #[test]
    fn test_round_trip_session() {
        let jar = SignedCookieJar::new(Key::generate());
        let session = Session::authenticated("bearer abc", true);
        let jar = write_session(jar, &session);
        assert_eq!(read_session(&jar), session);
    }

    #[test]
    fn test_empty_jar_is_anonymous() {
        let jar = SignedCookieJar::new(Key::generate());
        assert_eq!(read_session(&jar), Session::default());
    }

    #[test]
    fn test_logout_clears_token() {
        let jar = SignedCookieJar::new(Key::generate());
        let jar = write_session(jar, &Session::authenticated("bearer abc", false));
        let jar = write_session(jar, &Session::default());
        assert_eq!(read_session(&jar).token, None);
    }
}
