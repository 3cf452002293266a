use actix_web::HttpRequest;
use strum::{AsRefStr, EnumString};

pub const THEME_COOKIE: &str = "theme";

#[derive(EnumString, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Falls back to light when the cookie is absent or holds garbage.
    pub fn from_request(req: &HttpRequest) -> Self {
        req.cookie(THEME_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
            .unwrap_or_default()
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{cookie::Cookie, test::TestRequest};

    use super::*;

    #[test]
    fn reads_theme_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(THEME_COOKIE, "dark"))
            .to_http_request();
        assert_eq!(Theme::from_request(&req), Theme::Dark);
    }

    #[test]
    fn defaults_to_light() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(Theme::from_request(&req), Theme::Light);

        let req = TestRequest::default()
            .cookie(Cookie::new(THEME_COOKIE, "neon"))
            .to_http_request();
        assert_eq!(Theme::from_request(&req), Theme::Light);
    }

    #[test]
    fn toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_ref(), "light");
    }
}
