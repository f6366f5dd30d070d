//! Reading cookies from whatever store the embedding application exposes.

use std::collections::HashMap;


/// Supplies the raw `name1=value1; name2=value2` cookie string, when there is
/// one.
pub trait CookieSource: Send + Sync {
    fn cookie_string(&self) -> Option<String>;
}

impl<F> CookieSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn cookie_string(&self) -> Option<String> {
        self()
    }
}

impl CookieSource for String {
    fn cookie_string(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl CookieSource for &'static str {
    fn cookie_string(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// A cookie string captured once, e.g. from the `Cookie` header of an
/// incoming request.
#[derive(Debug, Clone, Default)]
pub struct CookieJar(pub String);

impl CookieSource for CookieJar {
    fn cookie_string(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Splits a cookie string into a map. Only the first `=` of a pair separates
/// the name from the value.
pub fn parse_cookies(cookies: &str) -> HashMap<String, String> {
    cookies
        .split("; ")
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (name.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}
