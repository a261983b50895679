use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Origins used when `CORS_ALLOWED_ORIGINS` yields nothing usable
const FALLBACK_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parses a comma-separated origin list, dropping blanks, `null` and non-http(s) entries.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        FALLBACK_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}

/// CORS for the voting front end: explicit origins, only the methods the API serves.
pub fn cors_middleware() -> Cors {
    let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in parse_allowed_origins(&raw) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_origins() {
        assert_eq!(
            parse_allowed_origins(" https://awards.example , http://localhost:5173"),
            vec!["https://awards.example", "http://localhost:5173"]
        );
    }

    #[test]
    fn drops_junk_and_falls_back() {
        assert_eq!(
            parse_allowed_origins("null, ftp://x, ,"),
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(parse_allowed_origins("").len(), 2);
    }
}
