use crate::utils::error::{FetchError, Result};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> FetchError {
    FetchError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses a feed endpoint. Feeds are plain GETs, so only http(s) URLs with a host qualify.
pub fn feed_url(field: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| invalid(field, raw, format!("not a URL: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                field,
                raw,
                format!("feeds are served over http or https, not {}", scheme),
            ))
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field, raw, "URL has no host"));
    }

    Ok(url)
}

/// The directory both feed files land in. It may not exist yet, but it must not be a file.
pub fn output_dir<'a>(field: &str, raw: &'a str) -> Result<&'a Path> {
    if raw.is_empty() {
        return Err(invalid(field, raw, "Path cannot be empty"));
    }
    if raw.contains('\0') {
        return Err(invalid(field, raw, "Path contains null bytes"));
    }

    let path = Path::new(raw);
    if path.exists() && !path.is_dir() {
        return Err(invalid(field, raw, "exists and is not a directory"));
    }

    Ok(path)
}

pub fn timeout(field: &str, seconds: u64) -> Result<Duration> {
    if seconds == 0 {
        return Err(invalid(field, seconds, "a zero timeout would fail every request"));
    }
    Ok(Duration::from_secs(seconds))
}
