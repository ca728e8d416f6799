use std::fmt;

#[derive(Debug)]
pub enum BinderError {
    /// Reading or writing a fixture, script or output file failed
    Io { path: String, source: std::io::Error },

    /// JSON parsing failed (page fixture or replay script)
    JsonParse { context: String, source: serde_json::Error },

    /// JSON serialization failed (document or trace output)
    JsonSerialize { context: String, source: serde_json::Error },

    /// YAML parsing failed (page fixture, replay script or config)
    YamlParse { context: String, source: serde_yaml::Error },

    /// The document location cannot serve as a base URL
    InvalidLocation { location: String, source: url::ParseError },

    /// HTTP request to the image service failed
    Http { url: String, source: reqwest::Error },

    /// Image service answered with a non-success status
    HttpStatus { url: String, status: u16 },

    /// Clipboard backend refused the write
    Clipboard(String),
}

impl fmt::Display for BinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinderError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            BinderError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            BinderError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            BinderError::YamlParse { context, source } => {
                write!(f, "YAML parse error ({}): {}", context, source)
            }
            BinderError::InvalidLocation { location, source } => {
                write!(f, "Invalid page location '{}': {}", location, source)
            }
            BinderError::Http { url, source } => {
                write!(f, "Request to {} failed: {}", url, source)
            }
            BinderError::HttpStatus { url, status } => {
                write!(f, "Request to {} returned HTTP {}", url, status)
            }
            BinderError::Clipboard(msg) => {
                write!(f, "Clipboard write failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for BinderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BinderError::Io { source, .. } => Some(source),
            BinderError::JsonParse { source, .. } => Some(source),
            BinderError::JsonSerialize { source, .. } => Some(source),
            BinderError::YamlParse { source, .. } => Some(source),
            BinderError::InvalidLocation { source, .. } => Some(source),
            BinderError::Http { source, .. } => Some(source),
            _ => None,
        }
    }
}
