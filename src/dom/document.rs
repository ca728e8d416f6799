use std::path::Path;

use url::Url;

use crate::dom::dom_model::Document;
use crate::error::BinderError;

impl Document {
    /// The page location as a base URL for resolving endpoint paths.
    pub fn base_url(&self) -> Result<Url, BinderError> {
        Url::parse(&self.location).map_err(|e| BinderError::InvalidLocation {
            location: self.location.clone(),
            source: e,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, BinderError> {
        serde_json::from_str(content).map_err(|e| BinderError::JsonParse {
            context: "page document".into(),
            source: e,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, BinderError> {
        serde_yaml::from_str(content).map_err(|e| BinderError::YamlParse {
            context: "page document".into(),
            source: e,
        })
    }

    pub fn to_json_string(&self) -> Result<String, BinderError> {
        serde_json::to_string_pretty(self).map_err(|e| BinderError::JsonSerialize {
            context: "page document".into(),
            source: e,
        })
    }
}

/// Load a page fixture. `.yaml`/`.yml` files are read as YAML, anything
/// else as JSON.
pub fn load_document(path: &str) -> Result<Document, BinderError> {
    let content = read_file(path)?;
    if is_yaml_path(path) {
        Document::from_yaml_str(&content)
    } else {
        Document::from_json_str(&content)
    }
}

pub fn read_file(path: &str) -> Result<String, BinderError> {
    std::fs::read_to_string(path).map_err(|e| BinderError::Io {
        path: path.to_string(),
        source: e,
    })
}

pub fn write_file(path: &str, content: &[u8]) -> Result<(), BinderError> {
    std::fs::write(path, content).map_err(|e| BinderError::Io {
        path: path.to_string(),
        source: e,
    })
}

pub fn is_yaml_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .map_or(false, |e| e == "yaml" || e == "yml")
}
