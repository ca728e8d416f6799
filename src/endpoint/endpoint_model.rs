use url::Url;

/// Which family of endpoint a page builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Image,
    Tiled,
}

/// Path component of an endpoint, before URL serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointPath {
    Image {
        width: String,
        height: String,
        bg: String,
        fg: String,
        fmt: String,
    },
    Tiled {
        width: String,
        height: String,
        cols: String,
        rows: String,
        fmt: String,
    },
}

impl EndpointPath {
    /// Raw interpolation; encoding happens when the URL is serialized.
    pub fn to_path_string(&self) -> String {
        match self {
            EndpointPath::Image { width, height, bg, fg, fmt } => {
                format!("/api/{width}x{height}/{bg}/{fg}/{fmt}/")
            }
            EndpointPath::Tiled { width, height, cols, rows, fmt } => {
                format!("/api/tiled/{width}x{height}/{cols}/{rows}/{fmt}/")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Text(String),
    Font(String),
    Seed(String),
    RandomText,
    Colors(String),
}

impl QueryParam {
    pub fn key(&self) -> &'static str {
        match self {
            QueryParam::Text(_) => "text",
            QueryParam::Font(_) => "font",
            QueryParam::Seed(_) => "seed",
            QueryParam::RandomText => "random_text",
            QueryParam::Colors(_) => "colors",
        }
    }

    /// `None` for flags serialized as a bare key.
    pub fn value(&self) -> Option<&str> {
        match self {
            QueryParam::Text(v)
            | QueryParam::Font(v)
            | QueryParam::Seed(v)
            | QueryParam::Colors(v) => Some(v),
            QueryParam::RandomText => None,
        }
    }
}

/// Structured, not-yet-serialized endpoint.
///
/// Query parameters keep their insertion order so identical input always
/// serializes to the same URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub path: EndpointPath,
    pub query: Vec<QueryParam>,
}

impl EndpointDescriptor {
    pub fn new(path: EndpointPath) -> Self {
        Self {
            path,
            query: Vec::new(),
        }
    }

    pub fn push(&mut self, param: QueryParam) {
        self.query.push(param);
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.query.iter().any(|p| p.key() == key)
    }

    /// Fully-qualified URL resolved against the page location.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_path(&self.path.to_path_string());
        url.set_query(None);
        url.set_fragment(None);

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in &self.query {
                match param.value() {
                    Some(value) => pairs.append_pair(param.key(), value),
                    None => pairs.append_key_only(param.key()),
                };
            }
        }

        url
    }

    /// Path plus `?query` (no `?` when there are no parameters).
    pub fn path_and_query(&self, base: &Url) -> String {
        let url = self.to_url(base);
        match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        }
    }
}
