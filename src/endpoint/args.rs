use crate::form::reader::FormSnapshot;

/// Keys a snapshot must carry before an image endpoint can be built.
/// `seed` and `randomText` are optional.
pub const ENDPOINT_ARGS: [&str; 7] = ["width", "height", "bg", "fg", "fmt", "imageText", "font"];

/// Keys a snapshot must carry before a tiled endpoint can be built.
pub const TILED_ARGS: [&str; 6] = ["width", "height", "cols", "rows", "fmt", "colors"];

pub fn is_endpoint_args(snapshot: &FormSnapshot) -> bool {
    ENDPOINT_ARGS.iter().all(|key| snapshot.contains(key))
}

pub fn is_tiled_args(snapshot: &FormSnapshot) -> bool {
    TILED_ARGS.iter().all(|key| snapshot.contains(key))
}

fn take(snapshot: &FormSnapshot, key: &str) -> String {
    snapshot.get(key).unwrap_or_default().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointArgs {
    pub width: String,
    pub height: String,
    pub bg: String,
    pub fg: String,
    pub fmt: String,
    pub image_text: String,
    pub font: String,
    pub seed: String,
    pub random_text: bool,
}

impl EndpointArgs {
    /// Shape guard: `None` when any required key is absent.
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Option<Self> {
        if !is_endpoint_args(snapshot) {
            return None;
        }

        Some(Self {
            width: take(snapshot, "width"),
            height: take(snapshot, "height"),
            bg: take(snapshot, "bg"),
            fg: take(snapshot, "fg"),
            fmt: take(snapshot, "fmt"),
            image_text: take(snapshot, "imageText"),
            font: take(snapshot, "font"),
            seed: take(snapshot, "seed"),
            random_text: snapshot.get("randomText").map_or(false, |v| !v.is_empty()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiledArgs {
    pub width: String,
    pub height: String,
    pub cols: String,
    pub rows: String,
    pub fmt: String,
    pub colors: String,
}

impl TiledArgs {
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Option<Self> {
        if !is_tiled_args(snapshot) {
            return None;
        }

        Some(Self {
            width: take(snapshot, "width"),
            height: take(snapshot, "height"),
            cols: take(snapshot, "cols"),
            rows: take(snapshot, "rows"),
            fmt: take(snapshot, "fmt"),
            colors: take(snapshot, "colors"),
        })
    }
}
