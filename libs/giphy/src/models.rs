use serde::{Deserialize, Serialize};

/// Envelope returned by the trending endpoint.
///
/// GIPHY wraps the item list in a `data` field alongside pagination and
/// meta objects; only `data` is decoded, the rest is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub data: Vec<Gif>,
}

/// One GIF entry in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gif {
    pub id: String,
    pub title: String,
    pub images: GifImages,
}

/// The renditions decoded for a GIF.
///
/// The API exposes many more renditions per item; the feed only renders
/// the full-size original and the fixed-width thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GifImages {
    pub original: ImageVariant,
    pub fixed_width: ImageVariant,
}

/// One rendition of a GIF.
///
/// Width and height arrive as numeric strings and are kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub url: String,
    pub width: String,
    pub height: String,
}
