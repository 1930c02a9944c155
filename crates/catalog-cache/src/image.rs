//! Product image URL resolution.

use catalog_model::{MediaKind, Product};

/// Local path that bare image filenames are served from.
pub const DEFAULT_ASSET_BASE: &str = "app/assets/";

pub const GAME_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=400";
pub const MOVIE_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1478720568477-152d9b164e26?w=400";
pub const TV_SERIES_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1522869635100-9f4c5e86aa37?w=400";

/// Turns a product's image reference into a displayable URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    asset_base: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl ImageResolver {
    /// Create a resolver serving bare filenames from `asset_base`.
    pub fn new(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
        }
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// Resolve the image URL for a product.
    ///
    /// Absolute URLs pass through, bare filenames are joined onto the asset
    /// base, and anything else gets the media kind's placeholder. A missing
    /// product gets the game placeholder.
    pub fn resolve(&self, product: Option<&Product>) -> String {
        let Some(product) = product else {
            return GAME_PLACEHOLDER.to_string();
        };

        match product.image_file.as_deref().map(str::trim) {
            Some(image) if is_absolute_url(image) => image.to_string(),
            Some(image) if !image.is_empty() => format!(
                "{}/{}",
                self.asset_base.trim_end_matches('/'),
                image.trim_start_matches('/')
            ),
            _ => placeholder(&product.media_type).to_string(),
        }
    }
}

/// Placeholder image for a media kind; unknown kinds fall back to games.
pub fn placeholder(kind: &MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => MOVIE_PLACEHOLDER,
        MediaKind::TvSeries => TV_SERIES_PLACEHOLDER,
        MediaKind::Game | MediaKind::Other(_) => GAME_PLACEHOLDER,
    }
}

fn is_absolute_url(image: &str) -> bool {
    let lower = image.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
