// src/domain/subject.rs

/// The listing naming a route was reached under. Older links use "item",
/// current ones "product"; both share the same classifier and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Product,
    Item,
}

impl SubjectKind {
    /// Public route segment, e.g. `/product/{shopId}/{id}`.
    pub fn from_route_segment(segment: &str) -> Option<Self> {
        match segment {
            "product" => Some(SubjectKind::Product),
            "item" => Some(SubjectKind::Item),
            _ => None,
        }
    }

    pub fn route_segment(&self) -> &'static str {
        match self {
            SubjectKind::Product => "product",
            SubjectKind::Item => "item",
        }
    }

    /// Path segment on the upstream listing API.
    pub fn api_segment(&self) -> &'static str {
        match self {
            SubjectKind::Product => "products",
            SubjectKind::Item => "items",
        }
    }

    /// Prefix of subject-specific translation keys.
    pub fn i18n_prefix(&self) -> &'static str {
        self.route_segment()
    }

    pub fn key(&self, suffix: &str) -> String {
        format!("{}.{}", self.i18n_prefix(), suffix)
    }

    pub fn listing_path(&self, shop_id: &str, shops_subject_id: &str) -> String {
        format!(
            "/{}/{}/{}",
            self.route_segment(),
            url_segment(shop_id),
            url_segment(shops_subject_id)
        )
    }
}

fn url_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
