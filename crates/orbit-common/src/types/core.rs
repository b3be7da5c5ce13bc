use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Image used when the host supplies no items at all.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/900/900?grayscale";

/// One tile's worth of host data. Only `image` is consumed by the renderer;
/// title, date and locale are carried for the host's presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MenuItem {
    /// URI or path of the tile image.
    pub image: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub locale: Option<String>,
}

impl MenuItem {
    pub fn new(image: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            date: None,
            locale: None,
        }
    }

    /// Single stand-in item so atlas and modulo math never see zero items.
    pub fn placeholder() -> Self {
        Self {
            image: PLACEHOLDER_IMAGE.into(),
            title: String::new(),
            date: Some(chrono::Local::now().date_naive()),
            locale: Some("en-US".into()),
        }
    }

    /// Return `items` unchanged, or a one-element placeholder list if empty.
    pub fn non_empty(items: Vec<MenuItem>) -> Vec<MenuItem> {
        if items.is_empty() {
            vec![Self::placeholder()]
        } else {
            items
        }
    }
}
