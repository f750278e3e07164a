/// Human-readable label used in progress logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    pub title: String,
    pub item_type: String,
}

impl ItemInfo {
    pub fn new(item_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            item_type: item_type.into(),
        }
    }
}
