use crate::ContentTypeElement;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    pub id: String,
    pub name: String,
    pub codename: String,
    #[serde(default)]
    pub elements: Vec<ContentTypeElement>,
}

/// Reusable group of elements that content types include by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeSnippet {
    pub id: String,
    pub name: String,
    pub codename: String,
    #[serde(default)]
    pub elements: Vec<ContentTypeElement>,
}
