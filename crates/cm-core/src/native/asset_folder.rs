use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFolder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub codename: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub folders: Vec<AssetFolder>,
}

impl AssetFolder {
    /// Depth-first search through the whole folder forest.
    pub fn find_by_id<'a>(folders: &'a [AssetFolder], id: &str) -> Option<&'a AssetFolder> {
        Self::find(folders, |folder| folder.id == id)
    }

    pub fn find_by_codename<'a>(
        folders: &'a [AssetFolder],
        codename: &str,
    ) -> Option<&'a AssetFolder> {
        Self::find(folders, |folder| folder.codename.as_deref() == Some(codename))
    }

    fn find<'a>(
        folders: &'a [AssetFolder],
        predicate: impl Fn(&AssetFolder) -> bool,
    ) -> Option<&'a AssetFolder> {
        let mut stack: Vec<&AssetFolder> = folders.iter().rev().collect();
        while let Some(folder) = stack.pop() {
            if predicate(folder) {
                return Some(folder);
            }
            stack.extend(folder.folders.iter().rev());
        }
        None
    }
}
