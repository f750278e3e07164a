use serde::{Deserialize, Serialize};

/// A taxonomy group. Terms share the same shape and nest arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub id: String,
    pub name: String,
    pub codename: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub terms: Vec<Taxonomy>,
}

impl Taxonomy {
    pub fn find_term_by_id(&self, id: &str) -> Option<&Taxonomy> {
        self.find_term(|term| term.id == id)
    }

    pub fn find_term_by_codename(&self, codename: &str) -> Option<&Taxonomy> {
        self.find_term(|term| term.codename == codename)
    }

    // Pre-order walk over all nested terms; the group itself is not a term.
    fn find_term(&self, predicate: impl Fn(&Taxonomy) -> bool) -> Option<&Taxonomy> {
        let mut stack: Vec<&Taxonomy> = self.terms.iter().rev().collect();
        while let Some(term) = stack.pop() {
            if predicate(term) {
                return Some(term);
            }
            stack.extend(term.terms.iter().rev());
        }
        None
    }
}
