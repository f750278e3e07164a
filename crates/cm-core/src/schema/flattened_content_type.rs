use crate::{
    ContentType, ContentTypeElement, ContentTypeElementType, ContentTypeSnippet,
    MigrationElementType, MigrationError, Result,
};

/// Content type with snippet placeholders expanded and guidelines removed.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedContentType {
    pub id: String,
    pub codename: String,
    pub name: String,
    pub elements: Vec<FlattenedContentTypeElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedContentTypeElement {
    pub id: String,
    pub codename: String,
    pub name: Option<String>,
    pub element_type: MigrationElementType,
    pub element: ContentTypeElement,
}

impl FlattenedContentType {
    pub fn element_by_id(&self, id: &str) -> Option<&FlattenedContentTypeElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn element_by_codename(&self, codename: &str) -> Option<&FlattenedContentTypeElement> {
        self.elements
            .iter()
            .find(|element| element.codename == codename)
    }
}

pub fn flatten_content_type(
    content_type: &ContentType,
    snippets: &[ContentTypeSnippet],
) -> Result<FlattenedContentType> {
    let mut elements = Vec::with_capacity(content_type.elements.len());

    for element in &content_type.elements {
        if element.id.is_none() || element.codename.is_none() {
            continue;
        }

        if element.element_type == ContentTypeElementType::Snippet {
            let snippet_id = element
                .snippet
                .as_ref()
                .and_then(|snippet| snippet.id())
                .unwrap_or_default();

            let snippet = snippets
                .iter()
                .find(|snippet| snippet.id == snippet_id)
                .ok_or_else(|| {
                    MigrationError::missing_content_type_snippet(
                        snippet_id,
                        content_type.codename.as_str(),
                    )
                })?;

            // Snippets cannot nest, so nested snippet placeholders are dropped.
            elements.extend(snippet.elements.iter().filter_map(to_flattened_element));
            continue;
        }

        elements.extend(to_flattened_element(element));
    }

    Ok(FlattenedContentType {
        id: content_type.id.clone(),
        codename: content_type.codename.clone(),
        name: content_type.name.clone(),
        elements,
    })
}

pub fn flatten_content_types(
    content_types: &[ContentType],
    snippets: &[ContentTypeSnippet],
) -> Result<Vec<FlattenedContentType>> {
    content_types
        .iter()
        .map(|content_type| flatten_content_type(content_type, snippets))
        .collect()
}

fn to_flattened_element(element: &ContentTypeElement) -> Option<FlattenedContentTypeElement> {
    let element_type = element.element_type.migration_type()?;

    Some(FlattenedContentTypeElement {
        id: element.id.clone()?,
        codename: element.codename.clone()?,
        name: element.name.clone(),
        element_type,
        element: element.clone(),
    })
}
