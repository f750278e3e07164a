//! Rewrites entity references inside rich text HTML.
//!
//! Only a matched `<object>`, `<figure>` or `<a>` span is touched; everything
//! else in the document is copied through verbatim.

use crate::Result;

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;

const COMPONENT_MARKER: &str = "data-type=\"component\"";
const MISSING_REFERENCE_PREFIX: &str = "#missing:";

static OBJECT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<object\b.*?</object>").expect("object tag pattern"));
static FIGURE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<figure\b.*?</figure>").expect("figure tag pattern"));
static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<a\b.*?</a>").expect("link tag pattern"));

static DATA_ID: LazyLock<Regex> = LazyLock::new(|| attribute_pattern("data-id"));
static DATA_CODENAME: LazyLock<Regex> = LazyLock::new(|| attribute_pattern("data-codename"));
static DATA_ITEM_ID: LazyLock<Regex> = LazyLock::new(|| attribute_pattern("data-item-id"));
static DATA_ITEM_CODENAME: LazyLock<Regex> =
    LazyLock::new(|| attribute_pattern("data-item-codename"));
static DATA_ASSET_ID: LazyLock<Regex> = LazyLock::new(|| attribute_pattern("data-asset-id"));
static DATA_ASSET_CODENAME: LazyLock<Regex> =
    LazyLock::new(|| attribute_pattern("data-asset-codename"));

fn attribute_pattern(attribute: &str) -> Regex {
    Regex::new(&format!(r#"\b{attribute}="([^"]*)""#)).expect("attribute pattern")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReferenceKind {
    Item,
    Asset,
}

/// Marker written in place of a codename when a dangling reference is
/// skipped on export. Import drops the reference carrying it: embedded
/// objects and figures are removed, links are unwrapped to their text.
pub fn missing_reference_placeholder(kind: MissingReferenceKind, id: &str) -> String {
    let kind = match kind {
        MissingReferenceKind::Item => "item",
        MissingReferenceKind::Asset => "asset",
    };
    format!("{MISSING_REFERENCE_PREFIX}{kind}:{id}#")
}

pub fn is_missing_reference_placeholder(codename: &str) -> bool {
    codename.starts_with(MISSING_REFERENCE_PREFIX)
}

/// What to do with a codename reference when importing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodenameResolution {
    /// Entity exists in the target, keep the codename.
    Keep,
    /// Entity will be created, point at it through its external id.
    ExternalId(String),
    /// Reference cannot be resolved, drop it. Links keep their inner HTML.
    Remove,
}

struct TagRule {
    tag: &'static LazyLock<Regex>,
    attribute: &'static LazyLock<Regex>,
    attribute_name: &'static str,
    skip_components: bool,
    /// Tag wraps author content that must survive the reference.
    keeps_content: bool,
}

static ITEM_IDS: TagRule = TagRule {
    tag: &OBJECT_TAG,
    attribute: &DATA_ID,
    attribute_name: "data-id",
    skip_components: true,
    keeps_content: false,
};
static LINK_ITEM_IDS: TagRule = TagRule {
    tag: &LINK_TAG,
    attribute: &DATA_ITEM_ID,
    attribute_name: "data-item-id",
    skip_components: false,
    keeps_content: true,
};
static ASSET_IDS: TagRule = TagRule {
    tag: &FIGURE_TAG,
    attribute: &DATA_ASSET_ID,
    attribute_name: "data-asset-id",
    skip_components: false,
    keeps_content: false,
};
static LINK_ASSET_IDS: TagRule = TagRule {
    tag: &LINK_TAG,
    attribute: &DATA_ASSET_ID,
    attribute_name: "data-asset-id",
    skip_components: false,
    keeps_content: true,
};
static ITEM_CODENAMES: TagRule = TagRule {
    tag: &OBJECT_TAG,
    attribute: &DATA_CODENAME,
    attribute_name: "data-codename",
    skip_components: true,
    keeps_content: false,
};
static LINK_ITEM_CODENAMES: TagRule = TagRule {
    tag: &LINK_TAG,
    attribute: &DATA_ITEM_CODENAME,
    attribute_name: "data-item-codename",
    skip_components: false,
    keeps_content: true,
};
static ASSET_CODENAMES: TagRule = TagRule {
    tag: &FIGURE_TAG,
    attribute: &DATA_ASSET_CODENAME,
    attribute_name: "data-asset-codename",
    skip_components: false,
    keeps_content: false,
};
static LINK_ASSET_CODENAMES: TagRule = TagRule {
    tag: &LINK_TAG,
    attribute: &DATA_ASSET_CODENAME,
    attribute_name: "data-asset-codename",
    skip_components: false,
    keeps_content: true,
};

// ---------------------------------------------------------------------------
// Export direction: ids become codenames

/// `<object data-id>` item references, component objects excluded.
pub fn process_item_ids(
    html: &str,
    resolve: impl FnMut(&str) -> Result<String>,
) -> Result<String> {
    rename_attribute(html, &ITEM_IDS, "data-codename", resolve)
}

/// `<a data-item-id>` item links.
pub fn process_link_item_ids(
    html: &str,
    resolve: impl FnMut(&str) -> Result<String>,
) -> Result<String> {
    rename_attribute(html, &LINK_ITEM_IDS, "data-item-codename", resolve)
}

/// `<figure data-asset-id>` embedded assets.
pub fn process_asset_ids(
    html: &str,
    resolve: impl FnMut(&str) -> Result<String>,
) -> Result<String> {
    rename_attribute(html, &ASSET_IDS, "data-asset-codename", resolve)
}

/// `<a data-asset-id>` asset links.
pub fn process_link_asset_ids(
    html: &str,
    resolve: impl FnMut(&str) -> Result<String>,
) -> Result<String> {
    rename_attribute(html, &LINK_ASSET_IDS, "data-asset-codename", resolve)
}

// ---------------------------------------------------------------------------
// Import direction: codenames stay or become external ids

pub fn process_item_codenames(
    html: &str,
    resolve: impl FnMut(&str) -> Result<CodenameResolution>,
) -> Result<String> {
    resolve_codenames(html, &ITEM_CODENAMES, "data-external-id", resolve)
}

pub fn process_link_item_codenames(
    html: &str,
    resolve: impl FnMut(&str) -> Result<CodenameResolution>,
) -> Result<String> {
    resolve_codenames(html, &LINK_ITEM_CODENAMES, "data-item-external-id", resolve)
}

pub fn process_asset_codenames(
    html: &str,
    resolve: impl FnMut(&str) -> Result<CodenameResolution>,
) -> Result<String> {
    resolve_codenames(html, &ASSET_CODENAMES, "data-asset-external-id", resolve)
}

pub fn process_link_asset_codenames(
    html: &str,
    resolve: impl FnMut(&str) -> Result<CodenameResolution>,
) -> Result<String> {
    resolve_codenames(html, &LINK_ASSET_CODENAMES, "data-asset-external-id", resolve)
}

// ---------------------------------------------------------------------------
// Read-only scans

pub fn collect_item_ids(html: &str) -> BTreeSet<String> {
    collect(html, &ITEM_IDS)
}

pub fn collect_link_item_ids(html: &str) -> BTreeSet<String> {
    collect(html, &LINK_ITEM_IDS)
}

pub fn collect_asset_ids(html: &str) -> BTreeSet<String> {
    collect(html, &ASSET_IDS)
}

pub fn collect_link_asset_ids(html: &str) -> BTreeSet<String> {
    collect(html, &LINK_ASSET_IDS)
}

pub fn collect_item_codenames(html: &str) -> BTreeSet<String> {
    collect(html, &ITEM_CODENAMES)
}

pub fn collect_link_item_codenames(html: &str) -> BTreeSet<String> {
    collect(html, &LINK_ITEM_CODENAMES)
}

pub fn collect_asset_codenames(html: &str) -> BTreeSet<String> {
    collect(html, &ASSET_CODENAMES)
}

pub fn collect_link_asset_codenames(html: &str) -> BTreeSet<String> {
    collect(html, &LINK_ASSET_CODENAMES)
}

/// Rewrites `data-id` of component objects using `new_ids`. Unknown ids are
/// left alone.
pub fn replace_component_ids(html: &str, new_ids: &HashMap<String, String>) -> String {
    let mut output = String::with_capacity(html.len());
    let mut last = 0;

    for found in OBJECT_TAG.find_iter(html) {
        output.push_str(&html[last..found.start()]);
        let tag = found.as_str();

        let replaced = if tag.contains(COMPONENT_MARKER) {
            DATA_ID.captures(tag).and_then(|captures| {
                let old_id = &captures[1];
                new_ids.get(old_id).map(|new_id| {
                    tag.replace(
                        &format!("data-id=\"{old_id}\""),
                        &format!("data-id=\"{new_id}\""),
                    )
                })
            })
        } else {
            None
        };

        output.push_str(replaced.as_deref().unwrap_or(tag));
        last = found.end();
    }

    output.push_str(&html[last..]);
    output
}

fn rename_attribute(
    html: &str,
    rule: &TagRule,
    new_attribute: &str,
    mut resolve: impl FnMut(&str) -> Result<String>,
) -> Result<String> {
    rewrite_tags(html, rule, |tag, value| {
        let codename = resolve(value)?;
        Ok(tag.replace(
            &format!("{}=\"{value}\"", rule.attribute_name),
            &format!("{new_attribute}=\"{codename}\""),
        ))
    })
}

fn resolve_codenames(
    html: &str,
    rule: &TagRule,
    external_id_attribute: &str,
    mut resolve: impl FnMut(&str) -> Result<CodenameResolution>,
) -> Result<String> {
    rewrite_tags(html, rule, |tag, codename| match resolve(codename)? {
        CodenameResolution::Keep => Ok(tag.to_string()),
        CodenameResolution::ExternalId(external_id) => Ok(tag.replace(
            &format!("{}=\"{codename}\"", rule.attribute_name),
            &format!("{external_id_attribute}=\"{external_id}\""),
        )),
        CodenameResolution::Remove if rule.keeps_content => Ok(inner_html(tag).to_string()),
        CodenameResolution::Remove => Ok(String::new()),
    })
}

/// Content between the opening tag and its closing tag.
fn inner_html(tag: &str) -> &str {
    let start = tag.find('>').map_or(tag.len(), |end| end + 1);
    let end = tag.rfind("</").filter(|end| *end >= start).unwrap_or(tag.len());
    &tag[start..end]
}

fn rewrite_tags(
    html: &str,
    rule: &TagRule,
    mut rewrite: impl FnMut(&str, &str) -> Result<String>,
) -> Result<String> {
    let mut output = String::with_capacity(html.len());
    let mut last = 0;

    for found in rule.tag.find_iter(html) {
        output.push_str(&html[last..found.start()]);
        let tag = found.as_str();

        match matching_value(tag, rule) {
            Some(value) => output.push_str(&rewrite(tag, value)?),
            None => output.push_str(tag),
        }
        last = found.end();
    }

    output.push_str(&html[last..]);
    Ok(output)
}

fn collect(html: &str, rule: &TagRule) -> BTreeSet<String> {
    rule.tag
        .find_iter(html)
        .filter_map(|found| matching_value(found.as_str(), rule))
        .map(str::to_string)
        .collect()
}

fn matching_value<'a>(tag: &'a str, rule: &TagRule) -> Option<&'a str> {
    if rule.skip_components && tag.contains(COMPONENT_MARKER) {
        return None;
    }
    rule.attribute
        .captures(tag)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
        .filter(|value| !value.is_empty())
}
