//! Category tag parsing from group directory names.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use bioshift_core::types::CategoryTag;

/// Structured form: a `node<digits>_<type>` suffix, e.g.
/// `group_1_node201_Cell` → (201, Cell).
static NODE_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"node(\d+)_([A-Za-z0-9_.-]+)$").expect("valid regex"));

/// Fallback form: a bare numbered group, e.g. `group_3` → (3, group).
static BARE_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^group_(\d+)$").expect("valid regex"));

/// Generic type name assigned to bare numbered groups.
pub const FALLBACK_TYPE_NAME: &str = "group";

/// Derive the category tag from a group directory name.
///
/// Names matching neither form yield `None`; such groups keep their
/// aggregated artifact but are excluded from combinations.
pub fn parse_tag(group_name: &str) -> Option<CategoryTag> {
    if let Some(caps) = NODE_TYPE_RE.captures(group_name) {
        return Some(CategoryTag::new(&caps[1], &caps[2]));
    }
    if let Some(caps) = BARE_GROUP_RE.captures(group_name) {
        return Some(CategoryTag::new(&caps[1], FALLBACK_TYPE_NAME));
    }
    warn!("group name fits no category pattern: {group_name}");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_suffix() {
        let tag = parse_tag("group_1_node201_Cell").unwrap();
        assert_eq!(tag.node_id, "201");
        assert_eq!(tag.type_name, "Cell");
    }

    #[test]
    fn type_charset_allows_dots_and_dashes() {
        let tag = parse_tag("group_2_node10_gut-flora.v2").unwrap();
        assert_eq!(tag.node_id, "10");
        assert_eq!(tag.type_name, "gut-flora.v2");
    }

    #[test]
    fn bare_numbered_group_falls_back_to_generic_type() {
        let tag = parse_tag("group_7").unwrap();
        assert_eq!(tag.node_id, "7");
        assert_eq!(tag.type_name, FALLBACK_TYPE_NAME);

        let tag = parse_tag("GROUP_8").unwrap();
        assert_eq!(tag.node_id, "8");
    }

    #[test]
    fn unrecognized_names_yield_none() {
        assert!(parse_tag("group_misc").is_none());
        assert!(parse_tag("group_1_nodeX_Cell").is_none());
        assert!(parse_tag("controls").is_none());
    }
}
