//! Dot-separated path lookup over a decoded document.

use json_node::Value;

/// Follow `path` from `root` using the same null-on-miss indexing as `[]`.
///
/// A segment that parses as `usize` indexes into an array; otherwise (or when
/// the current node is not an array) it is used as an object key. The empty
/// path is the root itself.
pub fn resolve<'a>(root: &'a Value, path: &str) -> &'a Value {
    if path.is_empty() {
        return root;
    }
    path.split('.').fold(root, |node, segment| match segment.parse::<usize>() {
        Ok(i) if node.as_array().is_some() => &node[i],
        _ => &node[segment],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Value {
        json_node::decode_str(r#"{"data":{"memes":[{"name":"Ancient Aliens"}],"7":"seven"}}"#)
            .unwrap()
    }

    #[test]
    fn empty_path_is_root() {
        let d = doc();
        assert_eq!(resolve(&d, ""), &d);
    }

    #[test]
    fn mixed_keys_and_indices() {
        let d = doc();
        assert_eq!(resolve(&d, "data.memes.0.name").as_string(), Some("Ancient Aliens"));
    }

    #[test]
    fn numeric_segment_on_object_is_a_key() {
        let d = doc();
        assert_eq!(resolve(&d, "data.7").as_string(), Some("seven"));
    }

    #[test]
    fn dead_end_is_null() {
        let d = doc();
        assert!(resolve(&d, "data.memes.3.name").is_null());
        assert!(resolve(&d, "data.memes.0.name.deeper").is_null());
    }
}
