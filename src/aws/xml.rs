//! Query protocol XML handling
//!
//! AWS Query responses are XML. [`xml_to_json`] turns a response document
//! into a [`serde_json::Value`] tree (repeated tags become arrays, leaf text
//! becomes strings, empty tags become null); the extraction helpers below
//! pull typed fields back out of that tree. Collection tags that held a
//! single element parse as a bare object instead of an array, so list
//! extraction handles both shapes.

use anyhow::{anyhow, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

/// Parse an XML document into a JSON value.
pub(crate) fn xml_to_json(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut root_map: Map<String, Value> = Map::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let child_value = parse_element(&mut reader)?;
                root_map.insert(tag_name, child_value);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(anyhow!("XML parse error: {}", e)),
        }
        buf.clear();
    }

    Ok(Value::Object(root_map))
}

fn parse_element(reader: &mut Reader<&[u8]>) -> Result<Value> {
    let mut map: Map<String, Value> = Map::new();
    let mut buf = Vec::new();
    let mut current_text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let child_value = parse_element(reader)?;

                // Repeated tags collapse into an array
                if let Some(existing) = map.get_mut(&tag_name) {
                    match existing {
                        Value::Array(arr) => arr.push(child_value),
                        _ => {
                            let old = existing.take();
                            *existing = Value::Array(vec![old, child_value]);
                        }
                    }
                } else {
                    map.insert(tag_name, child_value);
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().trim().to_string();
                if !text.is_empty() {
                    current_text = text;
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Empty(e)) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                map.insert(tag_name, Value::Null);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow!("XML parse error: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    // Leaf element: only text, no children
    if map.is_empty() && !current_text.is_empty() {
        Ok(Value::String(current_text))
    } else {
        Ok(Value::Object(map))
    }
}

/// Walk a key path into the parsed document.
pub(crate) fn child<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut node = doc;
    for key in path {
        node = node.get(key)?;
    }
    Some(node)
}

/// Text of a leaf child, or `""` when missing.
pub(crate) fn text(node: &Value, key: &str) -> String {
    node.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Boolean leaf child ("true"/"false" text), false when missing.
pub(crate) fn flag(node: &Value, key: &str) -> bool {
    node.get(key).and_then(Value::as_str) == Some("true")
}

/// Integer leaf child, 0 when missing or unparsable.
pub(crate) fn int(node: &Value, key: &str) -> i64 {
    node.get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Elements of a collection tag: `node[key][elem]` where `elem` is "item"
/// (EC2) or "member" (IAM). A single element parses as a bare object, many
/// as an array; both yield a flat list here.
pub(crate) fn list<'a>(node: &'a Value, key: &str, elem: &str) -> Vec<&'a Value> {
    match node.get(key).and_then(|set| set.get(elem)) {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single @ Value::Object(_)) => vec![single],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_nested_elements_and_text() {
        let doc = xml_to_json(
            "<Response><Vpc><VpcId>vpc-1</VpcId><State>pending</State></Vpc></Response>",
        )
        .unwrap();
        let vpc = child(&doc, &["Response", "Vpc"]).unwrap();
        assert_eq!(text(vpc, "VpcId"), "vpc-1");
        assert_eq!(text(vpc, "State"), "pending");
    }

    #[test]
    fn repeated_tags_become_arrays() {
        let doc = xml_to_json(
            "<r><set><item><id>a</id></item><item><id>b</id></item></set></r>",
        )
        .unwrap();
        let node = child(&doc, &["r"]).unwrap();
        let items = list(node, "set", "item");
        assert_eq!(items.len(), 2);
        assert_eq!(text(items[0], "id"), "a");
        assert_eq!(text(items[1], "id"), "b");
    }

    #[test]
    fn single_element_collections_still_list() {
        let doc = xml_to_json("<r><set><item><id>a</id></item></set></r>").unwrap();
        let node = child(&doc, &["r"]).unwrap();
        let items = list(node, "set", "item");
        assert_eq!(items.len(), 1);
        assert_eq!(text(items[0], "id"), "a");
    }

    #[test]
    fn scalar_leaves_decode() {
        let doc =
            xml_to_json("<r><ok>true</ok><count>42</count><name>x&amp;y</name></r>").unwrap();
        let node = child(&doc, &["r"]).unwrap();
        assert!(flag(node, "ok"));
        assert_eq!(int(node, "count"), 42);
        assert_eq!(text(node, "name"), "x&y");
    }

    #[test]
    fn missing_keys_yield_zero_values() {
        let node = json!({});
        assert_eq!(text(&node, "nope"), "");
        assert!(!flag(&node, "nope"));
        assert_eq!(int(&node, "nope"), 0);
        assert!(list(&node, "nope", "item").is_empty());
    }

    #[test]
    fn empty_tags_parse_as_null() {
        let doc = xml_to_json("<r><empty/></r>").unwrap();
        let node = child(&doc, &["r"]).unwrap();
        assert_eq!(node.get("empty"), Some(&Value::Null));
    }
}
