//! Wire types shared by the identity and network services

use serde::Serialize;
use serde_json::Value;

use crate::aws::xml;
use crate::value::Obj;

/// A resource tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Parse from an EC2 `tagSet` item (lowercase leaf tags).
    pub(crate) fn from_ec2_node(node: &Value) -> Self {
        Self {
            key: xml::text(node, "key"),
            value: xml::text(node, "value"),
        }
    }

    /// Parse from an IAM `Tags` member (PascalCase leaf tags).
    pub(crate) fn from_iam_node(node: &Value) -> Self {
        Self {
            key: xml::text(node, "Key"),
            value: xml::text(node, "Value"),
        }
    }
}

/// A name/values filter for describe calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub name: String,
    pub values: Vec<String>,
}

/// Tags from a payload's `tags` object. Non-string entries are skipped.
/// Order follows the object's (sorted) key order.
pub(crate) fn tags_from_payload(payload: &Obj) -> Vec<Tag> {
    payload
        .get_object("tags")
        .0
        .iter()
        .filter_map(|(key, value)| {
            value.as_str().map(|s| Tag {
                key: key.clone(),
                value: s.to_string(),
            })
        })
        .collect()
}

/// Filters from a payload's `filters` list of `{Name, Values}` objects.
/// Entries that are not objects are skipped; non-string values are skipped.
pub(crate) fn filters_from_payload(payload: &Obj) -> Vec<Filter> {
    payload
        .get_list("filters")
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| {
            let entry = Obj(entry.clone());
            Filter {
                name: entry.get_string("Name").to_string(),
                values: entry
                    .get_list("Values")
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            }
        })
        .collect()
}

/// Flatten tags into `TagSpecification.1.*` query parameters for an EC2
/// create call.
pub(crate) fn tag_specification_params(
    resource_type: &str,
    tags: &[Tag],
    params: &mut Vec<(String, String)>,
) {
    if tags.is_empty() {
        return;
    }
    params.push((
        "TagSpecification.1.ResourceType".to_string(),
        resource_type.to_string(),
    ));
    for (i, tag) in tags.iter().enumerate() {
        params.push((format!("TagSpecification.1.Tag.{}.Key", i + 1), tag.key.clone()));
        params.push((
            format!("TagSpecification.1.Tag.{}.Value", i + 1),
            tag.value.clone(),
        ));
    }
}

/// Flatten filters into `Filter.N.*` query parameters.
pub(crate) fn filter_params(filters: &[Filter], params: &mut Vec<(String, String)>) {
    for (i, filter) in filters.iter().enumerate() {
        params.push((format!("Filter.{}.Name", i + 1), filter.name.clone()));
        for (j, value) in filter.values.iter().enumerate() {
            params.push((format!("Filter.{}.Value.{}", i + 1, j + 1), value.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_from_payload_takes_string_entries() {
        let payload = Obj::from_value(json!({
            "tags": {"env": "dev", "count": 3, "team": "net"}
        }));
        let tags = tags_from_payload(&payload);
        assert_eq!(
            tags,
            vec![
                Tag { key: "env".into(), value: "dev".into() },
                Tag { key: "team".into(), value: "net".into() },
            ]
        );
    }

    #[test]
    fn tags_from_payload_without_tags_is_empty() {
        assert!(tags_from_payload(&Obj::new()).is_empty());
    }

    #[test]
    fn filters_from_payload_reads_name_and_values() {
        let payload = Obj::from_value(json!({
            "filters": [
                {"Name": "vpc-id", "Values": ["vpc-1", "vpc-2"]},
                "not-a-filter",
            ]
        }));
        let filters = filters_from_payload(&payload);
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name, "vpc-id");
        assert_eq!(filters[0].values, ["vpc-1", "vpc-2"]);
    }

    #[test]
    fn tag_specification_params_flatten() {
        let tags = vec![
            Tag { key: "env".into(), value: "dev".into() },
            Tag { key: "team".into(), value: "net".into() },
        ];
        let mut params = Vec::new();
        tag_specification_params("vpc", &tags, &mut params);
        assert_eq!(
            params,
            vec![
                ("TagSpecification.1.ResourceType".to_string(), "vpc".to_string()),
                ("TagSpecification.1.Tag.1.Key".to_string(), "env".to_string()),
                ("TagSpecification.1.Tag.1.Value".to_string(), "dev".to_string()),
                ("TagSpecification.1.Tag.2.Key".to_string(), "team".to_string()),
                ("TagSpecification.1.Tag.2.Value".to_string(), "net".to_string()),
            ]
        );
    }

    #[test]
    fn no_tags_means_no_tag_specification() {
        let mut params = Vec::new();
        tag_specification_params("vpc", &[], &mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn filter_params_flatten() {
        let filters = vec![Filter {
            name: "state".into(),
            values: vec!["available".into(), "pending".into()],
        }];
        let mut params = Vec::new();
        filter_params(&filters, &mut params);
        assert_eq!(
            params,
            vec![
                ("Filter.1.Name".to_string(), "state".to_string()),
                ("Filter.1.Value.1".to_string(), "available".to_string()),
                ("Filter.1.Value.2".to_string(), "pending".to_string()),
            ]
        );
    }
}
