//! Organization attribute types.

use serde::{Deserialize, Serialize};

/// The value shape of an organization attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    Text,
    Number,
    SingleSelect,
    MultiSelect,
}

/// An attribute defined on an organization's members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationAttribute {
    pub id: String,
    pub team_id: u64,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_can_edit_relation: Option<bool>,
}

/// A selectable option of a select-typed attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOptionInput {
    pub value: String,
    pub slug: String,
}

/// Input for creating an organization attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationAttributeInput {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub options: Vec<AttributeOptionInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_type_spelling() {
        assert_eq!(
            serde_json::to_value(AttributeType::SingleSelect).unwrap(),
            serde_json::json!("SINGLE_SELECT")
        );
    }

    #[test]
    fn create_input_shape() {
        let input = CreateOrganizationAttributeInput {
            name: "Department".into(),
            slug: "department".into(),
            kind: AttributeType::SingleSelect,
            options: vec![AttributeOptionInput {
                value: "Engineering".into(),
                slug: "engineering".into(),
            }],
            enabled: Some(true),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["type"], "SINGLE_SELECT");
        assert_eq!(value["options"][0]["slug"], "engineering");
    }
}
