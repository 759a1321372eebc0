//! Category definition schema

use pokedex_core::{Category, CategoryName};
use serde::{Deserialize, Serialize};

/// A category as stored in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    /// Categories dealt double damage
    #[serde(default, rename = "effectiveAgainst", alias = "effective_against")]
    pub effective_against: Vec<String>,
    /// Categories taken half damage from
    #[serde(default, rename = "weakAgainst", alias = "weak_against")]
    pub weak_against: Vec<String>,
}

impl From<CategoryDef> for Category {
    fn from(def: CategoryDef) -> Self {
        Category {
            name: CategoryName(def.name),
            effective_against: def.effective_against.into_iter().map(CategoryName).collect(),
            weak_against: def.weak_against.into_iter().map(CategoryName).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_def_json() {
        let json = r#"{"name": "Fire", "effectiveAgainst": ["Grass", "Ice"], "weakAgainst": ["Water"]}"#;

        let def: CategoryDef = serde_json::from_str(json).unwrap();
        let category: Category = def.into();
        assert_eq!(category.name.as_str(), "Fire");
        assert_eq!(category.effective_against, vec![CategoryName::new("Grass"), CategoryName::new("Ice")]);
        assert_eq!(category.weak_against, vec![CategoryName::new("Water")]);
    }

    #[test]
    fn test_category_def_ron() {
        let ron_str = r#"(name: "Water", effective_against: ["Fire"])"#;

        let def: CategoryDef = ron::from_str(ron_str).unwrap();
        assert_eq!(def.name, "Water");
        assert_eq!(def.effective_against, vec!["Fire".to_string()]);
        assert!(def.weak_against.is_empty());
    }
}
