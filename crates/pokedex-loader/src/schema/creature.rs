//! Creature definition schema

use pokedex_core::{Candy, CategoryName, Creature, EvolutionRef, EvolutionRequirement};
use serde::{Deserialize, Serialize};

/// A category slot as written in the document: a bare name or a list of
/// at most one name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategorySlot {
    One(String),
    List(Vec<String>),
}

impl CategorySlot {
    fn into_names(self) -> Vec<String> {
        match self {
            CategorySlot::One(name) => vec![name],
            CategorySlot::List(names) => names,
        }
    }
}

impl Default for CategorySlot {
    fn default() -> Self {
        CategorySlot::List(Vec::new())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandyDef {
    #[serde(default, rename = "Name", alias = "name")]
    pub name: String,
    #[serde(default, rename = "FamilyID", alias = "family_id")]
    pub family_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionRequirementDef {
    #[serde(default, rename = "Amount", alias = "amount")]
    pub amount: i64,
    #[serde(default, rename = "Family", alias = "family")]
    pub family: i64,
    #[serde(default, rename = "Name", alias = "name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionRefDef {
    #[serde(default, rename = "Number", alias = "number")]
    pub number: String,
    #[serde(default, rename = "Name", alias = "name")]
    pub name: String,
}

/// A creature as stored in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureDef {
    #[serde(default, rename = "Number", alias = "number")]
    pub number: String,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(default, rename = "Classification", alias = "classification")]
    pub classification: String,
    #[serde(default, rename = "Type I", alias = "primary_category")]
    pub type_i: CategorySlot,
    #[serde(default, rename = "Type II", alias = "secondary_category")]
    pub type_ii: Option<CategorySlot>,
    #[serde(default, rename = "Weaknesses", alias = "weaknesses")]
    pub weaknesses: Vec<String>,
    #[serde(default, rename = "Fast Attack(s)", alias = "fast_attacks")]
    pub fast_attacks: Vec<String>,
    #[serde(default, rename = "Special Attack(s)", alias = "special_attacks")]
    pub special_attacks: Vec<String>,
    #[serde(default, rename = "Weight", alias = "weight")]
    pub weight: String,
    #[serde(default, rename = "Height", alias = "height")]
    pub height: String,
    #[serde(default, rename = "Candy", alias = "candy")]
    pub candy: CandyDef,
    #[serde(
        default,
        rename = "Next Evolution Requirements",
        alias = "evolution_requirement"
    )]
    pub evolution_requirement: Option<EvolutionRequirementDef>,
    #[serde(default, rename = "Next evolution(s)", alias = "next_evolutions")]
    pub next_evolutions: Vec<EvolutionRefDef>,
    #[serde(default, rename = "Previous evolution(s)", alias = "previous_evolutions")]
    pub previous_evolutions: Vec<EvolutionRefDef>,
    #[serde(default, rename = "BaseAttack", alias = "base_attack")]
    pub base_attack: i64,
    #[serde(default, rename = "BaseDefense", alias = "base_defense")]
    pub base_defense: i64,
    #[serde(default, rename = "BaseStamina", alias = "base_stamina")]
    pub base_stamina: i64,
    #[serde(default, rename = "CaptureRate", alias = "capture_rate")]
    pub capture_rate: f64,
    #[serde(default, rename = "FleeRate", alias = "flee_rate")]
    pub flee_rate: f64,
    #[serde(default, rename = "BuddyDistanceNeeded", alias = "buddy_distance_needed")]
    pub buddy_distance_needed: i64,
}

impl CreatureDef {
    /// Convert into a core creature, resolving the two category slots
    pub fn into_creature(self) -> pokedex_core::Result<Creature> {
        let primary_category = CategoryName::from_slot(&self.name, self.type_i.into_names())?
            .ok_or_else(|| pokedex_core::Error::MissingPrimaryCategory(self.name.clone()))?;
        let secondary_category = match self.type_ii {
            Some(slot) => CategoryName::from_slot(&self.name, slot.into_names())?,
            None => None,
        };

        Ok(Creature {
            number: self.number,
            name: self.name,
            classification: self.classification,
            primary_category,
            secondary_category,
            weaknesses: self.weaknesses.into_iter().map(CategoryName).collect(),
            fast_attacks: self.fast_attacks,
            special_attacks: self.special_attacks,
            weight: self.weight,
            height: self.height,
            base_attack: self.base_attack,
            base_defense: self.base_defense,
            base_stamina: self.base_stamina,
            capture_rate: self.capture_rate,
            flee_rate: self.flee_rate,
            buddy_distance_needed: self.buddy_distance_needed,
            candy: Candy {
                name: self.candy.name,
                family_id: self.candy.family_id,
            },
            evolution_requirement: self.evolution_requirement.map(|r| EvolutionRequirement {
                amount: r.amount,
                family: r.family,
                name: r.name,
            }),
            next_evolutions: self.next_evolutions.into_iter().map(Into::into).collect(),
            previous_evolutions: self.previous_evolutions.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<EvolutionRefDef> for EvolutionRef {
    fn from(def: EvolutionRefDef) -> Self {
        EvolutionRef {
            number: def.number,
            name: def.name,
        }
    }
}
