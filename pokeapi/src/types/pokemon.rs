//! Pokémon detail types returned by `GET /pokemon/{id or name}`.
//!
//! Only the fields the catalog displays are modelled; everything else in
//! the upstream payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Full detail record for one Pokémon.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pokemon {
    /// National dex number.
    #[serde(default)]
    pub id: u32,

    pub name: String,

    /// Front and back sprite URLs.
    pub sprites: Sprites,

    /// Types in slot order.
    pub types: Vec<PokemonType>,

    /// Base stats in API order.
    pub stats: Vec<PokemonStat>,

    /// Height in decimetres.
    pub height: u32,

    /// Weight in hectograms.
    pub weight: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: StatName,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StatName {
    pub name: String,
}

impl Pokemon {
    /// Height in metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Type names in slot order, without duplicates.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.types.len());
        for t in &self.types {
            if !names.contains(&t.kind.name.as_str()) {
                names.push(t.kind.name.as_str());
            }
        }
        names
    }

    /// The sprite shown by default.
    pub fn primary_image(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    /// The sprite shown when the card is selected. Falls back to the
    /// primary sprite when no back sprite exists.
    pub fn alternate_image(&self) -> Option<&str> {
        self.sprites
            .back_default
            .as_deref()
            .or_else(|| self.primary_image())
    }
}
