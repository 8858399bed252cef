//! Pokemon models
//!
//! Shape of `GET /pokemon/{name}` and the flattened stat view used by `inspect`.

use serde::Deserialize;

use super::NamedResource;

/// Response body of `GET /pokemon/{name}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pokemon {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    /// Some forms come back with `null`
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Collects the six base stats by name.
    pub fn stat_summary(&self) -> StatSummary {
        StatSummary::from_stats(&self.stats)
    }

    /// Type names ordered by slot.
    pub fn type_names(&self) -> Vec<&str> {
        let mut types: Vec<&PokemonType> = self.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        types.into_iter().map(|t| t.kind.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// The six base stats; any stat missing from the response stays 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatSummary {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatSummary {
    pub fn from_stats(stats: &[PokemonStat]) -> Self {
        let mut summary = Self::default();
        for stat in stats {
            let slot = match stat.stat.name.as_str() {
                "hp" => &mut summary.hp,
                "attack" => &mut summary.attack,
                "defense" => &mut summary.defense,
                "special-attack" => &mut summary.special_attack,
                "special-defense" => &mut summary.special_defense,
                "speed" => &mut summary.speed,
                _ => continue,
            };
            *slot = stat.base_stat;
        }
        summary
    }
}
