use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub kingdom: String,
    pub phylum: String,
    pub class: String,
    pub order: String,
    pub family: String,
    pub genus: String,
}

/// Informational card content. Every field is opaque generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub scientific_name: String,
    pub classification: Classification,
    pub habitat: String,
    pub geographical_distribution: String,
    pub diet: String,
    pub average_lifespan: String,
    pub physical_characteristics: String,
    pub behavior_and_social_structure: String,
    pub reproduction_and_offspring: String,
    pub conservation_status: String,
    pub interesting_facts: Vec<String>,
}
