pub mod animal;
pub mod quiz;
pub mod selection;
