use super::state::LoadId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAnimals { load: LoadId },
    CreateAnimal { name: String },
}
