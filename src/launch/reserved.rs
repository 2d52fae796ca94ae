//! Claves reservadas: entradas del mapping que pueblan campos estructurales
//! del registro de lanzamiento en lugar de convertirse en overrides.
//!
//! Enumeración cerrada con lookup por igualdad exacta, en vez de comparar
//! strings sueltos repartidos por la lógica condicional.

use serde::{Deserialize, Serialize};

/// Parámetros de lanzamiento reconocidos por el builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservedKey {
    OutputFolder,
    InputFolder,
    Seed,
    Tasks,
    TaskUniqname,
    Debug,
    GinConfigs,
}

impl ReservedKey {
    pub const ALL: [ReservedKey; 7] = [ReservedKey::OutputFolder,
                                       ReservedKey::InputFolder,
                                       ReservedKey::Seed,
                                       ReservedKey::Tasks,
                                       ReservedKey::TaskUniqname,
                                       ReservedKey::Debug,
                                       ReservedKey::GinConfigs];

    /// Nombre textual exacto de la clave en el mapping de entrada.
    pub fn name(&self) -> &'static str {
        match self {
            ReservedKey::OutputFolder => "output_folder",
            ReservedKey::InputFolder => "input_folder",
            ReservedKey::Seed => "seed",
            ReservedKey::Tasks => "tasks",
            ReservedKey::TaskUniqname => "task_uniqname",
            ReservedKey::Debug => "debug",
            ReservedKey::GinConfigs => "gin_configs",
        }
    }

    /// Lookup por match exacto; cualquier otra clave es un override genérico.
    pub fn from_name(name: &str) -> Option<ReservedKey> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_exactly_the_seven_names() {
        for key in ReservedKey::ALL {
            assert_eq!(ReservedKey::from_name(key.name()), Some(key));
        }
        assert_eq!(ReservedKey::from_name("compose_nature.tree_density"), None);
        assert_eq!(ReservedKey::from_name("Seed"), None);
        assert_eq!(ReservedKey::from_name("output_folder "), None);
        assert_eq!(ReservedKey::from_name(""), None);
    }
}
