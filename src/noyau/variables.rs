//! Fournisseurs de valeurs de variables.
//!
//! L’évaluateur demande chaque nom distinct UNE fois par évaluation, dans
//! l’ordre de première apparition dans la postfixe. D’où vient la valeur
//! (saisie UI, table, réseau…) ne concerne que le fournisseur.

use std::collections::HashMap;

use super::erreur::VariableError;

pub trait VariableProvider<T> {
    fn request(&mut self, name: &str) -> Result<T, VariableError>;
}

/// Toute fermeture `FnMut(&str) -> Result<T, VariableError>` est un fournisseur.
impl<T, F> VariableProvider<T> for F
where
    F: FnMut(&str) -> Result<T, VariableError>,
{
    fn request(&mut self, name: &str) -> Result<T, VariableError> {
        self(name)
    }
}

/// Table nom -> valeur, sans limite de taille.
#[derive(Clone, Debug, Default)]
pub struct VariableTable<T> {
    valeurs: HashMap<String, T>,
}

impl<T: Copy> VariableTable<T> {
    pub fn new() -> Self {
        Self {
            valeurs: HashMap::new(),
        }
    }

    /// Construction chaînée : `VariableTable::new().with("x", 2.0)`.
    pub fn with(mut self, name: impl Into<String>, value: T) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: T) {
        self.valeurs.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<T> {
        self.valeurs.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.valeurs.len()
    }
}

impl<T: Copy> VariableProvider<T> for VariableTable<T> {
    fn request(&mut self, name: &str) -> Result<T, VariableError> {
        self.get(name).ok_or_else(|| VariableError::Missing {
            name: name.to_string(),
        })
    }
}
