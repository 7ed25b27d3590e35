//! Noyau postfixe
//!
//! Organisation interne :
//! - classe.rs     : classification (opérateur, fonction, priorité)
//! - jetons.rs     : balayage + suite postfixe (forme texte)
//! - rpn.rs        : shunting-yard (infixe -> postfixe)
//! - eval.rs       : évaluation de la postfixe
//! - variables.rs  : fournisseurs de valeurs de variables
//! - calcul.rs     : façade (conversion -> évaluation)
//! - erreur.rs     : taxonomie des erreurs

pub mod calcul;
pub mod classe;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod variables;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (celle de l’UI)
pub use calcul::Calculator;
pub use erreur::VariableError;
pub use rpn::to_postfix;
pub use variables::{VariableProvider, VariableTable};
