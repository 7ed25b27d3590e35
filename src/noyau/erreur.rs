//! Noyau — taxonomie des erreurs
//!
//! Une seule enum pour tout le pipeline : la façade propage la première
//! erreur rencontrée telle quelle, l’appelant peut brancher sur la variante.

use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Parenthèses non équilibrées (dans un sens ou dans l’autre).
    #[error("expression mal formée : {0}")]
    MalformedExpression(Unbalanced),

    #[error("caractère invalide '{ch}' en position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("postfixe mal formée : {0}")]
    MalformedPostfix(PostfixDefect),

    #[error("division par zéro")]
    DivisionByZero,

    // Garde-fous : classification et tables d’application désynchronisées.
    #[error("opérateur inconnu : '{0}'")]
    UnknownOperator(char),

    #[error("fonction inconnue : '{0}'")]
    UnknownFunction(char),

    #[error(transparent)]
    Variable(#[from] VariableError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unbalanced {
    #[error("')' sans '(' correspondante (position {position})")]
    UnmatchedClose { position: usize },

    #[error("'(' non fermée")]
    UnclosedOpen,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostfixDefect {
    #[error("opérandes insuffisants pour '{token}' ({needed} requis, {available} disponibles)")]
    InsufficientOperands {
        token: String,
        needed: usize,
        available: usize,
    },

    #[error("trop d’opérandes ({remaining} valeurs restantes sur la pile)")]
    TooManyOperands { remaining: usize },

    #[error("jeton invalide : « {0} »")]
    InvalidToken(String),

    #[error("aucun jeton")]
    Empty,
}

/// Échec d’un fournisseur de variables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    #[error("valeur manquante pour la variable « {name} »")]
    Missing { name: String },

    #[error("valeur invalide pour la variable « {name} » : « {raw} »")]
    Invalid { name: String, raw: String },
}
