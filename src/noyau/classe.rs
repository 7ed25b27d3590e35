// src/noyau/classe.rs
//
// Classification des caractères (partagée par la conversion et l’évaluation).
// Fonctions pures, totales sur tout le domaine `char`.
//
// NOTE: 's' et 'c' sont des marqueurs de fonction (sin, cos). Un identifiant
// réduit à une seule de ces lettres est TOUJOURS lu comme une fonction, jamais
// comme une variable. Limitation héritée de la grammaire, conservée telle quelle.

/// Opérateurs binaires reconnus.
pub const OPERATEURS: [char; 5] = ['+', '-', '*', '/', '^'];

/// Marqueurs de fonction unaire : s = sin, c = cos.
pub const FONCTIONS: [char; 2] = ['s', 'c'];

pub fn is_operator(ch: char) -> bool {
    OPERATEURS.contains(&ch)
}

pub fn is_function(ch: char) -> bool {
    FONCTIONS.contains(&ch)
}

/// Priorité d’un opérateur ; 0 pour tout le reste (parenthèse, fonction, lettre…).
pub fn priority(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        '^' => 3,
        _ => 0,
    }
}
