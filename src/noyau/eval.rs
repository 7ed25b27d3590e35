//! Noyau — évaluation d’une postfixe
//!
//! Pile de valeurs + table des variables (éphémère, propre à chaque appel).
//! Le seul effet observable est l’appel au fournisseur : une fois par nom
//! distinct, dans l’ordre de première apparition.

use std::collections::HashMap;

use num_traits::Float;

use super::classe::{is_function, is_operator};
use super::erreur::{CalcError, CalcResult, PostfixDefect};
use super::jetons::{Postfix, Token};
use super::variables::VariableProvider;

/// Évalue une suite postfixe.
///
/// Erreurs:
/// - opérandes insuffisants / en trop, jeton non reconnu => `MalformedPostfix`
/// - diviseur exactement nul => `DivisionByZero`
/// - échec du fournisseur => `Variable`
pub fn evaluate<T, P>(postfix: &Postfix, provider: &mut P) -> CalcResult<T>
where
    T: Float,
    P: VariableProvider<T> + ?Sized,
{
    let mut pile: Vec<T> = Vec::with_capacity(postfix.len());
    let mut table: HashMap<&str, T> = HashMap::new();

    for tok in postfix.tokens() {
        match tok {
            Token::Number(lit) => {
                let v = T::from_str_radix(lit, 10).map_err(|_| {
                    CalcError::MalformedPostfix(PostfixDefect::InvalidToken(lit.clone()))
                })?;
                pile.push(v);
            }

            Token::Identifier(name) => {
                let v = match table.get(name.as_str()) {
                    Some(v) => *v,
                    None => {
                        tracing::debug!(variable = %name, "valeur demandée au fournisseur");
                        let v = provider.request(name)?;
                        table.insert(name.as_str(), v);
                        v
                    }
                };
                pile.push(v);
            }

            Token::Operator(op) if is_operator(*op) => {
                // b = sommet, a = juste dessous : on calcule a op b
                let ab = take_operands(&mut pile, tok, 2)?;
                pile.push(apply_operator(ab[0], ab[1], *op)?);
            }

            Token::Function(func) if is_function(*func) => {
                let a = take_operands(&mut pile, tok, 1)?;
                pile.push(apply_function(*func, a[0])?);
            }

            _ => {
                return Err(CalcError::MalformedPostfix(PostfixDefect::InvalidToken(
                    tok.to_string(),
                )))
            }
        }
        tracing::trace!(jeton = %tok, profondeur = pile.len(), "pile");
    }

    match pile.len() {
        0 => Err(CalcError::MalformedPostfix(PostfixDefect::Empty)),
        1 => Ok(pile[0]),
        n => Err(CalcError::MalformedPostfix(PostfixDefect::TooManyOperands {
            remaining: n,
        })),
    }
}

/// Retire les `arity` valeurs du haut de la pile, dans l’ordre d’empilement.
fn take_operands<T>(pile: &mut Vec<T>, tok: &Token, arity: usize) -> CalcResult<Vec<T>> {
    let available = pile.len();
    if available < arity {
        return Err(CalcError::MalformedPostfix(
            PostfixDefect::InsufficientOperands {
                token: tok.to_string(),
                needed: arity,
                available,
            },
        ));
    }
    Ok(pile.split_off(available - arity))
}

/// Applique `a op b` (ordre des opérandes conservé pour '-' et '/').
pub fn apply_operator<T: Float>(a: T, b: T, op: char) -> CalcResult<T> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            Ok(a / b)
        }
        '^' => Ok(a.powf(b)),
        _ => Err(CalcError::UnknownOperator(op)),
    }
}

/// Applique une fonction unaire : 's' = sin, 'c' = cos.
pub fn apply_function<T: Float>(func: char, a: T) -> CalcResult<T> {
    match func {
        's' => Ok(a.sin()),
        'c' => Ok(a.cos()),
        _ => Err(CalcError::UnknownFunction(func)),
    }
}
