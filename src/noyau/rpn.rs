// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> postfixe (RPN)
//
// Règles:
// - Number / Identifier / Invalid : sortie directe
// - '(' : empilée sans condition
// - ')' : dépile jusqu’à '(' (jetée) ; pile vide avant => parenthèses déséquilibrées.
//         Choix délibéré : si une fonction attend au sommet, elle sort juste après
//         son argument (s(0) + 1 => "0 s 1 +", pas sin(0 + 1)).
// - opérateur : dépile tant que le sommet est un opérateur de priorité >= (gauche
//   pour TOUS, y compris '^' : 2^3^2 = (2^3)^2), puis empile
// - fonction : empilée sans condition ; un opérateur ne la dépile jamais
//   (priorité 0), elle sort sur ')' ou à la vidange finale
// - fin : vidange de la pile ; une '(' restante => parenthèses déséquilibrées
//
// Invariant: la pile ne contient que Operator, Function ou LeftParen.

use super::classe::priority;
use super::erreur::{CalcError, CalcResult, Unbalanced};
use super::jetons::{tokenize, Postfix, Token};

/// Convertit une expression infixe en suite postfixe.
///
/// Exemple:
///   "3 + 2 * (5 - x)"  =>  "3 2 5 x - * +"
pub fn to_postfix(expression: &str) -> CalcResult<Postfix> {
    let jetons = tokenize(expression)?;

    let mut out = Postfix::default();
    let mut ops: Vec<Token> = Vec::new();

    for (position, tok) in jetons {
        match tok {
            Token::Number(_) | Token::Identifier(_) | Token::Invalid(_) => out.push(tok),

            Token::LeftParen | Token::Function(_) => ops.push(tok),

            Token::RightParen => {
                loop {
                    match ops.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => out.push(top),
                        None => {
                            return Err(CalcError::MalformedExpression(
                                Unbalanced::UnmatchedClose { position },
                            ))
                        }
                    }
                }

                // la fonction reste collée à son argument parenthésé
                if let Some(Token::Function(_)) = ops.last() {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }

            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = ops.last() {
                    if priority(*top) < priority(op) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vidange
    while let Some(top) = ops.pop() {
        if top == Token::LeftParen {
            return Err(CalcError::MalformedExpression(Unbalanced::UnclosedOpen));
        }
        out.push(top);
    }

    tracing::trace!(%out, "postfixe");
    Ok(out)
}
