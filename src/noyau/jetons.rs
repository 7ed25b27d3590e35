// src/noyau/jetons.rs

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::classe::{is_function, is_operator};
use super::erreur::{CalcError, CalcResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Suite de chiffres ASCII (littéral entier, gardé en texte).
    Number(String),
    /// Suite de lettres ASCII : nom de variable.
    Identifier(String),
    /// Un caractère de `classe::OPERATEURS`.
    Operator(char),
    /// Un caractère de `classe::FONCTIONS`.
    Function(char),
    LeftParen,
    RightParen,
    /// Suite alphanumérique mixte ("2x", "x2"), lettre/chiffre hors ASCII ("é", "٣")
    /// ou mot non classable.
    /// Acceptée au balayage, refusée à l’évaluation.
    Invalid(String),
}

impl Token {
    /// Classe un mot déjà isolé (suite alphanumérique ou jeton de postfixe).
    ///
    /// - chiffres seulement        => Number
    /// - lettres seulement         => Function si "s"/"c", sinon Identifier
    /// - un seul opérateur         => Operator
    /// - "(" / ")"                 => parenthèses
    /// - le reste                  => Invalid
    pub fn classify(word: &str) -> Token {
        let mut chars = word.chars();
        let first = chars.next();
        let single = first.filter(|_| chars.next().is_none());

        if let Some(c) = single {
            if is_function(c) {
                return Token::Function(c);
            }
            if is_operator(c) {
                return Token::Operator(c);
            }
            match c {
                '(' => return Token::LeftParen,
                ')' => return Token::RightParen,
                _ => {}
            }
        }

        if word.is_empty() {
            Token::Invalid(String::new())
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            Token::Number(word.to_string())
        } else if word.chars().all(|c| c.is_ascii_alphabetic()) {
            Token::Identifier(word.to_string())
        } else {
            Token::Invalid(word.to_string())
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(s) | Token::Identifier(s) | Token::Invalid(s) => f.write_str(s),
            Token::Operator(c) | Token::Function(c) => write!(f, "{c}"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Balaye une expression infixe en jetons, chacun avec sa position (en caractères).
///
/// - espaces ignorés
/// - suite maximale de chiffres/lettres (Unicode) => un seul jeton (voir `Token::classify`) ;
///   hors ASCII, le mot devient `Token::Invalid` et l’évaluation le refuse
/// - opérateurs et parenthèses => un jeton chacun
/// - tout autre caractère => `CalcError::InvalidCharacter`
pub fn tokenize(s: &str) -> CalcResult<Vec<(usize, Token)>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Suite alphanumérique (extension gloutonne)
        if c.is_alphanumeric() {
            let start = i;
            while i < chars.len() && chars[i].is_alphanumeric() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push((start, Token::classify(&word)));
            continue;
        }

        let tok = match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ if is_operator(c) => Token::Operator(c),
            _ => return Err(CalcError::InvalidCharacter { ch: c, position: i }),
        };
        out.push((i, tok));
        i += 1;
    }

    Ok(out)
}

/// Suite postfixe (RPN) : jetons dans l’ordre de sortie.
///
/// Forme texte : jetons séparés par UN espace, sans espace de tête ni de fin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub(crate) fn push(&mut self, tok: Token) {
        self.tokens.push(tok);
    }

    /// Noms de variables distincts, dans l’ordre où l’évaluation les demandera.
    pub fn variables(&self) -> Vec<&str> {
        let mut noms: Vec<&str> = Vec::new();
        for tok in &self.tokens {
            if let Token::Identifier(name) = tok {
                if !noms.contains(&name.as_str()) {
                    noms.push(name);
                }
            }
        }
        noms
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tok) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{tok}")?;
        }
        Ok(())
    }
}

/// Lecture d’une postfixe texte : découpe sur les blancs, classe chaque mot.
/// Ne peut pas échouer : un mot inconnu devient `Token::Invalid`.
impl FromStr for Postfix {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.split_whitespace().map(Token::classify).collect()))
    }
}

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
