//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : sur les expressions numériques bien parenthésées,
//!   postfixe + évaluation == évaluateur de référence (descente récursive,
//!   mêmes priorités, gauche pour tous les opérateurs, '^' compris)

use std::time::{Duration, Instant};

use super::erreur::CalcError;
use super::jetons::Postfix;
use super::{to_postfix, Calculator, VariableError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateur ------------------------ */

const OPS: [char; 5] = ['+', '-', '*', '/', '^'];

fn gen_expr(rng: &mut Rng, depth: u32) -> String {
    if depth == 0 || rng.pick(3) == 0 {
        // petits entiers : garde '^' dans des ordres de grandeur raisonnables
        return rng.pick(10).to_string();
    }
    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    let op = OPS[rng.pick(OPS.len() as u32) as usize];
    let sep = if rng.coin() { " " } else { "" };
    let s = format!("{a}{sep}{op}{sep}{b}");
    if rng.coin() {
        format!("({s})")
    } else {
        s
    }
}

/* ------------------------ Évaluateur de référence ------------------------ */

struct Reference {
    chars: Vec<char>,
    i: usize,
}

impl Reference {
    fn new(src: &str) -> Self {
        Self {
            chars: src.chars().filter(|c| !c.is_whitespace()).collect(),
            i: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.i).copied()
    }

    fn binaire(&mut self, ops: &[char], sous: fn(&mut Self) -> Result<f64, ()>) -> Result<f64, ()> {
        let mut acc = sous(self)?;
        while let Some(c) = self.peek().filter(|c| ops.contains(c)) {
            self.i += 1;
            let rhs = sous(self)?;
            acc = match c {
                '+' => acc + rhs,
                '-' => acc - rhs,
                '*' => acc * rhs,
                '/' => {
                    if rhs == 0.0 {
                        return Err(());
                    }
                    acc / rhs
                }
                _ => acc.powf(rhs),
            };
        }
        Ok(acc)
    }

    fn somme(&mut self) -> Result<f64, ()> {
        self.binaire(&['+', '-'], Self::produit)
    }

    fn produit(&mut self) -> Result<f64, ()> {
        self.binaire(&['*', '/'], Self::puissance)
    }

    fn puissance(&mut self) -> Result<f64, ()> {
        self.binaire(&['^'], Self::atome)
    }

    fn atome(&mut self) -> Result<f64, ()> {
        match self.peek() {
            Some('(') => {
                self.i += 1;
                let v = self.somme()?;
                self.i += 1; // ')'
                Ok(v)
            }
            _ => {
                let start = self.i;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.i += 1;
                }
                let lit: String = self.chars[start..self.i].iter().collect();
                lit.parse().map_err(|_| ())
            }
        }
    }
}

fn reference(expr: &str) -> Result<f64, ()> {
    Reference::new(expr).somme()
}

fn meme_valeur(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fn aucune_variable(name: &str) -> Result<f64, VariableError> {
    Err(VariableError::Missing {
        name: name.to_string(),
    })
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_contre_reference() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, max);

        let expr = gen_expr(&mut rng, 4);
        let obtenu = Calculator::new(expr.as_str()).calculate(&mut aucune_variable);

        match (reference(&expr), obtenu) {
            (Ok(r), Ok(v)) => assert!(meme_valeur(r, v), "expr={expr:?} ref={r} obtenu={v}"),
            (Err(()), Err(CalcError::DivisionByZero)) => {}
            (r, v) => panic!("expr={expr:?} ref={r:?} obtenu={v:?}"),
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..200 {
        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);
        assert_eq!(to_postfix(&ea), to_postfix(&eb));
    }
}

#[test]
fn fuzz_bruit_ne_panique_pas() {
    // Alphabet reconnu + quelques intrus : on accepte toute erreur typée,
    // jamais de panique.
    const ALPHABET: &[char] = &[
        '0', '1', '7', 'x', 'y', 's', 'c', '+', '-', '*', '/', '^', '(', ')', ' ', '%', '.',
    ];

    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..3_000 {
        budget(start, max);

        let len = 1 + rng.pick(16) as usize;
        let expr: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        let mut fournisseur = |_: &str| -> Result<f64, VariableError> { Ok(0.5) };
        let _ = Calculator::new(expr.as_str()).calculate(&mut fournisseur);

        // la forme texte de la postfixe se relit à l’identique
        if let Ok(p) = to_postfix(&expr) {
            let texte = p.to_string();
            assert_eq!(texte.trim(), texte, "expr={expr:?}");
            assert!(!texte.contains("  "), "expr={expr:?}");
            let relu: Postfix = texte.parse().unwrap_or_else(|e| match e {});
            assert_eq!(relu, p, "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_profondeur_parentheses() {
    // imbrication profonde : la conversion est itérative, pas de récursion
    let n = 5_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    let v = Calculator::new(expr).calculate(&mut aucune_variable);
    assert_eq!(v, Ok(1.0));
}
