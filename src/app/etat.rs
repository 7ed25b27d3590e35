//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, valeurs des variables,
//! résultat, erreur, postfixe) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing d’expression).
//! - Actions déterministes, sans effet de bord caché.
//! - Précision d’affichage bornée.

use crate::noyau::{VariableError, VariableTable};

/// Décimales affichées par défaut.
const DECIMALES_DEFAUT: usize = 10;

/// Au-delà, un f64 n’a plus rien à dire.
const DECIMALES_MAX: usize = 17;

/// Une variable de l’expression courante et sa saisie (texte brut).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChampVariable {
    pub nom: String,
    pub saisie: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    pub variables: Vec<ChampVariable>,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub postfixe: String,
    /// Variables effectivement demandées lors du dernier calcul (ordre des demandes).
    pub demandees: Vec<String>,

    // --- paramètres ---
    pub decimales: usize,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            variables: Vec::new(),
            resultat: String::new(),
            erreur: String::new(),
            postfixe: String::new(),
            demandees: Vec::new(),
            decimales: DECIMALES_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + variables + résultats + précision par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.variables.clear();
        self.postfixe.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur (sans toucher à l’entrée ni aux variables).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demandees.clear();
        self.focus_entree = true;
    }

    /// On CONSERVE le dernier résultat : une faute n’efface pas l’écran.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demandees.clear();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, valeur: f64, demandees: Vec<String>) {
        self.erreur.clear();
        self.resultat = formater_resultat(valeur, self.decimales);
        self.demandees = demandees;
        self.focus_entree = true;
    }

    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        self.focus_entree = true;
    }

    /// Aligne les champs sur `noms` (ordre des demandes) ; les saisies des noms
    /// déjà connus sont conservées, les autres champs disparaissent.
    pub fn sync_variables(&mut self, noms: &[&str]) {
        let anciens = std::mem::take(&mut self.variables);
        self.variables = noms
            .iter()
            .map(|nom| {
                anciens
                    .iter()
                    .find(|c| c.nom == *nom)
                    .cloned()
                    .unwrap_or_else(|| ChampVariable {
                        nom: nom.to_string(),
                        saisie: String::new(),
                    })
            })
            .collect();
    }

    /// Table des valeurs saisies (sert de fournisseur au noyau).
    /// Champ vide => absent de la table (le noyau le signalera manquant).
    pub fn table_variables(&self) -> Result<VariableTable<f64>, VariableError> {
        self.variables
            .iter()
            .filter(|c| !c.saisie.trim().is_empty())
            .try_fold(VariableTable::new(), |table, c| {
                let v = c
                    .saisie
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| VariableError::Invalid {
                        name: c.nom.clone(),
                        raw: c.saisie.clone(),
                    })?;
                Ok(table.with(c.nom.clone(), v))
            })
    }
}

/// Affichage d’un résultat : `decimales` chiffres max, zéros de queue retirés.
pub fn formater_resultat(v: f64, decimales: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.decimales$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
