// src/noyau/calcul.rs
//
// Façade : possède l’expression, enchaîne conversion -> évaluation.
// Aucune erreur n’est traduite ni avalée : la première remonte telle quelle.

use super::erreur::CalcResult;
use super::eval::evaluate;
use super::jetons::Postfix;
use super::rpn::to_postfix;
use super::variables::VariableProvider;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculator {
    expression: String,
}

impl Calculator {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Forme postfixe intermédiaire de l’expression.
    pub fn to_postfix(&self) -> CalcResult<Postfix> {
        to_postfix(&self.expression)
    }

    /// Convertit puis évalue ; les variables sont demandées à `provider`.
    pub fn calculate<P>(&self, provider: &mut P) -> CalcResult<f64>
    where
        P: VariableProvider<f64> + ?Sized,
    {
        tracing::debug!(expression = %self.expression, "calcul");
        let postfix = self.to_postfix()?;
        evaluate(&postfix, provider)
    }
}
