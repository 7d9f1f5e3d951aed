// src/noyau/calculatrice.rs
//
// Moteur RPN : pile + registre d’opérations + constantes + formateur.
//
// Contrats :
// - Pas d’état global : chaque Calculatrice est construite et passée explicitement.
// - push_operation est le SEUL garde-fou structurel : opération inconnue ou
//   opérandes insuffisants => rien ne bouge (comme une touche sans effet).
// - Évaluation / affichage : lecture seule sur la pile (tranche), jamais de mutation.
// - Les variables sont fournies à chaque appel, jamais conservées.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use super::eval::{evaluate, Liaisons};
use super::format::{describe, describe_for_graphing};
use super::item::Item;
use super::nombres::FormatNombre;
use super::operations::{constantes, registre};

#[derive(Clone, Debug)]
pub struct Calculatrice {
    stack: Vec<Item>,
    operations: HashMap<&'static str, Item>,
    constantes: HashMap<&'static str, f64>,
    format: FormatNombre,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec_format(FormatNombre::default())
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_format(format: FormatNombre) -> Self {
        Self {
            stack: Vec::new(),
            operations: registre(),
            constantes: constantes(),
            format,
        }
    }

    pub fn format(&self) -> &FormatNombre {
        &self.format
    }

    /// Change le formateur (la pile est conservée).
    pub fn set_format(&mut self, format: FormatNombre) {
        self.format = format;
    }

    /* ------------------------ Formateur ------------------------ */

    pub fn number_from_string(&self, texte: &str) -> Option<f64> {
        self.format.number_from_string(texte)
    }

    pub fn string_from_number(&self, nombre: f64) -> Option<String> {
        self.format.string_from_number(nombre)
    }

    /* ------------------------ Pile ------------------------ */

    pub fn push_value(&mut self, value: f64) {
        trace!(value, "push valeur");
        self.stack.push(Item::Value(value));
    }

    /// Aucun contrôle : un symbole inconnu échouera seulement à l’évaluation.
    pub fn push_symbol(&mut self, symbol: impl Into<String>) {
        let symbol = symbol.into();
        trace!(%symbol, "push symbole");
        self.stack.push(Item::Symbol(symbol));
    }

    pub fn push_operation(&mut self, symbol: &str) {
        let Some(operation) = self.operations.get(symbol) else {
            debug!(symbol, "opération inconnue ignorée");
            return;
        };

        if self.stack.len() < operation.operand_count() {
            debug!(
                symbol,
                requis = operation.operand_count(),
                pile = self.stack.len(),
                "opérandes insuffisants, opération ignorée"
            );
            return;
        }

        trace!(symbol, "push opération");
        self.stack.push(operation.clone());
    }

    pub fn clear(&mut self) {
        debug!(items = self.stack.len(), "pile effacée");
        self.stack.clear();
    }

    pub fn has_program(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Vue en lecture seule sur la pile (bas -> sommet).
    pub fn items(&self) -> &[Item] {
        &self.stack
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue sans aucune variable liée.
    pub fn evaluate(&self) -> Option<f64> {
        self.evaluate_for_variable_values(&HashMap::new())
    }

    /// Évalue l’expression du sommet ; le reste de la pile est ignoré.
    pub fn evaluate_for_variable_values(&self, variables: &HashMap<String, f64>) -> Option<f64> {
        let liaisons = Liaisons {
            constantes: &self.constantes,
            variables,
        };
        let (resultat, _reste) = evaluate(&self.stack, &liaisons);
        trace!(?resultat, "évaluation");
        resultat
    }

    /* ------------------------ Affichage ------------------------ */

    pub fn description(&self) -> String {
        describe(&self.stack, &self.format)
    }

    pub fn description_for_graphing(&self) -> String {
        describe_for_graphing(&self.stack, &self.format)
    }
}

impl fmt::Display for Calculatrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
