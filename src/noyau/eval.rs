//! Noyau — évaluation de la pile RPN, sans récursion native.
//!
//! On consomme depuis le sommet (fin de la tranche) vers le bas, avec un curseur
//! `fin` et une pile explicite d’opérations en attente : la profondeur de l’arbre
//! n’est bornée que par la mémoire.
//!
//! Contrats :
//! - La pile vivante n’est jamais modifiée (on travaille sur une tranche `&[Item]`).
//! - Symbole inconnu => None, qui remonte à travers unaire/binaire.
//! - Une sous-expression en échec est quand même consommée (le reste avance).
//! - Erreurs de domaine (÷0, ln(-1), asin(2)) : PAS un échec, NaN/∞ IEEE-754.

use std::collections::HashMap;

use super::item::Item;

/// Valeurs des symboles : constantes d’abord, variables ensuite.
pub struct Liaisons<'a> {
    pub constantes: &'a HashMap<&'static str, f64>,
    pub variables: &'a HashMap<String, f64>,
}

impl Liaisons<'_> {
    pub fn valeur(&self, symbole: &str) -> Option<f64> {
        self.constantes
            .get(symbole)
            .or_else(|| self.variables.get(symbole))
            .copied()
    }
}

/// Opération dont les opérandes ne sont pas encore tous évalués.
enum EnAttente {
    Unaire(fn(f64) -> f64),
    /// Opérande droit en cours (il est au-dessus du gauche).
    Droite(fn(f64, f64) -> f64),
    /// Droit connu, gauche en cours.
    Gauche(fn(f64, f64) -> f64, Option<f64>),
}

/// Évalue UNE sous-expression complète au sommet de `items`.
///
/// Pile vide => (None, vide). Pour un binaire, l’opérande droit est au-dessus
/// du gauche : on l’évalue en premier.
pub fn evaluate<'p>(items: &'p [Item], liaisons: &Liaisons<'_>) -> (Option<f64>, &'p [Item]) {
    let mut fin = items.len();
    let mut attente: Vec<EnAttente> = Vec::new();

    loop {
        // descente : jusqu’à une feuille (ou un opérande manquant)
        let mut resultat = match items[..fin].last() {
            None => None,
            Some(item) => {
                fin -= 1;
                match item {
                    Item::Value(v) => Some(*v),
                    Item::Symbol(s) => liaisons.valeur(s),
                    Item::UnaryOperation(_, f) => {
                        attente.push(EnAttente::Unaire(*f));
                        continue;
                    }
                    Item::BinaryOperation(_, f) => {
                        attente.push(EnAttente::Droite(*f));
                        continue;
                    }
                }
            }
        };

        // remontée : on applique tout ce qui est complet
        loop {
            match attente.pop() {
                None => return (resultat, &items[..fin]),
                Some(EnAttente::Unaire(f)) => resultat = resultat.map(f),
                Some(EnAttente::Droite(f)) => {
                    attente.push(EnAttente::Gauche(f, resultat));
                    break;
                }
                Some(EnAttente::Gauche(f, droite)) => {
                    resultat = match (resultat, droite) {
                        (Some(g), Some(d)) => Some(f(g, d)),
                        _ => None,
                    };
                }
            }
        }
    }
}
