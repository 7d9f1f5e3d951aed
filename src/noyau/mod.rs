//! Noyau RPN
//!
//! Organisation interne :
//! - item.rs         : élément de pile (valeur, symbole, opération unaire/binaire)
//! - operations.rs   : registre des opérations + constantes (π, e)
//! - nombres.rs      : formateur nombre <-> texte (style décimal)
//! - eval.rs         : évaluation itérative (sommet -> bas), échec = None
//! - format.rs       : joli affichage infixe (règles par opérateur)
//! - calculatrice.rs : moteur (pile + API push/clear/evaluate/description)
//! - graphe.rs       : échantillonnage y = f(x) pour le tracé

pub mod calculatrice;
pub mod eval;
pub mod format;
pub mod graphe;
pub mod item;
pub mod nombres;
pub mod operations;

#[cfg(test)]
mod tests_scientifiques;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use item::Item;
pub use nombres::FormatNombre;
