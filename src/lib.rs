//! Calculatrice RPN — moteur d’expressions postfixées.
//!
//! Le noyau n’a aucune E/S : pile + évaluation + joli affichage.
//! Le front-end egui (binaire) ne fait que brancher les touches dessus.

pub mod noyau;

pub use noyau::{Calculatrice, FormatNombre, Item};
