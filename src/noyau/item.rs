// src/noyau/item.rs
//
// Élément de pile (RPN).
// - Value           : littéral
// - Symbol          : nom résolu à l’évaluation (constantes puis variables)
// - UnaryOperation  : transformation à un argument
// - BinaryOperation : transformation à deux arguments
//
// Les opérations portent leur glyphe + un pointeur de fonction (pas de closure capturante) :
// le registre est fixe, donc `&'static str` + `fn` suffisent.

use std::fmt;

use super::nombres::FormatNombre;

#[derive(Clone, Debug)]
pub enum Item {
    Value(f64),
    Symbol(String),
    UnaryOperation(&'static str, fn(f64) -> f64),
    BinaryOperation(&'static str, fn(f64, f64) -> f64),
}

impl Item {
    /// Nombre d’éléments que l’item consomme sous lui dans la pile.
    pub fn operand_count(&self) -> usize {
        match self {
            Item::Value(_) | Item::Symbol(_) => 0,
            Item::UnaryOperation(..) => 1,
            Item::BinaryOperation(..) => 2,
        }
    }

    /// Texte affiché : littéral formaté, nom du symbole ou glyphe de l’opération.
    ///
    /// Un nombre que le formateur refuse (non fini, trop de chiffres entiers)
    /// retombe sur l’affichage Rust brut plutôt que de disparaître.
    pub fn display_symbol(&self, format: &FormatNombre) -> String {
        match self {
            Item::Value(v) => format
                .string_from_number(*v)
                .unwrap_or_else(|| v.to_string()),
            Item::Symbol(nom) => nom.clone(),
            Item::UnaryOperation(symbole, _) | Item::BinaryOperation(symbole, _) => {
                (*symbole).to_string()
            }
        }
    }
}

impl fmt::Display for Item {
    /// Affichage avec le format par défaut (utile en trace / debug).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_symbol(&FormatNombre::default()))
    }
}
