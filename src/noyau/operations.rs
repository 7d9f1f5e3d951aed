// src/noyau/operations.rs
//
// Registre des opérations connues + table des constantes.
// Rempli une seule fois à la construction, immuable ensuite.

use std::collections::HashMap;
use std::f64::consts;

use super::item::Item;

/// Glyphes reconnus par le joli affichage (règles spéciales).
pub const MUL: &str = "×";
pub const DIV: &str = "÷";
pub const POW: &str = "pow";
pub const EXP: &str = "eˣ";
pub const EXP10: &str = "10ˣ";

pub fn registre() -> HashMap<&'static str, Item> {
    let mut operations = HashMap::new();

    let mut apprendre = |op: Item| {
        let symbole = match &op {
            Item::UnaryOperation(s, _) | Item::BinaryOperation(s, _) => *s,
            Item::Value(_) | Item::Symbol(_) => return,
        };
        operations.insert(symbole, op);
    };

    // Arithmétique
    apprendre(Item::BinaryOperation("+", |a, b| a + b));
    apprendre(Item::BinaryOperation("-", |a, b| a - b));
    apprendre(Item::BinaryOperation(MUL, |a, b| a * b));
    apprendre(Item::BinaryOperation(DIV, |a, b| a / b));

    // Exponentiation
    apprendre(Item::UnaryOperation(EXP, f64::exp));
    apprendre(Item::UnaryOperation("ln", f64::ln));
    apprendre(Item::UnaryOperation(EXP10, |x| 10f64.powf(x)));
    apprendre(Item::UnaryOperation("log₁₀", f64::log10));
    apprendre(Item::BinaryOperation(POW, f64::powf));
    apprendre(Item::UnaryOperation("√", f64::sqrt));

    // Trigonométrie (radians)
    apprendre(Item::UnaryOperation("sin", f64::sin));
    apprendre(Item::UnaryOperation("cos", f64::cos));
    apprendre(Item::UnaryOperation("tan", f64::tan));
    apprendre(Item::UnaryOperation("sin⁻¹", f64::asin));
    apprendre(Item::UnaryOperation("cos⁻¹", f64::acos));
    apprendre(Item::UnaryOperation("tan⁻¹", f64::atan));

    operations
}

pub fn constantes() -> HashMap<&'static str, f64> {
    HashMap::from([("π", consts::PI), ("e", consts::E)])
}
