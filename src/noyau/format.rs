// src/noyau/format.rs
//
// Joli affichage infixe d’une pile RPN.
//
// Règles par opérateur :
// - × ÷         : "g × d"            (pas de parenthèses à ce niveau)
// - pow         : "((g) ^ (d))"      (opérandes débarrassés d’une couche)
// - autre bin.  : "(g + d)"
// - eˣ / 10ˣ    : "e ^ (x)" / "10 ^ (x)"
// - autre un.   : "sin(x)"
// - feuilles    : texte formaté, sans parenthèses
//
// Opérande manquant (pile épuisée) => chaîne vide.

use std::collections::VecDeque;

use super::item::Item;
use super::nombres::FormatNombre;
use super::operations::{DIV, EXP, EXP10, MUL, POW};

/// Retire UNE couche : premier caractère '(' ET dernier ')'.
///
/// Test positionnel seulement (pas d’appariement) : "(a) + (b)" devient "a) + (b".
pub fn strip_outer_parentheses(expression: &str) -> &str {
    expression
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(expression)
}

/// Texte en construction, allongé par les deux bouts.
///
/// Une chaîne `format!` par niveau recopierait tout l’opérande à chaque
/// opération (quadratique sur une longue chaîne d’unaires).
#[derive(Default)]
struct Morceau(VecDeque<char>);

impl Morceau {
    fn devant(&mut self, s: &str) {
        for c in s.chars().rev() {
            self.0.push_front(c);
        }
    }

    fn derriere(&mut self, s: &str) {
        self.0.extend(s.chars());
    }

    fn entoure(mut self, avant: &str, apres: &str) -> Self {
        self.devant(avant);
        self.derriere(apres);
        self
    }

    /// Même règle que `strip_outer_parentheses`.
    fn sans_parentheses(mut self) -> Self {
        if self.0.len() >= 2 && self.0.front() == Some(&'(') && self.0.back() == Some(&')') {
            self.0.pop_front();
            self.0.pop_back();
        }
        self
    }

    /// gauche + milieu + droite ; on recopie toujours le plus court des deux.
    fn joindre(mut gauche: Self, milieu: &str, mut droite: Self) -> Self {
        if gauche.0.len() >= droite.0.len() {
            gauche.derriere(milieu);
            gauche.0.extend(droite.0);
            gauche
        } else {
            droite.devant(milieu);
            for c in gauche.0.into_iter().rev() {
                droite.0.push_front(c);
            }
            droite
        }
    }
}

impl From<String> for Morceau {
    fn from(s: String) -> Self {
        Self(s.chars().collect())
    }
}

impl From<Morceau> for String {
    fn from(m: Morceau) -> Self {
        m.0.into_iter().collect()
    }
}

fn unaire(symbole: &str, operande: Morceau) -> Morceau {
    let operande = operande.sans_parentheses();
    match symbole {
        EXP => operande.entoure("e ^ (", ")"),
        EXP10 => operande.entoure("10 ^ (", ")"),
        _ => operande.entoure(&format!("{symbole}("), ")"),
    }
}

fn binaire(symbole: &str, gauche: Morceau, droite: Morceau) -> Morceau {
    match symbole {
        MUL | DIV => Morceau::joindre(gauche, &format!(" {symbole} "), droite),
        POW => Morceau::joindre(
            gauche.sans_parentheses(),
            ") ^ (",
            droite.sans_parentheses(),
        )
        .entoure("((", "))"),
        _ => Morceau::joindre(gauche, &format!(" {symbole} "), droite).entoure("(", ")"),
    }
}

/// Opérateur dont le texte des opérandes n’est pas encore complet.
enum EnAttente {
    Unaire(&'static str),
    Droite(&'static str),
    Gauche(&'static str, Morceau),
}

/// Dépile UNE sous-expression complète et la rend en infixe.
///
/// Parcours avec pile explicite (droite puis gauche), comme `eval::evaluate`.
pub fn pretty_pop<'p>(items: &'p [Item], format: &FormatNombre) -> (String, &'p [Item]) {
    let mut fin = items.len();
    let mut attente: Vec<EnAttente> = Vec::new();

    loop {
        // opérande manquant (pile épuisée) => vide
        let mut texte = match items[..fin].last() {
            None => Morceau::default(),
            Some(item) => {
                fin -= 1;
                match item {
                    Item::Value(_) | Item::Symbol(_) => {
                        Morceau::from(item.display_symbol(format))
                    }
                    Item::UnaryOperation(symbole, _) => {
                        attente.push(EnAttente::Unaire(*symbole));
                        continue;
                    }
                    Item::BinaryOperation(symbole, _) => {
                        attente.push(EnAttente::Droite(*symbole));
                        continue;
                    }
                }
            }
        };

        loop {
            match attente.pop() {
                None => return (texte.into(), &items[..fin]),
                Some(EnAttente::Unaire(symbole)) => texte = unaire(symbole, texte),
                Some(EnAttente::Droite(symbole)) => {
                    attente.push(EnAttente::Gauche(symbole, texte));
                    break;
                }
                Some(EnAttente::Gauche(symbole, droite)) => {
                    texte = binaire(symbole, texte, droite);
                }
            }
        }
    }
}

/// Toutes les sous-expressions, du sommet vers le bas, séparées par ", ".
/// Pile vide => "...".
pub fn describe(items: &[Item], format: &FormatNombre) -> String {
    if items.is_empty() {
        return "...".to_string();
    }

    let mut descriptions = Vec::new();
    let mut reste = items;
    while !reste.is_empty() {
        let (expression, suite) = pretty_pop(reste, format);
        descriptions.push(strip_outer_parentheses(&expression).to_string());
        reste = suite;
    }
    descriptions.join(", ")
}

/// Expression du sommet seulement, préfixée "y = ". Pile vide => "".
pub fn describe_for_graphing(items: &[Item], format: &FormatNombre) -> String {
    if items.is_empty() {
        return String::new();
    }

    let (expression, _) = pretty_pop(items, format);
    format!("y = {}", strip_outer_parentheses(&expression))
}
