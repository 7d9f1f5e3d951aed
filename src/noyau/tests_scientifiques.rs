//! Tests scientifiques (campagne) : propriétés du moteur RPN.
//!
//! Suites d’actions aléatoires (proptest), tailles bornées :
//! - has_program <=> au moins un push accepté depuis la construction / le dernier clear
//! - push_operation sous-alimenté : la pile ne bouge pas
//! - symbole inconnu n’importe où dans l’arbre => None
//! - une expression bien formée s’évalue comme l’arbre qui l’a produite
//! - évaluer / décrire ne touche jamais la pile

use std::collections::HashMap;

use proptest::prelude::*;

use super::Calculatrice;

const UNAIRES: &[&str] = &[
    "eˣ", "ln", "10ˣ", "log₁₀", "√", "sin", "cos", "tan", "sin⁻¹", "cos⁻¹", "tan⁻¹",
];
const BINAIRES: &[&str] = &["+", "-", "×", "÷", "pow"];

/// Symbole jamais lié.
const INCONNU: &str = "zz";

/* ------------------------ Actions (suites de touches) ------------------------ */

#[derive(Clone, Debug)]
enum Action {
    Valeur(f64),
    Symbole(String),
    Operation(String),
    Clear,
}

fn action() -> impl Strategy<Value = Action> {
    let operations: Vec<String> = UNAIRES
        .iter()
        .chain(BINAIRES)
        .chain(&["mod", "", "SIN"])
        .map(|s| (*s).to_string())
        .collect();

    prop_oneof![
        4 => (-1e6f64..1e6).prop_map(Action::Valeur),
        2 => prop::sample::select(vec!["x", "π", "e", INCONNU]).prop_map(|s| Action::Symbole(s.to_string())),
        5 => prop::sample::select(operations).prop_map(Action::Operation),
        1 => Just(Action::Clear),
    ]
}

fn arite(symbole: &str) -> Option<usize> {
    if UNAIRES.contains(&symbole) {
        Some(1)
    } else if BINAIRES.contains(&symbole) {
        Some(2)
    } else {
        None
    }
}

/* ------------------------ Arbres (expressions bien formées) ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Val(f64),
    Sym(&'static str),
    Un(&'static str, Box<Arbre>),
    Bin(&'static str, Box<Arbre>, Box<Arbre>),
}

fn arbre_avec(feuille: BoxedStrategy<Arbre>) -> impl Strategy<Value = Arbre> {
    feuille.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (prop::sample::select(UNAIRES.to_vec()), inner.clone())
                .prop_map(|(s, a)| Arbre::Un(s, Box::new(a))),
            (prop::sample::select(BINAIRES.to_vec()), inner.clone(), inner)
                .prop_map(|(s, a, b)| Arbre::Bin(s, Box::new(a), Box::new(b))),
        ]
    })
}

fn arbre() -> impl Strategy<Value = Arbre> {
    arbre_avec(
        prop_oneof![
            (-100.0f64..100.0).prop_map(Arbre::Val),
            prop::sample::select(vec!["x", "π", "e"]).prop_map(Arbre::Sym),
        ]
        .boxed(),
    )
}

fn arbre_avec_inconnu() -> impl Strategy<Value = Arbre> {
    arbre_avec(
        prop_oneof![
            (-100.0f64..100.0).prop_map(Arbre::Val),
            Just(Arbre::Sym("x")),
            Just(Arbre::Sym(INCONNU)),
        ]
        .boxed(),
    )
    .prop_filter("au moins un symbole inconnu", contient_inconnu)
}

fn contient_inconnu(a: &Arbre) -> bool {
    match a {
        Arbre::Val(_) => false,
        Arbre::Sym(s) => *s == INCONNU,
        Arbre::Un(_, x) => contient_inconnu(x),
        Arbre::Bin(_, g, d) => contient_inconnu(g) || contient_inconnu(d),
    }
}

fn pousser(c: &mut Calculatrice, a: &Arbre) {
    match a {
        Arbre::Val(v) => c.push_value(*v),
        Arbre::Sym(s) => c.push_symbol(*s),
        Arbre::Un(s, x) => {
            pousser(c, x);
            c.push_operation(s);
        }
        Arbre::Bin(s, g, d) => {
            pousser(c, g);
            pousser(c, d);
            c.push_operation(s);
        }
    }
}

/// Modèle de référence (std seulement), même ordre d’opérations que le moteur.
fn modele(a: &Arbre, x: f64) -> f64 {
    match a {
        Arbre::Val(v) => *v,
        Arbre::Sym("x") => x,
        Arbre::Sym("π") => std::f64::consts::PI,
        Arbre::Sym("e") => std::f64::consts::E,
        Arbre::Sym(s) => panic!("symbole hors modèle: {s}"),
        Arbre::Un(s, a) => {
            let v = modele(a, x);
            match *s {
                "eˣ" => v.exp(),
                "ln" => v.ln(),
                "10ˣ" => 10f64.powf(v),
                "log₁₀" => v.log10(),
                "√" => v.sqrt(),
                "sin" => v.sin(),
                "cos" => v.cos(),
                "tan" => v.tan(),
                "sin⁻¹" => v.asin(),
                "cos⁻¹" => v.acos(),
                "tan⁻¹" => v.atan(),
                _ => panic!("unaire hors modèle: {s}"),
            }
        }
        Arbre::Bin(s, g, d) => {
            let (g, d) = (modele(g, x), modele(d, x));
            match *s {
                "+" => g + d,
                "-" => g - d,
                "×" => g * d,
                "÷" => g / d,
                "pow" => g.powf(d),
                _ => panic!("binaire hors modèle: {s}"),
            }
        }
    }
}

fn meme_flottant(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

fn vars_x(x: f64) -> HashMap<String, f64> {
    HashMap::from([("x".to_string(), x)])
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sci_has_program_suit_les_push_acceptes(actions in prop::collection::vec(action(), 0..60)) {
        let mut c = Calculatrice::new();
        let mut attendu = 0usize;

        for a in &actions {
            let avant = c.items().len();
            match a {
                Action::Valeur(v) => {
                    c.push_value(*v);
                    attendu += 1;
                }
                Action::Symbole(s) => {
                    c.push_symbol(s.as_str());
                    attendu += 1;
                }
                Action::Operation(s) => {
                    c.push_operation(s);
                    match arite(s) {
                        Some(n) if avant >= n => attendu += 1,
                        // inconnue ou sous-alimentée : aucune mutation
                        _ => {
                            prop_assert_eq!(c.items().len(), avant);
                        }
                    }
                }
                Action::Clear => {
                    c.clear();
                    attendu = 0;
                }
            }

            prop_assert_eq!(c.items().len(), attendu);
            prop_assert_eq!(c.has_program(), attendu > 0);
        }
    }

    #[test]
    fn sci_lecture_seule(actions in prop::collection::vec(action(), 0..40)) {
        let mut c = Calculatrice::new();
        for a in &actions {
            match a {
                Action::Valeur(v) => c.push_value(*v),
                Action::Symbole(s) => c.push_symbol(s.as_str()),
                Action::Operation(s) => c.push_operation(s),
                Action::Clear => c.clear(),
            }
        }

        let desc = c.description();
        let graphe = c.description_for_graphing();
        let r1 = c.evaluate_for_variable_values(&vars_x(1.5));
        let r2 = c.evaluate_for_variable_values(&vars_x(1.5));

        prop_assert_eq!(c.description(), desc.clone());
        prop_assert_eq!(c.description_for_graphing(), graphe.clone());
        prop_assert_eq!(r1.is_some(), r2.is_some());
        if let (Some(a), Some(b)) = (r1, r2) {
            prop_assert!(meme_flottant(a, b));
        }

        if c.has_program() {
            prop_assert!(graphe.starts_with("y = "));
            prop_assert_ne!(desc, "...");
        } else {
            prop_assert_eq!(graphe, "");
            prop_assert_eq!(desc, "...");
        }
    }

    #[test]
    fn sci_arbre_bien_forme_comme_le_modele(a in arbre(), x in -10.0f64..10.0) {
        let mut c = Calculatrice::new();
        pousser(&mut c, &a);

        let r = c.evaluate_for_variable_values(&vars_x(x));
        prop_assert!(r.is_some(), "arbre sans inconnu devrait s’évaluer: {:?}", a);
        let attendu = modele(&a, x);
        let obtenu = r.unwrap_or(f64::NAN);
        prop_assert!(meme_flottant(obtenu, attendu), "obtenu={} attendu={}", obtenu, attendu);

        // une seule expression : pas de virgule de séparation au niveau racine
        prop_assert!(!c.description().contains(", "));
    }

    #[test]
    fn sci_inconnu_rend_absent(a in arbre_avec_inconnu(), x in -10.0f64..10.0) {
        let mut c = Calculatrice::new();
        pousser(&mut c, &a);
        prop_assert_eq!(c.evaluate_for_variable_values(&vars_x(x)), None);
    }

    #[test]
    fn sci_inconnu_sous_une_branche_saine(a in arbre(), b in arbre(), op in prop::sample::select(BINAIRES.to_vec())) {
        // la branche gauche est évaluable seule, la droite ne l’est pas
        let mut c = Calculatrice::new();
        pousser(&mut c, &a);
        pousser(&mut c, &Arbre::Un("sin", Box::new(Arbre::Bin("+", Box::new(b), Box::new(Arbre::Sym(INCONNU))))));
        c.push_operation(op);
        prop_assert_eq!(c.evaluate_for_variable_values(&vars_x(0.5)), None);
    }
}

/* ------------------------ Cas ciblés ------------------------ */

#[test]
fn sci_pile_profonde_bornee() {
    // 500 additions en chaîne, penchées à gauche
    let mut c = Calculatrice::new();
    c.push_value(0.0);
    for _ in 0..500 {
        c.push_value(1.0);
        c.push_operation("+");
    }
    assert_eq!(c.evaluate(), Some(500.0));
    assert!(c.description().starts_with("((((("));
}

#[test]
fn sci_chaine_de_100k_sinus() {
    const N: usize = 100_000;
    let mut c = Calculatrice::new();
    c.push_value(0.5);
    for _ in 0..N {
        c.push_operation("sin");
    }
    assert_eq!(c.items().len(), N + 1);

    let attendu = (0..N).fold(0.5f64, |v, _| v.sin());
    assert_eq!(c.evaluate(), Some(attendu));
    assert_eq!(
        c.evaluate_for_variable_values(&vars_x(2.0)),
        Some(attendu)
    );

    let desc = c.description();
    assert_eq!(desc.len(), "sin(".len() * N + "0.5".len() + N);
    assert!(desc.starts_with("sin(sin(sin("));
    assert!(desc.ends_with("(0.5)))"));
    assert_eq!(c.description_for_graphing(), format!("y = {desc}"));
    assert_eq!(c.to_string(), desc);
}

#[test]
fn sci_additions_profondes_des_deux_cotes() {
    const N: usize = 100_000;

    // penchée à droite : 1 + (1 + (1 + ...)), tous les opérandes droits en attente
    let mut droite = Calculatrice::new();
    for _ in 0..=N {
        droite.push_value(1.0);
    }
    for _ in 0..N {
        droite.push_operation("+");
    }
    assert_eq!(droite.evaluate(), Some((N + 1) as f64));
    assert!(droite.description().starts_with("1 + (1 + (1 + "));

    // penchée à gauche, avec un symbole inconnu tout en bas : échec propagé
    let mut gauche = Calculatrice::new();
    gauche.push_symbol(INCONNU);
    for _ in 0..N {
        gauche.push_symbol("x");
        gauche.push_operation("×");
    }
    assert_eq!(gauche.evaluate_for_variable_values(&vars_x(1.0)), None);
    assert!(gauche.description().starts_with("zz × x × x"));
}

#[test]
fn sci_constante_pi_masque_variable() {
    let mut c = Calculatrice::new();
    c.push_symbol("π");
    c.push_value(2.0);
    c.push_operation("×");
    let r = c.evaluate_for_variable_values(&HashMap::from([("π".to_string(), 1.0)]));
    assert_eq!(r, Some(2.0 * std::f64::consts::PI));
}
