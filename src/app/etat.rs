//! src/app/etat.rs
//!
//! État UI de la calculatrice RPN (sans vue).
//!
//! Rôle : contenir la saisie en cours, la ligne “programme”, le mode 2nd, le graphe,
//! et traduire chaque touche en appels au noyau (push_value / push_symbol /
//! push_operation / clear).
//!
//! Contrats :
//! - Aucune logique d’évaluation ici : tout passe par `Calculatrice`.
//! - Une saisie en cours est validée (Entrée) avant symbole / opération / graphe.
//! - Après chaque action : l’affichage montre le résultat évalué (si pas de saisie)
//!   et la ligne programme montre `description()`.
//! - Défense en profondeur : bornes sur la précision d’affichage (digits).

use calculatrice_rpn::noyau::graphe::Fenetre;
use calculatrice_rpn::noyau::nombres::MAX_CHIFFRES;
use calculatrice_rpn::Calculatrice;

/// Chiffres après la virgule affichés par défaut.
const DIGITS_DEFAUT: usize = 12;

/// Garde-fou : même borne que le formateur.
const DIGITS_MAX: usize = MAX_CHIFFRES;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- affichage ---
    pub entree: String,      // nombre saisi OU dernier résultat
    pub programme: String,   // description() de la pile

    // --- saisie ---
    pub saisie_en_cours: bool,
    pub decimale_presente: bool,

    // --- touches ---
    pub second_mode: bool, // eˣ->ln, 10ˣ->log₁₀, pow->√, trig->inverse, π->e

    // --- graphe ---
    pub afficher_graphe: bool,
    pub fenetre: Fenetre, // taille réelle fixée par la vue (redimensionner)

    // --- paramètres ---
    pub digits: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        let mut app = Self {
            calc: Calculatrice::new(),
            entree: String::new(),
            programme: String::new(),
            saisie_en_cours: false,
            decimale_presente: false,
            second_mode: false,
            afficher_graphe: false,
            fenetre: Fenetre::new(0.0, 0.0),
            digits: DIGITS_DEFAUT,
        };
        app.set_digits(DIGITS_DEFAUT);
        app.entree = app.texte(0.0);
        app
    }
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Chiffre : ajouté si saisie en cours ; sinon démarre une saisie (sauf "0").
    pub fn chiffre(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if self.saisie_en_cours {
            self.entree.push(c);
        } else if c != '0' {
            self.entree = c.to_string();
            self.saisie_en_cours = true;
        }
    }

    /// Séparateur décimal : une seule fois par nombre.
    pub fn decimale(&mut self) {
        if self.decimale_presente {
            return;
        }
        let sep = self.calc.format().separateur_decimal;
        if self.saisie_en_cours {
            self.entree.push(sep);
        } else {
            self.entree = format!("0{sep}");
            self.saisie_en_cours = true;
        }
        self.decimale_presente = true;
    }

    /// ± : seulement pendant la saisie (bascule du signe en tête).
    pub fn negatif(&mut self) {
        if !self.saisie_en_cours {
            return;
        }
        match self.entree.strip_prefix('-') {
            Some(reste) => self.entree = reste.to_string(),
            None => self.entree.insert(0, '-'),
        }
    }

    /// Valeur de l’affichage ; illisible => 0.
    pub fn valeur_entree(&self) -> f64 {
        self.calc.number_from_string(&self.entree).unwrap_or(0.0)
    }

    /* ------------------------ Touches noyau ------------------------ */

    /// Entrée : pousse la saisie ; le texte tapé reste affiché tel quel ("1.50").
    pub fn entrer(&mut self) {
        let v = self.valeur_entree();
        self.calc.push_value(v);
        self.maj_affichage();
        self.saisie_en_cours = false;
        self.decimale_presente = false;
    }

    pub fn symbole(&mut self, s: &str) {
        if self.saisie_en_cours {
            self.entrer();
        }
        self.calc.push_symbol(s);
        self.maj_affichage();
    }

    pub fn operation(&mut self, s: &str) {
        if self.saisie_en_cours {
            self.entrer();
        }
        self.calc.push_operation(s);
        self.maj_affichage();
    }

    /// C : pile vidée, affichage à 0.
    pub fn clear(&mut self) {
        self.calc.clear();
        self.saisie_en_cours = false;
        self.decimale_presente = false;
        self.maj_affichage();
        self.entree = self.texte(0.0);
    }

    pub fn graphe(&mut self) {
        if self.saisie_en_cours {
            self.entrer();
        }
        self.maj_affichage();
        self.afficher_graphe = true;
    }

    /* ------------------------ Paramètres ------------------------ */

    /// Garde-fou : limite digits ; le formateur du noyau suit.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, DIGITS_MAX);
        let format = self
            .calc
            .format()
            .clone()
            .avec_max_chiffres_fraction(self.digits);
        self.calc.set_format(format);
        self.maj_affichage();
    }

    /// Libellé d’une touche selon le mode 2nd.
    pub fn libelle<'a>(&self, normal: &'a str, second: &'a str) -> &'a str {
        if self.second_mode {
            second
        } else {
            normal
        }
    }

    /* ------------------------ Affichage ------------------------ */

    fn maj_affichage(&mut self) {
        if !self.saisie_en_cours {
            if let Some(v) = self.calc.evaluate() {
                self.entree = self.texte(v);
            }
        }
        self.programme = self.calc.description();
    }

    /// Texte d’un nombre ; non affichable (∞, NaN, trop long) => affichage brut.
    fn texte(&self, v: f64) -> String {
        self.calc.string_from_number(v).unwrap_or_else(|| v.to_string())
    }
}
