// src/noyau/graphe.rs
//
// Échantillonnage de y = f(x) pour le tracé.
//
// - Fenêtre en POINTS écran : origine (position de (0,0)) + échelle points/unité.
// - f(x) = sommet de la pile évalué avec {"x": x}.
// - Valeur absente ou non finie => coupure du tracé (nouveau segment).
// - Point trop loin hors fenêtre (tolérance) => coupure aussi.

use std::collections::HashMap;

use super::calculatrice::Calculatrice;

pub const POINTS_PAR_UNITE_DEFAUT: f64 = 10.0;

/// Garde-fous zoom.
const POINTS_PAR_UNITE_MIN: f64 = 1e-3;
const POINTS_PAR_UNITE_MAX: f64 = 1e6;

/// Garde-fous échantillonnage : au plus 16 évaluations par point écran,
/// et un plafond absolu par tracé.
const PAS_MIN: f64 = 1.0 / 16.0;
const ECHANTILLONS_MAX: usize = 1 << 20;

/// Nom de la variable libre du graphe.
pub const VARIABLE: &str = "x";

#[derive(Clone, Debug, PartialEq)]
pub struct Fenetre {
    pub origine: (f64, f64),
    pub points_par_unite: f64,
    pub largeur: f64,
    pub hauteur: f64,
}

impl Fenetre {
    /// Origine au centre, échelle par défaut.
    pub fn new(largeur: f64, hauteur: f64) -> Self {
        Self {
            origine: (largeur / 2.0, hauteur / 2.0),
            points_par_unite: POINTS_PAR_UNITE_DEFAUT,
            largeur,
            hauteur,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.largeur, self.hauteur);
    }

    /// Nouvelle taille d’écran ; l’origine garde sa position relative.
    pub fn redimensionner(&mut self, largeur: f64, hauteur: f64) {
        if self.largeur > 0.0 && self.hauteur > 0.0 {
            self.origine.0 *= largeur / self.largeur;
            self.origine.1 *= hauteur / self.hauteur;
        } else {
            self.origine = (largeur / 2.0, hauteur / 2.0);
        }
        self.largeur = largeur;
        self.hauteur = hauteur;
    }

    pub fn deplacer(&mut self, dx: f64, dy: f64) {
        self.origine.0 += dx;
        self.origine.1 += dy;
    }

    pub fn zoomer(&mut self, facteur: f64) {
        if facteur.is_finite() && facteur > 0.0 {
            self.points_par_unite =
                (self.points_par_unite * facteur).clamp(POINTS_PAR_UNITE_MIN, POINTS_PAR_UNITE_MAX);
        }
    }

    pub fn recentrer(&mut self, x: f64, y: f64) {
        self.origine = (x, y);
    }

    pub fn x_en_unites(&self, x_points: f64) -> f64 {
        (x_points - self.origine.0) / self.points_par_unite
    }

    pub fn y_en_points(&self, y_unites: f64) -> f64 {
        self.origine.1 - y_unites * self.points_par_unite
    }

    fn tolerance(&self) -> f64 {
        (100.0 / self.points_par_unite).max(100.0)
    }

    fn contient_a_peu_pres(&self, x: f64, y: f64) -> bool {
        let t = self.tolerance();
        x >= -t && x <= self.largeur + t && y >= -t && y <= self.hauteur + t
    }
}

/// Polylignes (en points écran) de la courbe du sommet de pile.
///
/// `pas` : avance horizontale en points (ex. 1 / facteur d’échelle de l’écran),
/// ramenée à `PAS_MIN` si plus fine.
pub fn echantillonner(calc: &Calculatrice, fenetre: &Fenetre, pas: f64) -> Vec<Vec<(f32, f32)>> {
    let mut segments: Vec<Vec<(f32, f32)>> = Vec::new();
    if !calc.has_program()
        || !pas.is_finite()
        || pas <= 0.0
        || !fenetre.largeur.is_finite()
        || fenetre.largeur <= 0.0
    {
        return segments;
    }

    let mut variables = HashMap::with_capacity(1);
    let mut courant: Vec<(f32, f32)> = Vec::new();

    let pas = pas.max(PAS_MIN);
    let n = ((fenetre.largeur / pas).ceil() as usize).min(ECHANTILLONS_MAX);
    for i in 0..n {
        let x_points = i as f64 * pas;
        variables.insert(VARIABLE.to_string(), fenetre.x_en_unites(x_points));

        let point = calc
            .evaluate_for_variable_values(&variables)
            .filter(|y| y.is_finite())
            .map(|y| (x_points, fenetre.y_en_points(y)))
            .filter(|&(x, y)| fenetre.contient_a_peu_pres(x, y));

        match point {
            Some((x, y)) => courant.push((x as f32, y as f32)),
            None => {
                if !courant.is_empty() {
                    segments.push(std::mem::take(&mut courant));
                }
            }
        }
    }

    if !courant.is_empty() {
        segments.push(courant);
    }
    segments
}
