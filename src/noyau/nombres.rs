// src/noyau/nombres.rs
//
// Formateur nombre <-> texte (style “décimal”).
// - un seul séparateur décimal
// - séparateur de milliers optionnel (groupes de 3)
// - bornes fixes sur le nombre de chiffres (entiers / fraction)
//
// Échec = None (jamais de panique) :
// - texte illisible (deux séparateurs, exposant, vide…)
// - nombre non fini, ou partie entière trop longue

/// Garde-fou : borne sur les chiffres (entiers et fraction).
pub const MAX_CHIFFRES: usize = 42;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatNombre {
    pub separateur_decimal: char,
    pub separateur_milliers: Option<char>,
    pub max_chiffres_fraction: usize,
    pub max_chiffres_entiers: usize,
}

impl Default for FormatNombre {
    fn default() -> Self {
        Self {
            separateur_decimal: '.',
            separateur_milliers: Some(','),
            max_chiffres_fraction: MAX_CHIFFRES,
            max_chiffres_entiers: MAX_CHIFFRES,
        }
    }
}

impl FormatNombre {
    /// Précision d’affichage bornée à [0, MAX_CHIFFRES].
    pub fn avec_max_chiffres_fraction(mut self, chiffres: usize) -> Self {
        self.max_chiffres_fraction = chiffres.min(MAX_CHIFFRES);
        self
    }

    pub fn avec_separateurs(mut self, decimal: char, milliers: Option<char>) -> Self {
        self.separateur_decimal = decimal;
        self.separateur_milliers = milliers.filter(|&c| c != decimal);
        self
    }

    /* ------------------------ Nombre -> texte ------------------------ */

    /// Représentation décimale la plus courte (aller-retour exact), arrondie
    /// à `max_chiffres_fraction`, zéros finaux retirés, partie entière groupée.
    pub fn string_from_number(&self, nombre: f64) -> Option<String> {
        if !nombre.is_finite() {
            return None;
        }

        // Display de f64 : jamais d’exposant, représentation la plus courte.
        let mut brut = format!("{}", nombre.abs());
        let frac_len = brut.split_once('.').map_or(0, |(_, f)| f.len());
        if frac_len > self.max_chiffres_fraction {
            brut = format!("{:.*}", self.max_chiffres_fraction, nombre.abs());
            if brut.contains('.') {
                let coupe = brut.trim_end_matches('0').trim_end_matches('.').len();
                brut.truncate(coupe);
            }
        }

        let (entiers, fraction) = match brut.split_once('.') {
            Some((e, f)) => (e, f),
            None => (brut.as_str(), ""),
        };

        if entiers.len() > self.max_chiffres_entiers {
            return None;
        }

        // -0 (ou négatif arrondi à zéro) : pas de signe
        let est_zero = entiers.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
        let mut out = String::with_capacity(brut.len() + entiers.len() / 3 + 1);
        if nombre.is_sign_negative() && !est_zero {
            out.push('-');
        }

        out.push_str(&self.grouper(entiers));
        if !fraction.is_empty() {
            out.push(self.separateur_decimal);
            out.push_str(fraction);
        }
        Some(out)
    }

    fn grouper(&self, entiers: &str) -> String {
        let Some(sep) = self.separateur_milliers else {
            return entiers.to_string();
        };

        let n = entiers.len();
        let mut out = String::with_capacity(n + n / 3);
        for (i, c) in entiers.chars().enumerate() {
            if i > 0 && (n - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(c);
        }
        out
    }

    /* ------------------------ Texte -> nombre ------------------------ */

    /// Lecture stricte : `-`? chiffres (milliers entre chiffres) [décimal chiffres*].
    /// Au moins un chiffre ; pas d’exposant, pas d’espaces, pas de `inf`/`NaN`.
    pub fn number_from_string(&self, texte: &str) -> Option<f64> {
        let (negatif, corps) = match texte.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, texte),
        };

        let chars: Vec<char> = corps.chars().collect();
        let mut normalise = String::with_capacity(chars.len() + 1);
        if negatif {
            normalise.push('-');
        }

        let mut chiffres = 0usize;
        let mut decimale_vue = false;

        for (i, &c) in chars.iter().enumerate() {
            if c.is_ascii_digit() {
                normalise.push(c);
                chiffres += 1;
            } else if c == self.separateur_decimal {
                if decimale_vue {
                    return None;
                }
                decimale_vue = true;
                normalise.push('.');
            } else if Some(c) == self.separateur_milliers {
                // séparateur de milliers : seulement entre deux chiffres, avant la décimale
                let avant = i > 0 && chars[i - 1].is_ascii_digit();
                let apres = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
                if decimale_vue || !avant || !apres {
                    return None;
                }
            } else {
                return None;
            }
        }

        if chiffres == 0 {
            return None;
        }
        normalise.parse::<f64>().ok()
    }
}
