// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé RPN : chiffres, Entrée, opérations, symboles (π/e, x), mode 2nd
// - Graphe y = f(x) : glisser = déplacer, molette/pincement = zoom,
//   double-clic = origine sous le pointeur
//
// Note :
// - Aucun calcul ici : les points viennent de noyau::graphe::echantillonner.

use eframe::egui;

use calculatrice_rpn::noyau::graphe::echantillonner;

use super::etat::AppCalc;

/// Taille des touches du pavé.
const TOUCHE: [f32; 2] = [56.0, 36.0];

/// Hauteur du panneau graphe.
const HAUTEUR_GRAPHE: f32 = 320.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_parametres(ui);

                if self.afficher_graphe {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.ui_graphe(ui);
                }
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        Self::champ_monospace(ui, "affichage_entree", &self.entree, 1);
        ui.add_space(4.0);
        ui.label("Programme :");
        Self::champ_monospace(ui, "affichage_programme", &self.programme, 2);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                ui.checkbox(&mut self.second_mode, "2nd");
                self.touche_op(ui, "eˣ", "ln");
                self.touche_op(ui, "10ˣ", "log₁₀");
                self.touche_op(ui, "pow", "√");
                self.touche(ui, "C", Touche::Clear);
                ui.end_row();

                self.touche_op(ui, "sin", "sin⁻¹");
                self.touche_op(ui, "cos", "cos⁻¹");
                self.touche_op(ui, "tan", "tan⁻¹");
                let constante = self.libelle("π", "e");
                self.touche(ui, constante, Touche::Symbole(constante));
                self.touche(ui, "x", Touche::Symbole("x"));
                ui.end_row();

                self.touche(ui, "7", Touche::Chiffre('7'));
                self.touche(ui, "8", Touche::Chiffre('8'));
                self.touche(ui, "9", Touche::Chiffre('9'));
                self.touche(ui, "÷", Touche::Operation("÷"));
                self.touche(ui, "×", Touche::Operation("×"));
                ui.end_row();

                self.touche(ui, "4", Touche::Chiffre('4'));
                self.touche(ui, "5", Touche::Chiffre('5'));
                self.touche(ui, "6", Touche::Chiffre('6'));
                self.touche(ui, "-", Touche::Operation("-"));
                self.touche(ui, "+", Touche::Operation("+"));
                ui.end_row();

                self.touche(ui, "1", Touche::Chiffre('1'));
                self.touche(ui, "2", Touche::Chiffre('2'));
                self.touche(ui, "3", Touche::Chiffre('3'));
                self.touche(ui, "±", Touche::Negatif);
                self.touche(ui, "⏎", Touche::Entrer);
                ui.end_row();

                self.touche(ui, "0", Touche::Chiffre('0'));
                self.touche(ui, ".", Touche::Decimale);
                self.touche(ui, "y=", Touche::Graphe);
                ui.end_row();
            });
    }

    fn ui_parametres(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Précision :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=42)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });
    }

    fn ui_graphe(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.monospace(self.calc.description_for_graphing());
            if ui.button("Recentrer").clicked() {
                self.fenetre.reset();
            }
            if ui.button("Fermer").clicked() {
                self.afficher_graphe = false;
            }
        });

        let taille = egui::vec2(ui.available_width(), HAUTEUR_GRAPHE);
        let (resp, painter) = ui.allocate_painter(taille, egui::Sense::click_and_drag());
        let rect = resp.rect;

        let (l, h) = (rect.width() as f64, rect.height() as f64);
        if self.fenetre.largeur != l || self.fenetre.hauteur != h {
            self.fenetre.redimensionner(l, h);
        }

        // --- gestes ---
        if resp.dragged() {
            let d = resp.drag_delta();
            self.fenetre.deplacer(d.x as f64, d.y as f64);
        }
        if resp.hovered() {
            let (zoom, molette) = ui.input(|i| (i.zoom_delta(), i.smooth_scroll_delta.y));
            if zoom != 1.0 {
                self.fenetre.zoomer(zoom as f64);
            } else if molette != 0.0 {
                self.fenetre.zoomer((molette as f64 / 200.0).exp());
            }
        }
        if resp.double_clicked() {
            if let Some(p) = resp.interact_pointer_pos() {
                self.fenetre
                    .recentrer((p.x - rect.min.x) as f64, (p.y - rect.min.y) as f64);
            }
        }

        // --- dessin ---
        let visuals = ui.visuals();
        painter.rect_filled(rect, 0.0, visuals.extreme_bg_color);

        let axes = egui::Stroke::new(1.0, visuals.weak_text_color());
        let (ox, oy) = (
            rect.min.x + self.fenetre.origine.0 as f32,
            rect.min.y + self.fenetre.origine.1 as f32,
        );
        if (rect.min.y..=rect.max.y).contains(&oy) {
            painter.line_segment([egui::pos2(rect.min.x, oy), egui::pos2(rect.max.x, oy)], axes);
        }
        if (rect.min.x..=rect.max.x).contains(&ox) {
            painter.line_segment([egui::pos2(ox, rect.min.y), egui::pos2(ox, rect.max.y)], axes);
        }

        let pas = 1.0 / ui.ctx().pixels_per_point() as f64;
        let courbe = egui::Stroke::new(1.5, visuals.strong_text_color());
        let dessin = painter.with_clip_rect(rect);
        for segment in echantillonner(&self.calc, &self.fenetre, pas) {
            let points: Vec<egui::Pos2> = segment
                .into_iter()
                .map(|(x, y)| egui::pos2(rect.min.x + x, rect.min.y + y))
                .collect();
            if points.len() > 1 {
                dessin.add(egui::Shape::line(points, courbe));
            }
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /// Touche d’opération à double libellé (mode 2nd).
    fn touche_op(&mut self, ui: &mut egui::Ui, normal: &'static str, second: &'static str) {
        let s = self.libelle(normal, second);
        self.touche(ui, s, Touche::Operation(s));
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TOUCHE, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Decimale => self.decimale(),
            Touche::Negatif => self.negatif(),
            Touche::Entrer => self.entrer(),
            Touche::Symbole(s) => self.symbole(s),
            Touche::Operation(s) => self.operation(s),
            Touche::Clear => self.clear(),
            Touche::Graphe => self.graphe(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Decimale,
    Negatif,
    Entrer,
    Symbole(&'static str),
    Operation(&'static str),
    Clear,
    Graphe,
}
