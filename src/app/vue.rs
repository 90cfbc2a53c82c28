// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Panneau scientifique affiché/masqué par "Sci"

use eframe::egui;

use super::etat::{AppCalc, TOUCHES_SCIENTIFIQUES, TOUCHES_STANDARD};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_actions(ui);

                if self.mode_scientifique {
                    ui.add_space(6.0);
                    self.ui_grille(ui, "pave_scientifique", &TOUCHES_SCIENTIFIQUES);
                }

                ui.add_space(6.0);
                let standard: Vec<&[&str]> = TOUCHES_STANDARD.iter().map(|r| &r[..]).collect();
                self.ui_grille(ui, "pave_standard", &standard);

                ui.add_space(8.0);
                ui.separator();
                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, sin(90), √(16), 50%")
                .id_source("expression_edit")
                .font(egui::TextStyle::Heading),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.appuyer("=");
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(&self.resultat)
                    .size(32.0)
                    .strong()
                    .color(ui.visuals().warn_fg_color),
            );
        });
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for touche in ["Sci", "AC", "DEL"] {
                self.bouton(ui, touche);
            }
            if !self.mode_scientifique {
                self.bouton(ui, "(");
                self.bouton(ui, ")");
            }

            ui.separator();

            let resp = ui
                .checkbox(&mut self.strict, "Strict")
                .on_hover_text("Refuse jetons inconnus et parenthèses non appariées");
            if resp.changed() {
                self.focus_entree = true;
            }
        });
    }

    fn ui_grille(&mut self, ui: &mut egui::Ui, id: &str, lignes: &[&[&str]]) {
        egui::Grid::new(id)
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for touche in ligne.iter() {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Jetons :");
                ui.monospace(&self.demarche.jetons);
                ui.label("RPN :");
                ui.monospace(&self.demarche.rpn);
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str) {
        if ui
            .add_sized([56.0, 40.0], egui::Button::new(touche))
            .clicked()
        {
            self.appuyer(touche);
        }
    }
}
