// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : entrée courante, résultat, ou "Error"
// - Pavé : chiffres, '.', + - * /, =, ±, C
// - Historique : liste cliquable (grisée quand le moteur n’attend pas d’opérande)
//
// La vue ne touche jamais l’état du moteur directement : tout passe par envoyer().

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::format_nombre;
use crate::noyau::{EtatMoteur, Evenement};

const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::config::TITRE_APP);
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        self.ui_historique(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let erreur = self.moteur.etat() == EtatMoteur::Erreur;
        let couleur = if erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };
        let texte = egui::RichText::new(self.ecran())
            .monospace()
            .size(28.0)
            .color(couleur);

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(texte);
                });
            });

        // Opération en attente (petit rappel sous l’écran)
        if let Some(op) = self.moteur.operation_en_attente() {
            ui.small(format!("en attente : {}", op.symbole()));
        } else if erreur {
            ui.small("C pour reprendre");
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "C", Evenement::ToutEffacer);
                self.touche(ui, "±", Evenement::ChangerSigne);
                self.touche(ui, "CLR H", Evenement::EffacerHistorique);
                self.touche(ui, "/", Evenement::Caractere('/'));
                ui.end_row();

                self.touche_char(ui, '7');
                self.touche_char(ui, '8');
                self.touche_char(ui, '9');
                self.touche_char(ui, '*');
                ui.end_row();

                self.touche_char(ui, '4');
                self.touche_char(ui, '5');
                self.touche_char(ui, '6');
                self.touche_char(ui, '-');
                ui.end_row();

                self.touche_char(ui, '1');
                self.touche_char(ui, '2');
                self.touche_char(ui, '3');
                self.touche_char(ui, '+');
                ui.end_row();

                self.touche_char(ui, '0');
                self.touche_char(ui, '.');
                ui.label("");
                self.touche(ui, "=", Evenement::Egal);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.label("Historique :");

        if self.moteur.historique().is_empty() {
            ui.monospace("(vide)");
            return;
        }

        let rappel_ok = self.moteur.rappel_possible();
        let mut clic: Option<usize> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height(180.0)
            .show(ui, |ui| {
                for (i, v) in self.moteur.historique().iter().enumerate() {
                    let b = egui::Button::new(egui::RichText::new(format_nombre(*v)).monospace());
                    let resp = ui
                        .add_enabled(rappel_ok, b)
                        .on_disabled_hover_text("Rappel possible après un opérateur ou sur écran vide");
                    if resp.clicked() {
                        clic = Some(i);
                    }
                }
            });

        if let Some(i) = clic {
            self.envoyer(Evenement::Rappel(i));
        }
    }

    fn touche_char(&mut self, ui: &mut egui::Ui, c: char) {
        let label = c.to_string();
        self.touche(ui, &label, Evenement::Caractere(c));
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, evt: Evenement) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if resp.clicked() {
            self.envoyer(evt);
        }
    }
}
