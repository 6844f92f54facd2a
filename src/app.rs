// src/app.rs
//
// Calculatrice séquentielle — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : texte -> noyau::clavier, Enter -> "=", ESC -> "C"

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::clavier::evenement_pour_texte;
use crate::noyau::Evenement;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de champ texte éditable : toute frappe va au moteur.
        let evenements: Vec<Evenement> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => evenement_pour_texte(t),
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => Some(Evenement::Egal),
                    egui::Event::Key {
                        key: egui::Key::Escape,
                        pressed: true,
                        ..
                    } => Some(Evenement::ToutEffacer),
                    _ => None,
                })
                .collect()
        });

        for evt in evenements {
            self.envoyer(evt);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
