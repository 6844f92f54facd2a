//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur et servir de point de passage unique pour les
//! événements (boutons + clavier). Aucune logique de calcul ici.

use tracing::trace;

use crate::noyau::{Evenement, Moteur};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,
}

impl AppCalc {
    /// Transmet un événement au moteur.
    pub fn envoyer(&mut self, evt: Evenement) {
        trace!(?evt, "événement");
        self.moteur.traiter(evt);
    }

    /// Texte de l’écran principal ("0" quand l’entrée est vide).
    pub fn ecran(&self) -> &str {
        let a = self.moteur.affichage();
        if a.is_empty() {
            "0"
        } else {
            a
        }
    }
}
