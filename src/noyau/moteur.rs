//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice : une machine à deux états (Prêt / Erreur) sur une
//! seule chaîne d’entrée.
//!
//! Contrats :
//! - Aucune évaluation avec priorité : deux opérandes, un opérateur, calcul immédiat.
//! - Au plus UN opérateur binaire en attente dans l’entrée (les chaînes sont
//!   repliées tout de suite : remplacement ou évaluation implicite).
//! - En état Erreur, tout est refusé sauf `clear()`.
//! - L’historique ne grandit que sur un succès et ne rétrécit que via `clear_historique()`.

use tracing::{debug, info, warn};

use super::analyse::analyser;
use super::erreur::ErreurEvaluation;
use super::format::{est_jeton_numerique, format_nombre};
use super::operateur::{est_operateur, Operateur};

/// Jeton affiché quand une évaluation échoue.
pub const JETON_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtatMoteur {
    Pret,
    Erreur,
}

/// Événements d’entrée (frontière avec la présentation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    /// Chiffre, '.', ou opérateur `+ - * /`.
    Caractere(char),
    Egal,
    ChangerSigne,
    ToutEffacer,
    EffacerHistorique,
    /// Rappel d’une entrée d’historique (index, plus ancien = 0).
    Rappel(usize),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Moteur {
    entree: String,
    operation: Option<Operateur>,
    erreur: bool,
    historique: Vec<f64>,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Requêtes ------------------------ */

    /// Ce que l’écran doit montrer : l’entrée, ou "Error".
    pub fn affichage(&self) -> &str {
        if self.erreur {
            JETON_ERREUR
        } else {
            &self.entree
        }
    }

    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn operation_en_attente(&self) -> Option<Operateur> {
        self.operation
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur
    }

    pub fn etat(&self) -> EtatMoteur {
        if self.erreur {
            EtatMoteur::Erreur
        } else {
            EtatMoteur::Pret
        }
    }

    /// Résultats passés, plus ancien en premier.
    pub fn historique(&self) -> &[f64] {
        &self.historique
    }

    /// Le moteur attend-il un nouvel opérande ? (entrée vide ou finie par un opérateur)
    pub fn rappel_possible(&self) -> bool {
        !self.erreur && self.entree.chars().last().map_or(true, est_operateur)
    }

    /* ------------------------ Dispatch ------------------------ */

    pub fn traiter(&mut self, evt: Evenement) {
        match evt {
            Evenement::Caractere(c) => self.soumettre(c),
            Evenement::Egal => self.evaluer(),
            Evenement::ChangerSigne => self.changer_signe(),
            Evenement::ToutEffacer => self.clear(),
            Evenement::EffacerHistorique => self.clear_historique(),
            Evenement::Rappel(i) => self.rappeler(i),
        }
    }

    /* ------------------------ Opérations ------------------------ */

    /// Chiffre / '.' : ajout tel quel. Opérateur : voir les quatre cas ci-dessous.
    pub fn soumettre(&mut self, c: char) {
        if self.erreur {
            debug!(%c, "saisie refusée (état Erreur)");
            return;
        }

        if c.is_ascii_digit() || c == '.' {
            self.entree.push(c);
            return;
        }

        let Some(op) = Operateur::depuis_char(c) else {
            debug!(%c, "caractère ignoré");
            return;
        };

        let dernier = self.entree.chars().last();

        match dernier {
            // 1) '-' sur entrée vide : signe du premier opérande
            None if op == Operateur::Moins => {
                self.entree.push(c);
            }

            // 2) opérateur après opérateur : seul le plus récent compte
            Some(d) if est_operateur(d) => {
                self.entree.pop();
                self.entree.push(c);
                self.operation = Some(op);
            }

            // 3) opération déjà en attente + second opérande tapé : on replie
            Some(_) if self.operation.is_some() => {
                self.evaluer();
                if self.erreur {
                    return;
                }
                self.entree.push(c);
                self.operation = Some(op);
            }

            // 4) premier opérateur de l’expression
            _ => {
                self.entree.push(c);
                self.operation = Some(op);
            }
        }
    }

    /// Évalue l’opération en attente. Sans opération en attente : rien à faire.
    pub fn evaluer(&mut self) {
        if self.erreur {
            debug!("évaluation refusée (état Erreur)");
            return;
        }

        let Some(op) = self.operation else {
            debug!(entree = %self.entree, "aucune opération en attente");
            return;
        };

        match analyser(&self.entree, op).and_then(|b| b.calculer()) {
            Ok(r) => self.deposer_resultat(r),
            Err(e) => self.passer_en_erreur(e),
        }
    }

    /// ± : seulement si l’entrée est UN nombre, sans opération en attente (sinon no-op).
    pub fn changer_signe(&mut self) {
        if self.erreur || self.entree.is_empty() {
            return;
        }

        // "-5" avec '-' en attente (saisie "--5") n’est pas un nombre seul
        if self.operation.is_some() || !est_jeton_numerique(&self.entree) {
            debug!(entree = %self.entree, "± ignoré : l’entrée n’est pas un nombre seul");
            return;
        }

        if let Ok(x) = self.entree.parse::<f64>() {
            self.entree = format_nombre(-x);
        }
    }

    /// C : remet l’entrée à zéro et sort de l’état Erreur. Historique intact.
    pub fn clear(&mut self) {
        self.entree.clear();
        self.operation = None;
        self.erreur = false;
    }

    pub fn clear_historique(&mut self) {
        if self.erreur {
            return;
        }
        self.historique.clear();
    }

    /// Réinjecte l’entrée d’historique `index` comme nouvel opérande.
    pub fn rappeler(&mut self, index: usize) {
        if !self.rappel_possible() {
            debug!(index, "rappel refusé");
            return;
        }

        let Some(&valeur) = self.historique.get(index) else {
            warn!(index, taille = self.historique.len(), "rappel hors historique");
            return;
        };

        self.entree.push_str(&format_nombre(valeur));
    }

    /* ------------------------ Utilitaires internes ------------------------ */

    fn deposer_resultat(&mut self, r: f64) {
        info!(entree = %self.entree, resultat = r, "évaluation");
        self.historique.push(r);
        self.entree = format_nombre(r);
        self.operation = None;
    }

    fn passer_en_erreur(&mut self, e: ErreurEvaluation) {
        warn!(entree = %self.entree, erreur = %e, "évaluation impossible");
        self.erreur = true;
        self.entree.clear();
        self.operation = None;
    }
}
