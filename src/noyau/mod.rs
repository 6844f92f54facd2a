//! Noyau de la calculatrice séquentielle
//!
//! Organisation interne :
//! - operateur.rs : + - * / (typé) + application sur Float
//! - analyse.rs   : découpage de l’entrée + validation des opérandes
//! - format.rs    : forme texte par défaut des résultats
//! - erreur.rs    : ErreurEvaluation (le seul type d’erreur)
//! - moteur.rs    : machine à états Prêt / Erreur + historique
//! - clavier.rs   : touches -> événements

pub mod analyse;
pub mod clavier;
pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operateur;

#[cfg(test)]
mod tests_moteur;



// API publique minimale
pub use moteur::{EtatMoteur, Evenement, Moteur};
