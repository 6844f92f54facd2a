// src/noyau/erreur.rs
//
// Erreur d’évaluation : le seul type d’erreur du noyau.
// Elle ne remonte jamais jusqu’à l’UI : le moteur la capture en état (drapeau
// d’erreur) et n’affiche que le jeton "Error".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEvaluation {
    /// Segment d’opérande vide ou qui n’est pas un nombre (ex: "", ".", "1.2.3").
    #[error("opérande invalide : {0:?}")]
    OperandeInvalide(String),

    /// L’opérateur en attente ne figure pas dans l’entrée (ex: "-" seul).
    #[error("opérateur '{0}' absent de l’entrée")]
    OperateurAbsent(char),

    /// Quotient indéfini ou infini (division par zéro, dépassement).
    #[error("résultat non fini : {0}")]
    ResultatNonFini(f64),
}
