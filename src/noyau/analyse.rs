// src/noyau/analyse.rs
//
// Analyse de l’entrée au moment d’évaluer
// ---------------------------------------
// L’entrée reste une simple chaîne (forme canonique affichée), mais on ne
// suppose jamais que le découpage est bien formé : chaque opérande est validé
// avant d’être converti en f64.
//
// Règles:
// - un '-' en tête appartient au premier opérande ("-5+3" => -5, 3)
// - on coupe à la PREMIÈRE occurrence de l’opérateur après ce signe,
//   donc un second opérande négatif rappelé de l’historique reste valide
//   ("5--3" => 5, -3 ; "-5*-3" => -5, -3)

use super::erreur::ErreurEvaluation;
use super::format::est_jeton_numerique;
use super::operateur::Operateur;

/// Opération binaire prête à calculer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binaire {
    pub gauche: f64,
    pub op: Operateur,
    pub droite: f64,
}

impl Binaire {
    /// Calcule gauche op droite ; NaN/±inf => erreur.
    pub fn calculer(&self) -> Result<f64, ErreurEvaluation> {
        let r = self.op.appliquer(self.gauche, self.droite);
        if r.is_finite() {
            Ok(r)
        } else {
            Err(ErreurEvaluation::ResultatNonFini(r))
        }
    }
}

/// Découpe `entree` sur `op` (avec l’exception du signe de tête) et valide les deux opérandes.
pub fn analyser(entree: &str, op: Operateur) -> Result<Binaire, ErreurEvaluation> {
    let sym = op.symbole();

    // '-' de tête : signe du premier opérande, jamais l’opérateur
    let debut = usize::from(entree.starts_with('-'));

    let pos = entree[debut..]
        .find(sym)
        .map(|i| i + debut)
        .ok_or(ErreurEvaluation::OperateurAbsent(sym))?;

    let gauche = lire_operande(&entree[..pos])?;
    let droite = lire_operande(&entree[pos + sym.len_utf8()..])?;

    Ok(Binaire { gauche, op, droite })
}

/// Un opérande = un jeton numérique complet (pas de lecture partielle à la parseFloat).
pub fn lire_operande(s: &str) -> Result<f64, ErreurEvaluation> {
    if !est_jeton_numerique(s) {
        return Err(ErreurEvaluation::OperandeInvalide(s.to_string()));
    }
    s.parse::<f64>()
        .map_err(|_| ErreurEvaluation::OperandeInvalide(s.to_string()))
}
