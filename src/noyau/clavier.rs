// src/noyau/clavier.rs
//
// Clavier -> événements moteur (table pure, testable sans UI).
//
// - 0-9 . + - * /  => Caractere
// - =              => Egal (Enter est traité côté vue, c’est une touche, pas du texte)
// - c / C          => ToutEffacer (seule touche utile en état Erreur)
// - le reste       => ignoré

use super::moteur::Evenement;

/// Traduit un texte saisi (événement clavier “Text”) en événement moteur.
/// Un seul caractère attendu ; toute autre longueur est ignorée.
pub fn evenement_pour_texte(texte: &str) -> Option<Evenement> {
    let mut it = texte.chars();
    let c = it.next()?;
    if it.next().is_some() {
        return None;
    }
    evenement_pour_char(c)
}

pub fn evenement_pour_char(c: char) -> Option<Evenement> {
    match c {
        '0'..='9' | '.' | '+' | '-' | '*' | '/' => Some(Evenement::Caractere(c)),
        '=' => Some(Evenement::Egal),
        'c' | 'C' => Some(Evenement::ToutEffacer),
        _ => None,
    }
}
