// src/noyau/format.rs

/// Forme texte “par défaut” d’un résultat, réinjectable dans l’entrée.
///
/// - entier => sans partie décimale ("5", pas "5.0")
/// - décimal => représentation la plus courte qui relit la même valeur
/// - `-0` => "0" (sinon "-0" serait pris pour un signe + opérande)
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

/// Un seul jeton numérique : signe '-' optionnel, puis chiffres et au plus un '.'.
/// Pas d’exposant, pas de "inf"/"NaN" (que `str::parse::<f64>` accepterait).
pub fn est_jeton_numerique(s: &str) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);

    let mut chiffres = 0usize;
    let mut points = 0usize;
    for c in corps.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => points += 1,
            _ => return false,
        }
    }

    chiffres > 0 && points <= 1
}
