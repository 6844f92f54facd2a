// src/config.rs
//
// Réglages de lancement (natif + web).
// Les valeurs par défaut sont des constantes ; seul le filtre du journal
// peut venir de l’environnement (natif uniquement).

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice séquentielle";

/// Filtre du journal si rien n’est fourni.
const FILTRE_JOURNAL_DEFAUT: &str = "info";

/// Variable d’environnement prioritaire (sinon RUST_LOG).
pub const VAR_FILTRE_JOURNAL: &str = "CALCULATRICE_LOG";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub titre: String,
    pub taille: [f32; 2],
    pub taille_min: [f32; 2],
    pub filtre_journal: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            titre: TITRE_APP.to_string(),
            taille: [380.0, 620.0],
            taille_min: [320.0, 520.0],
            filtre_journal: FILTRE_JOURNAL_DEFAUT.to_string(),
        }
    }
}

impl Config {
    /// Défauts + filtre du journal depuis CALCULATRICE_LOG, puis RUST_LOG.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn depuis_env() -> Self {
        Self::depuis_lecteur(|nom| std::env::var(nom).ok())
    }

    /// Même logique, avec une source de variables injectable.
    pub fn depuis_lecteur(lire: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        let non_vide = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        let filtre = non_vide(lire(VAR_FILTRE_JOURNAL)).or_else(|| non_vide(lire("RUST_LOG")));

        if let Some(f) = filtre {
            cfg.filtre_journal = f;
        }
        cfg
    }
}
