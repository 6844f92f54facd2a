// src/noyau/operateur.rs

use num_traits::Float;

/// Opérateur binaire en attente de son second opérande.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Reconnaît `+ - * /` (rien d’autre).
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    /// a op b, sans contrôle : la finitude est vérifiée par l’appelant.
    pub fn appliquer<F: Float>(self, a: F, b: F) -> F {
        match self {
            Self::Plus => a + b,
            Self::Moins => a - b,
            Self::Fois => a * b,
            Self::Divise => a / b,
        }
    }
}

/// Vrai si `c` est un des quatre opérateurs.
pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}
