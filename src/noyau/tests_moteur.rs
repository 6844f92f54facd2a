//! Tests du moteur : scénarios de saisie complets (touches -> écran / historique).
//!
//! Chaque scénario passe par `traiter()` comme le ferait la vue, à partir d’une
//! chaîne de touches ("5+-3=" etc.) traduite par le clavier.

use super::clavier::evenement_pour_char;
use super::moteur::JETON_ERREUR;
use super::operateur::Operateur;
use super::{EtatMoteur, Evenement, Moteur};

fn taper(m: &mut Moteur, touches: &str) {
    for c in touches.chars() {
        let evt = evenement_pour_char(c).unwrap_or_else(|| panic!("touche inconnue {c:?}"));
        m.traiter(evt);
    }
}

fn apres(touches: &str) -> Moteur {
    let mut m = Moteur::new();
    taper(&mut m, touches);
    m
}

fn assert_etat_pret_vide(m: &Moteur) {
    assert_eq!(m.entree(), "");
    assert_eq!(m.operation_en_attente(), None);
    assert!(!m.en_erreur());
    assert_eq!(m.etat(), EtatMoteur::Pret);
}

/* ------------------------ Saisie de base ------------------------ */

#[test]
fn etat_initial() {
    let m = Moteur::new();
    assert_etat_pret_vide(&m);
    assert!(m.historique().is_empty());
    assert_eq!(m.affichage(), "");
}

#[test]
fn chiffres_et_point_ajoutes_tels_quels() {
    let m = apres("12.50");
    assert_eq!(m.entree(), "12.50");
    assert_eq!(m.affichage(), "12.50");
    assert_eq!(m.operation_en_attente(), None);
}

#[test]
fn caractere_inconnu_ignore() {
    let mut m = apres("12");
    m.soumettre('x');
    m.soumettre('^');
    assert_eq!(m.entree(), "12");
}

#[test]
fn operations_simples() {
    assert_eq!(apres("12+7=").historique(), &[19.0]);
    assert_eq!(apres("12-7=").historique(), &[5.0]);
    assert_eq!(apres("6*7=").historique(), &[42.0]);
    assert_eq!(apres("7/2=").historique(), &[3.5]);
}

#[test]
fn resultat_replie_dans_entree() {
    let m = apres("7/2=");
    assert_eq!(m.entree(), "3.5");
    assert_eq!(m.affichage(), "3.5");
    assert_eq!(m.operation_en_attente(), None);

    let m = apres("2*3=");
    assert_eq!(m.entree(), "6", "entier sans partie décimale");
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn clear_idempotent_depuis_tout_etat() {
    for touches in ["", "5", "5+", "5+3", "-", "5/0=", "2+3=", "5+-"] {
        let mut m = apres(touches);
        let hist = m.historique().to_vec();

        m.clear();
        assert_etat_pret_vide(&m);
        m.clear();
        assert_etat_pret_vide(&m);

        assert_eq!(m.historique(), hist.as_slice(), "touches={touches:?}");
    }
}

#[test]
fn historique_monotone_sous_succes() {
    let mut m = Moteur::new();
    let mut attendu = 0;
    for touches in ["1+1=", "*3=", "-1=", "/5=", "+0.5="] {
        taper(&mut m, touches);
        attendu += 1;
        assert_eq!(m.historique().len(), attendu, "après {touches:?}");
    }
    assert_eq!(m.historique(), &[2.0, 6.0, 5.0, 1.0, 1.5]);

    m.clear_historique();
    assert!(m.historique().is_empty());
}

#[test]
fn isolation_en_erreur() {
    let mut m = apres("9/0=");
    assert!(m.en_erreur());
    let fige = m.clone();

    m.soumettre('5');
    m.soumettre('+');
    m.evaluer();
    m.changer_signe();
    m.clear_historique();
    m.rappeler(0);
    for evt in [
        Evenement::Caractere('1'),
        Evenement::Egal,
        Evenement::ChangerSigne,
        Evenement::EffacerHistorique,
        Evenement::Rappel(0),
    ] {
        m.traiter(evt);
    }

    assert_eq!(m, fige);

    m.traiter(Evenement::ToutEffacer);
    assert_eq!(m.etat(), EtatMoteur::Pret);
}

#[test]
fn repli_de_chaine_d_operateurs() {
    let a = apres("5+-3=");
    let b = apres("5-3=");
    assert_eq!(a.historique(), &[2.0]);
    assert_eq!(a.historique(), b.historique());
}

#[test]
fn remplacement_garde_seulement_le_dernier_operateur() {
    let m = apres("5+-");
    assert_eq!(m.entree(), "5-");
    assert_eq!(m.operation_en_attente(), Some(Operateur::Moins));

    let m = apres("5*/+*");
    assert_eq!(m.entree(), "5*");
    assert_eq!(m.operation_en_attente(), Some(Operateur::Fois));
}

#[test]
fn moins_de_tete() {
    let m = apres("-");
    assert_eq!(m.entree(), "-");
    assert_eq!(m.operation_en_attente(), None, "signe, pas opérateur");

    let m = apres("-5+3=");
    assert!(!m.en_erreur());
    assert_eq!(m.historique(), &[-2.0]);
}

#[test]
fn moins_de_tete_puis_soustraction() {
    let m = apres("-5-3=");
    assert_eq!(m.historique(), &[-8.0]);
}

#[test]
fn evaluation_implicite_en_chaine() {
    let mut m = apres("2+3*");
    assert_eq!(m.historique(), &[5.0]);
    assert_eq!(m.entree(), "5*");
    assert_eq!(m.operation_en_attente(), Some(Operateur::Fois));

    taper(&mut m, "4");
    assert_eq!(m.entree(), "5*4");

    taper(&mut m, "=");
    assert_eq!(m.historique(), &[5.0, 20.0]);
    assert_eq!(m.affichage(), "20");
}

#[test]
fn chaine_depuis_resultat_negatif() {
    // 2-5 = -3, puis "-3*2" : le signe de tête reste au premier opérande
    let m = apres("2-5=*2=");
    assert_eq!(m.historique(), &[-3.0, -6.0]);

    let m = apres("2-5=-1=");
    assert_eq!(m.historique(), &[-3.0, -4.0]);
}

#[test]
fn division_par_zero() {
    let mut m = apres("4+4=");
    taper(&mut m, "5/0=");
    assert!(m.en_erreur());
    assert_eq!(m.affichage(), JETON_ERREUR);
    assert_eq!(m.entree(), "");
    assert_eq!(m.operation_en_attente(), None);
    assert_eq!(m.historique(), &[8.0], "historique intact");
}

#[test]
fn zero_sur_zero_est_une_erreur() {
    assert!(apres("0/0=").en_erreur());
}

#[test]
fn evaluation_implicite_en_erreur_n_ajoute_pas_l_operateur() {
    let m = apres("5/0+");
    assert!(m.en_erreur());
    assert_eq!(m.entree(), "");
    assert_eq!(m.affichage(), "Error");
}

#[test]
fn operandes_invalides() {
    assert!(apres("5+=").en_erreur(), "second opérande vide");
    assert!(apres("1.2.3+1=").en_erreur());
    assert!(apres(".+1=").en_erreur());
    assert!(apres("+5=").en_erreur(), "premier opérande vide");
}

#[test]
fn points_en_bord_acceptes() {
    assert_eq!(apres(".5+5.=").historique(), &[5.5]);
}

#[test]
fn egal_sans_operation_ne_fait_rien() {
    let m = apres("42=");
    assert_eq!(m.entree(), "42");
    assert!(m.historique().is_empty());
    assert!(!m.en_erreur());

    let m = apres("=");
    assert_etat_pret_vide(&m);
}

#[test]
fn egal_repete_apres_resultat() {
    let m = apres("2+2==");
    assert_eq!(m.historique(), &[4.0]);
    assert_eq!(m.entree(), "4");
}

#[test]
fn chiffres_apres_resultat_prolongent_l_entree() {
    let m = apres("2+3=7");
    assert_eq!(m.entree(), "57");
}

/* ------------------------ ± ------------------------ */

#[test]
fn changer_signe_sur_nombre_seul() {
    let mut m = apres("12.5");
    m.changer_signe();
    assert_eq!(m.entree(), "-12.5");
    m.changer_signe();
    assert_eq!(m.entree(), "12.5");
}

#[test]
fn changer_signe_normalise() {
    let mut m = apres("007");
    m.changer_signe();
    assert_eq!(m.entree(), "-7");

    let mut m = apres("0");
    m.changer_signe();
    assert_eq!(m.entree(), "0", "-0 affiché 0");
}

#[test]
fn changer_signe_puis_operation() {
    let mut m = apres("5");
    m.traiter(Evenement::ChangerSigne);
    taper(&mut m, "+3=");
    assert_eq!(m.historique(), &[-2.0]);
}

#[test]
fn changer_signe_refuse_avec_operateur() {
    for touches in ["5+", "5+3", "-", "."] {
        let mut m = apres(touches);
        let avant = m.clone();
        m.changer_signe();
        assert_eq!(m, avant, "touches={touches:?}");
    }
}

#[test]
fn changer_signe_entree_vide() {
    let mut m = Moteur::new();
    m.changer_signe();
    assert_etat_pret_vide(&m);
}

/* ------------------------ Historique / rappel ------------------------ */

#[test]
fn rappel_apres_operateur() {
    let mut m = apres("1+2=");
    m.clear();
    taper(&mut m, "5+");
    m.rappeler(0);
    assert_eq!(m.entree(), "5+3");

    taper(&mut m, "=");
    assert_eq!(m.historique(), &[3.0, 8.0]);
}

#[test]
fn rappel_refuse_apres_operande() {
    let mut m = apres("1+2=");
    m.clear();
    taper(&mut m, "5");
    assert!(!m.rappel_possible());
    m.rappeler(0);
    assert_eq!(m.entree(), "5");
}

#[test]
fn rappel_sur_entree_vide() {
    let mut m = apres("1+2=");
    m.clear();
    assert!(m.rappel_possible());
    m.traiter(Evenement::Rappel(0));
    assert_eq!(m.entree(), "3");
    assert_eq!(m.operation_en_attente(), None);
}

#[test]
fn rappel_refuse_juste_apres_resultat() {
    // l’entrée vaut le résultat (pas d’opérateur final) : pas de rappel
    let mut m = apres("1+2=");
    m.rappeler(0);
    assert_eq!(m.entree(), "3");
}

#[test]
fn rappel_hors_bornes_ignore() {
    let mut m = apres("1+2=");
    m.clear();
    m.rappeler(7);
    assert_eq!(m.entree(), "");
}

#[test]
fn rappel_negatif_comme_second_operande() {
    let mut m = apres("2-5=");
    m.clear();
    taper(&mut m, "5-");
    m.rappeler(0);
    assert_eq!(m.entree(), "5--3");
    taper(&mut m, "=");
    assert_eq!(m.historique(), &[-3.0, 8.0]);

    let mut m = apres("2-5=");
    m.clear();
    taper(&mut m, "-4*");
    m.rappeler(0);
    assert_eq!(m.entree(), "-4*-3");
    taper(&mut m, "=");
    assert_eq!(m.historique().last(), Some(&12.0));
}

#[test]
fn effacer_historique_ne_touche_pas_l_entree() {
    let mut m = apres("1+2=+");
    m.traiter(Evenement::EffacerHistorique);
    assert!(m.historique().is_empty());
    assert_eq!(m.entree(), "3+");
    assert_eq!(m.operation_en_attente(), Some(Operateur::Plus));
}

#[test]
fn erreur_puis_clear_puis_reprise() {
    let mut m = apres("1/0=");
    taper(&mut m, "123");
    assert_eq!(m.affichage(), "Error");

    taper(&mut m, "c");
    assert_etat_pret_vide(&m);

    taper(&mut m, "3*3=");
    assert_eq!(m.historique(), &[9.0]);
}

#[test]
fn changer_signe_refuse_si_operation_en_attente() {
    // "--5" : le second '-' remplace le signe et devient l’opération en attente
    let mut m = apres("--5");
    assert_eq!(m.entree(), "-5");
    assert_eq!(m.operation_en_attente(), Some(Operateur::Moins));
    m.changer_signe();
    assert_eq!(m.entree(), "-5");
}
