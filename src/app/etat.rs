//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (expression, résultat, démarche, modes)
//! et traduire chaque touche en action simple sans logique d’affichage.
//!
//! Contrats :
//! - Le noyau n’est appelé que sur "=" (action explicite).
//! - Toute erreur du noyau s’affiche "Error", sans distinguer les variantes.
//! - Les réglages (mode strict) sont passés explicitement au noyau à chaque appel.

use log::info;

use calculatrice_sci::noyau::{
    eval_expression_detaillee, format_resultat, Demarche, Mode, Options,
};

/// Texte affiché quand l’évaluation échoue.
pub const RESULTAT_ERREUR: &str = "Error";

/// Touches du pavé standard (4 colonnes).
pub static TOUCHES_STANDARD: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

/// Touches du panneau scientifique.
pub static TOUCHES_SCIENTIFIQUES: [&[&str]; 3] = [
    &["sin", "cos", "tan", "π"],
    &["log", "ln", "√", "^"],
    &["%", "(", ")"],
];

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String, // valeur formatée ou "Error"
    pub demarche: Demarche,

    // --- paramètres ---
    pub mode_scientifique: bool,
    pub strict: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: String::new(),
            demarche: Demarche::default(),
            mode_scientifique: false,
            strict: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// Une touche pressée (pavé, panneau scientifique ou barre d’actions).
    pub fn appuyer(&mut self, touche: &str) {
        match touche {
            "=" => self.evaluer(),
            "AC" => self.reset_total(),
            "DEL" => self.supprimer_dernier(),
            "Sci" => self.mode_scientifique = !self.mode_scientifique,
            _ => self.expression.push_str(touche),
        }
        self.focus_entree = true;
    }

    /// AC : expression + résultat + démarche.
    pub fn reset_total(&mut self) {
        self.expression.clear();
        self.resultat.clear();
        self.demarche = Demarche::default();
    }

    /// DEL : retire le dernier caractère (π et √ comptent pour un).
    pub fn supprimer_dernier(&mut self) {
        self.expression.pop();
    }

    pub fn options(&self) -> Options {
        let mode = if self.strict {
            Mode::Strict
        } else {
            Mode::Tolerant
        };
        Options { mode }
    }

    /// Évalue l’expression via le noyau, puis dépose résultat + démarche.
    pub fn evaluer(&mut self) {
        match eval_expression_detaillee(&self.expression, self.options()) {
            Ok((valeur, demarche)) => {
                self.resultat = format_resultat(valeur);
                self.demarche = demarche;
            }
            Err(e) => {
                info!("{:?} -> {e}", self.expression);
                self.resultat = RESULTAT_ERREUR.to_string();
                self.demarche = Demarche::default();
            }
        }
    }
}
