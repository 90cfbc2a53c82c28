// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// L’UI ne distingue pas les variantes (elle affiche "Error"), mais les tests et les logs, si.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Littéral numérique non convertible en flottant (ex: "1.2.3").
    #[error("nombre invalide: {0:?}")]
    MalformedLiteral(String),

    /// Opérateur ou fonction évalué avec trop peu d’opérandes sur la pile.
    #[error("opérandes manquants pour {jeton:?}")]
    StackUnderflow { jeton: String },

    /// Fin de RPN : la pile ne contient pas exactement une valeur.
    #[error("expression invalide: {restants} valeur(s) sur la pile au lieu d’une")]
    IncompleteReduction { restants: usize },

    #[error("parenthèses non appariées")]
    UnmatchedParenthesis,

    #[error("jeton inconnu: {0:?}")]
    UnknownToken(String),
}
