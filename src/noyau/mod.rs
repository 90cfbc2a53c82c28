//! Noyau d’évaluation scientifique (f64)
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (constantes π/e, √, mots-clés de fonction)
//! - rpn.rs      : shunting-yard (mode tolérant / strict)
//! - eval.rs     : pile RPN + pipeline complet
//! - erreur.rs   : taxonomie des erreurs
//! - format.rs   : affichage d’un résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{
    eval_expression, eval_expression_avec, eval_expression_detaillee, Demarche, Options,
};
pub use format::format_resultat;
pub use rpn::Mode;
