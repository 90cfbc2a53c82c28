//! Calculatrice scientifique — noyau d’évaluation
//!
//! texte -> jetons -> RPN -> f64, sans état partagé entre appels.
//!
//! ```
//! use calculatrice_sci::noyau::eval_expression;
//!
//! assert_eq!(eval_expression("(2+3)*4"), Ok(20.0));
//! assert_eq!(eval_expression(""), Ok(0.0));
//! assert!(eval_expression("1.2.3").is_err());
//! ```

pub mod noyau;
