//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile numérique -> f64
//!
//! Chaque appel crée ses propres piles : aucun état partagé entre appels,
//! le pipeline peut être appelé depuis plusieurs threads sans coordination.

use log::debug;

use super::erreur::ErreurCalcul;
use super::jetons::{format_jetons, tokenize, Jeton};
use super::rpn::{to_rpn, Mode};

/// Réglages d’une évaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
}

/// Trace du pipeline (panneau "Démarche" de l’UI).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression en mode tolérant.
///
/// Convention : l’entrée vide "" vaut 0.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurCalcul> {
    eval_expression_avec(expr_str, Options::default())
}

pub fn eval_expression_avec(expr_str: &str, options: Options) -> Result<f64, ErreurCalcul> {
    eval_expression_detaillee(expr_str, options).map(|(v, _d)| v)
}

/// Comme `eval_expression_avec`, plus la démarche (jetons + RPN en texte).
pub fn eval_expression_detaillee(
    expr_str: &str,
    options: Options,
) -> Result<(f64, Demarche), ErreurCalcul> {
    if expr_str.is_empty() {
        return Ok((0.0, Demarche::default()));
    }

    // 1) Jetons
    let jetons = tokenize(expr_str);
    let jetons_txt = format_jetons(&jetons);
    debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = to_rpn(&jetons, options.mode)?;
    let rpn_txt = format_jetons(&rpn);
    debug!("rpn: {rpn_txt}");

    // 3) Pile numérique
    let valeur = evaluate(&rpn).inspect_err(|e| debug!("évaluation de {expr_str:?}: {e}"))?;

    Ok((
        valeur,
        Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}

/// Évalue une suite RPN avec une pile de f64.
///
/// - Nombre            : parse (MalformedLiteral si invalide) puis empile
/// - + - * / ^         : dépile droite puis gauche, empile gauche ∘ droite
/// - fonction unaire   : dépile un, empile f(x)
///
/// Division par zéro, sqrt(-1), log(0)... : résultats IEEE (inf / NaN), pas d’erreur.
pub fn evaluate(rpn: &[Jeton]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(txt) => {
                let x = txt
                    .parse::<f64>()
                    .map_err(|_| ErreurCalcul::MalformedLiteral(txt.clone()))?;
                pile.push(x);
            }

            Jeton::Operateur(op) => {
                let op = *op;
                if !matches!(op, '+' | '-' | '*' | '/' | '^') {
                    return Err(ErreurCalcul::UnknownToken(op.to_string()));
                }
                let b = depiler(&mut pile, jeton)?;
                let a = depiler(&mut pile, jeton)?;
                pile.push(appliquer_binaire(op, a, b));
            }

            Jeton::Fonction(nom) => {
                let f = fonction_unaire(nom)
                    .ok_or_else(|| ErreurCalcul::UnknownToken(nom.clone()))?;
                let x = depiler(&mut pile, jeton)?;
                pile.push(f(x));
            }

            Jeton::ParG | Jeton::ParD => return Err(ErreurCalcul::UnmatchedParenthesis),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalcul::IncompleteReduction {
            restants: pile.len(),
        });
    }
    pile.pop().ok_or(ErreurCalcul::IncompleteReduction { restants: 0 })
}

fn depiler(pile: &mut Vec<f64>, jeton: &Jeton) -> Result<f64, ErreurCalcul> {
    pile.pop().ok_or_else(|| ErreurCalcul::StackUnderflow {
        jeton: jeton.to_string(),
    })
}

fn appliquer_binaire(op: char, a: f64, b: f64) -> f64 {
    match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        '/' => a / b,
        _ => a.powf(b),
    }
}

/// Fonctions unaires ; la trigonométrie travaille en degrés.
fn fonction_unaire(nom: &str) -> Option<fn(f64) -> f64> {
    let f: fn(f64) -> f64 = match nom {
        "sin" => |x: f64| x.to_radians().sin(),
        "cos" => |x: f64| x.to_radians().cos(),
        "tan" => |x: f64| x.to_radians().tan(),
        "log" => f64::log10,
        "ln" => f64::ln,
        "sqrt" => f64::sqrt,
        "%" => |x: f64| x / 100.0,
        _ => return None,
    };
    Some(f)
}
