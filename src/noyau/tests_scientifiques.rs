//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - littéraux seuls : restitués exactement (entiers) ou à la tolérance près (décimaux)
//! - précédence, parenthèses, associativité gauche de '^'
//! - trigonométrie en degrés, sqrt, entrée vide, division par zéro
//! - trace manuelle du shunting-yard comparée étape par étape
//! - idempotence et absence d’état partagé (appels concurrents)

use std::thread;
use std::time::{Duration, Instant};

use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::eval::evaluate;
use super::jetons::{tokenize, Jeton};
use super::rpn::{to_rpn, Mode};
use super::{eval_expression, ErreurCalcul};

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Littéraux seuls ------------------------ */

#[test]
fn sci_entiers_restitues_exactement() {
    for n in [0u64, 1, 7, 42, 1000, 65536, 9_007_199_254_740_992] {
        assert_eq!(eval_ok(&n.to_string()), n as f64, "n={n}");
    }
}

#[test]
fn sci_decimaux_a_la_tolerance() {
    for s in ["0.1", "3.25", "12.5", "0.333333", ".5", "2."] {
        let attendu: f64 = s.parse().unwrap();
        assert_relative_eq!(eval_ok(s), attendu);
    }
}

/* ------------------------ Précédence et groupement ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("10-4/2"), 8.0);
    assert_eq!(eval_ok("2*3^2"), 18.0);
}

#[test]
fn sci_puissance_associative_a_gauche() {
    // (2^3)^2 = 64, et non 2^(3^2) = 512
    assert_eq!(eval_ok("2^3^2"), 64.0);
    assert_eq!(eval_ok("2^(3^2)"), 512.0);
}

#[test]
fn sci_soustraction_division_a_gauche() {
    assert_eq!(eval_ok("8-3-2"), 3.0);
    assert_eq!(eval_ok("64/4/2"), 8.0);
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn sci_trig_en_degres() {
    assert_abs_diff_eq!(eval_ok("sin(90)"), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(eval_ok("sin(30)"), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(eval_ok("cos(180)"), -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(eval_ok("sin(0)"), 0.0, epsilon = 1e-12);
}

#[test]
fn sci_racine() {
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
    assert_eq!(eval_ok("√(2*8)"), 4.0);
}

#[test]
fn sci_fonction_avant_operateur_attend_le_vidage() {
    // la fonction reste sur la pile jusqu’au vidage final : sqrt(16)+9 = sqrt(25)
    assert_eq!(eval_ok("sqrt(16)+9"), 5.0);
    // parenthèses englobantes : la fonction sort au ')' externe
    assert_eq!(eval_ok("(sqrt(16))+9"), 13.0);
}

/* ------------------------ Conventions ------------------------ */

#[test]
fn sci_entree_vide_vaut_zero() {
    assert_eq!(eval_ok(""), 0.0);
}

#[test]
fn sci_division_par_zero_sans_erreur() {
    assert_eq!(eval_ok("5/0"), f64::INFINITY);
}

#[test]
fn sci_erreurs_typees() {
    assert_eq!(
        eval_expression("1.2.3+1"),
        Err(ErreurCalcul::MalformedLiteral("1.2.3".into()))
    );
    assert_eq!(
        eval_expression("2+"),
        Err(ErreurCalcul::StackUnderflow { jeton: "+".into() })
    );
    assert_eq!(
        eval_expression("2 3"),
        Err(ErreurCalcul::IncompleteReduction { restants: 2 })
    );
}

/* ------------------------ Trace manuelle ------------------------ */

#[test]
fn sci_trace_manuelle_shunting_yard() {
    let n = |s: &str| Jeton::Nombre(s.to_string());
    let op = Jeton::Operateur;

    // 3 + 4 * 2 / ( 1 - 5 ) ^ 2
    let jetons = tokenize("3+4*2/(1-5)^2");
    assert_eq!(
        jetons,
        vec![
            n("3"),
            op('+'),
            n("4"),
            op('*'),
            n("2"),
            op('/'),
            Jeton::ParG,
            n("1"),
            op('-'),
            n("5"),
            Jeton::ParD,
            op('^'),
            n("2"),
        ]
    );

    // trace faite à la main : 3 4 2 * 1 5 - 2 ^ / +
    let attendu = vec![
        n("3"),
        n("4"),
        n("2"),
        op('*'),
        n("1"),
        n("5"),
        op('-'),
        n("2"),
        op('^'),
        op('/'),
        op('+'),
    ];
    let rpn = to_rpn(&jetons, Mode::Strict).unwrap();
    assert_eq!(rpn, attendu);

    // 3 + 8 / 16 = 3.5
    assert_eq!(evaluate(&attendu), Ok(3.5));
    assert_eq!(evaluate(&rpn), eval_expression("3+4*2/(1-5)^2"));
}

/* ------------------------ Pureté ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["2+3*4", "sin(45)^2+cos(45)^2", "log(2)*ln(10)", "5/0", "1..2"] {
        let a = eval_expression(expr);
        let b = eval_expression(expr);
        match (a, b) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
            (a, b) => assert_eq!(a, b, "expr={expr:?}"),
        }
    }
}

#[test]
fn sci_appels_concurrents_sans_coordination() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let handles: Vec<_> = (0..8)
        .map(|k| {
            thread::spawn(move || {
                let expr = format!("({k}+1)*10");
                (0..200)
                    .map(|_| eval_expression(&expr))
                    .all(|r| r == Ok(((k + 1) * 10) as f64))
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
    budget(t0, max);
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // pas de récursion : la profondeur ne coûte que de la pile Vec
    let expr = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    assert_eq!(eval_ok(&expr), 1.0);
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 2000].join("+");
    assert_eq!(eval_ok(&expr), 1000.0);
    budget(t0, max);
}
