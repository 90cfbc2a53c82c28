// src/noyau/rpn.rs
//
// Shunting-yard : suite de Jeton (infixe) -> RPN (postfixe)
//
// Règles:
// - Nombre            => sortie directe
// - Fonction connue   => pile (ne sort qu’au ')' suivant ou au vidage final)
// - '('               => pile
// - ')'               => dépile vers la sortie jusqu’à '(' (jetée)
// - opérateur binaire => dépile tant que le sommet est un opérateur de précédence >= ,
//                        puis empile
//
// NOTE:
// - Le ">=" rend TOUS les opérateurs associatifs à gauche, '^' compris :
//   2^3^2 = (2^3)^2 = 64. Simplification voulue, ne pas "corriger".
// - Mode::Tolerant reproduit le comportement historique : jetons inconnus
//   ignorés, parenthèses non appariées tolérées. Mode::Strict lève une erreur.

use log::warn;

use super::erreur::ErreurCalcul;
use super::jetons::Jeton;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Jetons inconnus et parenthèses orphelines ignorés silencieusement.
    #[default]
    Tolerant,
    /// UnknownToken / UnmatchedParenthesis levées explicitement.
    Strict,
}

/// Table des précédences (plus haut = plus liant).
pub fn precedence(op: char) -> Option<u8> {
    match op {
        '+' | '-' => Some(1),
        '*' | '/' => Some(2),
        '^' => Some(3),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Nombre(2), +, Nombre(3), *, Nombre(4)]
///   rpn:    [Nombre(2), Nombre(3), Nombre(4), *, +]
///
/// En mode tolérant, ne renvoie jamais d’erreur.
pub fn to_rpn(jetons: &[Jeton], mode: Mode) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut pile: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => out.push(jeton),

            Jeton::Fonction(_) if jeton.est_fonction_connue() => pile.push(jeton),

            Jeton::ParG => pile.push(jeton),

            Jeton::ParD => {
                let mut trouvee = false;
                while let Some(sommet) = pile.pop() {
                    if sommet == Jeton::ParG {
                        trouvee = true;
                        break;
                    }
                    out.push(sommet);
                }
                if !trouvee {
                    tolerer(mode, ErreurCalcul::UnmatchedParenthesis)?;
                }
            }

            Jeton::Operateur(op) if precedence(op).is_some() => {
                let p_jeton = precedence(op);
                while let Some(Jeton::Operateur(sommet)) = pile.last() {
                    if precedence(*sommet) >= p_jeton {
                        if let Some(j) = pile.pop() {
                            out.push(j);
                        }
                    } else {
                        break;
                    }
                }
                pile.push(jeton);
            }

            // Opérateur hors table ou identifiant hors FONCTIONS
            inconnu => tolerer(mode, ErreurCalcul::UnknownToken(inconnu.to_string()))?,
        }
    }

    // vide la pile
    while let Some(jeton) = pile.pop() {
        if jeton == Jeton::ParG {
            tolerer(mode, ErreurCalcul::UnmatchedParenthesis)?;
            continue;
        }
        out.push(jeton);
    }

    Ok(out)
}

/// Strict : propage l’erreur. Tolérant : la journalise et continue.
fn tolerer(mode: Mode, e: ErreurCalcul) -> Result<(), ErreurCalcul> {
    match mode {
        Mode::Strict => Err(e),
        Mode::Tolerant => {
            warn!("conversion RPN: {e} (ignoré en mode tolérant)");
            Ok(())
        }
    }
}
