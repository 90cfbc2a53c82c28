// src/noyau/jetons.rs
//
// Tokenisation : texte brut -> suite de Jeton.
//
// Étapes (dans l’ordre) :
// 1) substitution textuelle des constantes (π, e) par leur développement décimal
// 2) √ -> "sqrt"
// 3) espaces autour des mots-clés de fonction et de '%'
// 4) balayage gauche -> droite (tampon nombre + tampon identifiant)
//
// La fonction est totale : une entrée mal formée donne des jetons
// que les étapes suivantes refuseront.

use std::f64::consts::{E, PI};
use std::fmt;

/// Mots-clés reconnus comme fonctions unaires.
/// L’ordre compte pour l’espacement (premier motif qui correspond gagne).
pub const FONCTIONS: [&str; 7] = ["sin", "cos", "tan", "log", "ln", "sqrt", "%"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Littéral décimal brut, converti en flottant à l’évaluation seulement.
    Nombre(String),
    Operateur(char),
    /// Nom de fonction (connu ou non : la validité est décidée par la conversion RPN).
    Fonction(String),
    ParG,
    ParD,
}

impl Jeton {
    /// Vrai si le jeton est une fonction du jeu FONCTIONS.
    pub fn est_fonction_connue(&self) -> bool {
        matches!(self, Jeton::Fonction(nom) if FONCTIONS.contains(&nom.as_str()))
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(txt) => f.write_str(txt),
            Jeton::Operateur(c) => write!(f, "{c}"),
            Jeton::Fonction(nom) => f.write_str(nom),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
        }
    }
}

/// Substitutions textuelles avant le balayage : constantes, radical, espacement des fonctions.
pub fn pretraiter(s: &str) -> String {
    let avec_constantes = s
        .replace('π', &PI.to_string())
        .replace('e', &E.to_string())
        .replace('√', "sqrt");

    espacer_fonctions(&avec_constantes)
}

/// Entoure chaque mot-clé de FONCTIONS d’un espace, même collé à un chiffre ou une parenthèse.
fn espacer_fonctions(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut reste = s;

    'scan: while let Some(c) = reste.chars().next() {
        for kw in FONCTIONS {
            if reste.starts_with(kw) {
                out.push(' ');
                out.push_str(kw);
                out.push(' ');
                reste = &reste[kw.len()..];
                continue 'scan;
            }
        }
        out.push(c);
        reste = &reste[c.len_utf8()..];
    }

    out
}

/// Tokenize une chaîne en jetons (jamais d’échec).
///
/// - chiffres ASCII et '.' -> tampon nombre
/// - lettres -> tampon identifiant
/// - espace -> vide les tampons
/// - autre caractère -> vide les tampons (nombre d’abord), puis jeton d’un caractère
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let texte = pretraiter(s);

    let mut out = Vec::new();
    let mut nombre = String::new();
    let mut ident = String::new();

    for c in texte.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
        } else if c.is_alphabetic() {
            ident.push(c);
        } else {
            vider_tampons(&mut out, &mut nombre, &mut ident);
            if !c.is_whitespace() {
                out.push(classer_caractere(c));
            }
        }
    }
    vider_tampons(&mut out, &mut nombre, &mut ident);

    out
}

fn vider_tampons(out: &mut Vec<Jeton>, nombre: &mut String, ident: &mut String) {
    if !nombre.is_empty() {
        out.push(Jeton::Nombre(std::mem::take(nombre)));
    }
    if !ident.is_empty() {
        out.push(Jeton::Fonction(std::mem::take(ident)));
    }
}

fn classer_caractere(c: char) -> Jeton {
    match c {
        '(' => Jeton::ParG,
        ')' => Jeton::ParD,
        '%' => Jeton::Fonction("%".to_string()),
        _ => Jeton::Operateur(c),
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(Jeton::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
