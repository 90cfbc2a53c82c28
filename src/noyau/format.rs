// src/noyau/format.rs
//
// Affichage d’un résultat numérique (écran de la calculatrice).

const SEUIL_BAS: f64 = 1e-9;
const SEUIL_HAUT: f64 = 1e15;

/// Texte affiché pour un résultat :
/// - fini      : écriture décimale la plus courte (14, 0.5), notation scientifique
///               hors de [1e-9, 1e15) pour ne pas déborder de l’écran
/// - ±infini   : "∞" / "-∞"
/// - NaN       : "NaN"
pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    // -0 s’affiche 0
    if x == 0.0 {
        return "0".to_string();
    }
    let a = x.abs();
    if !(SEUIL_BAS..SEUIL_HAUT).contains(&a) {
        return format!("{x:e}");
    }
    format!("{x}")
}
