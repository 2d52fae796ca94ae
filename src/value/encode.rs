//! Codificador de valores a la gramática de overrides de gin.
//!
//! Función total y pura: cualquier `ParamValue` tiene una codificación
//! definida, sin camino de fallo. Éste es el único contrato bit-exacto del
//! crate: el consumidor de overrides parsea strings citados, referencias
//! `%`/`@`, tuplas `(...)`, listas `[...]`, `True`/`False` y literales
//! escalares exactamente como se producen aquí.

use super::ParamValue;

/// Codifica `value` como token sintácticamente completo de la gramática.
///
/// Reglas, en orden de precedencia:
/// 1. texto ya citado (`"..."` / `'...'`) o referencia `%` / `@` pasa sin
///    cambios; el resto de strings se envuelve en comillas dobles;
/// 2. tuplas -> `(e1,e2,...)`;
/// 3. listas -> `[e1,e2,...]`;
/// 4. booleanos -> `True` / `False` (literales capitalizados de gin);
/// 5. escalares restantes -> representación textual por defecto.
///
/// Las secuencias se codifican elemento a elemento, nunca en bloque; una
/// secuencia vacía produce `()` / `[]`.
pub fn encode(value: &ParamValue) -> String {
    match value {
        ParamValue::Str(s) => encode_str(s),
        ParamValue::Tuple(items) => format!("({})", join_encoded(items)),
        ParamValue::List(items) => format!("[{}]", join_encoded(items)),
        ParamValue::Bool(true) => "True".to_string(),
        ParamValue::Bool(false) => "False".to_string(),
        ParamValue::Int(i) => i.to_string(),
        ParamValue::Float(f) => encode_float(*f),
        ParamValue::None => "None".to_string(),
    }
}

/// El check de "ya citado" exige longitud >= 2 y misma comilla en ambos
/// extremos: un string degenerado de una sola comilla cae en la regla de
/// citado por defecto.
fn encode_str(s: &str) -> String {
    let quoted = |q: char| s.len() >= 2 && s.starts_with(q) && s.ends_with(q);
    if quoted('"') || quoted('\'') || s.starts_with('%') || s.starts_with('@') {
        return s.to_string();
    }
    format!("\"{s}\"")
}

fn join_encoded(items: &[ParamValue]) -> String {
    items.iter().map(encode).collect::<Vec<_>>().join(",")
}

/// Floats enteros finitos conservan un `.0` final para que el literal siga
/// siendo float en la gramática. Magnitudes fuera del rango entero exacto
/// usan la representación por defecto (notación exponencial incluida).
fn encode_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings_get_double_quoted() {
        assert_eq!(encode(&ParamValue::from("desert")), "\"desert\"");
        assert_eq!(encode(&ParamValue::from("landscape,-liquid_covered,-cave")),
                   "\"landscape,-liquid_covered,-cave\"");
    }

    #[test]
    fn already_quoted_strings_pass_through() {
        assert_eq!(encode(&ParamValue::from("\"scene.gin\"")), "\"scene.gin\"");
        assert_eq!(encode(&ParamValue::from("'scene.gin'")), "'scene.gin'");
    }

    #[test]
    fn references_pass_through() {
        assert_eq!(encode(&ParamValue::from("%OVERALL_SEED")), "%OVERALL_SEED");
        assert_eq!(encode(&ParamValue::from("@some_function")), "@some_function");
    }

    #[test]
    fn single_quote_char_falls_through_to_default_quoting() {
        assert_eq!(encode(&ParamValue::from("\"")), "\"\"\"");
        assert_eq!(encode(&ParamValue::from("'")), "\"'\"");
    }

    #[test]
    fn booleans_use_capitalized_literals() {
        assert_eq!(encode(&ParamValue::Bool(true)), "True");
        assert_eq!(encode(&ParamValue::Bool(false)), "False");
    }

    #[test]
    fn numbers_use_default_text() {
        assert_eq!(encode(&ParamValue::Int(12345)), "12345");
        assert_eq!(encode(&ParamValue::Int(-3)), "-3");
        assert_eq!(encode(&ParamValue::Float(0.75)), "0.75");
    }

    #[test]
    fn integral_floats_keep_a_trailing_decimal() {
        assert_eq!(encode(&ParamValue::Float(0.0)), "0.0");
        assert_eq!(encode(&ParamValue::Float(3.0)), "3.0");
        assert_eq!(encode(&ParamValue::Float(-2.0)), "-2.0");
    }

    #[test]
    fn tuples_encode_element_wise_with_parens() {
        let v = ParamValue::Tuple(vec!["uniform".into(), 0i64.into(), 1i64.into()]);
        assert_eq!(encode(&v), "(\"uniform\",0,1)");
    }

    #[test]
    fn lists_encode_element_wise_with_brackets() {
        let v = ParamValue::list(["coarse", "populate"]);
        assert_eq!(encode(&v), "[\"coarse\",\"populate\"]");
        let mixed = ParamValue::List(vec![ParamValue::from("%SEED"), ParamValue::from(2i64)]);
        assert_eq!(encode(&mixed), "[%SEED,2]");
    }

    #[test]
    fn empty_sequences_have_no_inner_text() {
        assert_eq!(encode(&ParamValue::Tuple(vec![])), "()");
        assert_eq!(encode(&ParamValue::List(vec![])), "[]");
    }

    #[test]
    fn nested_sequences_recurse() {
        let palette = ParamValue::List(vec![ParamValue::tuple([0.8f64, 0.6, 0.4]),
                                            ParamValue::tuple([0.7f64, 0.5, 0.3])]);
        assert_eq!(encode(&palette), "[(0.8,0.6,0.4),(0.7,0.5,0.3)]");
    }

    #[test]
    fn none_is_the_bare_literal() {
        assert_eq!(encode(&ParamValue::None), "None");
    }

    #[test]
    fn encoding_is_idempotent_per_value() {
        let v = ParamValue::Tuple(vec!["uniform".into(), 0.01f64.into(), 0.06f64.into()]);
        assert_eq!(encode(&v), encode(&v));
    }
}
