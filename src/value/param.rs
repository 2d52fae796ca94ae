//! `ParamValue`: unión etiquetada sobre los tipos de valor que admite un
//! override. El codificador hace match exhaustivo sobre las variantes; no
//! hay inspección dinámica de tipos en ninguna parte.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Valor dinámico de un parámetro. Árboles finitos, sin ciclos; en la
/// práctica profundidad ≤ 2 (escalares o secuencias planas de escalares),
/// aunque el codificador recorre recursivamente cualquier profundidad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Texto plano, literal ya citado o referencia `%NAME` / `@symbol`.
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Secuencia de longitud variable (gramática `[...]`).
    List(Vec<ParamValue>),
    /// Secuencia de aridad fija, estilo tupla (gramática `(...)`).
    Tuple(Vec<ParamValue>),
    /// Ausencia explícita; se codifica como el literal `None` de gin.
    None,
}

impl ParamValue {
    /// Lista a partir de elementos convertibles homogéneos.
    pub fn list<I, T>(items: I) -> Self
        where I: IntoIterator<Item = T>,
              T: Into<ParamValue>
    {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Tupla a partir de elementos convertibles homogéneos. Para tuplas
    /// heterogéneas construir `ParamValue::Tuple` directamente.
    pub fn tuple<I, T>(items: I) -> Self
        where I: IntoIterator<Item = T>,
              T: Into<ParamValue>
    {
        ParamValue::Tuple(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        ParamValue::Float(f)
    }
}

impl From<f32> for ParamValue {
    fn from(f: f32) -> Self {
        ParamValue::Float(f64::from(f))
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(items: Vec<ParamValue>) -> Self {
        ParamValue::List(items)
    }
}

/// Puente desde la moneda dinámica JSON. Arrays -> `List` (JSON no tiene
/// tuplas); números -> `Int` cuando caben exactos en i64, si no `Float`;
/// objetos no tienen forma gin y viajan como su texto JSON compacto
/// (fallback permisivo, nunca un error).
impl From<Value> for ParamValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => ParamValue::None,
            Value::Bool(b) => ParamValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ParamValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    ParamValue::Float(f)
                } else {
                    ParamValue::Str(n.to_string())
                }
            }
            Value::String(s) => ParamValue::Str(s),
            Value::Array(items) => ParamValue::List(items.into_iter().map(ParamValue::from).collect()),
            Value::Object(map) => ParamValue::Str(Value::Object(map).to_string()),
        }
    }
}

/// Convierte un objeto JSON en el mapping ordenado de parámetros. Requiere
/// `serde_json/preserve_order` para que el orden de overrides reproduzca el
/// orden de inserción del objeto. Entradas no-objeto producen mapping vacío.
pub fn params_from_json(value: Value) -> IndexMap<String, ParamValue> {
    match value {
        Value::Object(map) => map.into_iter().map(|(k, v)| (k, ParamValue::from(v))).collect(),
        _ => IndexMap::new(),
    }
}
