//! JSON canónico mínimo para representaciones estables de parámetros.
//!
//! Las claves de objeto se emiten en orden lexicográfico, sin espacios, de
//! modo que dos valores estructuralmente iguales rinden el mismo texto sin
//! importar el orden de inserción. Suficiente para fingerprinting; no cubre
//! normalización de números edge (p.ej. `1.0` vs `1`).

use std::collections::BTreeMap;

use serde_json::Value;

/// Representación canónica de un `Value`.
pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        // serde_json escapa el string igual que lo haría el serializer normal
        Value::String(s) => out.push_str(&serde_json::to_string(s).unwrap()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            out.push('{');
            for (i, (key, val)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key).unwrap());
                out.push(':');
                write_canonical(val, out);
            }
            out.push('}');
        }
    }
}
