//! Fingerprint determinista de un task y su linaje.
//!
//! El mensaje de un task concatena primero los fingerprints de sus
//! dependencias (en orden de declaración, el orden SÍ importa) y después su
//! propio descriptor `familia,version,nombre=valor,...` con los parámetros
//! significativos ordenados por nombre. El resultado es SHA-256 en hex
//! minúsculo: mismo grafo, mismo fingerprint, en cualquier proceso.
//!
//! Recorrido post-orden explícito con memoización por nodo y detección de
//! ciclos vía conjunto de nodos en visita: un grafo cíclico produce
//! `DependencyCycle` en vez de recursión sin límite. La clave de memo es
//! (dirección del nodo, familia), válida dentro de un único recorrido; un
//! duplicado estructural sólo cuesta un recálculo, nunca un resultado
//! distinto.

use std::collections::{HashMap, HashSet};

use sha2::{Digest, Sha256};

use datakit_hash::to_canonical_json;

use crate::errors::TaskError;
use crate::task::{Task, TaskParam};

/// Largo del fingerprint corto usado como sufijo de outputs versionados.
pub const SHORT_FINGERPRINT_LEN: usize = 8;

enum Frame<'a> {
    Enter(&'a dyn Task),
    Exit(&'a dyn Task),
}

// La familia acompaña a la dirección: dos tasks sin campos (ZST) pueden
// compartir dirección, pero no familia.
fn node_key(task: &dyn Task) -> (usize, &str) {
    (task as *const dyn Task as *const () as usize, task.family())
}

/// Descriptor propio del task, sin linaje.
///
/// Junta con coma: familia, versión y cada parámetro significativo como
/// `nombre=valor` (valor en JSON canónico), ordenados por nombre para que el
/// orden de declaración de parámetros nunca afecte el resultado.
pub fn task_descriptor(task: &dyn Task) -> String {
    let mut parts: Vec<String> = vec![task.family().to_string(), task.version().to_string()];
    let mut params: Vec<TaskParam> = task.params().into_iter().filter(|p| p.significant).collect();
    params.sort_by(|a, b| a.name.cmp(&b.name));
    for p in &params {
        parts.push(format!("{}={}", p.name, to_canonical_json(&p.value)));
    }
    parts.join(",")
}

/// Fingerprint hex (64 chars) del task y todo su linaje upstream.
///
/// Precondición: grafo acíclico; un ciclo se reporta como error.
pub fn salted_fingerprint(task: &dyn Task) -> Result<String, TaskError> {
    let mut memo: HashMap<(usize, &str), String> = HashMap::new();
    let mut visiting: HashSet<(usize, &str)> = HashSet::new();
    let mut stack: Vec<Frame> = vec![Frame::Enter(task)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(t) => {
                let key = node_key(t);
                if memo.contains_key(&key) {
                    continue;
                }
                if !visiting.insert(key) {
                    return Err(TaskError::DependencyCycle { family: t.family().to_string() });
                }
                stack.push(Frame::Exit(t));
                // push invertido para procesar en orden de declaración
                for dep in t.requires().into_iter().rev() {
                    stack.push(Frame::Enter(dep));
                }
            }
            Frame::Exit(t) => {
                let key = node_key(t);
                visiting.remove(&key);
                let mut msg = String::new();
                for dep in t.requires() {
                    msg.push_str(&memo[&node_key(dep)]);
                }
                msg.push_str(&task_descriptor(t));
                memo.insert(key, hex::encode(Sha256::digest(msg.as_bytes())));
            }
        }
    }

    Ok(memo[&node_key(task)].clone())
}

/// Prefijo corto del fingerprint, apto como sufijo de nombre de archivo.
pub fn short_fingerprint(task: &dyn Task) -> Result<String, TaskError> {
    let mut fp = salted_fingerprint(task)?;
    fp.truncate(SHORT_FINGERPRINT_LEN);
    Ok(fp)
}
