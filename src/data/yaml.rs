//! YAML report emission

use anyhow::{Context, Result};
use serde::Serialize;
use yaml_rust_davvid::{Yaml, YamlEmitter};

/// Serialize a report to YAML with multi-line string formatting.
///
/// serde_yaml always emits block scalars as quoted strings; routing the
/// value through the yaml-rust emitter keeps multi-line fields readable.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    let value = serde_yaml::to_value(data).context("Failed to serialize to serde value")?;

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(true);
    emitter
        .dump(&convert_value(&value)?)
        .context("Failed to emit YAML")?;

    Ok(output)
}

/// Bridge from serde_yaml's value model into yaml-rust's.
fn convert_value(value: &serde_yaml::Value) -> Result<Yaml> {
    let converted = match value {
        serde_yaml::Value::Null => Yaml::Null,
        serde_yaml::Value::Bool(b) => Yaml::Boolean(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Yaml::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Yaml::Real(f.to_string())
            } else {
                Yaml::String(n.to_string())
            }
        }
        serde_yaml::Value::String(s) => Yaml::String(s.clone()),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<_>> = seq.iter().map(convert_value).collect();
            Yaml::Array(items?)
        }
        serde_yaml::Value::Mapping(map) => {
            let mut hash = yaml_rust_davvid::yaml::Hash::new();
            for (k, v) in map {
                hash.insert(convert_value(k)?, convert_value(v)?);
            }
            Yaml::Hash(hash)
        }
        serde_yaml::Value::Tagged(tagged) => convert_value(&tagged.value)?,
    };

    Ok(converted)
}
