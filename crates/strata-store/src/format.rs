//! TOML and JSON input/output for a declared [`ParamTree`].
//!
//! Loading is schema-first: the declare pass has already built the section
//! tree, so an unknown section or key in the input is an error, not a new
//! entry.

use tracing::debug;

use strata_core::{Result, StrataError};

use crate::tree::{ParamTree, Section};

impl ParamTree {
    /// Load values from a TOML document. Tables map to subsections,
    /// scalars to declared parameters.
    pub fn load_toml_str(&mut self, raw: &str) -> Result<()> {
        let table: toml::Table = raw.parse()?;
        apply_toml_table(&mut self.root, &table, &mut Vec::new())?;
        debug!("TOML input applied to parameter tree");
        Ok(())
    }

    /// Load values from a JSON document. Objects map to subsections,
    /// scalars to declared parameters.
    pub fn load_json_str(&mut self, raw: &str) -> Result<()> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let Some(object) = value.as_object() else {
            return Err(StrataError::Format(
                "top-level JSON value must be an object".into(),
            ));
        };
        apply_json_object(&mut self.root, object, &mut Vec::new())?;
        debug!("JSON input applied to parameter tree");
        Ok(())
    }

    /// Render every current value as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(&toml_values(&self.root))
            .map_err(|e| StrataError::Format(e.to_string()))
    }

    /// Render every current value as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json_values(&self.root))?)
    }

    /// Render the declared defaults as TOML, with each parameter's
    /// description as a `#` comment line. Used for generated default
    /// parameter files.
    pub fn to_default_toml_string(&self) -> String {
        let mut doc = toml_edit::DocumentMut::new();
        fill_defaults(doc.as_table_mut(), &self.root);
        doc.to_string()
    }
}

fn apply_toml_table(section: &mut Section, table: &toml::Table, path: &mut Vec<String>) -> Result<()> {
    for (key, value) in table {
        match value {
            toml::Value::Table(sub) => {
                let Some(child) = section.subsections.get_mut(key) else {
                    return Err(StrataError::UnknownSection(scoped(path, key)));
                };
                path.push(key.clone());
                apply_toml_table(child, sub, path)?;
                path.pop();
            }
            scalar => {
                let Some(entry) = section.parameters.get_mut(key) else {
                    return Err(StrataError::UnknownParameter {
                        section: path.join("/"),
                        name: key.clone(),
                    });
                };
                entry.value = toml_scalar(scalar);
            }
        }
    }
    Ok(())
}

fn apply_json_object(
    section: &mut Section,
    object: &serde_json::Map<String, serde_json::Value>,
    path: &mut Vec<String>,
) -> Result<()> {
    for (key, value) in object {
        match value {
            serde_json::Value::Object(sub) => {
                let Some(child) = section.subsections.get_mut(key) else {
                    return Err(StrataError::UnknownSection(scoped(path, key)));
                };
                path.push(key.clone());
                apply_json_object(child, sub, path)?;
                path.pop();
            }
            scalar => {
                let Some(entry) = section.parameters.get_mut(key) else {
                    return Err(StrataError::UnknownParameter {
                        section: path.join("/"),
                        name: key.clone(),
                    });
                };
                entry.value = json_scalar(scalar);
            }
        }
    }
    Ok(())
}

/// A scalar's string form: strings unquoted, everything else in its
/// serialized spelling.
fn toml_scalar(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn scoped(path: &[String], key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", path.join("/"), key)
    }
}

fn toml_values(section: &Section) -> toml::Table {
    let mut table = toml::Table::new();
    for (name, entry) in &section.parameters {
        table.insert(name.clone(), toml::Value::String(entry.value.clone()));
    }
    for (name, sub) in &section.subsections {
        table.insert(name.clone(), toml::Value::Table(toml_values(sub)));
    }
    table
}

fn json_values(section: &Section) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    for (name, entry) in &section.parameters {
        object.insert(name.clone(), serde_json::Value::String(entry.value.clone()));
    }
    for (name, sub) in &section.subsections {
        object.insert(name.clone(), json_values(sub));
    }
    serde_json::Value::Object(object)
}

fn fill_defaults(table: &mut toml_edit::Table, section: &Section) {
    for (name, entry) in &section.parameters {
        table.insert(name, toml_edit::value(entry.default.clone()));
        if !entry.description.is_empty() {
            if let Some(mut key) = table.key_mut(name) {
                key.leaf_decor_mut()
                    .set_prefix(format!("# {}\n", entry.description));
            }
        }
    }
    for (name, sub) in &section.subsections {
        let mut child = toml_edit::Table::new();
        fill_defaults(&mut child, sub);
        table.insert(name, toml_edit::Item::Table(child));
    }
}
