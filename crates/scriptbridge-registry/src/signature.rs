//! Signal and method signatures in `name(type, type)` form.

use std::fmt;

use scriptbridge_core::TypeHash;

use crate::error::DispatchError;

/// A parsed signature such as `valueChanged(int,double)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: String,
    params: Vec<String>,
}

impl Signature {
    /// Build a signature from its parts.
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Parse `name(type, ...)`. Whitespace around names and types is ignored.
    ///
    /// Commas inside template arguments do not split parameters, so
    /// `changed(QMap<QString,int>)` has one parameter.
    pub fn parse(text: &str) -> Result<Self, DispatchError> {
        let invalid = || DispatchError::InvalidSignature(text.to_string());

        let text = text.trim();
        let open = text.find('(').ok_or_else(invalid)?;
        let body = text[open + 1..].strip_suffix(')').ok_or_else(invalid)?;

        let name = text[..open].trim();
        if name.is_empty() || body.contains(['(', ')']) {
            return Err(invalid());
        }

        let params = if body.trim().is_empty() {
            Vec::new()
        } else {
            split_params(body)
                .ok_or_else(invalid)?
                .into_iter()
                .map(|param| {
                    let param = param.trim();
                    if param.is_empty() {
                        Err(invalid())
                    } else {
                        Ok(param.to_string())
                    }
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self::new(name, params))
    }

    /// Signal or method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter type names.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Parameter type hashes, in order.
    pub fn param_types(&self) -> Vec<TypeHash> {
        self.params.iter().map(|p| TypeHash::from_name(p)).collect()
    }

    /// Hash of the whole signature.
    pub fn hash(&self) -> TypeHash {
        TypeHash::from_function(&self.name, &self.param_types())
    }
}

/// Split a parameter list on commas outside `<...>`.
///
/// Returns `None` if the angle brackets are unbalanced.
fn split_params(body: &str) -> Option<Vec<&str>> {
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                params.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    params.push(&body[start..]);
    Some(params)
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(","))
    }
}
