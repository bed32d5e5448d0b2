use crate::error::{EngineError, Result};

/// Strip whitespace, lower-case, and split at the single `=`.
pub fn normalize_equation(raw: &str) -> Result<(String, String)> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let count = cleaned.matches('=').count();
    if count != 1 {
        return Err(EngineError::MalformedEquation(format!(
            "se esperaba exactamente un '=' y hay {count}"
        )));
    }

    let (left, right) = cleaned
        .split_once('=')
        .ok_or_else(|| EngineError::MalformedEquation("falta '='".to_string()))?;
    if left.is_empty() || right.is_empty() {
        return Err(EngineError::MalformedEquation(
            "un lado de la ecuación está vacío".to_string(),
        ));
    }

    Ok((left.to_string(), right.to_string()))
}

/// Split one side of an equation into signed term strings.
///
/// Every `-` is rewritten to `+-` so that splitting on `+` keeps each sign
/// attached to the term that follows it.
pub fn split_terms(side: &str) -> Vec<String> {
    let prefixed = if side.starts_with('+') || side.starts_with('-') {
        side.to_string()
    } else {
        format!("+{side}")
    };
    prefixed
        .replace('-', "+-")
        .split('+')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
