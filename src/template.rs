//! `{variable}` substitution for generated file contents.
//!
//! - `{name}` substitutes the value of variable `name`
//! - `{{` renders as a literal `{`, `}}` as a literal `}`
//!
//! Substituted values are inserted verbatim and never re-scanned, so a value
//! containing braces is safe. Referencing an undefined variable is an error
//! rather than an empty substitution.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("undefined variable '{name}' at position {position}")]
    UndefinedVariable { name: String, position: usize },

    #[error("unmatched '{{' at position {position}")]
    UnmatchedBrace { position: usize },

    #[error("empty variable name '{{}}' at position {position}")]
    EmptyVariableName { position: usize },
}

/// Render `template`, substituting every `{variable}` from `variables`.
pub fn render_template(
    template: &str,
    variables: &HashMap<&str, &str>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut var_name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => var_name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let var_name = var_name.trim();
                if var_name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                match variables.get(var_name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: var_name.to_string(),
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is kept as-is.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
