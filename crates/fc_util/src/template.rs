//! `${...}` substitution over JSON text.
//!
//! `mix_with` serializes a configuration object, renders the text through a
//! [`TemplateEngine`] with caller data, and decodes the result. Placeholders
//! can appear anywhere in the serialized text: inside string values or keys.
//!
//! The default [`VariableTemplate`] understands:
//!
//! | syntax          | output |
//! |-----------------|--------|
//! | `${user.name}`  | value at the dotted path, HTML-escaped |
//! | `${items.0}`    | array element by index |
//! | `${html\|raw}`  | value inserted unescaped |
//! | `${missing}`    | empty text |

use fc_value::{classify, Value};

use crate::json::{parse_json, stringify};
use crate::{TemplateError, UtilError};

/// Renders template text against a data value.
pub trait TemplateEngine {
    fn render(&self, template: &str, data: &Value) -> Result<String, TemplateError>;
}

impl<E: TemplateEngine + ?Sized> TemplateEngine for &E {
    fn render(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        (**self).render(template, data)
    }
}

/// Dotted-path variable substitution.
#[derive(Clone, Copy, Debug, Default)]
pub struct VariableTemplate;

impl TemplateEngine for VariableTemplate {
    fn render(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut consumed = 0;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let offset = consumed + start;
            let body_start = start + 2;
            let Some(len) = rest[body_start..].find('}') else {
                return Err(TemplateError::Unterminated { offset });
            };

            let placeholder = Placeholder::parse(&rest[body_start..body_start + len], offset)?;
            placeholder.write(data, &mut out);

            let end = body_start + len + 1;
            consumed += end;
            rest = &rest[end..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

struct Placeholder<'a> {
    path: &'a str,
    raw: bool,
}

impl<'a> Placeholder<'a> {
    fn parse(body: &'a str, offset: usize) -> Result<Self, TemplateError> {
        let mut parts = body.split('|').map(str::trim);
        let path = parts.next().unwrap_or_default();
        if path.is_empty() {
            return Err(TemplateError::EmptyPlaceholder { offset });
        }

        let mut raw = false;
        for filter in parts {
            match filter {
                "raw" => raw = true,
                other => {
                    return Err(TemplateError::UnknownFilter {
                        filter: other.to_string(),
                    })
                }
            }
        }
        Ok(Placeholder { path, raw })
    }

    fn write(&self, data: &Value, out: &mut String) {
        let text = match data.pointer(self.path) {
            None | Some(Value::Undefined | Value::Null) => return,
            Some(Value::Str(s)) => s.to_string(),
            Some(other) => other.to_string(),
        };
        if self.raw {
            out.push_str(&text);
        } else {
            escape_html(&text, out);
        }
    }
}

fn escape_html(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Fill `${...}` placeholders in `conf` with values from `data`.
pub fn mix_with(conf: &Value, data: &Value) -> Result<Value, UtilError> {
    mix_with_engine(conf, data, &VariableTemplate)
}

/// [`mix_with`] with a caller-supplied engine.
#[tracing::instrument(level = "trace", skip_all, fields(conf = %classify(conf)))]
pub fn mix_with_engine(
    conf: &Value,
    data: &Value,
    engine: &dyn TemplateEngine,
) -> Result<Value, UtilError> {
    let template = stringify(conf)?;
    let rendered = engine.render(&template, data)?;
    tracing::trace!(%rendered, "rendered configuration");
    parse_json(&rendered)
}
