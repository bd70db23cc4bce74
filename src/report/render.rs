use liquid::model::Value as LiquidValue;
use liquid::{Object, Parser, ParserBuilder, Template};
use serde_derive::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use thiserror::Error;

use crate::configuration::settings::Settings;
use crate::report::summary::SuiteSummary;

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{{ title }}</title>
</head>
<body>
<h1>{{ title }}</h1>
{% for suite in suites %}
<h2>{{ suite.name }}</h2>
<p>Started {{ suite.start }}</p>
{% for group in suite.groups %}
<h3>{{ group.name }}</h3>
<table>
<tr><th>Test</th><th>Duration</th><th>Passed</th><th>Skipped</th><th>Failed</th><th>Pass rate</th></tr>
{% for test in group.results %}<tr><td>{{ test.name }}</td><td>{{ test.duration }}</td><td>{{ test.passed }}</td><td>{{ test.skipped }}</td><td>{{ test.failed }}</td><td>{% if test.pass_rate %}{{ test.pass_rate }}{% else %}N/A{% endif %}</td></tr>
{% endfor %}</table>
{% for test in group.results %}{% if test.video %}<p><a href="{{ test.video }}">Session video for {{ test.name }}</a></p>
{% endif %}<ul>
{% for method in test.methods %}<li class="{{ method.status }}">{{ method.class }}.{{ method.name }}{% if method.arguments %}({{ method.arguments }}){% endif %} {{ method.duration }}{% if method.defect %} [{{ method.defect }}]{% endif %}{% if method.skip_reason %}<br/>Skipped: {{ method.skip_reason }}{% endif %}{% if method.message %}<br/>{{ method.message }}{% endif %}{% for cause in method.causes %}<br/>Caused by {{ cause }}{% endfor %}</li>
{% endfor %}</ul>
{% endfor %}{% endfor %}
<h3>Chronology</h3>
<ol>
{% for invocation in suite.timeline %}<li>{{ invocation.start }} {{ invocation.method }} {{ invocation.thread }} {{ invocation.duration }}</li>
{% endfor %}</ol>
{% endfor %}
</body>
</html>
"#;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot read template: {0}")]
    Io(#[from] io::Error),
    #[error("cannot convert report data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template error: {0}")]
    Liquid(#[from] liquid::Error),
}

pub trait Convert<T> {
    fn convert(&self) -> T;
}

impl Convert<LiquidValue> for Value {
    fn convert(&self) -> LiquidValue {
        match self {
            Value::Null => LiquidValue::Nil,
            Value::Bool(boolean) => LiquidValue::scalar(*boolean),
            Value::Number(num) => match (num.as_i64(), num.as_f64()) {
                (Some(int), _) => LiquidValue::scalar(int),
                (None, Some(float)) => LiquidValue::scalar(float),
                _ => LiquidValue::Nil,
            },
            Value::String(string) => LiquidValue::scalar(string.to_string()),
            Value::Array(array) => LiquidValue::Array(array.iter().map(Value::convert).collect()),
            Value::Object(object) => {
                let mut liq_object = Object::new();
                for (key, value) in object {
                    liq_object.insert(key.clone().into(), value.convert());
                }
                LiquidValue::Object(liq_object)
            }
        }
    }
}

#[derive(Serialize)]
struct ReportView<'a> {
    title: &'a str,
    suites: &'a [SuiteSummary],
}

pub struct Renderer {
    template: Template,
}

impl Renderer {
    /// Renderer for the template named in the settings, or the built-in one.
    pub fn new(settings: &Settings) -> Result<Self, RenderError> {
        match &settings.template {
            Some(path) => {
                debug!("Using report template {}", path.display());
                Self::from_source(&fs::read_to_string(path)?)
            }
            None => Self::from_source(DEFAULT_TEMPLATE),
        }
    }

    pub fn from_source(source: &str) -> Result<Self, RenderError> {
        let parser: Parser = ParserBuilder::with_stdlib().build()?;
        let template = parser.parse(source)?;
        Ok(Self { template })
    }

    pub fn render(&self, title: &str, suites: &[SuiteSummary]) -> Result<String, RenderError> {
        let view = serde_json::to_value(&ReportView { title, suites })?;
        let globals = match view.convert() {
            LiquidValue::Object(object) => object,
            _ => Object::new(),
        };
        Ok(self.template.render(&globals)?)
    }
}
