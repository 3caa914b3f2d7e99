//! # Command Templating
//!
//! A thin wrapper over the `handlebars` crate that renders one command per
//! batch. The engine runs in strict mode, so a placeholder the context does
//! not supply is an error rather than an empty string, and escaping is turned
//! off because the output is shell text, not HTML.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{GenerateError, Result};

const TEMPLATE_NAME: &str = "command";

/// A parsed command template.
pub struct CommandTemplate {
    engine: Handlebars<'static>,
}

/// Values substituted into the template for a single batch.
#[derive(Debug, Clone, Serialize)]
pub struct CommandContext<'a> {
    pub instance_name: String,
    pub gcp_project: &'a str,
    pub zone: &'a str,
    pub service_account: &'a str,
    pub start: u64,
    pub end: u64,
    pub batch_num: u64,
}

impl CommandTemplate {
    /// Parses `text` as a handlebars template.
    pub fn parse(text: &str) -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine.register_escape_fn(handlebars::no_escape);
        engine
            .register_template_string(TEMPLATE_NAME, text)
            .map_err(|e| GenerateError::Template(Box::new(e)))?;
        Ok(CommandTemplate { engine })
    }

    pub fn render(&self, context: &CommandContext<'_>) -> Result<String> {
        self.engine
            .render(TEMPLATE_NAME, context)
            .map_err(|e| GenerateError::Render {
                batch_num: context.batch_num,
                source: Box::new(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> CommandContext<'static> {
        CommandContext {
            instance_name: "vm-3".to_string(),
            gcp_project: "proj",
            zone: "us-central1-a",
            service_account: "sa@proj.iam.gserviceaccount.com",
            start: 10,
            end: 19,
            batch_num: 3,
        }
    }

    #[test]
    fn substitutes_all_placeholders() {
        let t = CommandTemplate::parse(
            "{{instance_name}} {{gcp_project}} {{zone}} {{service_account}} {{start}}-{{end}} #{{batch_num}}",
        )
        .unwrap();
        assert_eq!(
            t.render(&context()).unwrap(),
            "vm-3 proj us-central1-a sa@proj.iam.gserviceaccount.com 10-19 #3"
        );
    }

    #[test]
    fn does_not_escape() {
        let t = CommandTemplate::parse("--scopes=https://x/y&z={{zone}}").unwrap();
        let mut ctx = context();
        ctx.zone = "<a>";
        assert_eq!(t.render(&ctx).unwrap(), "--scopes=https://x/y&z=<a>");
    }

    #[test]
    fn unknown_placeholder_fails() {
        let t = CommandTemplate::parse("--region={{region}}").unwrap();
        let err = t.render(&context()).unwrap_err();
        assert!(matches!(err, GenerateError::Render { batch_num: 3, .. }));
    }

    #[test]
    fn unused_values_are_fine() {
        let t = CommandTemplate::parse("static").unwrap();
        assert_eq!(t.render(&context()).unwrap(), "static");
    }

    #[test]
    fn malformed_template_fails() {
        assert!(matches!(
            CommandTemplate::parse("{{#if start}}unclosed"),
            Err(GenerateError::Template(_))
        ));
    }
}
