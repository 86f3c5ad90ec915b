//! JSON output to stdout

use anyhow::{Context, Result};
use serde::Serialize;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Indent JSON for humans instead of one compact line
    pub pretty: bool,
}

impl Output {
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        text.context("Failed to serialize result")
    }

    pub fn print<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecomctl_db::Category;

    #[test]
    fn compact_by_default() {
        let rows = vec![Category {
            id: 7,
            name: "drinks".to_string(),
        }];
        assert_eq!(
            Output::default().render(&rows).unwrap(),
            r#"[{"id":7,"name":"drinks"}]"#
        );
    }

    #[test]
    fn missing_row_renders_null() {
        let none: Option<Category> = None;
        assert_eq!(Output::default().render(&none).unwrap(), "null");
    }

    #[test]
    fn pretty_is_indented() {
        let out = Output { pretty: true };
        let text = out
            .render(&Category {
                id: 1,
                name: "fruits".to_string(),
            })
            .unwrap();
        assert!(text.contains("\n  \"id\": 1"));
    }
}
