//! Shebang code lens provider
//!
//! The one provider with no backend behind it: a document whose first line
//! is a shebang gets a lens offering to use that interpreter.

use async_trait::async_trait;
use serde_json::json;

use pyintel_host::{
    CodeLens, CodeLensProvider, Command, DocumentRequest, Position, Range, Result,
};

/// Host command invoked when the lens is activated
pub const SET_INTERPRETER_COMMAND: &str = "pyintel.setShebangInterpreter";

/// Offers "use this interpreter" on shebang lines
#[derive(Debug, Default)]
pub struct ShebangCodeLensProvider;

impl ShebangCodeLensProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CodeLensProvider for ShebangCodeLensProvider {
    async fn provide_code_lenses(&self, doc: &DocumentRequest) -> Result<Vec<CodeLens>> {
        let Some(interpreter) = shebang_interpreter(&doc.source) else {
            return Ok(Vec::new());
        };
        let first_line_len = doc
            .source
            .lines()
            .next()
            .map(|l| l.chars().count())
            .unwrap_or(0);
        Ok(vec![CodeLens {
            range: Range::new(Position::new(0, 0), Position::new(0, first_line_len as u32)),
            command: Some(Command {
                title: format!("Set as interpreter ({interpreter})"),
                command: SET_INTERPRETER_COMMAND.to_string(),
                arguments: Some(vec![json!(interpreter)]),
            }),
        }])
    }
}

/// Extract the interpreter named by a shebang line, unwrapping `env`
fn shebang_interpreter(source: &str) -> Option<String> {
    let first_line = source.lines().next()?.trim();
    let rest = first_line.strip_prefix("#!")?.trim();
    if rest.is_empty() {
        return None;
    }
    let mut tokens = rest.split_whitespace();
    let head = tokens.next()?;
    if head.ends_with("/env") || head == "env" {
        tokens.next().map(str::to_string)
    } else {
        Some(head.to_string())
    }
}
