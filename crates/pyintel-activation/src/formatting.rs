//! On-type formatting dispatcher and formatters
//!
//! The host registers a single on-type provider; the dispatcher routes each
//! request to the formatter owning its trigger character. Registration is
//! skipped entirely when no routes are configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use pyintel_host::{
    OnTypeFormattingProvider, OnTypeFormattingRequest, Position, Range, Result, TextEdit,
};

/// Routes on-type requests to the formatter for their trigger character
#[derive(Default)]
pub struct OnTypeFormattingDispatcher {
    routes: HashMap<char, Arc<dyn OnTypeFormattingProvider>>,
}

impl OnTypeFormattingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route; a later route for the same trigger replaces the earlier
    pub fn route(mut self, trigger: char, provider: Arc<dyn OnTypeFormattingProvider>) -> Self {
        self.routes.insert(trigger, provider);
        self
    }

    /// All trigger characters, sorted for deterministic registration
    pub fn trigger_characters(&self) -> Vec<char> {
        let mut triggers: Vec<char> = self.routes.keys().copied().collect();
        triggers.sort_unstable();
        triggers
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[async_trait]
impl OnTypeFormattingProvider for OnTypeFormattingDispatcher {
    async fn provide_on_type_edits(&self, req: &OnTypeFormattingRequest) -> Result<Vec<TextEdit>> {
        match self.routes.get(&req.trigger_character) {
            Some(provider) => provider.provide_on_type_edits(req).await,
            None => Ok(Vec::new()),
        }
    }
}

/// Strips trailing whitespace from the line just completed by Enter
#[derive(Debug, Default)]
pub struct OnEnterFormatter;

#[async_trait]
impl OnTypeFormattingProvider for OnEnterFormatter {
    async fn provide_on_type_edits(&self, req: &OnTypeFormattingRequest) -> Result<Vec<TextEdit>> {
        if req.position.line == 0 {
            return Ok(Vec::new());
        }
        let completed = req.position.line - 1;
        let Some(line) = req.source.lines().nth(completed as usize) else {
            return Ok(Vec::new());
        };
        let trimmed = line.trim_end();
        if trimmed.len() == line.len() {
            return Ok(Vec::new());
        }
        // Positions are character offsets, not byte offsets
        Ok(vec![TextEdit {
            range: Range::new(
                Position::new(completed, trimmed.chars().count() as u32),
                Position::new(completed, line.chars().count() as u32),
            ),
            new_text: String::new(),
        }])
    }
}

/// Re-aligns dedent keywords (`else`, `elif`, `except`, `finally`) with
/// their opening statement when `:` is typed
#[derive(Debug, Default)]
pub struct BlockFormatter;

const DEDENT_KEYWORDS: &[&str] = &["else", "elif", "except", "finally"];
const OPENER_KEYWORDS: &[&str] = &["if", "elif", "else", "for", "while", "try", "except", "with"];

fn starts_with_keyword(stripped: &str, keyword: &str) -> bool {
    stripped.starts_with(keyword)
        && stripped[keyword.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_')
}

fn indent_width(line: &str) -> usize {
    line.chars().count() - line.trim_start().chars().count()
}

#[async_trait]
impl OnTypeFormattingProvider for BlockFormatter {
    async fn provide_on_type_edits(&self, req: &OnTypeFormattingRequest) -> Result<Vec<TextEdit>> {
        let lines: Vec<&str> = req.source.lines().collect();
        let line_index = req.position.line as usize;
        let Some(&line) = lines.get(line_index) else {
            return Ok(Vec::new());
        };
        let stripped = line.trim_start();
        if !DEDENT_KEYWORDS
            .iter()
            .any(|kw| starts_with_keyword(stripped, kw))
        {
            return Ok(Vec::new());
        }
        let indent = indent_width(line);
        if indent == 0 {
            return Ok(Vec::new());
        }

        // Nearest preceding opener at a shallower indent is the block owner
        let target = lines[..line_index]
            .iter()
            .rev()
            .filter(|candidate| !candidate.trim().is_empty())
            .find(|candidate| {
                indent_width(candidate) < indent
                    && OPENER_KEYWORDS
                        .iter()
                        .any(|kw| starts_with_keyword(candidate.trim_start(), kw))
            })
            .map(|candidate| indent_width(candidate));

        match target {
            Some(target_indent) if target_indent != indent => Ok(vec![TextEdit {
                range: Range::new(
                    Position::new(req.position.line, 0),
                    Position::new(req.position.line, indent as u32),
                ),
                new_text: " ".repeat(target_indent),
            }]),
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_type(source: &str, line: u32, character: u32, trigger: char) -> OnTypeFormattingRequest {
        OnTypeFormattingRequest {
            uri: "file:///work/app/main.py".to_string(),
            source: source.to_string(),
            position: Position::new(line, character),
            trigger_character: trigger,
        }
    }

    #[tokio::test]
    async fn test_dispatcher_routes_by_trigger() {
        let dispatcher = OnTypeFormattingDispatcher::new()
            .route('\n', Arc::new(OnEnterFormatter))
            .route(':', Arc::new(BlockFormatter));
        assert_eq!(dispatcher.trigger_characters(), vec!['\n', ':']);
        assert!(!dispatcher.is_empty());

        // Unknown trigger is a no-op, not an error
        let edits = dispatcher
            .provide_on_type_edits(&on_type("x = 1\n", 0, 5, ';'))
            .await
            .unwrap();
        assert!(edits.is_empty());
    }

    #[tokio::test]
    async fn test_on_enter_strips_trailing_whitespace() {
        let formatter = OnEnterFormatter;
        let edits = formatter
            .provide_on_type_edits(&on_type("x = 1   \n", 1, 0, '\n'))
            .await
            .unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].range.start, Position::new(0, 5));
        assert_eq!(edits[0].range.end, Position::new(0, 8));
        assert!(edits[0].new_text.is_empty());
    }

    #[tokio::test]
    async fn test_on_enter_offsets_are_characters_not_bytes() {
        // "é" is two bytes but one character; the edit must start at 5
        let formatter = OnEnterFormatter;
        let edits = formatter
            .provide_on_type_edits(&on_type("é = 1   \n", 1, 0, '\n'))
            .await
            .unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].range.start, Position::new(0, 5));
        assert_eq!(edits[0].range.end, Position::new(0, 8));
    }

    #[tokio::test]
    async fn test_on_enter_leaves_clean_lines_alone() {
        let formatter = OnEnterFormatter;
        assert!(formatter
            .provide_on_type_edits(&on_type("x = 1\n", 1, 0, '\n'))
            .await
            .unwrap()
            .is_empty());
        assert!(formatter
            .provide_on_type_edits(&on_type("x = 1\n", 0, 5, '\n'))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_block_formatter_realigns_else() {
        let source = "if ready:\n    go()\n        else:\n";
        let formatter = BlockFormatter;
        let edits = formatter
            .provide_on_type_edits(&on_type(source, 2, 13, ':'))
            .await
            .unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].new_text, "");
        assert_eq!(edits[0].range.end, Position::new(2, 8));
    }

    #[tokio::test]
    async fn test_block_formatter_keeps_aligned_else() {
        let source = "if ready:\n    go()\nelse:\n";
        let formatter = BlockFormatter;
        assert!(formatter
            .provide_on_type_edits(&on_type(source, 2, 5, ':'))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_block_formatter_ignores_other_statements() {
        let source = "if ready:\n        stop()\n";
        let formatter = BlockFormatter;
        assert!(formatter
            .provide_on_type_edits(&on_type(source, 1, 14, ':'))
            .await
            .unwrap()
            .is_empty());
    }
}
