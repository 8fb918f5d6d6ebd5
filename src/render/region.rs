//! Output regions a snippet renderer writes into.

use crate::highlight::RenderOutput;

/// A live output area owned by one renderer while mounted.
///
/// `replace` swaps the whole content in one step; implementations must not
/// expose a partially written state.
pub trait OutputRegion {
    fn replace(&mut self, output: RenderOutput);

    /// Markup currently shown.
    fn content(&self) -> &str;
}

/// In-memory region. Built with [`MemoryRegion::new`] it records every
/// replacement it receives; [`MemoryRegion::latest_only`] keeps just the
/// current output, for renderers that live as long as the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion {
    current: RenderOutput,
    history: Vec<RenderOutput>,
    record_history: bool,
}

impl Default for MemoryRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self {
            current: RenderOutput::default(),
            history: Vec::new(),
            record_history: true,
        }
    }

    pub fn latest_only() -> Self {
        Self {
            record_history: false,
            ..Self::new()
        }
    }

    pub const fn current(&self) -> &RenderOutput {
        &self.current
    }

    /// Every output applied so far, oldest first. Always empty for a
    /// [`MemoryRegion::latest_only`] region.
    pub fn history(&self) -> &[RenderOutput] {
        &self.history
    }

    pub fn into_current(self) -> RenderOutput {
        self.current
    }
}

impl OutputRegion for MemoryRegion {
    fn replace(&mut self, output: RenderOutput) {
        if self.record_history {
            self.history.push(output.clone());
        }
        self.current = output;
    }

    fn content(&self) -> &str {
        &self.current.markup
    }
}

impl OutputRegion for String {
    fn replace(&mut self, output: RenderOutput) {
        *self = output.markup;
    }

    fn content(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(markup: &str) -> RenderOutput {
        RenderOutput {
            markup: markup.to_string(),
            applied_language: "text".to_string(),
            line_count: 1,
            highlighted_lines: Vec::new(),
        }
    }

    #[test]
    fn test_memory_region_starts_empty() {
        let region = MemoryRegion::new();
        assert_eq!(region.content(), "");
        assert!(region.history().is_empty());
    }

    #[test]
    fn test_memory_region_records_replacements() {
        let mut region = MemoryRegion::new();
        region.replace(output("<a>"));
        region.replace(output("<b>"));
        assert_eq!(region.content(), "<b>");
        assert_eq!(region.history().len(), 2);
        assert_eq!(region.history()[0].markup, "<a>");
        assert_eq!(region.into_current().markup, "<b>");
    }

    #[test]
    fn test_latest_only_region_keeps_no_history() {
        let mut region = MemoryRegion::latest_only();
        for n in 0..50 {
            region.replace(output(&format!("<v{n}>")));
        }
        assert_eq!(region.content(), "<v49>");
        assert!(region.history().is_empty());
    }

    #[test]
    fn test_string_region_holds_markup_only() {
        let mut region = String::from("stale");
        region.replace(output("<fresh>"));
        assert_eq!(region.content(), "<fresh>");
    }
}
