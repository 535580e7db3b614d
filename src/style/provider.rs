use crate::foundation::error::{LoopforgeError, LoopforgeResult};
use crate::style::model::{StyleOverrides, StyleParams};
use crate::style::prompt::PromptMapper;

/// Capability seam for turning a prompt into a style record.
///
/// The render loop and any frontend depend only on this trait, so the
/// rule-based mapper and a generated-text provider are interchangeable.
pub trait StyleProvider {
    /// Produce a complete, validated style record for `prompt`.
    fn style_for_prompt(&self, prompt: &str) -> LoopforgeResult<StyleParams>;
}

impl StyleProvider for PromptMapper {
    fn style_for_prompt(&self, prompt: &str) -> LoopforgeResult<StyleParams> {
        // The rule table is total; no prompt can fail here.
        Ok(self.map(prompt))
    }
}

/// Transport for a text-generation backend.
///
/// No crate in scope ships an HTTP client, so the wire transport is supplied
/// by the embedder; Loopforge only owns the response handling.
pub trait TextCompletion {
    /// Generate a completion for `prompt` and return the raw response text.
    fn complete(&self, prompt: &str) -> LoopforgeResult<String>;
}

/// Style provider backed by a text-generation transport.
///
/// The response text is expected to embed a single JSON object describing
/// style overrides; the first `{ ... }` span is extracted, parsed as
/// [`StyleOverrides`], overlaid on the defaults, and validated. The one
/// provider-specific failure is a response with no JSON object at all.
pub struct GeneratedStyleProvider<T> {
    transport: T,
}

impl<T: TextCompletion> GeneratedStyleProvider<T> {
    /// Wrap a text-generation transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: TextCompletion> StyleProvider for GeneratedStyleProvider<T> {
    fn style_for_prompt(&self, prompt: &str) -> LoopforgeResult<StyleParams> {
        let text = self.transport.complete(prompt)?;
        let span = extract_json_object(&text).ok_or_else(|| {
            LoopforgeError::provider("no JSON object found in generated text")
        })?;
        let overrides: StyleOverrides = serde_json::from_str(span)
            .map_err(|e| LoopforgeError::serde(format!("generated style overrides: {e}")))?;
        let style = overrides.apply_to(&StyleParams::default());
        style.validate()?;
        tracing::debug!(prompt, "applied generated style overrides");
        Ok(style)
    }
}

/// Extract the widest `{ ... }` span from `text`: first opening brace to the
/// last closing brace after it.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
