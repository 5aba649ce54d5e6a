//! Instruction templates sent to each backend.
//!
//! Both templates share the same constraints (math-block output only, no
//! prose, bare formula on request) and differ only in wording. The source
//! text is always appended verbatim as the final line.

use crate::agents::config::Backend;

const CLOUD_INSTRUCTIONS: &str = "Hello Gemini, you are a math-formatting assistant.
Write the following query in LaTeX format.
Only respond with the math block syntax $$ math $$, like this:
$$
math
$$
Do not respond with any other text, just the math syntax.
If the user asks you to write a paragraph, do not write it.
If the user asks for a formula, for example mass = density * volume, provide only that formula.
The query is: ";

const LOCAL_INSTRUCTIONS: &str = "You are a math-formatting assistant.
Write the following query in LaTeX format.
Only respond with math code block syntax, like:
$$
math
$$
Respond with only the LaTeX, no explanation or extra text.
Never expand the query into a paragraph.
If the user asks for a formula, provide only that formula.
Query: ";

/// Render the prompt for `backend` around `source_text`.
///
/// Callers reject empty selections before getting here.
pub fn build_prompt(backend: Backend, source_text: &str) -> String {
    let instructions = match backend {
        Backend::Cloud => CLOUD_INSTRUCTIONS,
        Backend::Local => LOCAL_INSTRUCTIONS,
    };
    let mut prompt = String::with_capacity(instructions.len() + source_text.len());
    prompt.push_str(instructions);
    prompt.push_str(source_text);
    prompt
}
