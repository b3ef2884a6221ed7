use serde::{Deserialize, Serialize};

/// Placeholder code explainer. Produces a fixed-template "explanation" that
/// embeds the submitted snippet verbatim; no model is consulted. Kept because
/// the public site wires it into a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub explanation: String,
}

pub fn explain_snippet(code: &str) -> Explanation {
    Explanation {
        explanation: format!(
            "This is a placeholder explanation generated locally. \
             The code you provided is:\n\n{}",
            code
        ),
    }
}
