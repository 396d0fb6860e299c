//! Line parsing for the interactive prompt.

/// Parsed user input: a lower-cased command name plus raw arguments.
///
/// Parsing stops at tokenization; argument counts and identifier syntax are
/// checked by the dispatch layer, and business rules by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    name: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Returns the normalized command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered command arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Splits a line of user input into a command line.
///
/// Returns `None` for empty or whitespace-only input. Double and single
/// quotes group words into a single argument; when a quote is left
/// unbalanced, parsing falls back to plain whitespace splitting.
#[must_use]
pub fn parse(input: &str) -> Option<CommandLine> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts = tokenize(trimmed).unwrap_or_else(|| {
        trimmed
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    });
    let mut tokens = parts.into_iter();
    let name = tokens.next()?.to_lowercase();
    Some(CommandLine {
        name,
        args: tokens.collect(),
    })
}

/// Quote-aware tokenizer.
///
/// Returns `None` when a quote is left unbalanced so the caller can fall
/// back to whitespace splitting. A quoted empty string yields an empty
/// token; the domain decides whether that is acceptable input.
fn tokenize(input: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return None;
    }
    if in_token {
        tokens.push(current);
    }
    Some(tokens)
}
