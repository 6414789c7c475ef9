//! Lexical token stream paired with the syntax tree.
//!
//! The serializer's view of a program is the token stream, not the node
//! arena: every piece of program text, including whitespace and
//! punctuation, lives in exactly one [`Token`]. Identifier nodes point at
//! their token by [`TokenId`], which is what lets a rename update both
//! representations in one step.

/// Index of a token in a [`TokenList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Array index for this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An identifier word (variable, label, or property name).
    Identifier,
    /// A reserved word (`var`, `with`, `break`, ...).
    Keyword,
    /// Punctuation (`=`, `;`, `{`, ...).
    Punctuator,
    /// Whitespace and line terminators.
    Whitespace,
}

/// One lexical token: a kind plus the exact program text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text as it appears in the program.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The ordered token stream for a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty token list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token, returning its id.
    pub fn push(&mut self, kind: TokenKind, text: impl Into<String>) -> TokenId {
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(Token {
            kind,
            text: text.into(),
        });
        id
    }

    /// Look up a token by id.
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    /// Number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the stream holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Concatenate every token's text in stream order.
    ///
    /// This is the minimal serialization used by hosts and tests to observe
    /// rename results; full pretty-printing is an external concern.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&token.text);
        }
        out
    }

    /// Overwrite a token's text. Crate-internal: the only caller is the
    /// identifier mutator, which updates node and token together.
    pub(crate) fn set_text(&mut self, id: TokenId, text: &str) {
        self.tokens[id.index()].text = text.to_string();
    }
}
