//! Script tokenizer using logos.
//!
//! Only what bracket, declaration and statement checks need is told apart;
//! operators collapse into one token. With JSX enabled, element children are
//! skipped as text so apostrophes and backticks in copy do not open literals.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("var")]
    Var,
    #[token("return")]
    Return,
    #[token("import")]
    Import,
    #[token("export")]
    Export,
    #[token("from")]
    From,
    #[token("function")]
    Function,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("else")]
    Else,

    #[regex(r"[a-zA-Z_$\x{80}-\x{10FFFF}][a-zA-Z0-9_$\x{80}-\x{10FFFF}]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9a-zA-Z_]*)?", |lex| lex.slice())]
    Number(&'src str),

    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice())]
    #[regex(r"'([^'\\\n]|\\.)*'", |lex| lex.slice())]
    Str(&'src str),

    #[regex(r#""([^"\\\n]|\\.)*"#)]
    #[regex(r"'([^'\\\n]|\\.)*")]
    UnterminatedStr,

    #[regex(r"`([^`\\]|\\[\x00-\x{10FFFF}])*`")]
    Template,

    #[regex(r"`([^`\\]|\\[\x00-\x{10FFFF}])*")]
    UnterminatedTemplate,

    #[regex(r"//[^\n]*")]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[regex(r"[+\-*%=!&|^~?:.@#]+", |lex| lex.slice())]
    Op(&'src str),
}

impl Token<'_> {
    pub fn is_comment(&self) -> bool {
        matches!(self, Token::Comment | Token::UnterminatedComment)
    }

    /// Tokens that end an operand, after which `<` is a comparison
    fn is_operand(&self) -> bool {
        matches!(
            self,
            Token::Ident(_)
                | Token::Number(_)
                | Token::Str(_)
                | Token::Template
                | Token::RParen
                | Token::RBracket
                | Token::RBrace
        )
    }

    /// Closing bracket matching an opening one
    pub fn closer(&self) -> Option<char> {
        match self {
            Token::LParen => Some(')'),
            Token::LBrace => Some('}'),
            Token::LBracket => Some(']'),
            _ => None,
        }
    }

    pub fn as_closer(&self) -> Option<char> {
        match self {
            Token::RParen => Some(')'),
            Token::RBrace => Some('}'),
            Token::RBracket => Some(']'),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken<'src> {
    pub token: Token<'src>,
    pub span: TokenSpan,
}

#[derive(Debug, Clone)]
pub struct LexError {
    pub span: TokenSpan,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsxContext {
    /// `<name ...` up to `>` or `/>`
    OpeningTag { self_closing: bool },
    /// `</name` up to `>`
    ClosingTag,
    /// Between an element's tags
    Children,
    /// `{...}` inside a tag or children, with the count of nested braces
    Expression(usize),
}

/// Token stream over a script source, tracking JSX nesting when enabled
pub struct ScriptLexer<'src> {
    inner: logos::Lexer<'src, Token<'src>>,
    jsx: bool,
    contexts: Vec<JsxContext>,
    after_operand: bool,
}

impl<'src> ScriptLexer<'src> {
    pub fn new(source: &'src str, jsx: bool) -> Self {
        Self {
            inner: Token::lexer(source),
            jsx,
            contexts: Vec::new(),
            after_operand: false,
        }
    }

    fn skip_text(&mut self) {
        let text = self.inner.remainder();
        let length = text.find(|c: char| c == '<' || c == '{').unwrap_or(text.len());
        self.inner.bump(length);
    }

    fn next_starts_with(&self, pred: impl Fn(char) -> bool) -> bool {
        self.inner.remainder().chars().next().is_some_and(pred)
    }

    fn track(&mut self, token: &Token<'src>) {
        match self.contexts.last().copied() {
            Some(JsxContext::OpeningTag { self_closing }) => match token {
                Token::Slash => {
                    self.contexts.pop();
                    self.contexts.push(JsxContext::OpeningTag { self_closing: true });
                }
                Token::Gt => {
                    self.contexts.pop();
                    if !self_closing {
                        self.contexts.push(JsxContext::Children);
                    }
                }
                Token::LBrace => self.contexts.push(JsxContext::Expression(0)),
                // Type parameters such as `<T,>(x: T) => x`
                Token::Comma | Token::Semi | Token::LParen => {
                    self.contexts.pop();
                }
                _ => {}
            },
            Some(JsxContext::ClosingTag) => {
                if *token == Token::Gt {
                    self.contexts.pop();
                    self.contexts.pop();
                }
            }
            Some(JsxContext::Children) => match token {
                Token::LBrace => self.contexts.push(JsxContext::Expression(0)),
                Token::Lt if self.next_starts_with(|c| c == '/') => {
                    self.contexts.push(JsxContext::ClosingTag)
                }
                Token::Lt => self
                    .contexts
                    .push(JsxContext::OpeningTag { self_closing: false }),
                _ => {}
            },
            context => {
                if let Some(JsxContext::Expression(depth)) = context {
                    match token {
                        Token::LBrace => {
                            self.contexts.pop();
                            self.contexts.push(JsxContext::Expression(depth + 1));
                        }
                        Token::RBrace => {
                            self.contexts.pop();
                            if depth > 0 {
                                self.contexts.push(JsxContext::Expression(depth - 1));
                            }
                        }
                        _ => {}
                    }
                }
                // `<>` opens a fragment, which behaves as a tag with no name
                if self.jsx
                    && !self.after_operand
                    && *token == Token::Lt
                    && self.next_starts_with(|c| c.is_alphabetic() || c == '>')
                {
                    self.contexts
                        .push(JsxContext::OpeningTag { self_closing: false });
                }
            }
        }
        if !token.is_comment() {
            self.after_operand = token.is_operand();
        }
    }
}

impl<'src> Iterator for ScriptLexer<'src> {
    type Item = Result<SpannedToken<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.contexts.last() == Some(&JsxContext::Children) {
            self.skip_text();
        }
        let result = self.inner.next()?;
        let span = self.inner.span();
        let span = TokenSpan {
            start: span.start,
            end: span.end,
        };
        Some(match result {
            Ok(token) => {
                self.track(&token);
                Ok(SpannedToken { token, span })
            }
            Err(_) => Err(LexError {
                span,
                message: "Invalid character.".to_string(),
            }),
        })
    }
}

pub fn lex(source: &str, jsx: bool) -> ScriptLexer<'_> {
    ScriptLexer::new(source, jsx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token<'_>> {
        lex(source, false).filter_map(|r| r.ok().map(|t| t.token)).collect()
    }

    fn jsx_tokens(source: &str) -> Vec<Token<'_>> {
        lex(source, true).filter_map(|r| r.ok().map(|t| t.token)).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            tokens("const letter = import_x;"),
            vec![
                Token::Const,
                Token::Ident("letter"),
                Token::Op("="),
                Token::Ident("import_x"),
                Token::Semi,
            ]
        );
    }

    #[test]
    fn test_strings_and_templates() {
        assert_eq!(tokens(r#""a\"b" 'c'"#), vec![Token::Str(r#""a\"b""#), Token::Str("'c'")]);
        assert_eq!(tokens("`x ${y}\n z`"), vec![Token::Template]);
        assert_eq!(tokens("'open\nx"), vec![Token::UnterminatedStr, Token::Ident("x")]);
        assert_eq!(tokens("`open"), vec![Token::UnterminatedTemplate]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(tokens("a // b\n/* c */ d"), vec![
            Token::Ident("a"),
            Token::Comment,
            Token::Comment,
            Token::Ident("d"),
        ]);
        assert_eq!(tokens("a /* b"), vec![Token::Ident("a"), Token::UnterminatedComment]);
        assert_eq!(tokens("a / b"), vec![Token::Ident("a"), Token::Slash, Token::Ident("b")]);
    }

    #[test]
    fn test_invalid_character() {
        let results: Vec<_> = lex("a \\ b", false).collect();
        assert!(results[1].is_err());
        assert_eq!(results[1].as_ref().unwrap_err().span.start, 2);
    }

    #[test]
    fn test_non_ascii_text_is_an_identifier() {
        assert_eq!(tokens("Café"), vec![Token::Ident("Café")]);
    }

    #[test]
    fn test_jsx_children_are_text() {
        assert_eq!(
            jsx_tokens("<p>Don't `x`</p>;"),
            vec![
                Token::Lt,
                Token::Ident("p"),
                Token::Gt,
                Token::Lt,
                Token::Slash,
                Token::Ident("p"),
                Token::Gt,
                Token::Semi,
            ]
        );
        assert!(tokens("<p>Don't</p>").contains(&Token::UnterminatedStr));
    }

    #[test]
    fn test_jsx_expressions_and_nesting() {
        let source = "return (<ul title='a'>{items.map((i) => <li key={i}>It's {i}</li>)}<br/></ul>);";
        let tokens = jsx_tokens(source);
        assert!(!tokens.contains(&Token::UnterminatedStr));
        assert!(tokens.contains(&Token::Str("'a'")));
        assert_eq!(tokens.last(), Some(&Token::Semi));
        assert_eq!(tokens[tokens.len() - 2], Token::RParen);
    }

    #[test]
    fn test_comparison_is_not_an_element() {
        assert_eq!(
            jsx_tokens("a <b; 'x'"),
            vec![Token::Ident("a"), Token::Lt, Token::Ident("b"), Token::Semi, Token::Str("'x'")]
        );
        assert!(!jsx_tokens("const f = <T,>(x: T) => 'y';").contains(&Token::UnterminatedStr));
        assert!(!jsx_tokens("const f = () => <>It's</>;").contains(&Token::UnterminatedStr));
    }
}
