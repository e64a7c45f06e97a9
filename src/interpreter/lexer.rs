use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the
/// lexer. This enum defines all recognized tokens in the language.
///
/// Tokenization is total: input that no ordinary rule recognizes comes
/// out as [`Token::Illegal`] (one character at a time) or
/// [`Token::Unterminated`] (a string literal missing its closing quote),
/// never as a lexer failure.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `cr`
    #[token("cr")]
    Cr,
    /// `def`
    #[token("def")]
    Def,
    /// `else`
    #[token("else")]
    Else,
    /// `elseif`
    #[token("elseif")]
    Elseif,
    /// `end`
    #[token("end")]
    End,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `readnum`
    #[token("readnum")]
    Readnum,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `while`
    #[token("while")]
    While,
    /// `write`
    #[token("write")]
    Write,

    /// Identifier tokens; variable or function names such as `x` or
    /// `total_2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literal tokens, such as `42`, `2e6` or `3E+2`.
    ///
    /// A leading sign is munched greedily into the literal; the
    /// [`Lexer`] wrapper splits it back off whenever the previous token
    /// could end an expression.
    #[regex(r"[+-]?[0-9]+([eE]\+?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens, quotes included. Either quote style works
    /// as long as the closing quote matches the opening one.
    #[regex(r#""[^"\n]*""#, |lex| lex.slice().to_string())]
    #[regex(r"'[^'\n]*'", |lex| lex.slice().to_string())]
    Str(String),
    /// A string literal missing its closing quote. The lexeme runs
    /// through the offending newline, or to the end of the input.
    #[regex(r#""[^"\n]*\n?"#, lex_unterminated)]
    #[regex(r"'[^'\n]*\n?", lex_unterminated)]
    Unterminated(String),

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AmpAmp,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// A stray `&` not followed by a second `&`.
    #[token("&")]
    Ampersand,
    /// A stray `|` not followed by a second `|`.
    #[token("|")]
    Pipe,

    /// Newlines are insignificant between lexemes; they only advance the
    /// line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
    /// `# comments` run to the end of the line.
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Spaces, tabs and feeds between lexemes.
    #[regex(r"[ \t\r\f\x0B]+", logos::skip)]
    Whitespace,

    /// Any single character no other rule recognizes.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Consumes the slice of an unterminated string literal, counting the
/// newline it swallows when one is present.
fn lex_unterminated(lex: &mut logos::Lexer<Token>) -> String {
    let text = lex.slice().to_string();
    if text.ends_with('\n') {
        lex.extras.line += 1;
    }
    text
}

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A reserved word such as `while` or `true`.
    Keyword,
    /// A variable or function name.
    Identifier,
    /// A numeric literal.
    Number,
    /// A string literal, quotes included.
    Str,
    /// An arithmetic, comparison, logical, or indexing operator.
    Operator,
    /// Structural characters: parentheses, commas, and stray `&`/`|`.
    Punctuation,
    /// An unterminated string or a character the language has no use
    /// for.
    Malformed,
}

impl Token {
    /// The verbatim source text of this token.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Cr => "cr",
            Self::Def => "def",
            Self::Else => "else",
            Self::Elseif => "elseif",
            Self::End => "end",
            Self::False => "false",
            Self::If => "if",
            Self::Readnum => "readnum",
            Self::Return => "return",
            Self::True => "true",
            Self::While => "while",
            Self::Write => "write",
            Self::Identifier(text)
            | Self::Number(text)
            | Self::Str(text)
            | Self::Unterminated(text)
            | Self::Illegal(text) => text,
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Bang => "!",
            Self::Equals => "=",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Newline | Self::Comment | Self::Whitespace => {
                unreachable!("trivia is skipped during tokenization")
            },
        }
    }

    /// The lexical category this token is reported under.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Cr
            | Self::Def
            | Self::Else
            | Self::Elseif
            | Self::End
            | Self::False
            | Self::If
            | Self::Readnum
            | Self::Return
            | Self::True
            | Self::While
            | Self::Write => Category::Keyword,
            Self::Identifier(_) => Category::Identifier,
            Self::Number(_) => Category::Number,
            Self::Str(_) => Category::Str,
            Self::Unterminated(_) | Self::Illegal(_) => Category::Malformed,
            Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::Percent
            | Self::EqualEqual
            | Self::BangEqual
            | Self::Less
            | Self::LessEqual
            | Self::Greater
            | Self::GreaterEqual
            | Self::AmpAmp
            | Self::PipePipe
            | Self::Bang
            | Self::Equals
            | Self::LBracket
            | Self::RBracket => Category::Operator,
            Self::LParen | Self::RParen | Self::Comma | Self::Ampersand | Self::Pipe => {
                Category::Punctuation
            },
            Self::Newline | Self::Comment | Self::Whitespace => {
                unreachable!("trivia is skipped during tokenization")
            },
        }
    }

    /// Whether this token can end a value-producing expression.
    ///
    /// After such a token a `+` or `-` must act as a binary operator,
    /// even when digits follow it directly.
    #[must_use]
    pub const fn ends_value(&self) -> bool {
        matches!(self,
                 Self::Identifier(_)
                 | Self::Number(_)
                 | Self::RParen
                 | Self::RBracket
                 | Self::True
                 | Self::False)
    }
}

/// One lexeme of the public token stream: the verbatim text paired with
/// its lexical category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The verbatim source text, quotes included for string literals.
    pub text:     String,
    /// The lexical category.
    pub category: Category,
    /// The source line the lexeme starts on.
    pub line:     usize,
}

/// A lazy, single-pass token stream over one source string.
///
/// The stream pairs every token with its source line and applies the
/// signed-literal override: the generated lexer munches `+`/`-` into a
/// following numeric literal greedily, and this wrapper splits the sign
/// back out as an operator token whenever the previously emitted token
/// ends a value (an identifier, a numeric literal, `)`, `]`, `true`, or
/// `false`). At the start of the stream the override is inactive.
///
/// The stream is not restartable; create a new `Lexer` to tokenize from
/// position zero again.
pub struct Lexer<'src> {
    inner:       logos::Lexer<'src, Token>,
    pending:     Option<Token>,
    after_value: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a token stream starting at the beginning of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:       Token::lexer_with_extras(source, LexerExtras { line: 1 }),
               pending:     None,
               after_value: false, }
    }

    /// Applies the signed-literal override to a freshly lexed token.
    ///
    /// When the previous token ends a value and this token is a numeric
    /// literal carrying a sign, the sign is emitted alone as an operator
    /// and the unsigned remainder is queued as the next token.
    fn split_sign(&mut self, token: Token) -> Token {
        if !self.after_value {
            return token;
        }
        match token {
            Token::Number(text) if text.starts_with(['+', '-']) => {
                let operator = if text.starts_with('+') { Token::Plus } else { Token::Minus };
                self.pending = Some(Token::Number(text[1..].to_string()));
                operator
            },
            other => other,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let token = if let Some(pending) = self.pending.take() {
            pending
        } else {
            let raw = match self.inner.next()? {
                Ok(token) => token,
                Err(()) => Token::Illegal(self.inner.slice().to_string()),
            };
            self.split_sign(raw)
        };

        self.after_value = token.ends_value();
        Some((token, self.inner.extras.line))
    }
}
