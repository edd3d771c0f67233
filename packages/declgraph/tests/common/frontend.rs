//! In-memory fixture frontend
//!
//! Implements the `FrontendAdapter` port over a small C++ subset: namespaces,
//! struct/class/union with base lists and `final`, enums, access specifiers,
//! using-directives, simple functions/variables, and object-like `#define`
//! expansion. Preprocessed output follows the real-compiler shape the crate
//! expects: a `# <line> "<file>"` marker, comments preserved, `#define` lines
//! kept in place. Base names are resolved against the finished symbol table,
//! emulating the semantic knowledge a real frontend reports on base cursors.

use std::collections::{BTreeMap, HashMap, HashSet};

use declgraph::{
    AccessSpecifier, ClassKey, CompileConfig, Cursor, CursorKind, CursorTree, DeclgraphError,
    FrontendAdapter, MacroExpansionSite, PreprocessedSource, Result, Span, SymbolId,
};

#[derive(Default)]
pub struct FixtureFrontend {
    files: HashMap<String, String>,
}

impl FixtureFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, source: impl Into<String>) -> Self {
        self.files.insert(path.into(), source.into());
        self
    }

    fn source(&self, path: &str) -> Result<String> {
        if let Some(source) = self.files.get(path) {
            return Ok(source.clone());
        }
        Ok(std::fs::read_to_string(path)?)
    }
}

impl FrontendAdapter for FixtureFrontend {
    fn preprocess(&self, config: &CompileConfig, path: &str) -> Result<PreprocessedSource> {
        let source = self.source(path)?;
        preprocess_source(&source, path, &config.defines)
    }

    fn parse(&self, config: &CompileConfig, path: &str) -> Result<CursorTree> {
        let preprocessed = self.preprocess(config, path)?;
        let tokens = lex(&preprocessed.text);
        let root = Parser::new(tokens, path).parse()?;
        Ok(CursorTree::new(root))
    }
}

// ---------------------------------------------------------------------------
// Preprocessing: object-like #define expansion, comments and defines kept
// ---------------------------------------------------------------------------

fn preprocess_source(
    source: &str,
    path: &str,
    predefined: &BTreeMap<String, String>,
) -> Result<PreprocessedSource> {
    let mut macros: HashMap<String, String> = predefined
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let mut expansions = Vec::new();
    let mut out = vec![format!("# 1 \"{path}\"")];
    let mut in_block_comment = false;

    for (idx, line) in source.lines().enumerate() {
        let line_no = (idx + 1) as u32;
        let trimmed = line.trim_start();
        if !in_block_comment && trimmed.starts_with("#define") {
            let rest = trimmed["#define".len()..].trim_start();
            let name_end = rest
                .find(|c: char| c.is_whitespace())
                .unwrap_or(rest.len());
            if name_end > 0 {
                macros.insert(rest[..name_end].to_string(), rest[name_end..].trim().to_string());
            }
            out.push(line.to_string());
            continue;
        }
        let expanded = expand_line(line, line_no, &macros, &mut in_block_comment, &mut expansions);
        out.push(expanded);
    }

    if in_block_comment {
        return Err(DeclgraphError::preprocess(format!(
            "{path}: unterminated block comment"
        )));
    }

    let mut text = out.join("\n");
    text.push('\n');
    Ok(PreprocessedSource::new(text).with_expansions(expansions))
}

fn expand_line(
    line: &str,
    line_no: u32,
    macros: &HashMap<String, String>,
    in_block_comment: &mut bool,
    expansions: &mut Vec<MacroExpansionSite>,
) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::new();
    let mut i = 0usize;

    while i < chars.len() {
        if *in_block_comment {
            if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                *in_block_comment = false;
                out.push_str("*/");
                i += 2;
            } else {
                out.push(chars[i]);
                i += 1;
            }
            continue;
        }
        match chars[i] {
            '/' if chars.get(i + 1) == Some(&'/') => {
                out.extend(&chars[i..]);
                break;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                *in_block_comment = true;
                out.push_str("/*");
                i += 2;
            }
            '"' | '\'' => {
                let quote = chars[i];
                out.push(quote);
                i += 1;
                while i < chars.len() {
                    out.push(chars[i]);
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        out.push(chars[i + 1]);
                        i += 2;
                        continue;
                    }
                    let done = chars[i] == quote;
                    i += 1;
                    if done {
                        break;
                    }
                }
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let ident: String = chars[start..i].iter().collect();
                match macros.get(&ident) {
                    Some(replacement) => {
                        expansions.push(MacroExpansionSite {
                            name: ident,
                            line: line_no,
                        });
                        out.push_str(replacement);
                    }
                    None => out.push_str(&ident),
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Lexing the preprocessed text back into tokens with original line numbers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum TokKind {
    Ident,
    Sym,
}

#[derive(Debug, Clone)]
struct Tok {
    kind: TokKind,
    text: String,
    line: u32,
}

fn lex(text: &str) -> Vec<Tok> {
    let mut tokens = Vec::new();
    let mut current_line: u32 = 1;
    let mut in_block_comment = false;

    for raw_line in text.lines() {
        let trimmed = raw_line.trim_start();
        if !in_block_comment && trimmed.starts_with('#') {
            let rest = trimmed[1..].trim_start();
            if rest.starts_with(|c: char| c.is_ascii_digit()) {
                // line marker: the next line carries the given number
                let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
                if let Ok(n) = digits.parse::<u32>() {
                    current_line = n;
                }
            } else {
                // other directives occupy a source line of their own
                current_line += 1;
            }
            continue;
        }

        let chars: Vec<char> = raw_line.chars().collect();
        let mut i = 0usize;
        while i < chars.len() {
            if in_block_comment {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    in_block_comment = false;
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }
            let c = chars[i];
            if c.is_whitespace() {
                i += 1;
            } else if c == '/' && chars.get(i + 1) == Some(&'/') {
                break;
            } else if c == '/' && chars.get(i + 1) == Some(&'*') {
                in_block_comment = true;
                i += 2;
            } else if c == '"' || c == '\'' {
                let quote = c;
                i += 1;
                while i < chars.len() {
                    if chars[i] == '\\' {
                        i += 2;
                        continue;
                    }
                    if chars[i] == quote {
                        i += 1;
                        break;
                    }
                    i += 1;
                }
                tokens.push(Tok {
                    kind: TokKind::Sym,
                    text: "<literal>".into(),
                    line: current_line,
                });
            } else if c.is_alphanumeric() || c == '_' {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Tok {
                    kind: TokKind::Ident,
                    text: chars[start..i].iter().collect(),
                    line: current_line,
                });
            } else if c == ':' && chars.get(i + 1) == Some(&':') {
                tokens.push(Tok {
                    kind: TokKind::Sym,
                    text: "::".into(),
                    line: current_line,
                });
                i += 2;
            } else {
                tokens.push(Tok {
                    kind: TokKind::Sym,
                    text: c.to_string(),
                    line: current_line,
                });
                i += 1;
            }
        }
        current_line += 1;
    }
    tokens
}

// ---------------------------------------------------------------------------
// Parsing into cursors, with end-of-parse base-name resolution
// ---------------------------------------------------------------------------

struct Fixup {
    /// Index path from the root cursor to the base-specifier cursor
    path: Vec<usize>,
    written: String,
    scopes: Vec<String>,
    usings: Vec<String>,
}

struct Parser {
    tokens: Vec<Tok>,
    pos: usize,
    file: String,
    scopes: Vec<String>,
    usings: Vec<String>,
    symbols: HashSet<String>,
    fixups: Vec<Fixup>,
}

impl Parser {
    fn new(tokens: Vec<Tok>, file: &str) -> Self {
        Self {
            tokens,
            pos: 0,
            file: file.to_string(),
            scopes: Vec::new(),
            usings: Vec::new(),
            symbols: HashSet::new(),
            fixups: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Cursor> {
        let last_line = self.tokens.last().map_or(1, |t| t.line);
        let mut children = Vec::new();
        let mut path = Vec::new();
        self.parse_decls(&mut children, &mut path)?;

        let mut root = Cursor::new(
            CursorKind::TranslationUnit,
            self.file.clone(),
            Span::new(1, 0, last_line, 0),
        )
        .with_children(children);

        for fixup in std::mem::take(&mut self.fixups) {
            let referenced = resolve_name(&self.symbols, &fixup.scopes, &fixup.usings, &fixup.written);
            let cursor = cursor_at_mut(&mut root, &fixup.path);
            if let CursorKind::BaseSpecifier { referenced: slot, .. } = &mut cursor.kind {
                *slot = referenced.map(SymbolId::new);
            }
        }
        Ok(root)
    }

    fn parse_decls(&mut self, out: &mut Vec<Cursor>, path: &mut Vec<usize>) -> Result<()> {
        loop {
            let Some(tok) = self.peek() else { return Ok(()) };
            if tok.kind == TokKind::Sym && tok.text == "}" {
                return Ok(());
            }
            path.push(out.len());
            let cursor = self.parse_decl(path)?;
            path.pop();
            if let Some(cursor) = cursor {
                out.push(cursor);
            }
        }
    }

    fn parse_decl(&mut self, path: &mut Vec<usize>) -> Result<Option<Cursor>> {
        let tok = self.peek().cloned().expect("checked by caller");
        match (tok.kind.clone(), tok.text.as_str()) {
            (TokKind::Ident, "namespace") => self.parse_namespace(path).map(Some),
            (TokKind::Ident, "using") => self.parse_using().map(Some),
            (TokKind::Ident, "struct") => self.parse_class(ClassKey::Struct, path).map(Some),
            (TokKind::Ident, "class") => self.parse_class(ClassKey::Class, path).map(Some),
            (TokKind::Ident, "union") => self.parse_class(ClassKey::Union, path).map(Some),
            (TokKind::Ident, "enum") => self.parse_enum().map(Some),
            (TokKind::Ident, kw @ ("public" | "protected" | "private"))
                if self.peek_ahead(1).is_some_and(|t| t.text == ":") =>
            {
                let access = match kw {
                    "public" => AccessSpecifier::Public,
                    "protected" => AccessSpecifier::Protected,
                    _ => AccessSpecifier::Private,
                };
                self.bump(); // keyword
                self.bump(); // ':'
                Ok(Some(Cursor::new(
                    CursorKind::AccessSpecifier { access },
                    access.as_keyword(),
                    Span::line(tok.line),
                )))
            }
            _ => self.parse_statement().map(Some),
        }
    }

    fn parse_namespace(&mut self, path: &mut Vec<usize>) -> Result<Cursor> {
        let start = self.bump().line; // 'namespace'
        let name = self.expect_ident()?;
        self.expect_sym("{")?;

        let qualified = self.qualify(&name);
        self.symbols.insert(qualified.clone());
        self.scopes.push(name.clone());
        let mut children = Vec::new();
        self.parse_decls(&mut children, path)?;
        self.scopes.pop();
        let end = self.expect_sym("}")?;

        Ok(Cursor::new(CursorKind::Namespace, name, Span::new(start, 0, end, 0))
            .with_usr(SymbolId::new(qualified))
            .with_children(children))
    }

    fn parse_using(&mut self) -> Result<Cursor> {
        let start = self.bump().line; // 'using'
        self.expect_keyword("namespace")?;
        let written = self.parse_qualified_name()?;
        self.expect_sym(";")?;

        // using-directives name an already-declared namespace
        let resolved = resolve_name(&self.symbols, &self.scopes, &self.usings, &written)
            .unwrap_or(written.clone());
        self.usings.push(resolved);

        Ok(Cursor::new(CursorKind::UsingDirective, written, Span::line(start)))
    }

    fn parse_class(&mut self, key: ClassKey, path: &mut Vec<usize>) -> Result<Cursor> {
        let start = self.bump().line; // keyword
        let name = self.expect_ident()?;

        if self.peek_sym(";") {
            self.bump();
            return Ok(Cursor::new(
                CursorKind::ClassDecl {
                    key,
                    is_final: false,
                    is_definition: false,
                },
                name,
                Span::line(start),
            ));
        }

        let mut is_final = false;
        if self.peek_ident("final") {
            self.bump();
            is_final = true;
        }

        let mut children = Vec::new();
        if self.peek_sym(":") {
            self.bump();
            loop {
                path.push(children.len());
                let base = self.parse_base_specifier(key, path)?;
                path.pop();
                children.push(base);
                if self.peek_sym(",") {
                    self.bump();
                } else {
                    break;
                }
            }
        }

        self.expect_sym("{")?;
        let qualified = self.qualify(&name);
        self.symbols.insert(qualified.clone());
        self.scopes.push(name.clone());
        self.parse_decls(&mut children, path)?;
        self.scopes.pop();
        let end = self.expect_sym("}")?;
        if self.peek_sym(";") {
            self.bump();
        }

        Ok(Cursor::new(
            CursorKind::ClassDecl {
                key,
                is_final,
                is_definition: true,
            },
            name,
            Span::new(start, 0, end, 0),
        )
        .with_usr(SymbolId::new(qualified))
        .with_children(children))
    }

    fn parse_base_specifier(&mut self, key: ClassKey, path: &mut Vec<usize>) -> Result<Cursor> {
        let mut is_virtual = false;
        let mut access = AccessSpecifier::default_for(key);
        loop {
            if self.peek_ident("virtual") {
                self.bump();
                is_virtual = true;
            } else if self.peek_ident("public") {
                self.bump();
                access = AccessSpecifier::Public;
            } else if self.peek_ident("protected") {
                self.bump();
                access = AccessSpecifier::Protected;
            } else if self.peek_ident("private") {
                self.bump();
                access = AccessSpecifier::Private;
            } else {
                break;
            }
        }
        let line = self.peek().map_or(1, |t| t.line);
        let written = self.parse_qualified_name()?;

        self.fixups.push(Fixup {
            path: path.clone(),
            written: written.clone(),
            scopes: self.scopes.clone(),
            usings: self.usings.clone(),
        });

        Ok(Cursor::new(
            CursorKind::BaseSpecifier {
                access,
                is_virtual,
                referenced: None,
            },
            written,
            Span::line(line),
        ))
    }

    fn parse_enum(&mut self) -> Result<Cursor> {
        let start = self.bump().line; // 'enum'
        let scoped = if self.peek_ident("class") || self.peek_ident("struct") {
            self.bump();
            true
        } else {
            false
        };
        let name = self.expect_ident()?;
        self.expect_sym("{")?;
        // enumerators are not modeled; skip to the closing brace
        while let Some(tok) = self.peek() {
            if tok.text == "}" {
                break;
            }
            self.bump();
        }
        self.expect_sym("}")?;
        if self.peek_sym(";") {
            self.bump();
        }

        let qualified = self.qualify(&name);
        self.symbols.insert(qualified.clone());
        Ok(Cursor::new(
            CursorKind::EnumDecl { scoped },
            name,
            Span::line(start),
        )
        .with_usr(SymbolId::new(qualified)))
    }

    /// Anything else up to `;` (skipping balanced braces): a function if a `(`
    /// appears, otherwise a variable.
    fn parse_statement(&mut self) -> Result<Cursor> {
        let start = self.peek().map_or(1, |t| t.line);
        let mut idents: Vec<String> = Vec::new();
        let mut name: Option<String> = None;
        let mut saw_paren = false;
        let mut end = start;

        while let Some(tok) = self.peek().cloned() {
            end = tok.line;
            match (&tok.kind, tok.text.as_str()) {
                (TokKind::Sym, ";") => {
                    self.bump();
                    break;
                }
                (TokKind::Sym, "{") => {
                    self.skip_braces()?;
                    if self.peek_sym(";") {
                        self.bump();
                    }
                    break;
                }
                (TokKind::Sym, "(") if !saw_paren => {
                    saw_paren = true;
                    name = idents.last().cloned();
                    self.bump();
                }
                (TokKind::Sym, "=") if name.is_none() => {
                    name = idents.last().cloned();
                    self.bump();
                }
                (TokKind::Ident, text) => {
                    idents.push(text.to_string());
                    self.bump();
                }
                _ => {
                    self.bump();
                }
            }
        }

        let name = name.or_else(|| idents.last().cloned());
        let Some(name) = name else {
            return Ok(Cursor::new(
                CursorKind::Other("unparsed_statement".into()),
                "",
                Span::new(start, 0, end, 0),
            ));
        };

        let qualified = self.qualify(&name);
        let kind = if saw_paren {
            CursorKind::FunctionDecl
        } else {
            CursorKind::VarDecl
        };
        Ok(Cursor::new(kind, name, Span::new(start, 0, end, 0))
            .with_usr(SymbolId::new(qualified)))
    }

    fn skip_braces(&mut self) -> Result<()> {
        self.expect_sym("{")?;
        let mut depth = 1usize;
        while depth > 0 {
            let Some(tok) = self.peek() else {
                return Err(DeclgraphError::frontend("unbalanced braces"));
            };
            match tok.text.as_str() {
                "{" => depth += 1,
                "}" => depth -= 1,
                _ => {}
            }
            self.bump();
        }
        Ok(())
    }

    fn parse_qualified_name(&mut self) -> Result<String> {
        let mut parts = vec![self.expect_ident()?];
        while self.peek_sym("::") {
            self.bump();
            parts.push(self.expect_ident()?);
        }
        Ok(parts.join("::"))
    }

    fn qualify(&self, name: &str) -> String {
        if self.scopes.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.scopes.join("::"), name)
        }
    }

    // token helpers

    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn peek_ahead(&self, n: usize) -> Option<&Tok> {
        self.tokens.get(self.pos + n)
    }

    fn peek_sym(&self, sym: &str) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokKind::Sym && t.text == sym)
    }

    fn peek_ident(&self, ident: &str) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokKind::Ident && t.text == ident)
    }

    fn bump(&mut self) -> Tok {
        let tok = self.tokens[self.pos].clone();
        self.pos += 1;
        tok
    }

    fn expect_ident(&mut self) -> Result<String> {
        if self.peek().is_some_and(|t| t.kind == TokKind::Ident) {
            return Ok(self.bump().text);
        }
        Err(DeclgraphError::frontend(format!(
            "expected identifier, found {:?}",
            self.peek().map(|t| t.text.clone())
        )))
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<()> {
        if self.peek_ident(kw) {
            self.bump();
            Ok(())
        } else {
            Err(DeclgraphError::frontend(format!("expected '{kw}'")))
        }
    }

    fn expect_sym(&mut self, sym: &str) -> Result<u32> {
        if self.peek_sym(sym) {
            Ok(self.bump().line)
        } else {
            Err(DeclgraphError::frontend(format!(
                "expected '{sym}', found {:?}",
                self.peek().map(|t| t.text.clone())
            )))
        }
    }
}

fn cursor_at_mut<'a>(root: &'a mut Cursor, path: &[usize]) -> &'a mut Cursor {
    let mut cursor = root;
    for &idx in path {
        cursor = &mut cursor.children[idx];
    }
    cursor
}

/// Emulates the frontend's name lookup: enclosing scopes innermost-out, then
/// visible using-directives for unqualified names.
fn resolve_name(
    symbols: &HashSet<String>,
    scopes: &[String],
    usings: &[String],
    written: &str,
) -> Option<String> {
    for depth in (0..=scopes.len()).rev() {
        let candidate = if depth == 0 {
            written.to_string()
        } else {
            format!("{}::{}", scopes[..depth].join("::"), written)
        };
        if symbols.contains(&candidate) {
            return Some(candidate);
        }
    }
    if !written.contains("::") {
        for using in usings {
            let candidate = format!("{using}::{written}");
            if symbols.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}
