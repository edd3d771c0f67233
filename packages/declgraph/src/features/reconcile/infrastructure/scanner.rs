//! Preprocessed-text scanner
//!
//! Single pass over the preprocessor's output: honors `# <line> "<file>"` markers
//! (content pulled in from other files is skipped), records `#define` directives
//! kept in the output, and classifies documentation comments. Runs on text that is
//! only lexically valid; nothing here needs semantic analysis.

use super::super::domain::{CommentStyle, DocCommentRecord, MacroRecord};

/// Records recovered from one preprocessed unit
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub macros: Vec<MacroRecord>,
    pub comments: Vec<DocCommentRecord>,
}

struct BlockState {
    doc: bool,
    content: Vec<String>,
}

struct Scanner {
    out: ScanOutput,
    /// Open multi-line comment carried across lines
    block: Option<BlockState>,
    /// Run of consecutive own-line `///` comments being merged
    pending: Option<DocCommentRecord>,
}

/// Scan preprocessed text belonging to `main_file`.
pub fn scan_preprocessed(text: &str, main_file: &str) -> ScanOutput {
    let mut scanner = Scanner {
        out: ScanOutput::default(),
        block: None,
        pending: None,
    };

    let mut current_line: u32 = 1;
    let mut in_main = true;

    for raw_line in text.lines() {
        if scanner.block.is_none() {
            if let Some(marker) = parse_line_marker(raw_line) {
                scanner.flush_pending();
                current_line = marker.0;
                in_main = marker.1.map_or(true, |file| file == main_file);
                continue;
            }
        }

        if in_main {
            scanner.scan_line(raw_line, current_line);
        }
        current_line += 1;
    }
    scanner.flush_pending();
    scanner.out
}

impl Scanner {
    fn flush_pending(&mut self) {
        if let Some(record) = self.pending.take() {
            self.out.comments.push(record);
        }
    }

    fn emit(&mut self, record: DocCommentRecord) {
        self.flush_pending();
        self.out.comments.push(record);
    }

    fn scan_line(&mut self, line: &str, line_no: u32) {
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0usize;

        // Continue an open multi-line comment first
        if let Some(mut state) = self.block.take() {
            match find_block_close(&chars, 0) {
                Some(close) => {
                    let fragment: String = chars[..close].iter().collect();
                    state.content.push(fragment);
                    if state.doc {
                        let text = normalize_block(&state.content);
                        self.emit(DocCommentRecord::new(text, line_no, CommentStyle::Block));
                    }
                    i = close + 2;
                }
                None => {
                    state.content.push(line.to_string());
                    self.block = Some(state);
                    return;
                }
            }
        }

        // Directive lines: record defines, scan nothing else on them
        if i == 0 {
            let trimmed = line.trim_start();
            if trimmed.starts_with('#') {
                if let Some(record) = parse_define(trimmed, line_no) {
                    self.out.macros.push(record);
                }
                return;
            }
        }

        let mut saw_code = false;
        while i < chars.len() {
            let c = chars[i];
            match c {
                '"' => {
                    saw_code = true;
                    i = skip_string(&chars, i + 1, '"');
                }
                '\'' => {
                    saw_code = true;
                    i = skip_string(&chars, i + 1, '\'');
                }
                '/' if i + 1 < chars.len() && chars[i + 1] == '/' => {
                    self.scan_line_comment(&chars[i + 2..], line_no, saw_code);
                    return;
                }
                '/' if i + 1 < chars.len() && chars[i + 1] == '*' => {
                    // close before marker: in `/**/` the second `*` belongs to
                    // the closing `*/`, not to a doc marker
                    let close = find_block_close(&chars, i + 2);
                    let doc = matches!(chars.get(i + 2), Some('*') | Some('!'))
                        && close != Some(i + 2);
                    let mut body_start = i + 2;
                    if doc {
                        body_start += 1;
                        if chars.get(body_start) == Some(&'<') {
                            body_start += 1;
                        }
                    }
                    match close {
                        Some(close) => {
                            if doc {
                                let content: String =
                                    chars[body_start..close].iter().collect();
                                let text = normalize_block(&[content]);
                                self.emit(DocCommentRecord::new(
                                    text,
                                    line_no,
                                    CommentStyle::Block,
                                ));
                            }
                            i = close + 2;
                        }
                        None => {
                            let content: String = chars[body_start..].iter().collect();
                            self.block = Some(BlockState {
                                doc,
                                content: vec![content],
                            });
                            return;
                        }
                    }
                }
                c if c.is_whitespace() => i += 1,
                _ => {
                    saw_code = true;
                    i += 1;
                }
            }
        }
    }

    /// Rest of a `//` comment. Only `///` and `//!` are documentation.
    fn scan_line_comment(&mut self, rest: &[char], line_no: u32, saw_code: bool) {
        let doc = matches!(rest.first(), Some('/') | Some('!'));
        if !doc {
            return;
        }
        let mut start = 1;
        if rest.get(start) == Some(&'<') {
            start += 1;
        }
        if rest.get(start) == Some(&' ') {
            start += 1;
        }
        let text: String = rest[start.min(rest.len())..].iter().collect();
        let text = text.trim_end().to_string();

        if saw_code {
            self.emit(DocCommentRecord::new(text, line_no, CommentStyle::TrailingLine));
            return;
        }

        match &mut self.pending {
            Some(run) if run.line + 1 == line_no => {
                if !run.text.is_empty() || !text.is_empty() {
                    if !run.text.is_empty() {
                        run.text.push('\n');
                    }
                    run.text.push_str(&text);
                }
                run.line = line_no;
            }
            _ => {
                self.flush_pending();
                self.pending = Some(DocCommentRecord::new(text, line_no, CommentStyle::Line));
            }
        }
    }
}

/// Parse `# <line> "<file>" [flags]`; returns (next line number, file).
fn parse_line_marker(line: &str) -> Option<(u32, Option<&str>)> {
    let rest = line.trim_start().strip_prefix('#')?;
    let rest = rest.trim_start();
    if !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let line_no: u32 = rest[..digits_end].parse().ok()?;
    let rest = rest[digits_end..].trim_start();
    let file = rest
        .strip_prefix('"')
        .and_then(|r| r.split('"').next());
    Some((line_no, file))
}

/// Parse `#define NAME replacement`; function-like macros keep their parameter list
/// as part of the recorded name.
fn parse_define(line: &str, line_no: u32) -> Option<MacroRecord> {
    let rest = line.strip_prefix('#')?.trim_start();
    let rest = rest.strip_prefix("define")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let name_end = rest
        .find(|c: char| c.is_whitespace())
        .unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return None;
    }
    let replacement = rest[name_end..].trim();
    Some(MacroRecord::new(name, replacement, line_no))
}

fn find_block_close(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return Some(i);
        }
        i += 1;
    }
    None
}

fn skip_string(chars: &[char], mut i: usize, quote: char) -> usize {
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    i
}

fn normalize_block(content: &[String]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for chunk in content {
        for line in chunk.split('\n') {
            let trimmed = line.trim();
            let trimmed = trimmed.strip_prefix('*').map_or(trimmed, |r| r.trim_start());
            lines.push(trimmed.to_string());
        }
    }
    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
