//! go.mod parser
//!
//! Parses go.mod files into an editable [`GoModFile`].
//! Supports both single-line directives and directive blocks.
//!
//! Format examples:
//! - Single: `require golang.org/x/text v0.14.0`
//! - Block:
//!   ```text
//!   require (
//!       golang.org/x/text v0.14.0
//!       golang.org/x/net v0.20.0 // indirect
//!   )
//!   ```
//!
//! The original text is kept line by line. Edits only rewrite a version
//! token or insert new lines, so comments and unrelated directives are
//! written back exactly as they were read.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::parser::traits::{EditError, Manifest, ParseError};
use crate::parser::types::Requirement;

/// Canonical module version: v1.2.3, v1.2.3-pre, v0.0.0-2021...-abcdef, v2.0.0+incompatible
static MODULE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(-[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?(\+[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?$",
    )
    .unwrap()
});

/// Go language version: 1.21, 1.21.3, 1.22rc1
static GO_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-9][0-9]*)\.(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*))?([a-z]+[0-9]+)?$").unwrap()
});

const DIRECTIVES: &[&str] = &[
    "module", "go", "toolchain", "godebug", "require", "exclude", "replace", "retract", "tool",
    "ignore",
];

/// Directives that accept the `verb ( ... )` block form
const BLOCK_DIRECTIVES: &[&str] = &[
    "godebug", "require", "exclude", "replace", "retract", "tool", "ignore",
];

/// Returns true if `version` is a canonical module version
pub fn is_module_version(version: &str) -> bool {
    MODULE_VERSION_RE.is_match(version)
}

/// Returns true if `version` is a valid `go` directive value
pub fn is_go_version(version: &str) -> bool {
    GO_VERSION_RE.is_match(version)
}

/// Returns true if `path` is a well-formed module path
pub fn is_module_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    let valid_chars = path
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '/' | '+'));
    if !valid_chars {
        return false;
    }

    path.split('/')
        .all(|elem| !elem.is_empty() && !elem.starts_with('.') && !elem.ends_with('.'))
}

/// Parse go.mod bytes into a [`GoModFile`]
pub fn parse_go_mod(name: &str, data: &[u8]) -> Result<GoModFile, ParseError> {
    let content = std::str::from_utf8(data).map_err(|e| ParseError::InvalidSyntax {
        file: name.to_string(),
        line: 0,
        message: format!("file is not valid UTF-8: {}", e),
    })?;
    GoModFile::parse(name, content)
}

/// Position of a version token inside `lines`
#[derive(Debug, Clone, PartialEq, Eq)]
struct VersionToken {
    /// Line index (0-indexed)
    line: usize,
    /// Byte offset of the token within the line (start)
    start: usize,
    /// Byte offset of the token within the line (end)
    end: usize,
    value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RequireEntry {
    path: String,
    version: VersionToken,
    indirect: bool,
}

/// Line indices of a `require (` ... `)` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequireBlock {
    open: usize,
    close: usize,
}

/// A parsed go.mod file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModFile {
    name: String,
    lines: Vec<String>,
    /// Lines end with `\r\n`; each kept line then carries its trailing `\r`
    crlf: bool,
    module: Option<(usize, String)>,
    go: Option<VersionToken>,
    requires: Vec<RequireEntry>,
    require_blocks: Vec<RequireBlock>,
}

/// A lexical token with its byte range in the line
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

/// Split a line into tokens and the text of a trailing `//` comment.
fn tokenize(line: &str) -> Result<(Vec<Token<'_>>, Option<&str>), String> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];

        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        if bytes[pos..].starts_with(b"//") {
            return Ok((tokens, Some(line[pos + 2..].trim())));
        }

        let start = pos;
        match c {
            b'(' | b')' => pos += 1,
            b'"' => {
                pos += 1;
                loop {
                    match bytes.get(pos) {
                        None => return Err("unterminated quoted string".to_string()),
                        Some(b'\\') => pos += 2,
                        Some(b'"') => {
                            pos += 1;
                            break;
                        }
                        Some(_) => pos += 1,
                    }
                }
            }
            b'`' => {
                let Some(close) = line[pos + 1..].find('`') else {
                    return Err("unterminated raw string".to_string());
                };
                pos += close + 2;
            }
            _ => {
                while pos < bytes.len()
                    && !bytes[pos].is_ascii_whitespace()
                    && !matches!(bytes[pos], b'(' | b')')
                    && !bytes[pos..].starts_with(b"//")
                {
                    pos += 1;
                }
            }
        }

        tokens.push(Token {
            text: &line[start..pos],
            start,
            end: pos,
        });
    }

    Ok((tokens, None))
}

/// Strip surrounding quotes from a path token
fn unquote(token: &str) -> String {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        token[1..token.len() - 1]
            .replace("\\\"", "\"")
            .replace("\\\\", "\\")
    } else if token.len() >= 2 && token.starts_with('`') && token.ends_with('`') {
        token[1..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}

fn is_indirect(comment: Option<&str>) -> bool {
    comment.is_some_and(|c| c == "indirect" || c.starts_with("indirect;"))
}

/// Replace the text covered by `token` and keep its span in sync
fn set_token(lines: &mut [String], token: &mut VersionToken, value: &str) {
    lines[token.line].replace_range(token.start..token.end, value);
    token.end = token.start + value.len();
    token.value = value.to_string();
}

impl GoModFile {
    /// Parse go.mod content. `name` is only used in error messages.
    pub fn parse(name: &str, content: &str) -> Result<Self, ParseError> {
        let mut file = Self {
            name: name.to_string(),
            lines: content.split('\n').map(|l| l.to_string()).collect(),
            crlf: content.contains("\r\n"),
            module: None,
            go: None,
            requires: Vec::new(),
            require_blocks: Vec::new(),
        };

        // (verb, line index of the opening `verb (`)
        let mut block: Option<(String, usize)> = None;
        let lines = file.lines.clone();

        for (idx, line) in lines.iter().enumerate() {
            let (tokens, comment) = tokenize(line).map_err(|message| file.syntax(idx, message))?;

            if tokens.is_empty() {
                continue;
            }

            if let Some((verb, open)) = block.take() {
                if tokens.len() == 1 && tokens[0].text == ")" {
                    if verb == "require" {
                        file.require_blocks.push(RequireBlock { open, close: idx });
                    }
                } else {
                    file.parse_directive(&verb, idx, &tokens, comment)?;
                    block = Some((verb, open));
                }
                continue;
            }

            let verb = tokens[0].text;
            if verb == ")" {
                return Err(file.syntax(idx, "unexpected )".to_string()));
            }
            if !DIRECTIVES.contains(&verb) {
                return Err(ParseError::UnknownDirective {
                    file: file.name.clone(),
                    line: idx + 1,
                    directive: verb.to_string(),
                });
            }

            let args = &tokens[1..];
            let opens_block = args.first().is_some_and(|t| t.text == "(");
            if opens_block {
                if !BLOCK_DIRECTIVES.contains(&verb) {
                    return Err(file.syntax(idx, format!("{} does not support block syntax", verb)));
                }
                match args.len() {
                    1 => block = Some((verb.to_string(), idx)),
                    2 if args[1].text == ")" => {}
                    _ => return Err(file.syntax(idx, "unexpected token after (".to_string())),
                }
                continue;
            }

            file.parse_directive(verb, idx, args, comment)?;
        }

        if let Some((verb, open)) = block {
            return Err(file.syntax(open, format!("unterminated {} block", verb)));
        }

        Ok(file)
    }

    fn parse_directive(
        &mut self,
        verb: &str,
        idx: usize,
        args: &[Token<'_>],
        comment: Option<&str>,
    ) -> Result<(), ParseError> {
        match verb {
            "module" => {
                if args.len() != 1 {
                    return Err(self.syntax(idx, "usage: module module/path".to_string()));
                }
                if self.module.is_some() {
                    return Err(self.syntax(idx, "repeated module statement".to_string()));
                }
                self.module = Some((idx, unquote(args[0].text)));
            }
            "go" => {
                if args.len() != 1 {
                    return Err(self.syntax(idx, "usage: go 1.23".to_string()));
                }
                if self.go.is_some() {
                    return Err(self.syntax(idx, "repeated go statement".to_string()));
                }
                let version = args[0].text;
                if !is_go_version(version) {
                    return Err(self.syntax(
                        idx,
                        format!("invalid go version '{}': must match format 1.23.0", version),
                    ));
                }
                self.go = Some(VersionToken {
                    line: idx,
                    start: args[0].start,
                    end: args[0].end,
                    value: version.to_string(),
                });
            }
            "require" => {
                if args.len() != 2 {
                    return Err(self.syntax(idx, "usage: require module/path v1.2.3".to_string()));
                }
                let path = unquote(args[0].text);
                if !is_module_path(&path) {
                    return Err(self.syntax(idx, format!("malformed module path {:?}", path)));
                }
                let version = args[1].text;
                if !is_module_version(version) {
                    return Err(self.syntax(
                        idx,
                        format!("invalid module version {:?} for {}", version, path),
                    ));
                }
                self.requires.push(RequireEntry {
                    path,
                    version: VersionToken {
                        line: idx,
                        start: args[1].start,
                        end: args[1].end,
                        value: version.to_string(),
                    },
                    indirect: is_indirect(comment),
                });
            }
            _ => {
                if args.is_empty() {
                    return Err(self.syntax(idx, format!("usage: {} requires arguments", verb)));
                }
            }
        }
        Ok(())
    }

    fn syntax(&self, idx: usize, message: String) -> ParseError {
        ParseError::InvalidSyntax {
            file: self.name.clone(),
            line: idx + 1,
            message,
        }
    }

    /// Name the file was parsed under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path declared by the `module` directive
    pub fn module_path(&self) -> Option<&str> {
        self.module.as_ref().map(|(_, path)| path.as_str())
    }

    /// Insert `new_lines` before line `at`, shifting every recorded position.
    /// Inserted lines follow the file's line ending.
    fn insert_lines(&mut self, at: usize, mut new_lines: Vec<String>) {
        let n = new_lines.len();
        if self.crlf {
            // Appending past an unterminated last line: it gets terminated,
            // the new last line stays unterminated
            let appends = at == self.lines.len();
            if appends {
                if let Some(last) = self.lines.last_mut().filter(|l| !l.ends_with('\r')) {
                    last.push('\r');
                }
            }
            for (i, line) in new_lines.iter_mut().enumerate() {
                if !(appends && i == n - 1) {
                    line.push('\r');
                }
            }
        }
        self.lines.splice(at..at, new_lines);

        let shift = |line: &mut usize| {
            if *line >= at {
                *line += n;
            }
        };
        if let Some((line, _)) = &mut self.module {
            shift(line);
        }
        if let Some(go) = &mut self.go {
            shift(&mut go.line);
        }
        for entry in &mut self.requires {
            shift(&mut entry.version.line);
        }
        for block in &mut self.require_blocks {
            shift(&mut block.open);
            shift(&mut block.close);
        }
    }

    /// Index where lines appended to the end of the file belong
    fn end_of_file(&self) -> usize {
        match self.lines.last() {
            Some(last) if last.is_empty() => self.lines.len() - 1,
            _ => self.lines.len(),
        }
    }

    fn add_new_requirement(&mut self, path: &str, version: &str) {
        let (at, line) = match self.require_blocks.last().copied() {
            Some(block) => {
                // Follow the indentation of the last entry in the block
                let indent = if block.close > block.open + 1 {
                    let prev = &self.lines[block.close - 1];
                    prev[..prev.len() - prev.trim_start().len()].to_string()
                } else {
                    "\t".to_string()
                };
                let prefix = format!("{}{} ", indent, path);
                self.insert_lines(block.close, vec![format!("{}{}", prefix, version)]);
                (block.close, prefix.len())
            }
            None => {
                let mut at = self.end_of_file();
                if at > 0 && !self.lines[at - 1].trim().is_empty() {
                    self.insert_lines(at, vec![String::new()]);
                    at += 1;
                }
                let prefix = format!("require {} ", path);
                self.insert_lines(at, vec![format!("{}{}", prefix, version)]);
                (at, prefix.len())
            }
        };

        self.requires.push(RequireEntry {
            path: path.to_string(),
            version: VersionToken {
                line: at,
                start: line,
                end: line + version.len(),
                value: version.to_string(),
            },
            indirect: false,
        });
        self.requires.sort_by_key(|entry| entry.version.line);
    }
}

impl Manifest for GoModFile {
    fn requirements(&self) -> Vec<Requirement> {
        // First declaration keeps its position, the last one wins the version
        let mut unique: IndexMap<&str, (&str, bool)> = IndexMap::new();
        for entry in &self.requires {
            unique.insert(&entry.path, (&entry.version.value, entry.indirect));
        }

        unique
            .into_iter()
            .map(|(path, (version, indirect))| Requirement {
                path: path.to_string(),
                version: version.to_string(),
                indirect,
            })
            .collect()
    }

    fn go_version(&self) -> Option<String> {
        self.go.as_ref().map(|go| go.value.clone())
    }

    fn add_or_update_requirement(&mut self, path: &str, version: &str) -> Result<(), EditError> {
        if !is_module_path(path) {
            return Err(EditError::InvalidModulePath(path.to_string()));
        }
        if !is_module_version(version) {
            return Err(EditError::InvalidVersion {
                path: path.to_string(),
                version: version.to_string(),
            });
        }

        let mut found = false;
        for entry in self.requires.iter_mut().filter(|e| e.path == path) {
            set_token(&mut self.lines, &mut entry.version, version);
            found = true;
        }

        if !found {
            self.add_new_requirement(path, version);
        }
        Ok(())
    }

    fn set_go_version(&mut self, version: &str) -> Result<(), EditError> {
        if !is_go_version(version) {
            return Err(EditError::InvalidGoVersion(version.to_string()));
        }

        if let Some(go) = &mut self.go {
            set_token(&mut self.lines, go, version);
            return Ok(());
        }

        let line = format!("go {}", version);
        let module_line = self.module.as_ref().map(|(idx, _)| *idx);
        let at = match module_line {
            Some(module_line) => {
                let at = module_line + 1;
                self.insert_lines(at, vec![String::new(), line]);
                at + 1
            }
            None => {
                self.insert_lines(0, vec![line]);
                0
            }
        };
        self.go = Some(VersionToken {
            line: at,
            start: 3,
            end: 3 + version.len(),
            value: version.to_string(),
        });
        Ok(())
    }

    fn format(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(content: &str) -> GoModFile {
        GoModFile::parse("go.mod", content).unwrap()
    }

    #[test]
    fn parse_extracts_single_require() {
        let file = parse(
            r#"module example.com/myapp

go 1.21

require golang.org/x/text v0.14.0
"#,
        );
        assert_eq!(file.module_path(), Some("example.com/myapp"));
        assert_eq!(file.go_version(), Some("1.21".to_string()));
        assert_eq!(
            file.requirements(),
            vec![Requirement::new("golang.org/x/text", "v0.14.0")]
        );
    }

    #[test]
    fn parse_extracts_require_block() {
        let file = parse(
            r#"module example.com/myapp

go 1.21

require (
	golang.org/x/text v0.14.0
	golang.org/x/net v0.20.0
)
"#,
        );
        assert_eq!(
            file.requirements(),
            vec![
                Requirement::new("golang.org/x/text", "v0.14.0"),
                Requirement::new("golang.org/x/net", "v0.20.0"),
            ]
        );
    }

    #[test]
    fn parse_marks_indirect_dependencies() {
        let file = parse(
            r#"module example.com/myapp

require (
	golang.org/x/text v0.14.0 // indirect
	golang.org/x/net v0.20.0
)
"#,
        );
        let requirements = file.requirements();
        assert_eq!(requirements.len(), 2);
        assert!(requirements[0].indirect);
        assert!(!requirements[1].indirect);
    }

    #[test]
    fn parse_handles_mixed_single_and_block() {
        let file = parse(
            r#"module example.com/myapp

require golang.org/x/text v0.14.0

require (
	golang.org/x/net v0.20.0
)
"#,
        );
        let names: Vec<_> = file.requirements().into_iter().map(|r| r.path).collect();
        assert_eq!(names, vec!["golang.org/x/text", "golang.org/x/net"]);
    }

    #[test]
    fn parse_ignores_other_directives() {
        let file = parse(
            r#"module example.com/myapp

go 1.21

toolchain go1.22.1

require golang.org/x/text v0.14.0

replace golang.org/x/text v0.14.0 => ./local/text

replace (
	golang.org/x/net => ../fork/net
	example.com/old => example.com/new v1.0.0
)

exclude golang.org/x/crypto v1.0.0

retract (
	v1.0.1
	[v1.0.0, v1.9.9]
)
"#,
        );
        assert_eq!(
            file.requirements(),
            vec![Requirement::new("golang.org/x/text", "v0.14.0")]
        );
    }

    #[test]
    fn parse_accepts_quoted_module_paths() {
        let file = parse(
            r#"module "example.com/myapp"

require "golang.org/x/text" v0.14.0
"#,
        );
        assert_eq!(file.module_path(), Some("example.com/myapp"));
        assert_eq!(file.requirements()[0].path, "golang.org/x/text");
    }

    #[test]
    fn parse_returns_empty_for_no_requires() {
        let file = parse("module example.com/myapp\n\ngo 1.21\n");
        assert!(file.requirements().is_empty());
    }

    #[test]
    fn parse_without_go_directive_has_no_go_version() {
        let file = parse("module example.com/myapp\n");
        assert_eq!(file.go_version(), None);
    }

    #[test]
    fn requirements_keep_first_position_and_last_version_for_duplicates() {
        let file = parse(
            r#"module example.com/myapp

require (
	golang.org/x/text v0.14.0
	golang.org/x/net v0.20.0
	golang.org/x/text v0.15.0
)
"#,
        );
        assert_eq!(
            file.requirements(),
            vec![
                Requirement::new("golang.org/x/text", "v0.15.0"),
                Requirement::new("golang.org/x/net", "v0.20.0"),
            ]
        );
    }

    #[rstest]
    #[case::unknown_directive("this is not a valid go.mod file", 1)]
    #[case::unterminated_block("module m\n\nrequire (\n\tgolang.org/x/text v0.14.0\n", 3)]
    #[case::stray_paren("module m\n)\n", 2)]
    #[case::bad_require_arity("module m\nrequire golang.org/x/text\n", 2)]
    #[case::bad_module_version("module m\nrequire golang.org/x/text 0.14.0\n", 2)]
    #[case::bad_module_path("module m\nrequire golang.org//text v0.14.0\n", 2)]
    #[case::bad_go_version("module m\ngo one\n", 2)]
    #[case::repeated_go("module m\ngo 1.21\ngo 1.22\n", 3)]
    #[case::repeated_module("module m\nmodule n\n", 2)]
    #[case::go_block("module m\ngo (\n)\n", 2)]
    #[case::unterminated_string("module \"m\n", 1)]
    fn parse_rejects_malformed_content(#[case] content: &str, #[case] line: usize) {
        let err = GoModFile::parse("go.mod", content).unwrap_err();
        let actual = match err {
            ParseError::UnknownDirective { line, .. } => line,
            ParseError::InvalidSyntax { line, .. } => line,
        };
        assert_eq!(actual, line);
    }

    #[test]
    fn parse_error_names_file_and_line() {
        let err = GoModFile::parse("ref.mod", "module m\nbogus x\n").unwrap_err();
        assert_eq!(err.to_string(), "ref.mod:2: unknown directive: bogus");
    }

    #[test]
    fn parse_go_mod_rejects_invalid_utf8() {
        let result = parse_go_mod("go.mod", &[0x6d, 0xff, 0xfe]);
        assert!(matches!(result, Err(ParseError::InvalidSyntax { .. })));
    }

    #[test]
    fn format_returns_input_unchanged() {
        let content = "// header comment\r\nmodule example.com/myapp\r\n\r\ngo 1.21 // pinned\r\n\r\nrequire (\r\n    golang.org/x/text   v0.14.0 // indirect\r\n)\r\n";
        assert_eq!(parse(content).format(), content);
    }

    #[test]
    fn inserted_lines_follow_crlf_line_endings() {
        let mut file = parse("module m\r\n\r\nrequire a.com/b v1.0.0\r\n");
        file.set_go_version("1.22").unwrap();
        file.add_or_update_requirement("a.com/c", "v2.0.0").unwrap();
        assert_eq!(
            file.format(),
            "module m\r\n\r\ngo 1.22\r\n\r\nrequire a.com/b v1.0.0\r\n\r\nrequire a.com/c v2.0.0\r\n"
        );

        let mut block = parse("module m\r\n\r\nrequire (\r\n\ta.com/b v1.0.0\r\n)");
        block.add_or_update_requirement("a.com/c", "v2.0.0").unwrap();
        block.set_go_version("1.23").unwrap();
        assert_eq!(
            block.format(),
            "module m\r\n\r\ngo 1.23\r\n\r\nrequire (\r\n\ta.com/b v1.0.0\r\n\ta.com/c v2.0.0\r\n)"
        );
    }

    #[test]
    fn append_terminates_unterminated_crlf_last_line() {
        let mut file = parse("module m\r\n\r\ngo 1.21");
        file.add_or_update_requirement("a.com/b", "v1.0.0").unwrap();
        assert_eq!(
            file.format(),
            "module m\r\n\r\ngo 1.21\r\n\r\nrequire a.com/b v1.0.0"
        );
        assert_eq!(file.requirements(), vec![Requirement::new("a.com/b", "v1.0.0")]);
    }

    #[test]
    fn update_rewrites_only_the_version_token() {
        let mut file = parse(
            r#"module example.com/myapp

require (
	// text handling
	golang.org/x/text v0.14.0 // indirect
	golang.org/x/net v0.20.0
)
"#,
        );
        file.add_or_update_requirement("golang.org/x/text", "v0.15.0")
            .unwrap();

        assert_eq!(
            file.format(),
            r#"module example.com/myapp

require (
	// text handling
	golang.org/x/text v0.15.0 // indirect
	golang.org/x/net v0.20.0
)
"#
        );
        assert!(file.requirements()[0].indirect);
    }

    #[test]
    fn update_can_be_applied_twice_on_the_same_line() {
        let mut file = parse("module m\n\nrequire golang.org/x/text v0.14.0 // keep\n");
        file.add_or_update_requirement("golang.org/x/text", "v0.15.0-rc.1")
            .unwrap();
        file.add_or_update_requirement("golang.org/x/text", "v0.2.0")
            .unwrap();
        assert_eq!(
            file.format(),
            "module m\n\nrequire golang.org/x/text v0.2.0 // keep\n"
        );
    }

    #[test]
    fn update_rewrites_every_duplicate_declaration() {
        let mut file = parse(
            "module m\n\nrequire golang.org/x/text v0.14.0\n\nrequire golang.org/x/text v0.13.0\n",
        );
        file.add_or_update_requirement("golang.org/x/text", "v0.16.0")
            .unwrap();
        assert_eq!(
            file.format(),
            "module m\n\nrequire golang.org/x/text v0.16.0\n\nrequire golang.org/x/text v0.16.0\n"
        );
    }

    #[test]
    fn add_appends_into_last_require_block() {
        let mut file = parse(
            r#"module m

require (
    golang.org/x/text v0.14.0
)

require golang.org/x/sys v0.1.0
"#,
        );
        file.add_or_update_requirement("golang.org/x/net", "v0.20.0")
            .unwrap();

        assert_eq!(
            file.format(),
            r#"module m

require (
    golang.org/x/text v0.14.0
    golang.org/x/net v0.20.0
)

require golang.org/x/sys v0.1.0
"#
        );
        let names: Vec<_> = file.requirements().into_iter().map(|r| r.path).collect();
        assert_eq!(
            names,
            vec!["golang.org/x/text", "golang.org/x/net", "golang.org/x/sys"]
        );

        // The inserted entry must remain editable
        file.add_or_update_requirement("golang.org/x/net", "v0.21.0")
            .unwrap();
        assert!(file.format().contains("    golang.org/x/net v0.21.0\n"));
    }

    #[test]
    fn add_without_block_appends_require_line() {
        let mut file = parse("module m\n\ngo 1.21\n");
        file.add_or_update_requirement("golang.org/x/net", "v0.20.0")
            .unwrap();
        assert_eq!(
            file.format(),
            "module m\n\ngo 1.21\n\nrequire golang.org/x/net v0.20.0\n"
        );
    }

    #[test]
    fn set_go_version_rewrites_existing_directive() {
        let mut file = parse("module m\n\ngo 1.21 // minimum\n");
        file.set_go_version("1.22.3").unwrap();
        assert_eq!(file.format(), "module m\n\ngo 1.22.3 // minimum\n");
        assert_eq!(file.go_version(), Some("1.22.3".to_string()));
    }

    #[test]
    fn set_go_version_inserts_after_module() {
        let mut file = parse("module m\n\nrequire golang.org/x/text v0.14.0\n");
        file.set_go_version("1.22").unwrap();
        assert_eq!(
            file.format(),
            "module m\n\ngo 1.22\n\nrequire golang.org/x/text v0.14.0\n"
        );

        // Positions after the insertion point were shifted
        file.add_or_update_requirement("golang.org/x/text", "v0.15.0")
            .unwrap();
        file.set_go_version("1.23").unwrap();
        assert_eq!(
            file.format(),
            "module m\n\ngo 1.23\n\nrequire golang.org/x/text v0.15.0\n"
        );
    }

    #[rstest]
    #[case("golang.org/x/text", "v0.14", EditError::InvalidVersion { path: "golang.org/x/text".to_string(), version: "v0.14".to_string() })]
    #[case("golang.org/x/text", "", EditError::InvalidVersion { path: "golang.org/x/text".to_string(), version: String::new() })]
    #[case("", "v1.0.0", EditError::InvalidModulePath(String::new()))]
    #[case("bad path", "v1.0.0", EditError::InvalidModulePath("bad path".to_string()))]
    #[case("/leading/slash", "v1.0.0", EditError::InvalidModulePath("/leading/slash".to_string()))]
    fn add_or_update_rejects_malformed_input(
        #[case] path: &str,
        #[case] version: &str,
        #[case] expected: EditError,
    ) {
        let mut file = parse("module m\n");
        assert_eq!(
            file.add_or_update_requirement(path, version),
            Err(expected)
        );
        assert_eq!(file.format(), "module m\n");
    }

    #[test]
    fn set_go_version_rejects_malformed_version() {
        let mut file = parse("module m\n\ngo 1.21\n");
        assert_eq!(
            file.set_go_version("go1.22"),
            Err(EditError::InvalidGoVersion("go1.22".to_string()))
        );
        assert_eq!(file.go_version(), Some("1.21".to_string()));
    }

    #[rstest]
    #[case("v1.2.3", true)]
    #[case("v0.14.0-beta.1", true)]
    #[case("v2.0.0+incompatible", true)]
    #[case("v0.0.0-20210101000000-abcdef123456", true)]
    #[case("1.2.3", false)]
    #[case("v1.2", false)]
    #[case("v01.2.3", false)]
    fn is_module_version_returns_expected(#[case] version: &str, #[case] expected: bool) {
        assert_eq!(is_module_version(version), expected);
    }

    #[rstest]
    #[case("1.21", true)]
    #[case("1.21.3", true)]
    #[case("1.22rc1", true)]
    #[case("1", false)]
    #[case("go1.21", false)]
    #[case("", false)]
    fn is_go_version_returns_expected(#[case] version: &str, #[case] expected: bool) {
        assert_eq!(is_go_version(version), expected);
    }

    #[rstest]
    #[case("github.com/Azure/azure-sdk-for-go", true)]
    #[case("gopkg.in/yaml.v3", true)]
    #[case("example.com/mod/v2", true)]
    #[case("example.com/", false)]
    #[case("example.com//mod", false)]
    #[case("example.com/.hidden", false)]
    #[case("example.com/mod name", false)]
    fn is_module_path_returns_expected(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_module_path(path), expected);
    }
}
