use crate::utils::ColorValue;

/// The powerline hard separator (U+E0B0).
pub const SEPARATOR: &str = "\u{e0b0}";

/// Which shell the rendered escape sequences are destined for. Bash and zsh
/// need their zero-width markers around every escape so the shell computes
/// the prompt width correctly; `Bare` emits raw ANSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Bare,
}

impl Shell {
    pub fn from_name(name: &str) -> Self {
        match name {
            "bash" => Shell::Bash,
            "zsh" => Shell::Zsh,
            _ => Shell::Bare,
        }
    }
}

/// One styled piece of prompt content produced by a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub text: String,
    pub fg: ColorValue,
    pub bg: ColorValue,
}

impl Chunk {
    pub fn new(text: impl Into<String>, fg: ColorValue, bg: ColorValue) -> Self {
        Self {
            text: text.into(),
            fg,
            bg,
        }
    }
}

/// Accumulates styled chunks in render order and draws them into the final
/// prompt string. Appends happen serially, after all segments are joined.
pub struct Powerline {
    shell: Shell,
    chunks: Vec<Chunk>,
}

impl Powerline {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            chunks: Vec::new(),
        }
    }

    pub fn append(&mut self, text: impl Into<String>, fg: ColorValue, bg: ColorValue) {
        self.chunks.push(Chunk::new(text, fg, bg));
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Render all chunks with 256-color escapes and powerline separators.
    /// Each separator is drawn with the previous chunk's background as its
    /// foreground over the next chunk's background; the final separator sits
    /// on the terminal default background.
    pub fn draw(&self) -> String {
        let mut out = String::new();
        for (i, chunk) in self.chunks.iter().enumerate() {
            out.push_str(&self.fgcolor(chunk.fg.code()));
            out.push_str(&self.bgcolor(chunk.bg.code()));
            out.push_str(&chunk.text);
            match self.chunks.get(i + 1) {
                Some(next) => {
                    out.push_str(&self.fgcolor(chunk.bg.code()));
                    out.push_str(&self.bgcolor(next.bg.code()));
                    out.push_str(SEPARATOR);
                }
                None => {
                    out.push_str(&self.reset());
                    out.push_str(&self.fgcolor(chunk.bg.code()));
                    out.push_str(SEPARATOR);
                }
            }
        }
        if !self.chunks.is_empty() {
            out.push_str(&self.reset());
            out.push(' ');
        }
        out
    }

    fn escape(&self, body: &str) -> String {
        let sequence = format!("\x1b[{}m", body);
        match self.shell {
            Shell::Bash => format!("\\[{}\\]", sequence),
            Shell::Zsh => format!("%{{{}%}}", sequence),
            Shell::Bare => sequence,
        }
    }

    fn fgcolor(&self, code: Option<u8>) -> String {
        match code {
            Some(code) => self.escape(&format!("38;5;{}", code)),
            None => self.escape("39"),
        }
    }

    fn bgcolor(&self, code: Option<u8>) -> String {
        match code {
            Some(code) => self.escape(&format!("48;5;{}", code)),
            None => self.escape("49"),
        }
    }

    fn reset(&self) -> String {
        self.escape("0")
    }
}
