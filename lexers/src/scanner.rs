#![deny(warnings)]

/// A backtracking cursor over any iterator. Items are buffered from `src` on
/// demand so that `pos` can be rewound to any point since the last `ignore`.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn pos(&self) -> isize { self.pos }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull enough elements into the buffer to cover self.pos
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn prev(&mut self) -> Option<I::Item> {
        if self.pos >= 0 { self.pos -= 1; }
        self.curr()
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Items consumed since the last `ignore`/`extract`.
    pub fn view(&self) -> &[I::Item] {
        let n = (self.pos + 1).min(self.buf.len() as isize).max(0) as usize;
        &self.buf[..n]
    }

    /// Drop everything consumed so far, next scan starts fresh.
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = ((self.pos + 1) as usize).min(self.buf.len());
            self.buf.drain(..n);
        }
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    /// Advance only if the next item satisfies `pred`.
    pub fn accept_if(&mut self, pred: impl Fn(&I::Item) -> bool) -> Option<I::Item> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if pred(&next) { return Some(next); }
        }
        self.set_pos(backtrack);
        None
    }

    /// Advance over every item satisfying `pred`, returns if it advanced.
    pub fn skip_all(&mut self, pred: impl Fn(&I::Item) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }

    /// Advance until the next item satisfies `pred` or input is exhausted.
    pub fn until(&mut self, pred: impl Fn(&I::Item) -> bool) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if pred(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn accept_char(&mut self, c: char) -> bool {
        self.accept_if(|n| *n == c).is_some()
    }

    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        self.accept_if(|n| any.contains(*n))
    }

    /// Skip whitespace and forget it. Returns if anything was skipped.
    pub fn ignore_ws(&mut self) -> bool {
        let skipped = self.skip_all(|c| c.is_whitespace());
        self.ignore();
        skipped
    }

    // scan [a-zA-Z_][a-zA-Z0-9_]*
    pub fn scan_identifier(&mut self) -> Option<String> {
        self.accept_if(|c| c.is_alphabetic() || *c == '_')?;
        self.skip_all(|c| c.is_alphanumeric() || *c == '_');
        Some(self.extract_string())
    }

    // scan a quoted string like "this is \"an\" example", quotes are kept
    pub fn scan_quoted_string(&mut self, q: char) -> Option<String> {
        let backtrack = self.pos();
        if !self.accept_char(q) {
            return None;
        }
        while let Some(n) = self.next() {
            if n == '\\' { self.next(); continue; }
            if n == q { return Some(self.extract_string()); }
        }
        self.set_pos(backtrack);
        None
    }
}

impl<'a> Scanner<std::str::Chars<'a>> {
    pub fn from_str(src: &'a str) -> Self {
        Scanner::new(src.chars())
    }
}
