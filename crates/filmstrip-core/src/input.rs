pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
                self.cursor -= prev.len_utf8();
                self.buffer.remove(self.cursor);
            }
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
                self.cursor -= prev.len_utf8();
            }
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            if let Some(next) = self.buffer[self.cursor..].chars().next() {
                self.cursor += next.len_utf8();
            }
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
