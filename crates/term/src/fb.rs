//! Character framebuffer: the view draws glyphs into it and the renderer
//! diffs consecutive frames of it.
//!
//! Every write is clipped to the buffer, so drawing code never has to check
//! the terminal size first.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One styled terminal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Style::default().glyph(' ')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    /// Row-major, `width * height` glyphs.
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, keeping the allocation when it is large enough.
    ///
    /// Contents are unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Cover a `w x h` rectangle with `glyph`.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for row in y..y.saturating_add(h).min(self.height) {
            for col in x..x.saturating_add(w).min(self.width) {
                self.set(col, row, glyph);
            }
        }
    }

    /// Write `s` left to right. Returns the column after the last char.
    pub fn text(&mut self, x: u16, y: u16, s: &str, style: Style) -> u16 {
        let mut col = x;
        for ch in s.chars() {
            if col >= self.width {
                break;
            }
            self.set(col, y, style.glyph(ch));
            col += 1;
        }
        col
    }

    /// Write `s` centred inside the span `[x, x + w)`.
    pub fn text_centered(&mut self, x: u16, w: u16, y: u16, s: &str, style: Style) -> u16 {
        let len = s.chars().count() as u16;
        self.text(x.saturating_add(w.saturating_sub(len) / 2), y, s, style)
    }

    /// Write `n` in decimal without allocating. Returns the next column.
    pub fn number(&mut self, x: u16, y: u16, n: u32, style: Style) -> u16 {
        // u32::MAX has 10 digits; fill from the right.
        let mut buf = [b'0'; 10];
        let mut start = buf.len();
        let mut rest = n;
        loop {
            start -= 1;
            buf[start] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        let digits = std::str::from_utf8(&buf[start..]).unwrap_or("0");
        self.text(x, y, digits, style)
    }

    /// Single-line box outline around a `w x h` rectangle.
    pub fn outline(&mut self, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);

        self.set(x, y, style.glyph('┌'));
        self.set(right, y, style.glyph('┐'));
        self.set(x, bottom, style.glyph('└'));
        self.set(right, bottom, style.glyph('┘'));
        self.fill(x + 1, y, w - 2, 1, style.glyph('─'));
        self.fill(x + 1, bottom, w - 2, 1, style.glyph('─'));
        self.fill(x, y + 1, 1, h - 2, style.glyph('│'));
        self.fill(right, y + 1, 1, h - 2, style.glyph('│'));
    }

    /// Characters of row `y` with styles dropped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}
