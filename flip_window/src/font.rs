//! Minimal 3×5 bitmap font for page numbers and the status line.

/// Draw `text` into an ARGB framebuffer at `(x, y)`, each font pixel
/// expanded to a `scale × scale` block.  Glyphs past the right edge are
/// dropped.
pub fn draw_text(
    buf: &mut [u32],
    buf_w: usize,
    buf_h: usize,
    text: &str,
    x: usize,
    y: usize,
    scale: usize,
    color: u32,
) {
    let scale = scale.max(1);
    let advance = 4 * scale; // 3 wide + 1 gap
    let mut cx = x;
    for ch in text.chars() {
        if cx + advance > buf_w { break; }
        // blanks and unknown characters just advance
        let Some(rows) = glyph(ch) else {
            cx += advance;
            continue;
        };
        for (row, line) in rows.iter().enumerate() {
            for (col, cell) in line.bytes().enumerate() {
                if cell != b'#' { continue; }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = cx + col * scale + dx;
                        let py = y + row * scale + dy;
                        if px < buf_w && py < buf_h {
                            buf[py * buf_w + px] = color;
                        }
                    }
                }
            }
        }
        cx += advance;
    }
}

/// Pixel width of `text` at `scale`.
pub fn text_width(text: &str, scale: usize) -> usize {
    text.chars().count() * 4 * scale.max(1)
}

/// 3×5 glyphs drawn as rows of `#`.  Only what the page numbers and the
/// status line print; text is lowercased before lookup.
const GLYPHS: &[(char, [&str; 5])] = &[
    ('0', ["###", "#.#", "#.#", "#.#", "###"]),
    ('1', [".#.", "##.", ".#.", ".#.", "###"]),
    ('2', ["###", "..#", "###", "#..", "###"]),
    ('3', ["###", "..#", ".##", "..#", "###"]),
    ('4', ["#.#", "#.#", "###", "..#", "..#"]),
    ('5', ["###", "#..", "###", "..#", "###"]),
    ('6', ["###", "#..", "###", "#.#", "###"]),
    ('7', ["###", "..#", ".#.", ".#.", ".#."]),
    ('8', ["###", "#.#", "###", "#.#", "###"]),
    ('9', ["###", "#.#", "###", "..#", "###"]),
    ('a', ["...", ".##", "#.#", "#.#", ".##"]),
    ('c', ["...", ".##", "#..", "#..", ".##"]),
    ('d', ["..#", ".##", "#.#", "#.#", ".##"]),
    ('e', ["...", ".#.", "###", "#..", ".##"]),
    ('g', ["...", ".##", "#.#", ".##", "##."]),
    ('h', ["#..", "#..", "##.", "#.#", "#.#"]),
    ('i', [".#.", "...", "##.", ".#.", "###"]),
    ('n', ["...", "...", "##.", "#.#", "#.#"]),
    ('o', ["...", "...", ".#.", "#.#", ".#."]),
    ('p', ["...", "##.", "#.#", "##.", "#.."]),
    ('r', ["...", "...", "#.#", "##.", "#.."]),
    ('s', ["...", ".##", "#..", "..#", "##."]),
    ('t', [".#.", "###", ".#.", ".#.", "..#"]),
    ('u', ["...", "...", "#.#", "#.#", ".##"]),
    ('v', ["...", "...", "#.#", "#.#", ".#."]),
    ('/', ["..#", "..#", ".#.", "#..", "#.."]),
    ('-', ["...", "...", "###", "...", "..."]),
];

fn glyph(c: char) -> Option<&'static [&'static str; 5]> {
    let c = c.to_ascii_lowercase();
    GLYPHS.iter().find(|(g, _)| *g == c).map(|(_, rows)| rows)
}
