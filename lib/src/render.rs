use crate::config::{RenderConfig, RenderMode};
use crate::matrix::BitMatrix;

/// Quiet zone width in modules on each side of the symbol
///
/// The QR standard mandates a light margin around the symbol for scanner
/// reliability. It is never stored in the matrix - the renderers synthesize
/// it by coordinate lookup.
pub const QUIET_ZONE: usize = 2;

/// Upper-half block: dark top module over a light bottom module
const UPPER_HALF: char = '\u{2580}';
/// Lower-half block: light top module over a dark bottom module
const LOWER_HALF: char = '\u{2584}';
/// Full block: both modules dark
const FULL_BLOCK: char = '\u{2588}';

/// Effective darkness of the virtual module at (row, col)
///
/// Coordinates outside `[0, size)` fall in the quiet zone, which is light by
/// QR convention; its raw value is `false`. The invert flag flips the
/// effective value of every module, quiet zone included, so the whole
/// rendered field responds to inversion consistently.
fn module_at(matrix: &BitMatrix, row: i32, col: i32, invert: bool) -> bool {
    let size = matrix.size() as i32;
    if row < 0 || row >= size || col < 0 || col >= size {
        return invert;
    }
    matrix.get(row as usize, col as usize) != invert
}

/// Render a module matrix with the strategy selected by `config`
///
/// Block mode ignores the configured theme characters; they are accepted
/// silently.
pub fn render(matrix: &BitMatrix, config: &RenderConfig) -> String {
    match config.mode {
        RenderMode::Block => render_blocks(matrix, config.invert),
        RenderMode::Text => {
            render_text(matrix, config.dark_char, config.light_char, config.invert)
        }
    }
}

/// Render a module matrix as plain text, one character per module
///
/// The output is `size + 4` lines of `size + 4` characters: two full border
/// lines of `light` at the top, the content rows with a two-character margin
/// of `light` on each side, and two full border lines at the bottom. Lines
/// are joined by `\n` with no trailing line break.
///
/// The border and margins always use `light`, even when `invert` is set.
/// Only the content modules participate in inversion; this asymmetry with
/// block mode is intentional.
///
/// # Arguments
/// * `matrix` - The module matrix to render
/// * `dark` - Character emitted for effectively dark modules
/// * `light` - Character emitted for effectively light modules and the border
/// * `invert` - Swap the dark/light interpretation of content modules
///
/// # Returns
/// The rendered text art
pub fn render_text(matrix: &BitMatrix, dark: char, light: char, invert: bool) -> String {
    let size = matrix.size();
    let width = size + 2 * QUIET_ZONE;
    let border: String = light.to_string().repeat(width);

    let mut lines = Vec::with_capacity(size + 2 * QUIET_ZONE);
    lines.push(border.clone());
    lines.push(border.clone());

    for row in 0..size {
        let mut line = String::with_capacity(width * light.len_utf8().max(dark.len_utf8()));
        line.push(light);
        line.push(light);
        for col in 0..size {
            let dark_module = matrix.get(row, col) != invert;
            line.push(if dark_module { dark } else { light });
        }
        line.push(light);
        line.push(light);
        lines.push(line);
    }

    lines.push(border.clone());
    lines.push(border);
    lines.join("\n")
}

/// Render a module matrix with Unicode quadrant glyphs
///
/// Each printed row covers two module rows: the glyph for a column is chosen
/// from the (top, bottom) darkness pair - full block, upper half, lower half
/// or space. This doubles vertical density, which roughly squares up the
/// aspect ratio in a terminal font.
///
/// Rows step the virtual row coordinate by 2 starting at `-QUIET_ZONE`;
/// columns sweep `-QUIET_ZONE .. size + QUIET_ZONE`. When the covered range
/// is odd the final bottom lookup reads one virtual row past it, which the
/// quiet-zone rule resolves like any other out-of-range coordinate. Every
/// printed row ends with `\n`, the last one included.
///
/// # Arguments
/// * `matrix` - The module matrix to render
/// * `invert` - Swap the dark/light interpretation of every module,
///   quiet zone included
///
/// # Returns
/// The rendered text art: `ceil((size + 4) / 2)` lines of `size + 4` glyphs
pub fn render_blocks(matrix: &BitMatrix, invert: bool) -> String {
    let size = matrix.size() as i32;
    let margin = QUIET_ZONE as i32;
    let width = (size + 2 * margin) as usize;

    let mut output = String::with_capacity((width * FULL_BLOCK.len_utf8() + 1) * width.div_ceil(2));
    let mut row = -margin;
    while row < size + margin {
        for col in -margin..size + margin {
            let top = module_at(matrix, row, col, invert);
            let bottom = module_at(matrix, row + 1, col, invert);
            output.push(match (top, bottom) {
                (true, true) => FULL_BLOCK,
                (true, false) => UPPER_HALF,
                (false, true) => LOWER_HALF,
                (false, false) => ' ',
            });
        }
        output.push('\n');
        row += 2;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checkerboard matrix with a dark module at (0, 0)
    fn checkered(size: usize) -> BitMatrix {
        let data = (0..size * size)
            .map(|i| (i / size + i % size) % 2 == 0)
            .collect();
        BitMatrix::new(size, data)
    }

    fn flipped(matrix: &BitMatrix) -> BitMatrix {
        let size = matrix.size();
        let data = (0..size * size)
            .map(|i| !matrix.get(i / size, i % size))
            .collect();
        BitMatrix::new(size, data)
    }

    fn opposite_glyph(glyph: char) -> char {
        match glyph {
            FULL_BLOCK => ' ',
            ' ' => FULL_BLOCK,
            UPPER_HALF => LOWER_HALF,
            LOWER_HALF => UPPER_HALF,
            other => panic!("unexpected glyph {:?}", other),
        }
    }

    #[test]
    fn test_text_line_geometry() {
        for size in [0, 1, 2, 5, 21] {
            let out = render_text(&checkered(size), '#', '.', false);
            let lines: Vec<&str> = out.split('\n').collect();
            assert_eq!(lines.len(), size + 4, "size {}", size);
            for line in lines {
                assert_eq!(line.chars().count(), size + 4, "size {}", size);
            }
            assert!(!out.ends_with('\n'));
        }
    }

    #[test]
    fn test_text_single_dark_module() {
        let m = BitMatrix::new(1, vec![true]);
        let out = render_text(&m, '#', '.', false);
        assert_eq!(out, ".....\n.....\n..#..\n.....\n.....");
    }

    #[test]
    fn test_text_size_zero_renders_border_only() {
        let m = BitMatrix::new(0, vec![]);
        let out = render_text(&m, '#', '.', false);
        assert_eq!(out, "....\n....\n....\n....");
    }

    #[test]
    fn test_text_invert_equals_preflipped_matrix() {
        let m = checkered(5);
        assert_eq!(
            render_text(&m, '#', '.', true),
            render_text(&flipped(&m), '#', '.', false)
        );
    }

    #[test]
    fn test_text_border_stays_light_under_invert() {
        let m = BitMatrix::new(1, vec![false]);
        let out = render_text(&m, '#', '.', true);
        // Inversion darkens the single light module but never the border.
        assert_eq!(out, ".....\n.....\n..#..\n.....\n.....");
    }

    #[test]
    fn test_text_custom_theme_characters() {
        let m = BitMatrix::new(1, vec![true]);
        let out = render_text(&m, 'X', ' ', false);
        assert_eq!(out, "     \n     \n  X  \n     \n     ");
    }

    #[test]
    fn test_block_line_geometry() {
        for size in [0, 1, 2, 5, 21] {
            let out = render_blocks(&checkered(size), false);
            assert!(out.ends_with('\n'), "size {}", size);
            let lines: Vec<&str> = out.trim_end_matches('\n').split('\n').collect();
            assert_eq!(lines.len(), (size + 4).div_ceil(2), "size {}", size);
            for line in lines {
                assert_eq!(line.chars().count(), size + 4, "size {}", size);
            }
        }
    }

    #[test]
    fn test_block_single_dark_module() {
        let m = BitMatrix::new(1, vec![true]);
        // The lone dark module sits in the top half of its printed row,
        // over a quiet-zone bottom half.
        assert_eq!(render_blocks(&m, false), "     \n  \u{2580}  \n     \n");
    }

    #[test]
    fn test_block_size_zero_renders_quiet_zone_only() {
        let m = BitMatrix::new(0, vec![]);
        assert_eq!(render_blocks(&m, false), "    \n    \n");
    }

    #[test]
    fn test_block_invert_swaps_every_glyph() {
        let m = checkered(5);
        let plain = render_blocks(&m, false);
        let inverted = render_blocks(&m, true);
        let expected: String = plain
            .chars()
            .map(|g| if g == '\n' { '\n' } else { opposite_glyph(g) })
            .collect();
        assert_eq!(inverted, expected);
    }

    #[test]
    fn test_block_quiet_zone_light_by_default() {
        let m = checkered(3);
        let out = render_blocks(&m, false);
        let lines: Vec<&str> = out.trim_end_matches('\n').split('\n').collect();
        // Outermost two virtual rows/columns are always light: the first
        // printed row covers them fully, and every row starts and ends with
        // two quiet-zone columns.
        assert!(lines[0].chars().all(|g| g == ' '));
        for line in &lines {
            let chars: Vec<char> = line.chars().collect();
            assert_eq!(chars[0], ' ');
            assert_eq!(chars[1], ' ');
            assert_eq!(chars[chars.len() - 2], ' ');
            assert_eq!(chars[chars.len() - 1], ' ');
        }
    }

    #[test]
    fn test_block_quiet_zone_dark_when_inverted() {
        let m = checkered(3);
        let out = render_blocks(&m, true);
        let lines: Vec<&str> = out.trim_end_matches('\n').split('\n').collect();
        assert!(lines[0].chars().all(|g| g == FULL_BLOCK));
        for line in &lines {
            let chars: Vec<char> = line.chars().collect();
            assert_eq!(chars[0], FULL_BLOCK);
            assert_eq!(chars[1], FULL_BLOCK);
        }
    }

    #[test]
    fn test_block_odd_range_reads_past_declared_rows() {
        // size 1 plus margins covers 5 virtual rows; the last printed row's
        // bottom lookup lands one row past the range and must resolve as
        // quiet zone rather than panic.
        let m = BitMatrix::new(1, vec![true]);
        let out = render_blocks(&m, false);
        assert_eq!(out.trim_end_matches('\n').split('\n').count(), 3);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let m = checkered(7);
        let config = RenderConfig::default();
        assert_eq!(render(&m, &config), render(&m, &config));

        let text_config = RenderConfig {
            mode: RenderMode::Text,
            invert: true,
            ..Default::default()
        };
        assert_eq!(render(&m, &text_config), render(&m, &text_config));
    }

    #[test]
    fn test_render_dispatch() {
        let m = checkered(3);
        let block = RenderConfig::default();
        assert_eq!(render(&m, &block), render_blocks(&m, false));

        let text = RenderConfig {
            mode: RenderMode::Text,
            ..Default::default()
        };
        assert_eq!(render(&m, &text), render_text(&m, '#', '.', false));
    }
}
