const SET: char = '#';
const CLEAR: char = '.';

/// Draws row-major bits as text, one line per row.
pub fn render(bits: &[bool], width: u32) -> String {
    if width == 0 {
        return String::new();
    }
    bits.chunks(width as usize)
        .map(|row| {
            row.iter()
                .map(|bit| if *bit { SET } else { CLEAR })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
