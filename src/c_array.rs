/// Renders packed bytes as an AVR style flash array:
///
/// ```text
/// const unsigned char <name> [] PROGMEM = {
/// 	0x00, 0xff, ...
/// };
/// ```
pub fn format_c_array(name: &str, bytes: &[u8]) -> String {
    let body = bytes
        .iter()
        .map(|byte| format!("0x{byte:02x}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("const unsigned char {name} [] PROGMEM = {{\n\t{body}\n}};")
}

pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
