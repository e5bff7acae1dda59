use image::Rgba;

/// Fully transparent pixels become set bits. Any other alpha, even 1, is a
/// cleared bit.
pub fn alpha_bit(pixel: &Rgba<u8>) -> bool {
    pixel[3] == 0
}
