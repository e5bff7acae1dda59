mod alpha_bit;
mod preview;

pub use alpha_bit::alpha_bit;

use crate::c_array::format_c_array;
use crate::display_constants::PIXELS_PER_BYTE;
use image::RgbaImage;

/// A 1-bit-per-pixel bitmap, rows packed back to back with no per-row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl Bitmap {
    pub fn from_rgba(rgba: &RgbaImage) -> Self {
        Self {
            width: rgba.width(),
            height: rgba.height(),
            bytes: pack_alpha(rgba),
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The classification bits in row-major order, padding dropped.
    pub fn bits(&self) -> Vec<bool> {
        unpack_bits(&self.bytes, self.pixel_count())
    }

    pub fn to_c_array(&self, name: &str) -> String {
        format_c_array(name, &self.bytes)
    }

    pub fn preview(&self) -> String {
        preview::render(&self.bits(), self.width)
    }
}

pub fn packed_len(width: u32, height: u32) -> usize {
    (width as usize * height as usize).div_ceil(PIXELS_PER_BYTE)
}

pub fn pack_alpha(rgba: &RgbaImage) -> Vec<u8> {
    pack_bits(rgba.pixels().map(alpha_bit))
}

/// Shifts bits into bytes msb first. A trailing partial byte is left aligned,
/// its low bits zero.
pub fn pack_bits<I>(bits: I) -> Vec<u8>
where
    I: IntoIterator<Item = bool>,
{
    let bits = bits.into_iter();
    let mut packed = Vec::with_capacity(bits.size_hint().0.div_ceil(PIXELS_PER_BYTE));
    let mut current: u8 = 0;
    let mut bit_count = 0;

    for bit in bits {
        current = current << 1 | bit as u8;
        bit_count += 1;
        if bit_count == PIXELS_PER_BYTE {
            packed.push(current);
            current = 0;
            bit_count = 0;
        }
    }

    if bit_count > 0 {
        packed.push(current << (PIXELS_PER_BYTE - bit_count));
    }
    packed
}

pub fn unpack_bits(packed: &[u8], bit_len: usize) -> Vec<bool> {
    packed
        .iter()
        .flat_map(|byte| {
            (0..PIXELS_PER_BYTE)
                .rev()
                .map(move |shift| (byte >> shift) & 1 == 1)
        })
        .take(bit_len)
        .collect()
}
