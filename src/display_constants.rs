pub const PIXEL_WIDTH: u32 = 70;
pub const PIXEL_HEIGHT: u32 = 70;

pub const BITMAP_NAME: &str = "epd_bitmap_wifi0_70x70";

pub const PIXELS_PER_BYTE: usize = 8 /* one bit per pixel, msb first */;
