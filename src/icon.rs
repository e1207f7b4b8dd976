use image::{Rgba, RgbaImage};

/// Edge length of the item texture in pixels.
pub const TEXTURE_SIZE: u32 = 16;

// Palette
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const FRAME_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const FRAME_SHADOW: Rgba<u8> = Rgba([64, 64, 64, 255]);
pub const SCREEN_OFF: Rgba<u8> = Rgba([16, 16, 16, 255]);
pub const SCREEN_ON: Rgba<u8> = Rgba([100, 150, 255, 255]);
pub const BUTTON_GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const HIGHLIGHT: Rgba<u8> = Rgba([192, 192, 192, 255]);

// Rows below this line show the bezel instead of the lit screen.
const BEZEL_START_Y: u32 = 10;

// Paint the smartphone item sprite (black rounded frame, lit screen with a
// glare highlight, bezel with home button, speaker slit on top).
pub fn generate_smartphone_texture() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(TEXTURE_SIZE, TEXTURE_SIZE, TRANSPARENT);

    // Frame: top/bottom edges, then left/right edges
    hline(&mut img, 3..=12, 1, FRAME_BLACK);
    hline(&mut img, 3..=12, 14, FRAME_BLACK);
    vline(&mut img, 3, 2..=13, FRAME_BLACK);
    vline(&mut img, 12, 2..=13, FRAME_BLACK);

    // Knock out the corners so the frame looks rounded
    plot(&mut img, &[(3, 1), (12, 1), (3, 14), (12, 14)], TRANSPARENT);

    // Screen area, lit on top and bezel underneath
    for y in 2..=12 {
        let color = if y < BEZEL_START_Y { SCREEN_ON } else { FRAME_SHADOW };
        hline(&mut img, 4..=11, y, color);
    }

    // Home button
    plot(&mut img, &[(7, 12), (8, 12)], BUTTON_GRAY);

    // Glare on the screen
    plot(&mut img, &[(5, 3), (6, 3), (5, 4)], HIGHLIGHT);

    // Speaker slit
    hline(&mut img, 6..=9, 2, FRAME_SHADOW);

    img
}

#[inline]
fn hline(img: &mut RgbaImage, xs: std::ops::RangeInclusive<u32>, y: u32, color: Rgba<u8>) {
    for x in xs {
        img.put_pixel(x, y, color);
    }
}

#[inline]
fn vline(img: &mut RgbaImage, x: u32, ys: std::ops::RangeInclusive<u32>, color: Rgba<u8>) {
    for y in ys {
        img.put_pixel(x, y, color);
    }
}

fn plot(img: &mut RgbaImage, points: &[(u32, u32)], color: Rgba<u8>) {
    for &(x, y) in points {
        img.put_pixel(x, y, color);
    }
}
