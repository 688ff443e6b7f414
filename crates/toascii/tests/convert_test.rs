use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use toascii::{
    convert, convert_image, convert_reader, render_to,
    test_support::{encode_png, strip_escapes, BufferTarget},
    Bilinear, ConvertConfig, ConvertError, Interpolation, GLYPH_RAMP,
};

fn checkerboard() -> RgbaImage {
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
    img.put_pixel(0, 1, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 1, Rgba([0, 255, 0, 255]));
    img
}

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        Rgba([
            (x * 255 / (w - 1)) as u8,
            (y * 255 / (h - 1)) as u8,
            ((x + y) * 255 / (w + h - 2)) as u8,
            255,
        ])
    })
}

#[test]
fn two_by_two_end_to_end() {
    let png = encode_png(&checkerboard());
    let text = convert(&png, &ConvertConfig::new(2, 2)).unwrap();
    // White peaks at index 62 ('h'): the luminance weights are applied inside the squares.
    assert_eq!(
        text,
        "\x1B[38;2;0;0;0m \x1B[38;2;255;255;255mh\n\
         \x1B[38;2;255;0;0m(\x1B[38;2;0;255;0m2\n"
    );
    assert_eq!(GLYPH_RAMP[0] as char, ' ');
}

#[test]
fn output_shape_matches_config() {
    let png = encode_png(&gradient(37, 23));
    for (w, h) in [(1, 1), (5, 3), (40, 10), (80, 30)] {
        for interp in Interpolation::ALL {
            let config = ConvertConfig::new(w, h).with_scaler(interp);
            let text = convert(&png, &config).unwrap();
            assert_eq!(text.matches('\n').count(), h as usize, "{interp} {w}x{h}");
            let plain = strip_escapes(&text);
            for line in plain.lines() {
                assert_eq!(line.chars().count(), w as usize, "{interp} {w}x{h}");
            }
            assert_eq!(text.matches("\x1B[38;2;").count(), (w * h) as usize);
        }
    }
}

#[test]
fn conversion_is_deterministic() {
    let png = encode_png(&gradient(64, 48));
    let config = ConvertConfig::new(30, 12).with_scaler(Bilinear);
    assert_eq!(
        convert(&png, &config).unwrap(),
        convert(&png, &config).unwrap()
    );
}

#[test]
fn uniform_image_yields_uniform_cells() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([40, 120, 200, 255])));
    let mut target = BufferTarget::new();
    render_to(&img, &ConvertConfig::new(5, 5), &mut target).unwrap();
    assert_eq!(target.lines.len(), 5);
    let first = target.lines[0][0];
    assert!(target.lines.iter().all(|row| row.len() == 5));
    assert!(target.lines.iter().flatten().all(|c| *c == first));
    assert_eq!(first.fg.0, [40, 120, 200]);
}

#[test]
fn buffer_target_sees_row_major_order() {
    let img = DynamicImage::ImageRgba8(checkerboard());
    let mut target = BufferTarget::new();
    render_to(&img, &ConvertConfig::new(2, 2), &mut target).unwrap();
    assert_eq!(target.glyph_rows(), vec![" h", "(2"]);
}

#[test]
fn reader_input() {
    let png = encode_png(&checkerboard());
    let from_reader = convert_reader(Cursor::new(png.clone()), &ConvertConfig::new(2, 2)).unwrap();
    assert_eq!(from_reader, convert(&png, &ConvertConfig::new(2, 2)).unwrap());
}

#[test]
fn format_is_sniffed_from_content() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])));
    let mut gif = Cursor::new(Vec::new());
    img.write_to(&mut gif, ImageFormat::Gif).unwrap();
    let text = convert(gif.get_ref(), &ConvertConfig::new(2, 1)).unwrap();
    assert_eq!(strip_escapes(&text).lines().count(), 1);
    assert_eq!(strip_escapes(&text).trim_end_matches('\n').chars().count(), 2);

    let mut jpeg = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img.to_rgb8())
        .write_to(&mut jpeg, ImageFormat::Jpeg)
        .unwrap();
    let text = convert(jpeg.get_ref(), &ConvertConfig::new(3, 2)).unwrap();
    assert_eq!(strip_escapes(&text).lines().count(), 2);
}

#[test]
fn upscaling_keeps_shape() {
    let img = DynamicImage::ImageRgba8(checkerboard());
    let text = convert_image(&img, &ConvertConfig::new(4, 4)).unwrap();
    assert_eq!(
        strip_escapes(&text),
        "  hh\n  hh\n((22\n((22\n"
    );
}

#[test]
fn invalid_config_and_bad_bytes() {
    let png = encode_png(&checkerboard());
    assert!(matches!(
        convert(&png, &ConvertConfig::new(3, 0)),
        Err(ConvertError::InvalidConfig { width: 3, height: 0 })
    ));
    let err = convert(&png[..png.len() / 2], &ConvertConfig::new(3, 3)).unwrap_err();
    assert!(matches!(err, ConvertError::Decode(_)));
    assert!(err.to_string().starts_with("decode error"));
}
