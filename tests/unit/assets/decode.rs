use std::io::Cursor;

use super::*;

fn encode(img: image::RgbaImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let buf = encode(img, image::ImageFormat::Png);

    let photo = decode_image(&buf).unwrap();
    assert_eq!((photo.width, photo.height), (1, 1));
    assert_eq!(
        photo.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn garbage_bytes_become_failed_load() {
    let load = PhotoLoad::from_bytes(b"definitely not an image");
    assert!(load.is_failed());
    assert!(load.decoded().is_none());
}

#[test]
fn missing_file_becomes_failed_load() {
    let load = PhotoLoad::from_path(Path::new("/nonexistent/wishcraft/photo.png"));
    let PhotoLoad::Failed(reason) = load else {
        panic!("expected failed load");
    };
    assert!(reason.contains("read photo"));
}

#[test]
fn from_bytes_decodes_wide_photo() {
    let img = image::RgbaImage::from_pixel(40, 20, image::Rgba([10, 20, 30, 255]));
    let buf = encode(img, image::ImageFormat::Png);
    let load = PhotoLoad::from_bytes(&buf);
    let photo = load.decoded().unwrap();
    assert_eq!((photo.width, photo.height), (40, 20));
    assert_eq!(photo.aspect(), 2.0);
    assert_eq!(&photo.rgba8_premul[0..4], &[10, 20, 30, 255]);
}

#[test]
fn sniff_recognizes_png_and_rejects_text() {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
    let buf = encode(img, image::ImageFormat::Png);
    assert_eq!(sniff_format(&buf), Some(image::ImageFormat::Png));
    assert_eq!(sniff_format(b"hello"), None);
}

#[test]
fn fit_within_keeps_small_photos_and_aspect() {
    assert_eq!(fit_within(500, 500, MAX_PHOTO_SIDE), (500, 500));
    assert_eq!(fit_within(2048, 10, 2048), (2048, 10));
    assert_eq!(fit_within(4096, 3072, 2048), (2048, 1536));
    assert_eq!(fit_within(3000, 6000, 2048), (1024, 2048));
    assert_eq!(fit_within(70_000, 2, 2048), (2048, 1));
}

#[test]
fn very_wide_photo_is_downscaled_on_decode() {
    let img = image::RgbaImage::from_pixel(70_000, 2, image::Rgba([200, 40, 40, 255]));
    let buf = encode(img, image::ImageFormat::Png);

    let photo = decode_image(&buf).unwrap();
    assert_eq!((photo.width, photo.height), (MAX_PHOTO_SIDE, 1));
    assert_eq!(photo.rgba8_premul.len(), MAX_PHOTO_SIDE as usize * 4);
    let px = &photo.rgba8_premul[0..4];
    assert_eq!(px[3], 255);
    assert!(px[0].abs_diff(200) <= 1 && px[1].abs_diff(40) <= 1, "{px:?}");
}
