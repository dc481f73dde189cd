use image::RgbImage;
use ndarray::Array4;

/// Build the network input: stretch-resize the image to
/// `size` × `size` (nearest neighbor), scale pixels to [0,1], and emit
/// NCHW float32. `swap_rb` exchanges the first and third channels so a
/// BGR source image reaches the network in its expected order.
///
/// Unlike letterboxing, aspect ratio is not preserved; the reference
/// pipeline stretches, so box fractions decode directly against the
/// original image dimensions.
pub fn image_tensor(image: &RgbImage, size: u32, swap_rb: bool) -> Array4<f32> {
    let (src_w, src_h) = image.dimensions();
    let mut tensor = Array4::<f32>::zeros((1, 3, size as usize, size as usize));

    for y in 0..size as usize {
        let src_y = (y as f64 * src_h as f64 / size as f64) as u32;
        let src_y = src_y.min(src_h - 1);
        for x in 0..size as usize {
            let src_x = (x as f64 * src_w as f64 / size as f64) as u32;
            let src_x = src_x.min(src_w - 1);
            let px = image.get_pixel(src_x, src_y).0;
            for c in 0..3 {
                let src_c = if swap_rb { 2 - c } else { c };
                tensor[[0, c, y, x]] = px[src_c] as f32 / 255.0;
            }
        }
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb(rgb))
    }

    #[test]
    fn test_output_shape() {
        let img = solid(640, 480, [0, 0, 0]);
        let t = image_tensor(&img, 320, false);
        assert_eq!(t.shape(), &[1, 3, 320, 320]);
    }

    #[test]
    fn test_values_normalized_to_unit_range() {
        let img = solid(10, 10, [255, 255, 255]);
        let t = image_tensor(&img, 320, false);
        assert!((t[[0, 0, 0, 0]] - 1.0).abs() < 1e-6);
        assert!((t[[0, 2, 319, 319]] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_channel_order_preserved_without_swap() {
        let img = solid(8, 8, [255, 128, 0]);
        let t = image_tensor(&img, 32, false);
        assert!((t[[0, 0, 0, 0]] - 1.0).abs() < 1e-6);
        assert!((t[[0, 1, 0, 0]] - 128.0 / 255.0).abs() < 1e-6);
        assert!((t[[0, 2, 0, 0]] - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_swap_rb_exchanges_outer_channels() {
        let img = solid(8, 8, [255, 128, 0]);
        let t = image_tensor(&img, 32, true);
        assert!((t[[0, 0, 0, 0]] - 0.0).abs() < 1e-6);
        assert!((t[[0, 1, 0, 0]] - 128.0 / 255.0).abs() < 1e-6);
        assert!((t[[0, 2, 0, 0]] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_samples_both_halves() {
        // Left half red, right half blue; the stretched tensor keeps
        // red on the left and blue on the right.
        let mut img = solid(100, 50, [255, 0, 0]);
        for y in 0..50 {
            for x in 50..100 {
                img.put_pixel(x, y, image::Rgb([0, 0, 255]));
            }
        }
        let t = image_tensor(&img, 64, false);
        assert!((t[[0, 0, 32, 0]] - 1.0).abs() < 1e-6); // left: R
        assert!((t[[0, 2, 32, 63]] - 1.0).abs() < 1e-6); // right: B
    }
}
