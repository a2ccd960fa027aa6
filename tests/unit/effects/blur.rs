use super::*;

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6];
    let out = blur_interleaved(&src, 1, 2, 3, 0, 1.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (4u32, 3u32);
    let px = [10u8, 20u8, 30u8];
    let src = px.repeat((w * h) as usize);
    let out = blur_interleaved(&src, w, h, 3, 3, 2.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (5u32, 5u32);
    let mut src = vec![0u8; (w * h) as usize];
    src[(2 * w + 2) as usize] = 255;

    let out = blur_interleaved(&src, w, h, 1, 2, 1.2).unwrap();

    let nonzero = out.iter().filter(|&&v| v != 0).count();
    assert!(nonzero > 1);

    let sum: u32 = out.iter().map(|&v| u32::from(v)).sum();
    assert!((sum as i32 - 255).abs() <= 6);
}

#[test]
fn blur_rejects_bad_inputs() {
    assert!(blur_interleaved(&[0u8; 3], 1, 1, 3, 1, 0.0).is_err());
    assert!(blur_interleaved(&[0u8; 4], 1, 1, 3, 1, 1.0).is_err());
    assert!(blur_interleaved(&[0u8; 5], 1, 1, 5, 1, 1.0).is_err());
}

#[test]
fn gaussian_blur_rgb_keeps_dimensions() {
    let img = image::RgbImage::from_fn(7, 4, |x, y| image::Rgb([(x * 30) as u8, (y * 60) as u8, 9]));
    let out = gaussian_blur_rgb(&img, 2.0).unwrap();
    assert_eq!(out.dimensions(), (7, 4));
}

#[test]
fn kernel_is_symmetric_and_sums_to_unity() {
    for (radius, sigma) in [(1, 0.5), (2, 1.0), (6, 2.0), (9, 3.0)] {
        let k = gaussian_kernel_q16(radius, sigma).unwrap();
        assert_eq!(k.len(), 2 * radius as usize + 1);
        assert_eq!(k.iter().sum::<u32>(), 65536);
        assert!(k.iter().eq(k.iter().rev()));
        let center = k[radius as usize];
        assert!(k.iter().all(|&w| w <= center));
    }
}
