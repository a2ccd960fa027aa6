use super::*;

#[test]
fn minstd_is_deterministic_per_seed() {
    let mut a = MinstdRng::new(7);
    let mut b = MinstdRng::new(7);
    let mut c = MinstdRng::new(8);
    let xs: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
    let ys: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
    let zs: Vec<u32> = (0..16).map(|_| c.next_u32()).collect();
    assert_eq!(xs, ys);
    assert_ne!(xs, zs);
}

#[test]
fn minstd_seed_zero_does_not_stall() {
    let mut rng = MinstdRng::new(0);
    let first = rng.next_u32();
    assert_ne!(first, 0);
    assert_ne!(rng.next_u32(), first);
}

#[test]
fn hsv_primary_hues() {
    assert_eq!(hsv_to_rgb8(0.0, 1.0, 1.0), [255, 0, 0]);
    assert_eq!(hsv_to_rgb8(1.0 / 3.0, 1.0, 1.0), [0, 255, 0]);
    assert_eq!(hsv_to_rgb8(2.0 / 3.0, 1.0, 1.0), [0, 0, 255]);
    assert_eq!(hsv_to_rgb8(1.0, 1.0, 1.0), [255, 0, 0]);
}

#[test]
fn hsv_zero_saturation_is_gray() {
    assert_eq!(hsv_to_rgb8(0.4, 0.0, 0.5), [127, 127, 127]);
}

#[test]
fn luma_weights_sum_to_one() {
    assert!((luma601(255, 255, 255) - 255.0).abs() < 1e-3);
    assert_eq!(luma601(0, 0, 0), 0.0);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(128, 255), 128);
    assert_eq!(mul_div255(0, 200), 0);
}
