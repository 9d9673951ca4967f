// Frame compositor integration tests
//
// Drawing, clearing and presenting through the engine-facing entry points.

use screen_emulator::{FrameCompositor, Rgba, Rotation, Screen};

const RED: Rgba = Rgba::new(255, 0, 0, 255);

#[test]
fn test_basic_draw_present() {
    let mut compositor = FrameCompositor::new(2, 2, 1);
    compositor.set_pixel(0, 0, RED);
    compositor.present();

    let surface = compositor.surface();
    assert_eq!(surface.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(1, 0), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(0, 1), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn test_upscale_fidelity() {
    let mut compositor = FrameCompositor::new(2, 2, 4);
    compositor.set_pixel(1, 1, Rgba::WHITE);
    compositor.present();

    let surface = compositor.surface();
    assert_eq!((surface.width(), surface.height()), (8, 8));
    for y in 0..8 {
        for x in 0..8 {
            let expected = if x >= 4 && y >= 4 {
                [255, 255, 255, 255]
            } else {
                [0, 0, 0, 0]
            };
            assert_eq!(surface.pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_bounds_safety() {
    let mut compositor = FrameCompositor::new(4, 3, 1);
    compositor.set_pixel(0, 0, RED);
    compositor.set_pixel(3, 2, Rgba::WHITE);
    let before = compositor.frame_buffer().as_slice().to_vec();

    for y in -2..6 {
        for x in -2..7 {
            if (0..4).contains(&x) && (0..3).contains(&y) {
                continue;
            }
            compositor.set_pixel(x, y, Rgba::new(7, 7, 7, 7));
        }
    }

    assert_eq!(compositor.frame_buffer().as_slice(), before.as_slice());
}

#[test]
fn test_pack_correctness() {
    let mut compositor = FrameCompositor::new(16, 16, 1);
    let mut seed = 0x1234_5678u32;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [r, g, b, a] = seed.to_le_bytes();
        let (x, y) = ((seed >> 3) as i32 & 15, (seed >> 9) as i32 & 15);

        Screen::set_pixel(&mut compositor, x, y, r, g, b, a);
        assert_eq!(compositor.pixel(x, y), Some(Rgba::new(r, g, b, a)));
    }
}

#[test]
fn test_clear_idempotence() {
    let mut compositor = FrameCompositor::new(3, 3, 2);
    compositor.set_pixel(1, 1, RED);
    compositor.set_pixel(2, 0, Rgba::WHITE);

    compositor.clear();
    let once = compositor.frame_buffer().as_slice().to_vec();
    compositor.clear();

    assert_eq!(compositor.frame_buffer().as_slice(), once.as_slice());
    assert!(once.iter().all(|&cell| cell == 0));
}

#[test]
fn test_present_replaces_previous_frame() {
    let mut compositor = FrameCompositor::new(2, 1, 3);
    compositor.set_pixel(0, 0, Rgba::WHITE);
    compositor.present();

    compositor.clear();
    compositor.set_pixel(1, 0, Rgba::new(0, 0, 255, 128));
    compositor.present();

    let surface = compositor.surface();
    assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(5, 2), Some([0, 0, 255, 128]));
}

#[test]
fn test_rotated_engine_view() {
    // Engine sees a 2x4 portrait screen on a 4x2 buffer
    let mut compositor = FrameCompositor::with_rotation(4, 2, 1, Rotation::Deg90);
    assert_eq!(Screen::size(&compositor), (2, 4));

    compositor.set_pixel(0, 0, RED);
    compositor.set_pixel(2, 0, Rgba::WHITE);
    compositor.present();

    assert_eq!(compositor.surface().pixel(3, 0), Some([255, 0, 0, 255]));
    let lit = compositor
        .surface()
        .as_bytes()
        .chunks_exact(4)
        .filter(|p| p[3] != 0)
        .count();
    assert_eq!(lit, 1);
}
