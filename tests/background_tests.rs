// Host-side tests for the color-bends background geometry.

use dome_core::*;

#[test]
fn mobile_draws_fewer_softer_bends() {
    let cfg = BackgroundConfig::default();
    let desktop = ColorBends::new(&cfg, DeviceProfile::Desktop);
    let mobile = ColorBends::new(&cfg, DeviceProfile::Mobile);
    assert_eq!(desktop.bend_count(), 3);
    assert_eq!(mobile.bend_count(), 2);
    assert!((desktop.intensity() - 0.6).abs() < 1e-6);
    assert!((mobile.intensity() - 0.42).abs() < 1e-6);
}

#[test]
fn time_advances_with_speed() {
    let mut cfg = BackgroundConfig::default();
    cfg.speed = 2.0;
    let mut bends = ColorBends::new(&cfg, DeviceProfile::Desktop);
    bends.next_frame(800.0, 600.0);
    bends.next_frame(800.0, 600.0);
    assert!((bends.time() - 0.04).abs() < 1e-6);

    let mut slow = ColorBends::new(&cfg, DeviceProfile::Mobile);
    slow.next_frame(800.0, 600.0);
    assert!((slow.time() - 0.016).abs() < 1e-6);
}

#[test]
fn frame_spans_the_canvas() {
    let bends = ColorBends::new(&BackgroundConfig::default(), DeviceProfile::Desktop);
    let frame = bends.frame_at(1.0, 1000.0, 500.0);
    assert_eq!(frame.bends.len(), 3);
    assert_eq!(frame.glows.len(), 2);
    for bend in &frame.bends {
        assert_eq!(bend.start.x, -200.0);
        assert_eq!(bend.end.x, 1200.0);
        assert_eq!(bend.line_width, 400.0);
        assert_eq!(bend.stroke.stops.len(), 6);
        assert_eq!(bend.stroke.stops[0].offset, 0.0);
        assert_eq!(bend.stroke.stops[5].offset, 1.0);
        for stop in &bend.stroke.stops {
            let c = stop.color;
            assert!((0.0..=255.0).contains(&c.r));
            assert!((0.0..=255.0).contains(&c.g));
            assert!((0.0..=255.0).contains(&c.b));
        }
    }
    for glow in &frame.glows {
        assert!(glow.radius > 0.0);
        assert!(glow.center.x >= 0.0 && glow.center.x <= 1000.0);
    }
}

#[test]
fn frames_are_pure_in_time() {
    let bends = ColorBends::new(&BackgroundConfig::default(), DeviceProfile::Desktop);
    assert_eq!(bends.frame_at(3.0, 640.0, 480.0), bends.frame_at(3.0, 640.0, 480.0));
    assert_ne!(bends.frame_at(3.0, 640.0, 480.0), bends.frame_at(3.5, 640.0, 480.0));
}

#[test]
fn custom_palette_and_css() {
    let cfg = BackgroundConfig {
        colors: Some(vec![[10, 20, 30]]),
        ..BackgroundConfig::default()
    };
    let bends = ColorBends::new(&cfg, DeviceProfile::Desktop);
    let frame = bends.frame_at(0.0, 100.0, 100.0);
    let stops = &frame.bends[0].stroke.stops;
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].offset, 0.0);
    let css = stops[0].color.css();
    assert!(css.starts_with("rgba("));
    assert!(css.ends_with(", 0.480)"));
}

#[test]
fn device_switch_retunes() {
    let mut bends = ColorBends::new(&BackgroundConfig::default(), DeviceProfile::Desktop);
    bends.set_device(DeviceProfile::Mobile);
    assert_eq!(bends.bend_count(), 2);
    bends.set_device(DeviceProfile::Desktop);
    assert_eq!(bends.bend_count(), 3);
    assert!((bends.intensity() - 0.6).abs() < 1e-6);
}

#[test]
fn device_detection() {
    assert_eq!(DeviceProfile::detect(1440.0, "Mozilla/5.0 (X11; Linux x86_64)"), DeviceProfile::Desktop);
    assert_eq!(DeviceProfile::detect(700.0, "Mozilla/5.0 (X11; Linux x86_64)"), DeviceProfile::Mobile);
    assert_eq!(
        DeviceProfile::detect(1024.0, "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)"),
        DeviceProfile::Mobile
    );
    assert_eq!(DeviceProfile::Mobile.effective_segments(10), 20);
    assert_eq!(DeviceProfile::Desktop.effective_segments(10), 10);
}
