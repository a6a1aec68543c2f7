// tests/render_pipeline.rs

//! End-to-end: configuration, sample parsing, night padding, rendering and PNG
//! export, checked by decoding the PNG again.

use slicebar::color::{Rgb, BLACK, WHITE};
use slicebar::encoder;
use slicebar::night::seconds_since_noon;
use slicebar::samples::parse_stage_graph;
use slicebar::{Config, RenderError, Renderer, StateCode};
use std::sync::Arc;
use std::thread;

/// Decode a palette PNG into (width, height, per-pixel colors).
fn decode(bytes: &[u8]) -> (u32, u32, Vec<Rgb>) {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().unwrap();
    let palette: Vec<Rgb> = reader
        .info()
        .palette
        .as_deref()
        .unwrap()
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect();
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).unwrap();
    let pixels = buf[..frame.buffer_size()]
        .iter()
        .map(|&idx| palette[idx as usize])
        .collect();
    (frame.width, frame.height, pixels)
}

#[test_log::test]
fn test_zeo_night_renders_into_window() {
    let config = Config::from_json(
        r#"{
            "render": { "width": 48, "height": 4, "mode": "integer", "theme": "zeo" },
            "decorations": { "outline": false },
            "window": { "start_hour_pm": 10, "end_hour_am": 10, "interval_seconds": 1800 }
        }"#,
    )
    .unwrap();
    // Window 22:00 - 10:00 at 30 minute samples: 24 samples, 2 columns each.
    assert_eq!(config.window.total_samples(), 24);

    let night = parse_stage_graph("1 3 3 4 4 2").unwrap();
    let samples = config.window.pad(&night, seconds_since_noon(23, 0, 0));
    assert_eq!(samples.len(), 24);

    let registry = config.theme_registry();
    let canvas = Renderer::new(&registry)
        .render(&samples, &config.render_request())
        .unwrap();
    let (width, height, pixels) = decode(&encoder::encode_png(&canvas).unwrap());
    assert_eq!((width, height), (48, 4));

    let zeo = registry.lookup("zeo").unwrap();
    let color = |code: i32| zeo.color_for(StateCode(code)).unwrap();
    // Night starts two samples (four columns) into the window.
    assert_eq!(pixels[0], WHITE);
    assert_eq!(pixels[3], WHITE);
    // Shared boundaries: column 4 is claimed by the pad and then the first stage.
    assert_eq!(pixels[4], color(1));
    assert_eq!(pixels[5], color(1));
    assert_eq!(pixels[7], color(3));
    assert_eq!(pixels[11], color(4));
    assert_eq!(pixels[15], color(2));
    assert_eq!(pixels[17], WHITE);
    // Every row matches the first.
    for y in 1..4 {
        assert_eq!(&pixels[y * 48..(y + 1) * 48], &pixels[..48]);
    }
}

#[test_log::test]
fn test_boolean_strip_with_outline_round_trips_through_data_uri() {
    let config = Config::from_json(r#"{ "render": { "width": 10, "height": 3 } }"#).unwrap();
    let registry = config.theme_registry();
    let samples = parse_stage_graph("1 1 1 1 1").unwrap();

    let canvas = Renderer::new(&registry)
        .render(&samples, &config.render_request())
        .unwrap();
    let uri = encoder::data_uri(&canvas).unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));

    let (_, _, pixels) = decode(&encoder::encode_png(&canvas).unwrap());
    // Middle row: black outline at both ends, blue inside.
    let middle = &pixels[10..20];
    assert_eq!(middle[0], BLACK);
    assert_eq!(middle[9], BLACK);
    assert!(middle[1..9].iter().all(|&c| c == Rgb::new(0, 0, 255)));
    assert!(pixels[..10].iter().all(|&c| c == BLACK));
}

#[test_log::test]
fn test_unknown_theme_from_config_is_fatal() {
    let config = Config::from_json(r#"{ "render": { "theme": "missing" } }"#).unwrap();
    let registry = config.theme_registry();
    let result = Renderer::new(&registry).render(&[StateCode::ON], &config.render_request());
    assert_eq!(result, Err(RenderError::UnknownTheme("missing".to_string())));
}

#[test_log::test]
fn test_registry_is_shared_across_threads() {
    let config = Config::from_json(r#"{ "render": { "width": 64, "height": 2 } }"#).unwrap();
    let registry = Arc::new(config.theme_registry());
    let request = config.render_request();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let request = request.clone();
            thread::spawn(move || {
                let samples: Vec<StateCode> = (0..(10 + i)).map(|n| StateCode(n % 2)).collect();
                Renderer::new(&registry).render(&samples, &request).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let canvas = handle.join().unwrap();
        assert_eq!(canvas.width(), 64);
        assert!(canvas.palette().len() <= 256);
    }
}
