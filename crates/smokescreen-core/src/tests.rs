use crate::config::BackdropConfig;
use crate::constants::*;
use crate::error::BackdropError;
use crate::state::{FrameSnapshot, ParticleView};
use crate::surface::{DrawCommand, DrawingSurface, RecordingSurface};
use glam::DVec2;

use crate::types::{GradientStop, LineSegment, RadialGradient, Rgba, Viewport};

fn sample_gradient() -> RadialGradient {
    RadialGradient {
        radius: 100.0,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Rgba::new(0, 217, 255, 0.08),
            },
            GradientStop {
                offset: 1.0,
                color: Rgba::new(0, 80, 150, 0.0),
            },
        ],
    }
}

// ---- Types ----

#[test]
fn test_viewport_aspect() {
    assert!((Viewport::new(1200, 900).aspect() - 4.0 / 3.0).abs() < 1e-12);
    assert_eq!(Viewport::new(640, 0).aspect(), 1.0);
}

#[test]
fn test_rgba_css() {
    let c = Rgba::new(0, 217, 255, 0.5);
    assert_eq!(c.to_css(), "rgba(0, 217, 255, 0.5)");
    assert_eq!(c.with_alpha(0.0).to_css(), "rgba(0, 217, 255, 0)");
}

#[test]
fn test_gradient_table_offsets_ascending_and_edge_transparent() {
    let offsets: Vec<f64> = SMOKE_GRADIENT.iter().map(|(o, _, _)| *o).collect();
    assert_eq!(offsets, vec![0.0, 0.4, 0.7, 1.0]);
    assert_eq!(SMOKE_GRADIENT[3].2, 0.0);
}

#[test]
fn test_fade_fractions_partition_lifetime() {
    assert!((SMOKE_FADE_OUT_START + SMOKE_FADE_OUT_FRACTION - 1.0).abs() < 1e-12);
    assert!(SMOKE_FADE_IN_FRACTION < SMOKE_FADE_OUT_START);
}

// ---- Recording surface ----

#[test]
fn test_recording_surface_tracks_depth() {
    let mut surface = RecordingSurface::new(Viewport::default());
    surface.save();
    surface.translate(10.0, 20.0);
    surface.save();
    assert_eq!(surface.depth(), 2);
    surface.restore();
    surface.restore();
    assert_eq!(surface.depth(), 0);
    assert_eq!(surface.unbalanced_restores(), 0);
    assert_eq!(surface.commands().len(), 5);
}

#[test]
fn test_recording_surface_unbalanced_restore_is_counted() {
    let mut surface = RecordingSurface::new(Viewport::default());
    surface.restore();
    assert_eq!(surface.depth(), 0);
    assert_eq!(surface.unbalanced_restores(), 1);
}

#[test]
fn test_recording_surface_clear_drops_commands() {
    let mut surface = RecordingSurface::new(Viewport::default());
    surface
        .fill_radial_rect(-50.0, -50.0, 100.0, 100.0, &sample_gradient())
        .unwrap();
    assert_eq!(surface.commands().len(), 1);

    surface.clear();
    assert!(surface.commands().is_empty());
    assert_eq!(surface.clears(), 1);
    assert_eq!(surface.fills(), 1);
}

#[test]
fn test_recording_surface_records_strokes() {
    let mut surface = RecordingSurface::new(Viewport::default());
    let segments = [LineSegment {
        from: DVec2::new(0.0, 0.0),
        to: DVec2::new(10.0, 5.0),
    }];
    surface.stroke_lines(&segments, SHAPE_COLOR, SHAPE_LINE_WIDTH);

    assert_eq!(surface.strokes(), 1);
    assert_eq!(surface.fills(), 0);
    assert_eq!(
        surface.commands(),
        &[DrawCommand::StrokeLines {
            segments: segments.to_vec(),
            color: SHAPE_COLOR,
            width: SHAPE_LINE_WIDTH,
        }]
    );
}

#[test]
fn test_recording_surface_resize() {
    let mut surface = RecordingSurface::new(Viewport::new(800, 600));
    surface.resize(Viewport::new(1200, 900));
    assert_eq!(surface.viewport(), Viewport::new(1200, 900));
}

#[test]
fn test_draw_command_serde() {
    let cmd = DrawCommand::FillRadialRect {
        x: -50.0,
        y: -50.0,
        width: 100.0,
        height: 100.0,
        gradient: sample_gradient(),
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains("\"op\":\"FillRadialRect\""));
    let back: DrawCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(cmd, back);
}

// ---- Config ----

#[test]
fn test_default_config_is_valid() {
    let config = BackdropConfig::default();
    assert_eq!(config.particle_count, SMOKE_PARTICLE_COUNT);
    assert_eq!(config.shape_count, SHAPE_COUNT);
    config.validate().unwrap();
}

#[test]
fn test_config_partial_json_uses_defaults() {
    let config = BackdropConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.particle_count, SMOKE_PARTICLE_COUNT);
    assert_eq!(config.viewport, Viewport::default());
}

#[test]
fn test_config_rejects_empty_pool() {
    let err = BackdropConfig::from_json_str(r#"{ "particle_count": 0 }"#).unwrap_err();
    assert!(matches!(err, BackdropError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_empty_viewport() {
    let err = BackdropConfig::from_json_str(r#"{ "viewport": { "width": 0, "height": 600 } }"#)
        .unwrap_err();
    assert!(matches!(err, BackdropError::InvalidConfig(_)));
}

#[test]
fn test_collapsed_viewport_clamped_to_valid_config() {
    assert_eq!(Viewport::new(0, 0).at_least_one(), Viewport::new(1, 1));
    assert_eq!(Viewport::new(0, 720).at_least_one(), Viewport::new(1, 720));
    assert_eq!(Viewport::new(1280, 720).at_least_one(), Viewport::new(1280, 720));

    let config = BackdropConfig {
        viewport: Viewport::new(0, 0).at_least_one(),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_malformed_json() {
    let err = BackdropConfig::from_json_str("{ seed: ").unwrap_err();
    assert!(matches!(err, BackdropError::Json(_)));
}

#[test]
fn test_config_missing_file() {
    let err = BackdropConfig::load("/definitely/not/here/backdrop.json").unwrap_err();
    assert!(matches!(err, BackdropError::Io(_)));
}

// ---- Snapshot ----

#[test]
fn test_snapshot_serde() {
    let snapshot = FrameSnapshot {
        frame: 3,
        viewport: Viewport::new(1200, 900),
        particles: vec![ParticleView {
            x: 1.0,
            y: 2.0,
            size: 200.0,
            life: 10,
            max_life: 500.0,
            ..Default::default()
        }],
        shapes: Vec::new(),
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
}
