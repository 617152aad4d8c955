use titlecraft_core::{compute_visuals, find_preset, TitleConfig};
use titlecraft_render::{build_html, export_html, format_text_shadow, project, PERSPECTIVE_PX};

#[test]
fn export_embeds_every_computed_shadow() {
    let mut config = TitleConfig::default();
    config.merge(&find_preset("candy").unwrap().patch);
    let visuals = compute_visuals(&config);
    let html = build_html(&config, &visuals);

    for v in &visuals {
        let shadow = format_text_shadow(&v.shadow_layers);
        assert!(
            html.contains(&format!("text-shadow: {shadow};")),
            "missing shadow for char {}",
            v.index
        );
        assert!(html.contains(&format!("z-index: {};", v.transform.z_index)));
    }
}

#[test]
fn export_is_deterministic() {
    let config = TitleConfig::default();
    let a = build_html(&config, &compute_visuals(&config));
    let b = build_html(&config, &compute_visuals(&config));
    assert_eq!(a, b, "exports of one config must be identical");
}

#[test]
fn export_writes_file() {
    let dir = std::env::temp_dir().join("titlecraft_test_export");
    let _ = std::fs::create_dir_all(&dir);
    let path = dir.join("title.html");

    let config = TitleConfig {
        text: "Metal".into(),
        ..TitleConfig::default()
    };
    export_html(&config, &path).expect("export should succeed");

    let written = std::fs::read_to_string(&path).expect("file should exist");
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains(">M</span>"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn export_into_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join("titlecraft_missing_dir_for_test")
        .join("nested")
        .join("title.html");
    let err = export_html(&TitleConfig::default(), &path).unwrap_err();
    assert!(err.to_string().contains("failed to write export"));
}

#[test]
fn preview_projection_mirrors_across_center() {
    let config = TitleConfig {
        text: "Profundo".into(),
        perspective_rotate: 25.0,
        depth_intensity: 15.0,
        perspective_arc: 10.0,
        ..TitleConfig::default()
    };
    let visuals = compute_visuals(&config);
    let n = visuals.len();
    for i in 0..n {
        let a = project(&visuals[i].transform, PERSPECTIVE_PX);
        let b = project(&visuals[n - 1 - i].transform, PERSPECTIVE_PX);
        assert!((a.scale - b.scale).abs() < 1e-9);
        assert!((a.squash_x - b.squash_x).abs() < 1e-9);
        assert!((a.offset_y - b.offset_y).abs() < 1e-9);
    }
}
