use podabio_theme::{
    preset_theme, BorderEffect, PageRecord, ThemeEngine, ThemePreset, TokenGroup, TokenGroupKind,
};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["classic", "midnight", "minimal", "neon", "studio"]);
}

#[test]
fn preset_ids_parse_back() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::parse(preset.id()), Some(*preset));
    }
    assert_eq!(ThemePreset::parse("NEON"), Some(ThemePreset::Neon));
    assert_eq!(ThemePreset::parse("vaporwave"), None);
}

#[test]
fn preset_records_are_system_themes_with_unique_ids() {
    let mut ids: Vec<i64> = ThemePreset::all().iter().map(|p| p.record().id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), ThemePreset::all().len());
    for preset in ThemePreset::all() {
        let theme = preset_theme(*preset);
        assert!(theme.is_system(), "preset {preset:?} should have no owner");
        assert_eq!(theme.name, preset.display_name());
    }
}

#[test]
fn preset_columns_are_strictly_valid() {
    for preset in ThemePreset::all() {
        let theme = preset.record();
        for kind in TokenGroupKind::all() {
            let json = theme.tokens.column(*kind).unwrap_or_default();
            assert!(
                TokenGroup::from_json(json).is_ok(),
                "preset={preset:?} column={kind}"
            );
        }
    }
}

#[test]
fn presets_render_their_border_effect() {
    let engine = ThemeEngine::default();
    for (preset, effect) in [
        (ThemePreset::Classic, BorderEffect::None),
        (ThemePreset::Minimal, BorderEffect::None),
        (ThemePreset::Midnight, BorderEffect::Glow),
        (ThemePreset::Neon, BorderEffect::Glow),
        (ThemePreset::Studio, BorderEffect::Shadow),
    ] {
        let theme = preset.record();
        let page = PageRecord::new(1, 1, "preview").with_theme(theme.id);
        assert_eq!(
            engine.values(&page, Some(&theme)).border_effect,
            effect,
            "preset={preset:?}"
        );
    }
}

#[test]
fn minimal_preset_has_square_corners() {
    let theme = ThemePreset::Minimal.record();
    let page = PageRecord::new(1, 1, "preview").with_theme(theme.id);
    assert_eq!(
        ThemeEngine::default().values(&page, Some(&theme)).corner_radius,
        "0px"
    );
}

#[test]
fn midnight_preset_uses_pill_buttons() {
    let theme = ThemePreset::Midnight.record();
    let page = PageRecord::new(1, 1, "preview").with_theme(theme.id);
    assert_eq!(
        ThemeEngine::default().values(&page, Some(&theme)).corner_radius,
        "9999px"
    );
}

#[test]
fn neon_preset_glow_is_pronounced() {
    let theme = ThemePreset::Neon.record();
    let page = PageRecord::new(1, 1, "preview").with_theme(theme.id);
    let values = ThemeEngine::default().values(&page, Some(&theme));
    assert_eq!(values.glow_color, "#ff00ff");
    assert_eq!(values.glow_blur, "16px");
}
