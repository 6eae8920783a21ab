use crate::*;

fn palette3() -> Palette {
    Palette::new(["#111111", "#222222", "#333333"]).unwrap()
}

fn intensity(n: u32) -> Intensity {
    Intensity::new(n).unwrap()
}

fn entry_for(entries: &[RenderEntry], slug: Slug) -> &RenderEntry {
    entries
        .iter()
        .find(|e| e.slug() == slug && e.selected)
        .unwrap_or_else(|| panic!("no selected entry for {slug}"))
}

#[test]
fn reconcile_is_idempotent() {
    let ds = dataset(Gender::Male, View::Front);
    let selection: Selection = vec![
        SelectionEntry::new(Slug::Chest).with_intensity(intensity(2)),
        SelectionEntry::new(Slug::Biceps).only(Side::Left),
    ]
    .into();
    let a = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    let b = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    assert_eq!(a, b);
}

#[test]
fn empty_selection_renders_every_part_as_backdrop() {
    let ds = dataset(Gender::Female, View::Back);
    let entries = reconcile(
        ds,
        &Selection::new(),
        &Palette::default(),
        ReconcileOptions::default(),
    );
    assert_eq!(entries.len(), ds.parts.len());
    for (entry, part) in entries.iter().zip(ds.parts) {
        assert!(!entry.selected);
        assert_eq!(entry.slug(), part.slug);
        let expected = Theme::Light.resolve(part.base);
        assert_eq!(entry.color, expected);
        assert_eq!(entry.fills.left, expected);
        assert_eq!(entry.fills.right, expected);
    }
}

#[test]
fn backdrop_follows_the_theme() {
    let ds = dataset(Gender::Male, View::Front);
    let options = ReconcileOptions {
        theme: Theme::Dark,
        ..Default::default()
    };
    let entries = reconcile(ds, &Selection::new(), &Palette::default(), options);
    let chest = entries.iter().find(|e| e.slug() == Slug::Chest).unwrap();
    assert_eq!(chest.color, "#6a7282");
    let head = entries.iter().find(|e| e.slug() == Slug::Head).unwrap();
    assert_eq!(head.color, "#99a1af");
    let hair = entries.iter().find(|e| e.slug() == Slug::Hair).unwrap();
    assert_eq!(hair.color, "#525252");
}

#[test]
fn slugs_missing_from_the_view_are_inert() {
    let ds = dataset(Gender::Male, View::Back);
    let selection: Selection =
        vec![SelectionEntry::new(Slug::Abs).with_intensity(intensity(1))].into();
    let entries = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    assert_eq!(entries.len(), ds.parts.len());
    assert!(entries.iter().all(|e| !e.selected));
}

#[test]
fn backdrop_comes_first_then_selection_order() {
    let ds = dataset(Gender::Male, View::Front);
    let selection: Selection = vec![
        SelectionEntry::new(Slug::Feet),
        SelectionEntry::new(Slug::Chest),
    ]
    .into();
    let entries = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    let n = entries.len();
    assert_eq!(n, ds.parts.len());
    assert!(entries[..n - 2].iter().all(|e| !e.selected));
    assert_eq!(entries[n - 2].slug(), Slug::Feet);
    assert_eq!(entries[n - 1].slug(), Slug::Chest);
}

#[test]
fn common_paths_use_one_based_intensity() {
    let ds = dataset(Gender::Male, View::Front);
    let selection: Selection =
        vec![SelectionEntry::new(Slug::Head).with_intensity(intensity(2))].into();
    let entries = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    let head = entry_for(&entries, Slug::Head);
    assert_eq!(head.color, "#222222");
    assert_eq!(head.fills.common, "#222222");
}

#[test]
fn missing_intensity_defaults_to_the_first_color() {
    let ds = dataset(Gender::Male, View::Front);
    let selection: Selection = vec![SelectionEntry::new(Slug::Quadriceps)].into();
    let entries = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    let quads = entry_for(&entries, Slug::Quadriceps);
    assert_eq!(quads.color, "#111111");
    assert_eq!(quads.fills.left, "#111111");
    assert_eq!(quads.fills.right, "#111111");
}

#[test]
fn single_sided_selection_never_colors_the_other_side() {
    let ds = dataset(Gender::Male, View::Front);
    for (side, theme) in [(Side::Left, Theme::Light), (Side::Right, Theme::Dark)] {
        let selection: Selection = vec![
            SelectionEntry::new(Slug::Biceps)
                .only(side)
                .with_intensity(intensity(3))
                .with_side_intensity(side.opposite(), intensity(2)),
        ]
        .into();
        let options = ReconcileOptions {
            theme,
            ..Default::default()
        };
        let entries = reconcile(ds, &selection, &palette3(), options);
        let biceps = entry_for(&entries, Slug::Biceps);
        let (selected, masked) = match side {
            Side::Left => (&biceps.fills.left, &biceps.fills.right),
            Side::Right => (&biceps.fills.right, &biceps.fills.left),
        };
        assert_eq!(selected, "#333333");
        assert_eq!(masked, theme.default_color());
    }
}

#[test]
fn side_intensities_override_the_entry_intensity() {
    let ds = dataset(Gender::Female, View::Front);
    let selection: Selection = vec![
        SelectionEntry::new(Slug::Forearm)
            .with_intensity(intensity(1))
            .with_side_intensity(Side::Left, intensity(3)),
    ]
    .into();
    let entries = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    let forearm = entry_for(&entries, Slug::Forearm);
    assert_eq!(forearm.fills.left, "#333333");
    assert_eq!(forearm.fills.right, "#111111");
    assert_eq!(forearm.color, "#111111");
}

#[test]
fn out_of_range_intensity_clamps_to_the_last_color() {
    let ds = dataset(Gender::Male, View::Front);
    let selection: Selection = vec![
        SelectionEntry::new(Slug::Neck).with_intensity(intensity(42)),
        SelectionEntry::new(Slug::Calves).with_side_intensity(Side::Right, intensity(7)),
    ]
    .into();
    let entries = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    assert_eq!(entry_for(&entries, Slug::Neck).color, "#333333");
    assert_eq!(entry_for(&entries, Slug::Calves).fills.right, "#333333");
}

#[test]
fn legacy_indexing_shifts_only_bilateral_fallbacks() {
    let ds = dataset(Gender::Male, View::Front);
    let selection: Selection = vec![
        SelectionEntry::new(Slug::Deltoids)
            .with_intensity(intensity(1))
            .with_side_intensity(Side::Right, intensity(1)),
    ]
    .into();
    let options = ReconcileOptions {
        indexing: PaletteIndexing::Legacy,
        ..Default::default()
    };
    let entries = reconcile(ds, &selection, &palette3(), options);
    let deltoids = entry_for(&entries, Slug::Deltoids);
    assert_eq!(deltoids.color, "#111111");
    assert_eq!(deltoids.fills.common, "#111111");
    assert_eq!(deltoids.fills.left, "#222222");
    assert_eq!(deltoids.fills.right, "#111111");
}

#[test]
fn first_entry_for_a_slug_decides_color_and_masking() {
    let ds = dataset(Gender::Male, View::Front);
    let selection: Selection = vec![
        SelectionEntry::new(Slug::Chest)
            .only(Side::Right)
            .with_intensity(intensity(2)),
        SelectionEntry::new(Slug::Chest).with_intensity(intensity(3)),
    ]
    .into();
    let entries = reconcile(ds, &selection, &palette3(), ReconcileOptions::default());
    let chests: Vec<_> = entries.iter().filter(|e| e.slug() == Slug::Chest).collect();
    assert_eq!(chests.len(), 2);
    for chest in chests {
        assert_eq!(chest.color, "#222222");
        assert_eq!(chest.fills.left, Theme::Light.default_color());
        assert_eq!(chest.fills.right, "#222222");
    }
}

#[test]
fn render_paths_flattens_groups_with_click_targets() {
    let ds = dataset(Gender::Male, View::Front);
    let selection: Selection = vec![SelectionEntry::new(Slug::Knees).only(Side::Left)].into();
    let paths = resolve_paths(ds, &selection, &palette3(), ReconcileOptions::default());

    let expected: usize = ds
        .parts
        .iter()
        .map(|p| p.path.common.len() + p.path.left.len() + p.path.right.len())
        .sum();
    assert_eq!(paths.len(), expected);

    let knees: Vec<_> = paths.iter().filter(|p| p.slug == Slug::Knees).collect();
    assert_eq!(knees.len(), 2);
    assert_eq!(knees[0].group, PathGroupKind::Left);
    assert_eq!(knees[0].fill, "#111111");
    assert!(knees[0].selected);
    assert_eq!(
        knees[0].click_target(),
        ClickTarget::new(Slug::Knees, Some(Side::Left))
    );
    assert_eq!(knees[1].group, PathGroupKind::Right);
    assert_eq!(knees[1].fill, Theme::Light.default_color());

    let head = paths.iter().find(|p| p.slug == Slug::Head).unwrap();
    assert_eq!(head.group, PathGroupKind::Common);
    assert!(!head.selected);
    assert_eq!(head.click_target().side, None);
}

#[test]
fn highlighter_uses_its_resolved_config() {
    let config = HighlighterConfig::from_value(serde_json::json!({
        "gender": "female",
        "view": "back",
        "colors": ["red", "green"],
    }));
    let highlighter = Highlighter::from_config(&config).unwrap();
    assert_eq!(highlighter.dataset().gender, Gender::Female);
    assert_eq!(highlighter.dataset().view, View::Back);

    let selection = highlighter.click(&Selection::new(), ClickTarget::new(Slug::Gluteal, None));
    let entries = highlighter.reconcile(&selection);
    assert_eq!(entry_for(&entries, Slug::Gluteal).color, "red");
}

#[test]
fn blank_palette_colors_keep_their_intensity_slot() {
    let err = Palette::new(["red", "", "blue"]).unwrap_err();
    assert!(matches!(err, Error::BlankColor { position: 2 }));
    assert_eq!(err.to_string(), "Palette color 2 is blank");
    assert!(matches!(Palette::new(["  "]), Err(Error::BlankColor { position: 1 })));
    assert!(matches!(Palette::new(Vec::<String>::new()), Err(Error::EmptyPalette)));

    let palette = Palette::new([" red ", "green", "blue"]).unwrap();
    assert_eq!(palette.color(intensity(1)), "red");
    assert_eq!(palette.color(intensity(2)), "green");
    assert_eq!(palette.color(intensity(3)), "blue");

    let err = serde_json::from_str::<Palette>(r#"["red", " ", "blue"]"#).unwrap_err();
    assert!(err.to_string().contains("Palette color 2 is blank"));
}
