use crate::*;
use serde_json::json;

#[test]
fn parse_selection_json_with_optional_fields() {
    let text = r#"[
        { "slug": "chest", "intensity": 2 },
        { "slug": "biceps", "side": "left", "leftSideIntensity": 3 },
        { "slug": "upper-back", "intensity": 0, "rightSideIntensity": 0 }
    ]"#;
    let selection = Selection::from_json_str(text).unwrap();
    assert_eq!(
        selection.entries(),
        &[
            SelectionEntry::new(Slug::Chest).with_intensity(Intensity::new(2).unwrap()),
            SelectionEntry::new(Slug::Biceps)
                .only(Side::Left)
                .with_side_intensity(Side::Left, Intensity::new(3).unwrap()),
            SelectionEntry::new(Slug::UpperBack),
        ]
    );
}

#[test]
fn unknown_slugs_are_dropped_silently() {
    let selection =
        Selection::from_json_str(r#"[{ "slug": "tail" }, { "slug": "neck" }]"#).unwrap();
    assert_eq!(selection.entries(), &[SelectionEntry::new(Slug::Neck)]);
}

#[test]
fn bad_optional_fields_degrade_without_losing_neighbours() {
    let text = r#"[
        { "slug": "chest", "side": "up" },
        { "slug": "abs", "intensity": -1, "leftSideIntensity": "3" },
        { "slug": "biceps", "intensity": 2.5, "side": 7, "rightSideIntensity": 1e12 },
        { "slug": "triceps", "intensity": 2.0, "side": null },
        { "slug": 42 },
        { "slug": "neck" }
    ]"#;
    let selection = Selection::from_json_str(text).unwrap();
    assert_eq!(
        selection.entries(),
        &[
            SelectionEntry::new(Slug::Chest),
            SelectionEntry::new(Slug::Abs),
            SelectionEntry::new(Slug::Biceps),
            SelectionEntry::new(Slug::Triceps).with_intensity(Intensity::new(2).unwrap()),
            SelectionEntry::new(Slug::Neck),
        ]
    );

    let via_serde: Selection =
        serde_json::from_str(r#"[{ "slug": "chest", "side": "up" }, { "slug": "neck" }]"#)
            .unwrap();
    assert_eq!(via_serde.len(), 2);
    assert_eq!(via_serde[0].coverage, Coverage::Both);
}

#[test]
fn malformed_selection_json_is_an_error() {
    let err = Selection::from_json_str(r#"{ "slug": "neck" }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidSelectionJson { .. }));
    assert!(err.to_string().starts_with("Invalid selection JSON: "));
}

#[test]
fn selection_serializes_in_host_shape() {
    let selection: Selection = vec![
        SelectionEntry::new(Slug::LowerBack)
            .only(Side::Right)
            .with_intensity(Intensity::ONE)
            .with_side_intensity(Side::Right, Intensity::new(2).unwrap()),
        SelectionEntry::new(Slug::Hair),
    ]
    .into();
    let value = serde_json::to_value(&selection).unwrap();
    assert_eq!(
        value,
        json!([
            { "slug": "lower-back", "intensity": 1, "side": "right", "rightSideIntensity": 2 },
            { "slug": "hair" }
        ])
    );

    let text = selection.to_json_string().unwrap();
    assert_eq!(Selection::from_json_str(&text).unwrap(), selection);
}

#[test]
fn rebroadcast_updates_every_intensity_only() {
    let selection: Selection = vec![
        SelectionEntry::new(Slug::Chest).with_intensity(Intensity::ONE),
        SelectionEntry::new(Slug::Biceps)
            .only(Side::Right)
            .with_side_intensity(Side::Left, Intensity::new(2).unwrap()),
        SelectionEntry::new(Slug::Feet),
    ]
    .into();
    let i = Intensity::new(4).unwrap();
    let next = rebroadcast_intensity(&selection, i);

    assert_eq!(next.len(), selection.len());
    for (before, after) in selection.iter().zip(next.iter()) {
        assert_eq!(after.intensity, Some(i));
        assert_eq!(after.slug, before.slug);
        assert_eq!(after.coverage, before.coverage);
        assert_eq!(after.side_intensity, before.side_intensity);
    }
}

#[test]
fn slug_round_trips_through_strings() {
    for slug in Slug::ALL {
        assert_eq!(slug.as_str().parse::<Slug>().unwrap(), slug);
    }
    assert_eq!(
        "Head".parse::<Slug>().unwrap_err().to_string(),
        "Unknown slug: Head"
    );
}

#[test]
fn zero_is_not_an_intensity() {
    assert_eq!(Intensity::new(0), None);
    assert!(serde_json::from_value::<Intensity>(json!(0)).is_err());
    assert_eq!(
        serde_json::from_value::<Intensity>(json!(3)).unwrap().get(),
        3
    );
}

#[test]
fn coverage_masks_only_the_unselected_half() {
    assert!(!Coverage::Both.masks(Side::Left));
    assert!(Coverage::Only(Side::Left).masks(Side::Right));
    assert!(!Coverage::Only(Side::Left).masks(Side::Left));
}
