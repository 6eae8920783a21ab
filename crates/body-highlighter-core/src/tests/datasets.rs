use crate::*;
use rustc_hash::FxHashSet;

#[test]
fn every_descriptor_has_at_least_one_path_group() {
    for ds in generated::all_datasets() {
        for part in ds.parts {
            assert!(
                !part.path.is_empty(),
                "{} {} {} has no paths",
                ds.gender.as_str(),
                ds.view.as_str(),
                part.slug
            );
        }
    }
}

#[test]
fn slugs_are_unique_within_a_variant() {
    for ds in generated::all_datasets() {
        let mut seen = FxHashSet::default();
        for slug in ds.slugs() {
            assert!(seen.insert(slug), "duplicate slug {slug}");
        }
    }
}

#[test]
fn dataset_lookup_matches_gender_and_view() {
    for gender in [Gender::Male, Gender::Female] {
        for view in [View::Front, View::Back] {
            let ds = dataset(gender, view);
            assert_eq!(ds.gender, gender);
            assert_eq!(ds.view, view);
            assert!(ds.view_box.width > 0.0 && ds.view_box.height > 0.0);
        }
    }
}

#[test]
fn regions_appear_only_where_visible() {
    let front = dataset(Gender::Male, View::Front);
    let back = dataset(Gender::Male, View::Back);
    assert!(front.find(Slug::Abs).is_some());
    assert!(back.find(Slug::Abs).is_none());
    assert!(back.find(Slug::Gluteal).is_some());
    assert!(front.find(Slug::Gluteal).is_none());
    for ds in generated::all_datasets() {
        assert!(ds.find(Slug::Head).is_some());
        assert!(ds.find(Slug::Hair).is_some());
    }
}

#[test]
fn head_and_hair_use_theme_tones() {
    let ds = dataset(Gender::Female, View::Front);
    assert_eq!(ds.find(Slug::Head).map(|p| p.base), Some(BaseColor::Face));
    assert_eq!(ds.find(Slug::Hair).map(|p| p.base), Some(BaseColor::Hair));
    assert_eq!(ds.find(Slug::Chest).map(|p| p.base), Some(BaseColor::Body));
}

#[test]
fn path_data_is_closed_and_absolute() {
    for ds in generated::all_datasets() {
        for part in ds.parts {
            for kind in PathGroupKind::ALL {
                for d in part.path.group(kind) {
                    assert!(d.starts_with('M'), "{}: {d}", part.slug);
                    assert!(d.ends_with('Z'), "{}: {d}", part.slug);
                }
            }
        }
    }
}
