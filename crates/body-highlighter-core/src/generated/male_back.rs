//! Schematic male silhouette, back view. Anatomical left is drawn on the viewer's left.

use crate::Slug;
use crate::model::{BaseColor, BodyPartDescriptor, Dataset, Gender, PathGroups, View, ViewBox};

pub static MALE_BACK: Dataset = Dataset {
    gender: Gender::Male,
    view: View::Back,
    view_box: ViewBox {
        min_x: 0.0,
        min_y: 0.0,
        width: 200.0,
        height: 360.0,
    },
    parts: PARTS,
};

const PARTS: &[BodyPartDescriptor] = &[
    BodyPartDescriptor {
        slug: Slug::Hair,
        base: BaseColor::Hair,
        path: PathGroups {
            common: &["M84,28Q84,6 100,7Q116,6 116,28Q110,15 100,15Q90,15 84,28Z"],
            left: &[],
            right: &[],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Head,
        base: BaseColor::Face,
        path: PathGroups {
            common: &["M84,30A16,20 0 1,0 116,30A16,20 0 1,0 84,30Z"],
            left: &[],
            right: &[],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Neck,
        base: BaseColor::Body,
        path: PathGroups {
            common: &["M92,48L108,48L108,62L92,62Z"],
            left: &[],
            right: &[],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Trapezius,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M99,50L92,50L68,64L88,100L99,96Z"],
            right: &["M101,50L108,50L132,64L112,100L101,96Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Deltoids,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M68,63Q54,62 54,82L65,88Q66,74 68,63Z"],
            right: &["M132,63Q146,62 146,82L135,88Q134,74 132,63Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::UpperBack,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M87,101L66,74Q62,100 72,124L97,124L97,99Z"],
            right: &["M113,101L134,74Q138,100 128,124L103,124L103,99Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Triceps,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M66,90L54,85Q48,100 52,116L63,118Q68,102 66,90Z"],
            right: &["M134,90L146,85Q152,100 148,116L137,118Q132,102 134,90Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Forearm,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M63,121L52,119L43,160L55,164Z"],
            right: &["M137,121L148,119L157,160L145,164Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Hands,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M55,167L43,163L37,186Q45,196 53,188Z"],
            right: &["M145,167L157,163L163,186Q155,196 147,188Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::LowerBack,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M99,126L74,126L78,150L99,150Z"],
            right: &["M101,126L126,126L122,150L101,150Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Gluteal,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M99,154L74,152Q66,176 78,192L99,190Z"],
            right: &["M101,154L126,152Q134,176 122,192L101,190Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Adductors,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M99,193L92,193L92,212Z"],
            right: &["M101,193L108,193L108,212Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Hamstring,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M91,194L73,194Q69,220 75,228L91,228Z"],
            right: &["M109,194L127,194Q131,220 125,228L109,228Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Knees,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M82,232L74,240L82,248L90,240Z"],
            right: &["M118,232L126,240L118,248L110,240Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Calves,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M92,252L72,250Q68,290 78,322L90,318Z"],
            right: &["M108,252L128,250Q132,290 122,322L110,318Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Ankles,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M90,330L78,330L78,340L90,340Z"],
            right: &["M110,330L122,330L122,340L110,340Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Feet,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M92,343L76,343L70,356L94,356Z"],
            right: &["M108,343L124,343L130,356L106,356Z"],
        },
    },
];
