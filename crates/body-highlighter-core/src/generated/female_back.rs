//! Schematic female silhouette, back view.

use crate::Slug;
use crate::model::{BaseColor, BodyPartDescriptor, Dataset, Gender, PathGroups, View, ViewBox};

pub static FEMALE_BACK: Dataset = Dataset {
    gender: Gender::Female,
    view: View::Back,
    view_box: ViewBox {
        min_x: -4.0,
        min_y: 0.0,
        width: 208.0,
        height: 360.0,
    },
    parts: PARTS,
};

const PARTS: &[BodyPartDescriptor] = &[
    BodyPartDescriptor {
        slug: Slug::Hair,
        base: BaseColor::Hair,
        path: PathGroups {
            common: &["M82,34Q80,4 100,5Q120,4 118,34Q122,56 112,62Q116,40 112,22Q100,14 88,22Q84,40 88,62Q78,56 82,34Z"],
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
            common: &["M92.8,48L107.2,48L107.2,62L92.8,62Z"],
            left: &[],
            right: &[],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Trapezius,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M99.1,50L92.8,50L71.2,64L89.2,100L99.1,96Z"],
            right: &["M100.9,50L107.2,50L128.8,64L110.8,100L100.9,96Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Deltoids,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M71.2,63Q58.6,62 58.6,82L68.5,88Q69.4,74 71.2,63Z"],
            right: &["M128.8,63Q141.4,62 141.4,82L131.5,88Q130.6,74 128.8,63Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::UpperBack,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M88.3,101L69.4,74Q65.8,100 74.8,124L97.3,124L97.3,99Z"],
            right: &["M111.7,101L130.6,74Q134.2,100 125.2,124L102.7,124L102.7,99Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Triceps,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M69.4,90L58.6,85Q53.2,100 56.8,116L66.7,118Q71.2,102 69.4,90Z"],
            right: &["M130.6,90L141.4,85Q146.8,100 143.2,116L133.3,118Q128.8,102 130.6,90Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Forearm,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M66.7,121L56.8,119L38.4,160L51.4,164Z"],
            right: &["M133.3,121L143.2,119L161.6,160L148.6,164Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Hands,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M51.4,167L38.4,163L32,186Q40.6,196 49.2,188Z"],
            right: &["M148.6,167L161.6,163L168,186Q159.4,196 150.8,188Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::LowerBack,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M99.1,126L76.6,126L76.2,150L98.9,150Z"],
            right: &["M100.9,126L123.4,126L123.8,150L101.1,150Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Gluteal,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M98.9,154L71.9,152Q63.3,176 76.2,192L98.9,190Z"],
            right: &["M101.1,154L128.1,152Q136.7,176 123.8,192L101.1,190Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Adductors,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M98.9,193L91.4,193L91.4,212Z"],
            right: &["M101.1,193L108.6,193L108.6,212Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Hamstring,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M90.3,194L70.8,194Q66.5,220 73,228L90.3,228Z"],
            right: &["M109.7,194L129.2,194Q133.5,220 127,228L109.7,228Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Knees,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M80.6,232L71.9,240L80.6,248L89.2,240Z"],
            right: &["M119.4,232L128.1,240L119.4,248L110.8,240Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Calves,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M91.4,252L69.8,250Q65.4,290 76.2,322L89.2,318Z"],
            right: &["M108.6,252L130.2,250Q134.6,290 123.8,322L110.8,318Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Ankles,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M89.2,330L76.2,330L76.2,340L89.2,340Z"],
            right: &["M110.8,330L123.8,330L123.8,340L110.8,340Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Feet,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M91.4,343L74.1,343L67.6,356L93.5,356Z"],
            right: &["M108.6,343L125.9,343L132.4,356L106.5,356Z"],
        },
    },
];
