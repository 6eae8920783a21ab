//! Schematic female silhouette, front view.

use crate::Slug;
use crate::model::{BaseColor, BodyPartDescriptor, Dataset, Gender, PathGroups, View, ViewBox};

pub static FEMALE_FRONT: Dataset = Dataset {
    gender: Gender::Female,
    view: View::Front,
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
            left: &["M105.4,52L121.6,62L105.4,62Z"],
            right: &["M94.6,52L78.4,62L94.6,62Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Deltoids,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M123.4,62Q139.6,60 141.4,80L130.6,86Q125.2,74 123.4,62Z"],
            right: &["M76.6,62Q60.4,60 58.6,80L69.4,86Q74.8,74 76.6,62Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Chest,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M100.9,64L122.5,64Q128.8,80 123.4,96L100.9,96Z"],
            right: &["M99.1,64L77.5,64Q71.2,80 76.6,96L99.1,96Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Abs,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M100.9,99L113.5,99L116.2,150L101.1,150Z"],
            right: &["M99.1,99L86.5,99L83.8,150L98.9,150Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Obliques,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M115.3,99L123.4,99Q127,126 125.9,150L118.4,150Z"],
            right: &["M84.7,99L76.6,99Q73,126 74.1,150L81.6,150Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Biceps,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M130.6,88L141.4,83Q146.8,100 143.2,116L133.3,118Q128.8,102 130.6,88Z"],
            right: &["M69.4,88L58.6,83Q53.2,100 56.8,116L66.7,118Q71.2,102 69.4,88Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Forearm,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M133.3,121L143.2,119L161.6,160L148.6,164Z"],
            right: &["M66.7,121L56.8,119L38.4,160L51.4,164Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Hands,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M148.6,167L161.6,163L168,186Q159.4,196 150.8,188Z"],
            right: &["M51.4,167L38.4,163L32,186Q40.6,196 49.2,188Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Adductors,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M101.1,156L110.8,156L108.6,200L101.1,196Z"],
            right: &["M98.9,156L89.2,156L91.4,200L98.9,196Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Quadriceps,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M111.9,154L130.2,150Q135.6,190 128.1,228L109.7,228Q105.4,200 111.9,154Z"],
            right: &["M88.1,154L69.8,150Q64.4,190 71.9,228L90.3,228Q94.6,200 88.1,154Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Knees,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M119.4,232L128.1,240L119.4,248L110.8,240Z"],
            right: &["M80.6,232L71.9,240L80.6,248L89.2,240Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Tibialis,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M110.8,252L118.4,252L116.2,320L110.8,318Z"],
            right: &["M89.2,252L81.6,252L83.8,320L89.2,318Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Calves,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M119.4,252L130.2,250Q132.4,290 123.8,322L118.4,320Z"],
            right: &["M80.6,252L69.8,250Q67.6,290 76.2,322L81.6,320Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Ankles,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M110.8,330L123.8,330L123.8,340L110.8,340Z"],
            right: &["M89.2,330L76.2,330L76.2,340L89.2,340Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Feet,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M108.6,343L125.9,343L133.5,356L105.4,356Z"],
            right: &["M91.4,343L74.1,343L66.5,356L94.6,356Z"],
        },
    },
];
