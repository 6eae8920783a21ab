//! Schematic male silhouette, front view. Anatomical left is drawn on the viewer's right.

use crate::Slug;
use crate::model::{BaseColor, BodyPartDescriptor, Dataset, Gender, PathGroups, View, ViewBox};

pub static MALE_FRONT: Dataset = Dataset {
    gender: Gender::Male,
    view: View::Front,
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
            left: &["M106,52L124,62L106,62Z"],
            right: &["M94,52L76,62L94,62Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Deltoids,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M126,62Q144,60 146,80L134,86Q128,74 126,62Z"],
            right: &["M74,62Q56,60 54,80L66,86Q72,74 74,62Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Chest,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M101,64L125,64Q132,80 126,96L101,96Z"],
            right: &["M99,64L75,64Q68,80 74,96L99,96Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Abs,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M101,99L115,99L115,150L101,150Z"],
            right: &["M99,99L85,99L85,150L99,150Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Obliques,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M117,99L126,99Q130,126 124,150L117,150Z"],
            right: &["M83,99L74,99Q70,126 76,150L83,150Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Biceps,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M134,88L146,83Q152,100 148,116L137,118Q132,102 134,88Z"],
            right: &["M66,88L54,83Q48,100 52,116L63,118Q68,102 66,88Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Forearm,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M137,121L148,119L157,160L145,164Z"],
            right: &["M63,121L52,119L43,160L55,164Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Hands,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M145,167L157,163L163,186Q155,196 147,188Z"],
            right: &["M55,167L43,163L37,186Q45,196 53,188Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Adductors,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M101,156L110,156L108,200L101,196Z"],
            right: &["M99,156L90,156L92,200L99,196Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Quadriceps,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M111,154L128,150Q133,190 126,228L109,228Q105,200 111,154Z"],
            right: &["M89,154L72,150Q67,190 74,228L91,228Q95,200 89,154Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Knees,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M118,232L126,240L118,248L110,240Z"],
            right: &["M82,232L74,240L82,248L90,240Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Tibialis,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M110,252L117,252L115,320L110,318Z"],
            right: &["M90,252L83,252L85,320L90,318Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Calves,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M118,252L128,250Q130,290 122,322L117,320Z"],
            right: &["M82,252L72,250Q70,290 78,322L83,320Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Ankles,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M110,330L122,330L122,340L110,340Z"],
            right: &["M90,330L78,330L78,340L90,340Z"],
        },
    },
    BodyPartDescriptor {
        slug: Slug::Feet,
        base: BaseColor::Body,
        path: PathGroups {
            common: &[],
            left: &["M108,343L124,343L131,356L105,356Z"],
            right: &["M92,343L76,343L69,356L95,356Z"],
        },
    },
];
