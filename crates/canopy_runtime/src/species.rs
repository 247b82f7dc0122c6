//! Species catalogue for the forest demo.

/// Intrinsic properties of a tree species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Species {
    /// Species name, used as the record category.
    pub name: &'static str,
    /// Leaf or needle color.
    pub color: &'static str,
    /// Texture file name.
    pub texture: &'static str,
}

/// Species the demo picks from.
pub const SPECIES: &[Species] = &[
    Species {
        name: "Oak",
        color: "Green",
        texture: "OakTexture.png",
    },
    Species {
        name: "Pine",
        color: "DarkGreen",
        texture: "PineTexture.png",
    },
    Species {
        name: "Cherry Blossom",
        color: "Pink",
        texture: "CherryTexture.png",
    },
];
