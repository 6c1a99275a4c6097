//! The coordinate space currently being visualized.

use std::fmt;

/// One of the five stages a vertex passes through on its way to the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Space {
    /// Object-local coordinates; no model transform applied yet.
    #[default]
    Model,
    /// After the model transform.
    World,
    /// After the view transform; coordinates relative to the user camera.
    View,
    /// After projection and the perspective divide.
    Ndc,
    /// What the user camera actually renders.
    RenderedImage,
}

/// A raw space index that does not name any [`Space`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown space index {0}")]
pub struct UnknownSpace(pub u8);

impl Space {
    /// All spaces in pipeline order.
    pub const ALL: [Space; 5] = [
        Space::Model,
        Space::World,
        Space::View,
        Space::Ndc,
        Space::RenderedImage,
    ];

    /// Position of this space in [`Space::ALL`].
    pub fn index(self) -> u8 {
        match self {
            Space::Model => 0,
            Space::World => 1,
            Space::View => 2,
            Space::Ndc => 3,
            Space::RenderedImage => 4,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Space::Model => "Model space",
            Space::World => "World space",
            Space::View => "View space",
            Space::Ndc => "NDC space",
            Space::RenderedImage => "Rendered image",
        }
    }

    /// The next space in pipeline order, wrapping around.
    pub fn next(self) -> Space {
        Space::ALL[(self.index() as usize + 1) % Space::ALL.len()]
    }

    /// The previous space in pipeline order, wrapping around.
    pub fn previous(self) -> Space {
        let len = Space::ALL.len();
        Space::ALL[(self.index() as usize + len - 1) % len]
    }
}

impl TryFrom<u8> for Space {
    type Error = UnknownSpace;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Space::ALL
            .get(index as usize)
            .copied()
            .ok_or(UnknownSpace(index))
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_model_space() {
        assert_eq!(Space::default(), Space::Model);
    }

    #[test]
    fn index_round_trips() {
        for space in Space::ALL {
            assert_eq!(Space::try_from(space.index()), Ok(space));
        }
    }

    #[test]
    fn unknown_index_is_an_error() {
        assert_eq!(Space::try_from(5), Err(UnknownSpace(5)));
        assert_eq!(UnknownSpace(9).to_string(), "unknown space index 9");
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(Space::RenderedImage.next(), Space::Model);
        assert_eq!(Space::Model.previous(), Space::RenderedImage);
        assert_eq!(Space::View.next().previous(), Space::View);
    }
}
