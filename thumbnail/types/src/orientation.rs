/*!
    EXIF-style display orientation.
*/

/**
    A single geometric transform step applied to a bitmap.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Mirror across the vertical axis.
    MirrorHorizontal,
    /// Mirror across the horizontal axis.
    MirrorVertical,
    /// Rotate 90 degrees clockwise.
    Rotate90,
    /// Rotate 180 degrees.
    Rotate180,
    /// Rotate 270 degrees clockwise.
    Rotate270,
}

/**
    EXIF-style orientation of a frame.

    Codes 2-8 follow the EXIF convention; codes 0 and 1 (and anything out
    of range) mean the frame is already upright. Each orientation expands
    to an explicit, ordered list of transform steps via [`steps`].

    [`steps`]: Orientation::steps
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// No correction needed (codes 0 and 1).
    #[default]
    Upright,
    /// Code 2: mirrored horizontally.
    MirroredHorizontal,
    /// Code 3: rotated 180 degrees.
    Rotated180,
    /// Code 4: mirrored vertically.
    MirroredVertical,
    /// Code 5: mirrored horizontally, then rotated 270 degrees clockwise.
    MirroredRotated270,
    /// Code 6: rotated 90 degrees clockwise.
    Rotated90,
    /// Code 7: mirrored horizontally, then rotated 90 degrees clockwise.
    MirroredRotated90,
    /// Code 8: rotated 270 degrees clockwise.
    Rotated270,
}

impl Orientation {
    /**
        Map an EXIF orientation code to an orientation.

        Out-of-range codes map to [`Orientation::Upright`].
    */
    pub const fn from_code(code: i64) -> Self {
        match code {
            2 => Self::MirroredHorizontal,
            3 => Self::Rotated180,
            4 => Self::MirroredVertical,
            5 => Self::MirroredRotated270,
            6 => Self::Rotated90,
            7 => Self::MirroredRotated90,
            8 => Self::Rotated270,
            _ => Self::Upright,
        }
    }

    /**
        Map a container-level rotation in degrees to an orientation.

        Containers store rotation as 90, 180 or 270 degrees; anything else
        maps to [`Orientation::Upright`].
    */
    pub const fn from_rotation(degrees: i64) -> Self {
        match degrees {
            90 => Self::Rotated90,
            180 => Self::Rotated180,
            270 => Self::Rotated270,
            _ => Self::Upright,
        }
    }

    /**
        The ordered transform steps that correct this orientation.
    */
    pub const fn steps(self) -> &'static [Transform] {
        match self {
            Self::Upright => &[],
            Self::MirroredHorizontal => &[Transform::MirrorHorizontal],
            Self::Rotated180 => &[Transform::Rotate180],
            Self::MirroredVertical => &[Transform::MirrorVertical],
            Self::MirroredRotated270 => &[Transform::MirrorHorizontal, Transform::Rotate270],
            Self::Rotated90 => &[Transform::Rotate90],
            Self::MirroredRotated90 => &[Transform::MirrorHorizontal, Transform::Rotate90],
            Self::Rotated270 => &[Transform::Rotate270],
        }
    }

    /**
        Returns true if this orientation swaps width and height.
    */
    pub const fn transposes(self) -> bool {
        matches!(
            self,
            Self::Rotated90 | Self::Rotated270 | Self::MirroredRotated90 | Self::MirroredRotated270
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_table() {
        assert_eq!(Orientation::from_code(0), Orientation::Upright);
        assert_eq!(Orientation::from_code(1), Orientation::Upright);
        assert_eq!(Orientation::from_code(2), Orientation::MirroredHorizontal);
        assert_eq!(Orientation::from_code(3), Orientation::Rotated180);
        assert_eq!(Orientation::from_code(4), Orientation::MirroredVertical);
        assert_eq!(Orientation::from_code(5), Orientation::MirroredRotated270);
        assert_eq!(Orientation::from_code(6), Orientation::Rotated90);
        assert_eq!(Orientation::from_code(7), Orientation::MirroredRotated90);
        assert_eq!(Orientation::from_code(8), Orientation::Rotated270);
        assert_eq!(Orientation::from_code(9), Orientation::Upright);
        assert_eq!(Orientation::from_code(-1), Orientation::Upright);
    }

    #[test]
    fn from_rotation_table() {
        assert_eq!(Orientation::from_rotation(90), Orientation::Rotated90);
        assert_eq!(Orientation::from_rotation(180), Orientation::Rotated180);
        assert_eq!(Orientation::from_rotation(270), Orientation::Rotated270);
        assert_eq!(Orientation::from_rotation(45), Orientation::Upright);
        assert_eq!(Orientation::from_rotation(0), Orientation::Upright);
    }

    #[test]
    fn composite_codes_expand_to_two_steps() {
        assert_eq!(
            Orientation::MirroredRotated270.steps(),
            &[Transform::MirrorHorizontal, Transform::Rotate270]
        );
        assert_eq!(
            Orientation::MirroredRotated90.steps(),
            &[Transform::MirrorHorizontal, Transform::Rotate90]
        );
        assert!(Orientation::Upright.steps().is_empty());
    }

    #[test]
    fn transposing_orientations() {
        assert!(Orientation::Rotated90.transposes());
        assert!(Orientation::MirroredRotated270.transposes());
        assert!(!Orientation::Rotated180.transposes());
        assert!(!Orientation::MirroredHorizontal.transposes());
    }
}
